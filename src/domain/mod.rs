//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod artifact;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod host;
pub mod message;

// Re-export common types
pub use artifact::{ArtifactLayout, RetryPolicy};
pub use clipboard::ClipboardBackend;
pub use config::AppConfig;
pub use error::*;
pub use host::{CommandId, SelectedItem};
pub use message::{MessageKind, UserMessage};
