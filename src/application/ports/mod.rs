//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod host;
pub mod notifier;

// Re-export common types
pub use clipboard::{ClipboardError, FileDropClipboard};
pub use config::ConfigStore;
pub use host::{HostContext, HostError};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
