//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod command;
pub mod ports;
pub mod publish;
pub mod resolve;

// Re-export use cases
pub use command::{CommandHandler, CommandRegistry, CopyFileCommand};
pub use publish::{PublishError, PublishFileUseCase, PublishOutput};
pub use resolve::{resolve_existing_file, resolve_source_path};
