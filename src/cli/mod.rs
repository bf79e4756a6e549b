//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the runners that
//! wire adapters into the command registry.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_copy, run_list_commands, run_status, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, CopyArgs, SelectionArgs, StatusArgs};
pub use presenter::Presenter;
