//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::host::CommandId;

/// CopyAsFile - put a file on the clipboard as a pasteable file drop
#[derive(Parser, Debug)]
#[command(name = "copy-as-file")]
#[command(version)]
#[command(about = "Copy a file onto the clipboard as a file drop, ready to paste into a file manager or email")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the selected file (or active document) to the clipboard
    Copy(CopyArgs),
    /// Report whether the copy command is enabled for the given selection
    Status(StatusArgs),
    /// List the host command slots the action is registered under
    Commands,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Host selection state handed over by the editor
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// File to copy; shorthand for a single --selected entry
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path of a selected explorer item (repeatable, first usable wins)
    #[arg(short = 's', long = "selected", value_name = "PATH")]
    pub selected: Vec<PathBuf>,

    /// Full path of the active editor document
    #[arg(short = 'a', long, value_name = "PATH")]
    pub active_document: Option<PathBuf>,

    /// JSON file with selected_items and active_document
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Command slot the invocation came from (item-node, code-window, or 0x0100/0x0101)
    #[arg(long = "command", value_name = "ID", default_value = "item-node")]
    pub command_id: CommandId,
}

impl SelectionArgs {
    /// Selected paths in order, the positional file first
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.file
            .iter()
            .chain(self.selected.iter())
            .cloned()
            .collect()
    }
}

/// Arguments for `copy`
#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Clipboard backend (auto, wayland, xclip, windows, osascript)
    #[arg(short = 'b', long, value_name = "BACKEND", env = "COPY_AS_FILE_BACKEND")]
    pub backend: Option<String>,

    /// Also show a desktop notification
    #[arg(short = 'n', long)]
    pub notify: bool,
}

/// Arguments for `status`
#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "backend",
    "notify",
    "temp_prefix",
    "extension",
    "attempts",
    "retry_delay_ms",
    "settle_delay_ms",
    "timeout_ms",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
