//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard, desktop notifications,
//! the config file and the editor's handed-over selection state.

pub mod clipboard;
pub mod config;
pub mod host;
pub mod notification;

// Re-export adapters
pub use clipboard::{
    create_clipboard, OsaScriptClipboard, WaylandClipboard, WindowsClipboard, XclipClipboard,
};
pub use config::XdgConfigStore;
pub use host::{JsonContextFile, StaticHost};
pub use notification::{FanOutNotifier, NotifyRustNotifier};
