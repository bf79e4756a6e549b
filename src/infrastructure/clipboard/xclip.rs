//! X11 clipboard adapter using xclip

use std::path::PathBuf;

use crate::application::ports::{ClipboardError, FileDropClipboard};
use crate::domain::clipboard::build_uri_list;

use super::process::run_with_stdin;

/// X11 clipboard adapter using xclip.
///
/// File managers (Nautilus, Dolphin, Thunar) accept a `text/uri-list`
/// target on the CLIPBOARD selection as a file paste.
pub struct XclipClipboard;

impl XclipClipboard {
    /// Create a new xclip clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for XclipClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl FileDropClipboard for XclipClipboard {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn clear(&self) -> Result<(), ClipboardError> {
        // Taking ownership with empty content clears it
        run_with_stdin(
            "xclip",
            &["-selection", "clipboard"],
            b"",
            ClipboardError::ClearFailed,
        )
    }

    fn set_file_drop_list(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        let body = build_uri_list(paths);
        run_with_stdin(
            "xclip",
            &["-selection", "clipboard", "-t", "text/uri-list"],
            body.as_bytes(),
            ClipboardError::CopyFailed,
        )
    }
}
