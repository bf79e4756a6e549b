//! Wayland clipboard adapter using wl-copy

use std::path::PathBuf;

use crate::application::ports::{ClipboardError, FileDropClipboard};
use crate::domain::clipboard::build_uri_list;

use super::process::{run, run_with_stdin};

const URI_LIST_MIME: &str = "text/uri-list";

/// Wayland clipboard adapter using wl-copy
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl FileDropClipboard for WaylandClipboard {
    fn name(&self) -> &'static str {
        "wl-copy"
    }

    fn clear(&self) -> Result<(), ClipboardError> {
        run("wl-copy", &["--clear"], ClipboardError::ClearFailed)
    }

    fn set_file_drop_list(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        let body = build_uri_list(paths);
        run_with_stdin(
            "wl-copy",
            &["--type", URI_LIST_MIME],
            body.as_bytes(),
            ClipboardError::CopyFailed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_creates_successfully() {
        let clipboard = WaylandClipboard::default();
        assert_eq!(clipboard.name(), "wl-copy");
    }
}
