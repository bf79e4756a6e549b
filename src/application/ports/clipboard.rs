//! Clipboard port interface

use std::path::PathBuf;

use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("{0} not found. Please install it or choose another backend.")]
    ToolNotFound(&'static str),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to clear clipboard: {0}")]
    ClearFailed(String),

    #[error("Failed to set file drop list: {0}")]
    CopyFailed(String),

    #[error("Backend not supported on this platform: {0}")]
    UnsupportedPlatform(&'static str),
}

/// Port for placing a file-drop list on the system clipboard.
///
/// Calls are blocking and are made from the dedicated clipboard worker
/// thread, never from the async runtime.
pub trait FileDropClipboard: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    /// Prepare the calling thread for clipboard access.
    ///
    /// Called once on the worker thread before the first attempt. Backends
    /// whose platform API demands a particular apartment or thread
    /// affinity set it up here.
    fn enter_thread_affinity(&self) -> Result<(), ClipboardError> {
        Ok(())
    }

    /// Undo [`enter_thread_affinity`](Self::enter_thread_affinity).
    /// Only called if entering succeeded.
    fn leave_thread_affinity(&self) {}

    /// Remove the current clipboard content.
    fn clear(&self) -> Result<(), ClipboardError>;

    /// Replace the clipboard content with a file-drop list of `paths`.
    fn set_file_drop_list(&self, paths: &[PathBuf]) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
impl FileDropClipboard for Box<dyn FileDropClipboard> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn enter_thread_affinity(&self) -> Result<(), ClipboardError> {
        self.as_ref().enter_thread_affinity()
    }

    fn leave_thread_affinity(&self) {
        self.as_ref().leave_thread_affinity()
    }

    fn clear(&self) -> Result<(), ClipboardError> {
        self.as_ref().clear()
    }

    fn set_file_drop_list(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        self.as_ref().set_file_drop_list(paths)
    }
}
