//! Win32 clipboard adapter using clipboard-win (CF_HDROP)

use std::path::PathBuf;

use crate::application::ports::{ClipboardError, FileDropClipboard};

/// How many times `OpenClipboard` is retried inside a single attempt
const OPEN_ATTEMPTS: usize = 10;

/// Win32 clipboard adapter.
///
/// The file-drop list is written as CF_HDROP. The worker thread is put in
/// a single-threaded COM apartment first, which shell consumers of the
/// clipboard data object expect of its owner.
pub struct WindowsClipboard;

impl WindowsClipboard {
    /// Create a new Win32 clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(windows)]
impl FileDropClipboard for WindowsClipboard {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn enter_thread_affinity(&self) -> Result<(), ClipboardError> {
        use windows_sys::Win32::System::Com::{CoInitializeEx, COINIT_APARTMENTTHREADED};

        // SAFETY: called once on a dedicated thread; balanced by
        // CoUninitialize in leave_thread_affinity on success.
        let hr = unsafe { CoInitializeEx(std::ptr::null(), COINIT_APARTMENTTHREADED as _) };
        if hr < 0 {
            return Err(ClipboardError::ClipboardUnavailable(format!(
                "CoInitializeEx failed: 0x{:08X}",
                hr
            )));
        }
        Ok(())
    }

    fn leave_thread_affinity(&self) {
        use windows_sys::Win32::System::Com::CoUninitialize;

        // SAFETY: only reached after a successful CoInitializeEx on this thread.
        unsafe { CoUninitialize() };
    }

    fn clear(&self) -> Result<(), ClipboardError> {
        let _clip = clipboard_win::Clipboard::new_attempts(OPEN_ATTEMPTS)
            .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

        clipboard_win::raw::empty().map_err(|e| ClipboardError::ClearFailed(e.to_string()))
    }

    fn set_file_drop_list(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        use clipboard_win::Setter;

        let files: Vec<String> = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();

        let _clip = clipboard_win::Clipboard::new_attempts(OPEN_ATTEMPTS)
            .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?;

        clipboard_win::formats::FileList
            .write_clipboard(&files[..])
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }
}

#[cfg(not(windows))]
impl FileDropClipboard for WindowsClipboard {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn clear(&self) -> Result<(), ClipboardError> {
        Err(ClipboardError::UnsupportedPlatform("windows"))
    }

    fn set_file_drop_list(&self, _paths: &[PathBuf]) -> Result<(), ClipboardError> {
        Err(ClipboardError::UnsupportedPlatform("windows"))
    }
}
