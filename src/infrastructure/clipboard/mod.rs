//! Clipboard infrastructure module
//!
//! Provides file-drop clipboard support per platform: Win32 CF_HDROP via
//! clipboard-win, `text/uri-list` via wl-copy or xclip on Linux, and
//! POSIX file references via osascript on macOS.

mod osascript;
mod process;
mod wayland;
mod windows;
mod xclip;

pub use osascript::OsaScriptClipboard;
pub use wayland::WaylandClipboard;
pub use windows::WindowsClipboard;
pub use xclip::XclipClipboard;

use std::env;

use crate::application::ports::FileDropClipboard;
use crate::domain::clipboard::ClipboardBackend;

/// Whether the current session exposes a Wayland display
pub fn is_wayland_session() -> bool {
    env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty())
}

/// Create the clipboard adapter for `backend`.
///
/// `Auto` resolves to the platform default.
pub fn create_clipboard(backend: ClipboardBackend) -> Box<dyn FileDropClipboard> {
    match backend.resolve(is_wayland_session()) {
        ClipboardBackend::Windows => Box::new(WindowsClipboard::new()),
        ClipboardBackend::OsaScript => Box::new(OsaScriptClipboard::new()),
        ClipboardBackend::Wayland => Box::new(WaylandClipboard::new()),
        ClipboardBackend::Xclip | ClipboardBackend::Auto => Box::new(XclipClipboard::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_backends_map_to_adapters() {
        let name = |backend| create_clipboard(backend).name();
        assert_eq!(name(ClipboardBackend::Xclip), "xclip");
        assert_eq!(name(ClipboardBackend::Wayland), "wl-copy");
        assert_eq!(name(ClipboardBackend::OsaScript), "osascript");
        assert_eq!(name(ClipboardBackend::Windows), "win32");
    }

    #[test]
    #[cfg(windows)]
    fn auto_is_win32_on_windows() {
        assert_eq!(create_clipboard(ClipboardBackend::Auto).name(), "win32");
    }
}
