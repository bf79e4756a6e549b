//! Clipboard backend value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// All selectable clipboard backends
pub const ALL_BACKENDS: &[ClipboardBackend] = &[
    ClipboardBackend::Auto,
    ClipboardBackend::Wayland,
    ClipboardBackend::Xclip,
    ClipboardBackend::Windows,
    ClipboardBackend::OsaScript,
];

/// Which mechanism places the file-drop list on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipboardBackend {
    /// Pick the platform default at runtime
    #[default]
    Auto,
    /// `wl-copy --type text/uri-list`
    Wayland,
    /// `xclip -t text/uri-list`
    Xclip,
    /// Win32 CF_HDROP via clipboard-win
    Windows,
    /// macOS `osascript` POSIX file reference
    OsaScript,
}

impl ClipboardBackend {
    /// Get the string identifier for this backend
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Wayland => "wayland",
            Self::Xclip => "xclip",
            Self::Windows => "windows",
            Self::OsaScript => "osascript",
        }
    }

    /// Resolve `Auto` to a concrete backend for the current platform.
    ///
    /// `wayland_session` reports whether a Wayland display is present;
    /// it only matters on Linux.
    pub fn resolve(self, wayland_session: bool) -> Self {
        if self != Self::Auto {
            return self;
        }

        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::OsaScript
        } else if wayland_session {
            Self::Wayland
        } else {
            Self::Xclip
        }
    }
}

impl FromStr for ClipboardBackend {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "wayland" | "wl-copy" => Ok(Self::Wayland),
            "xclip" | "x11" => Ok(Self::Xclip),
            "windows" | "win32" => Ok(Self::Windows),
            "osascript" | "macos" => Ok(Self::OsaScript),
            _ => Err(InvalidBackendError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
