//! macOS clipboard adapter using osascript

use std::path::{Path, PathBuf};

use crate::application::ports::{ClipboardError, FileDropClipboard};

use super::process::run;

/// macOS clipboard adapter.
///
/// `set the clipboard to POSIX file` fills every pasteboard type Finder
/// and Mail look for (public.file-url, NSFilenamesPboardType).
pub struct OsaScriptClipboard;

impl OsaScriptClipboard {
    /// Create a new osascript clipboard adapter
    pub fn new() -> Self {
        Self
    }

    /// Escape a path for use inside an AppleScript string literal
    pub fn escape_path(path: &Path) -> String {
        path.display()
            .to_string()
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build the AppleScript that places `paths` on the clipboard
    pub fn build_script(paths: &[PathBuf]) -> String {
        let files: Vec<String> = paths
            .iter()
            .map(|p| format!("POSIX file \"{}\"", Self::escape_path(p)))
            .collect();

        match files.as_slice() {
            [single] => format!("set the clipboard to {}", single),
            many => format!("set the clipboard to {{{}}}", many.join(", ")),
        }
    }
}

impl Default for OsaScriptClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl FileDropClipboard for OsaScriptClipboard {
    fn name(&self) -> &'static str {
        "osascript"
    }

    fn clear(&self) -> Result<(), ClipboardError> {
        run(
            "osascript",
            &["-e", "set the clipboard to \"\""],
            ClipboardError::ClearFailed,
        )
    }

    fn set_file_drop_list(&self, paths: &[PathBuf]) -> Result<(), ClipboardError> {
        let script = Self::build_script(paths);
        run("osascript", &["-e", &script], ClipboardError::CopyFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_script() {
        let script = OsaScriptClipboard::build_script(&[PathBuf::from("/tmp/a.txt")]);
        assert_eq!(script, "set the clipboard to POSIX file \"/tmp/a.txt\"");
    }

    #[test]
    fn multiple_files_use_a_list() {
        let script = OsaScriptClipboard::build_script(&[
            PathBuf::from("/a.txt"),
            PathBuf::from("/b.txt"),
        ]);
        assert_eq!(
            script,
            "set the clipboard to {POSIX file \"/a.txt\", POSIX file \"/b.txt\"}"
        );
    }

    #[test]
    fn quotes_are_escaped() {
        let escaped = OsaScriptClipboard::escape_path(Path::new("/tmp/say \"hi\".txt"));
        assert_eq!(escaped, "/tmp/say \\\"hi\\\".txt");
    }
}
