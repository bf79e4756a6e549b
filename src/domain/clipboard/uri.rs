//! `text/uri-list` encoding for file-drop payloads

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Build a `file://` URI for the given path.
///
/// Everything outside the RFC 3986 unreserved set (plus `/`) is
/// percent-encoded byte by byte. On Unix the raw path bytes are used, so
/// names that are not valid UTF-8 still point at the same file.
pub fn build_file_uri(path: &Path) -> String {
    let bytes = path_bytes(path);
    let mut encoded = String::with_capacity(bytes.len() + 7);

    for &byte in bytes.iter() {
        let c = byte as char;
        if c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '-' | '_' | '~') {
            encoded.push(c);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!("file://{}", encoded)
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Build a `text/uri-list` body: one URI per line, CRLF terminated.
pub fn build_uri_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\r\n", build_file_uri(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_is_untouched() {
        let uri = build_file_uri(Path::new("/tmp/VSExtension_abc/notes.txt"));
        assert_eq!(uri, "file:///tmp/VSExtension_abc/notes.txt");
    }

    #[test]
    fn spaces_are_percent_encoded() {
        let uri = build_file_uri(Path::new("/tmp/my notes.txt"));
        assert_eq!(uri, "file:///tmp/my%20notes.txt");
    }

    #[test]
    fn non_ascii_is_encoded_as_utf8() {
        let uri = build_file_uri(Path::new("/tmp/ö.txt"));
        assert_eq!(uri, "file:///tmp/%C3%B6.txt");
    }

    #[test]
    #[cfg(unix)]
    fn non_utf8_bytes_are_encoded_raw() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/\xffdir/a.txt"));
        assert_eq!(build_file_uri(path), "file:///tmp/%FFdir/a.txt");
    }

    #[test]
    fn uri_list_uses_crlf() {
        let list = build_uri_list(&[PathBuf::from("/a.txt")]);
        assert_eq!(list, "file:///a.txt\r\n");
    }
}
