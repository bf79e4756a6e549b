//! Clipboard domain types

mod backend;
mod uri;

pub use backend::{ClipboardBackend, ALL_BACKENDS};
pub use uri::{build_file_uri, build_uri_list};
