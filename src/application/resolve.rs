//! Source file resolution from host selection state

use std::path::{Path, PathBuf};

use tracing::debug;

use super::ports::HostContext;

/// Resolve the file the user means to copy.
///
/// The first selected item that exposes a non-empty path wins. Items
/// without a path, or whose path lookup fails, are skipped. With no
/// usable selection the active document is used. Returns `None` when
/// neither yields a path; that is not an error.
pub fn resolve_source_path(host: &dyn HostContext) -> Option<PathBuf> {
    for item in host.selected_items() {
        match host.full_path(&item) {
            Ok(Some(path)) if !path.as_os_str().is_empty() => return Some(path),
            Ok(_) => continue,
            Err(e) => {
                debug!(error = %e, "skipping selected item");
                continue;
            }
        }
    }

    let document = host.active_document()?;
    (!document.as_os_str().is_empty()).then_some(document)
}

/// Resolve a path that points at an existing regular file
pub fn resolve_existing_file(host: &dyn HostContext) -> Option<PathBuf> {
    resolve_source_path(host).filter(|p| is_existing_file(p))
}

fn is_existing_file(path: &Path) -> bool {
    path.is_file()
}
