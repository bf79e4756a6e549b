//! Host editor port interface

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::host::SelectedItem;

/// Host context errors
#[derive(Debug, Clone, Error)]
pub enum HostError {
    #[error("Item does not expose a full path: {0}")]
    PathUnavailable(String),

    #[error("Failed to read host context: {0}")]
    ReadFailed(String),

    #[error("Failed to parse host context: {0}")]
    ParseFailed(String),
}

/// Port for the editor's current UI state.
///
/// Queries are synchronous snapshots; the host owns the underlying model.
pub trait HostContext: Send + Sync {
    /// Items in the current multi-selection, in selection order
    fn selected_items(&self) -> Vec<SelectedItem>;

    /// Full path of one selected item.
    ///
    /// Hosts whose property lookup can fail for some node types return
    /// an error; resolution skips such items.
    fn full_path(&self, item: &SelectedItem) -> Result<Option<PathBuf>, HostError> {
        Ok(item.path().cloned())
    }

    /// Full path of the focused editor document
    fn active_document(&self) -> Option<PathBuf>;
}
