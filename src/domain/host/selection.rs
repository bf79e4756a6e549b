//! Host selection state

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One entry of the host's multi-selection.
/// Not every node (folders, references, solution items) exposes a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedItem {
    #[serde(default, alias = "FullPath", alias = "path")]
    pub full_path: Option<PathBuf>,
}

impl SelectedItem {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            full_path: Some(path.into()),
        }
    }

    /// An item with no path, e.g. a folder node
    pub fn without_path() -> Self {
        Self { full_path: None }
    }

    /// The path if it is present and non-empty
    pub fn path(&self) -> Option<&PathBuf> {
        self.full_path
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Snapshot of host UI state as handed over by the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContextData {
    #[serde(default)]
    pub selected_items: Vec<SelectedItem>,
    #[serde(default)]
    pub active_document: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_treated_as_missing() {
        assert!(SelectedItem::with_path("").path().is_none());
        assert!(SelectedItem::without_path().path().is_none());
        assert_eq!(
            SelectedItem::with_path("/a.rs").path(),
            Some(&PathBuf::from("/a.rs"))
        );
    }

    #[test]
    fn context_parses_with_missing_fields() {
        let ctx: HostContextData = serde_json::from_str("{}").unwrap();
        assert!(ctx.selected_items.is_empty());
        assert!(ctx.active_document.is_none());
    }

    #[test]
    fn context_accepts_full_path_alias() {
        let ctx: HostContextData = serde_json::from_str(
            r#"{"selected_items":[{},{"FullPath":"/p/a.cs"}],"active_document":"/p/b.cs"}"#,
        )
        .unwrap();
        assert_eq!(ctx.selected_items.len(), 2);
        assert!(ctx.selected_items[0].path().is_none());
        assert_eq!(
            ctx.selected_items[1].path(),
            Some(&PathBuf::from("/p/a.cs"))
        );
        assert_eq!(ctx.active_document, Some(PathBuf::from("/p/b.cs")));
    }
}
