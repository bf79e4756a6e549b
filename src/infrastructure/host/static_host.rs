//! Host context with a fixed snapshot of selection state

use std::path::PathBuf;

use crate::application::ports::HostContext;
use crate::domain::host::{HostContextData, SelectedItem};

/// Host context backed by an in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    data: HostContextData,
}

impl StaticHost {
    pub fn new(selected: Vec<SelectedItem>, active_document: Option<PathBuf>) -> Self {
        Self {
            data: HostContextData {
                selected_items: selected,
                active_document,
            },
        }
    }

    /// Snapshot from plain selected paths
    pub fn from_paths(selected: Vec<PathBuf>, active_document: Option<PathBuf>) -> Self {
        Self::new(
            selected.into_iter().map(SelectedItem::with_path).collect(),
            active_document,
        )
    }

    /// Layer `other` on top: its selection replaces ours if non-empty,
    /// its active document replaces ours if set.
    pub fn overlay(self, other: StaticHost) -> Self {
        let selected_items = if other.data.selected_items.is_empty() {
            self.data.selected_items
        } else {
            other.data.selected_items
        };

        Self {
            data: HostContextData {
                selected_items,
                active_document: other.data.active_document.or(self.data.active_document),
            },
        }
    }
}

impl From<HostContextData> for StaticHost {
    fn from(data: HostContextData) -> Self {
        Self { data }
    }
}

impl HostContext for StaticHost {
    fn selected_items(&self) -> Vec<SelectedItem> {
        self.data.selected_items.clone()
    }

    fn active_document(&self) -> Option<PathBuf> {
        self.data.active_document.clone()
    }
}
