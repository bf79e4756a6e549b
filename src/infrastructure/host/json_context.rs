//! Host context loaded from a JSON file written by the editor

use std::path::PathBuf;

use tokio::fs;

use crate::application::ports::HostError;
use crate::domain::host::HostContextData;

use super::StaticHost;

/// JSON host-context file.
///
/// ```json
/// { "selected_items": [{ "full_path": "C:\\src\\App.cs" }], "active_document": null }
/// ```
pub struct JsonContextFile {
    path: PathBuf,
}

impl JsonContextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse context JSON
    pub fn parse(content: &str) -> Result<HostContextData, HostError> {
        serde_json::from_str(content).map_err(|e| HostError::ParseFailed(e.to_string()))
    }

    /// Read and parse the file into a host snapshot
    pub async fn load(&self) -> Result<StaticHost, HostError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| HostError::ReadFailed(format!("{}: {}", self.path.display(), e)))?;

        Self::parse(&content).map(StaticHost::from)
    }
}
