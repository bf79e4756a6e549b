//! Naming rules for the temporary copy placed on the clipboard

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Default prefix of the per-invocation temp directory
pub const DEFAULT_TEMP_PREFIX: &str = "VSExtension_";

/// Extension forced onto the temp copy
pub const DEFAULT_EXTENSION: &str = "txt";

/// Where and under which names the temp copy is materialized.
///
/// Each publish gets `<root>/<prefix><uuid>/<stem>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    root: PathBuf,
    prefix: String,
    extension: String,
}

impl ArtifactLayout {
    /// Layout under the OS temp directory with default naming
    pub fn new() -> Self {
        Self::with_root(std::env::temp_dir())
    }

    /// Layout under a custom root with default naming
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            prefix: DEFAULT_TEMP_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Override the directory prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Override the forced extension (a leading dot is ignored)
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for one invocation, suffixed with the 32-hex form of `id`
    pub fn dir_for(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{}{}", self.prefix, id.as_simple()))
    }

    /// A fresh, never-before-used directory path
    pub fn fresh_dir(&self) -> PathBuf {
        self.dir_for(Uuid::new_v4())
    }

    /// File name for the copy of `source`: its stem with the forced extension.
    ///
    /// A source without a usable stem falls back to `file`.
    pub fn file_name_for(&self, source: &Path) -> String {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "file".to_string());

        if self.extension.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, self.extension)
        }
    }
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self::new()
    }
}
