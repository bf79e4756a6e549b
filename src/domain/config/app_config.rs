//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::artifact::{
    ArtifactLayout, RetryPolicy, DEFAULT_ATTEMPTS, DEFAULT_EXTENSION, DEFAULT_RETRY_DELAY_MS,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_TEMP_PREFIX, DEFAULT_TIMEOUT_MS,
};
use crate::domain::clipboard::ClipboardBackend;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: Option<String>,
    pub notify: Option<bool>,
    pub temp_prefix: Option<String>,
    pub extension: Option<String>,
    pub attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub settle_delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some("auto".to_string()),
            notify: Some(false),
            temp_prefix: Some(DEFAULT_TEMP_PREFIX.to_string()),
            extension: Some(DEFAULT_EXTENSION.to_string()),
            attempts: Some(DEFAULT_ATTEMPTS),
            retry_delay_ms: Some(DEFAULT_RETRY_DELAY_MS),
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            notify: other.notify.or(self.notify),
            temp_prefix: other.temp_prefix.or(self.temp_prefix),
            extension: other.extension.or(self.extension),
            attempts: other.attempts.or(self.attempts),
            retry_delay_ms: other.retry_delay_ms.or(self.retry_delay_ms),
            settle_delay_ms: other.settle_delay_ms.or(self.settle_delay_ms),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }

    /// Get backend as parsed ClipboardBackend, or Auto if not set/invalid
    pub fn backend_or_default(&self) -> ClipboardBackend {
        self.backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get notify setting, or false if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(false)
    }

    /// Build the retry policy, filling gaps with defaults
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from_millis(
            self.attempts.unwrap_or(DEFAULT_ATTEMPTS),
            self.retry_delay_ms.unwrap_or(DEFAULT_RETRY_DELAY_MS),
            self.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS),
            self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        )
    }

    /// Build the artifact layout under the OS temp directory
    pub fn artifact_layout(&self) -> ArtifactLayout {
        let prefix = self.temp_prefix.as_deref().unwrap_or(DEFAULT_TEMP_PREFIX);
        let extension = self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION);
        ArtifactLayout::new().prefix(prefix).extension(extension)
    }
}
