//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    /// A missing file yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist `config`, creating parent directories as needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write a file with default values. Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
