//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage.
    ///
    /// A missing file loads as an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the configuration, replacing what was stored.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the backing file.
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write a config file with defaults. Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Load configuration, treating an unreadable file as empty.
    async fn load_or_empty(&self) -> AppConfig {
        self.load().await.unwrap_or_else(|_| AppConfig::empty())
    }
}
