//! Configuration management.
//!
//! Stores configuration in JSON format at `~/.wififilter/config.json`.
//! Every field has a default, so a missing or partial file is fine.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::adapters::allowed_store::DEFAULT_FILE_NAME;
use crate::adapters::netsh::DEFAULT_PROGRAM;
use crate::error::{Error, Result};

/// Name of the directory under the home directory that holds all app files.
const APP_DIR: &str = ".wififilter";

/// File name of the fault log when no path is configured.
pub const DEFAULT_LOG_FILE_NAME: &str = "debug_log.txt";

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Executable used for all `wlan` commands.
    #[serde(default = "default_netsh_path")]
    pub netsh_path: String,

    /// Allowed-list file. Defaults to `allowed_ssids.txt` in the config directory.
    #[serde(default)]
    pub allowed_file: Option<PathBuf>,

    /// Per-command timeout in seconds; 0 waits indefinitely.
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,

    /// Fault log file. Defaults to `debug_log.txt` in the config directory.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_netsh_path() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_command_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            netsh_path: default_netsh_path(),
            allowed_file: None,
            command_timeout_secs: default_command_timeout(),
            log_file: None,
        }
    }
}

impl Config {
    /// Command timeout, or `None` when disabled.
    pub fn command_timeout(&self) -> Option<Duration> {
        match self.command_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// Configuration store for managing app settings.
///
/// Handles reading and writing configuration to `~/.wififilter/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.wififilter/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(APP_DIR).join("config.json");

        Ok(Self { config_path })
    }

    /// Create a config store with a custom path (for testing).
    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> PathBuf {
        self.config_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default()
    }

    /// Allowed-list path from the config, or the default inside the config directory.
    pub fn allowed_file(&self, config: &Config) -> PathBuf {
        config
            .allowed_file
            .clone()
            .unwrap_or_else(|| self.config_dir().join(DEFAULT_FILE_NAME))
    }

    /// Fault log path from the config, or the default inside the config directory.
    pub fn log_file(&self, config: &Config) -> PathBuf {
        config
            .log_file
            .clone()
            .unwrap_or_else(|| self.config_dir().join(DEFAULT_LOG_FILE_NAME))
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub async fn save(&self, config: &Config) -> Result<()> {
        let config_dir = self.config_dir();
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .await
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write atomically by writing to temp file then renaming
        let temp_path = self.config_path.with_extension("json.tmp");

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to create temp config file: {}", e)))?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| Error::Config(format!("Failed to write config: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Config(format!("Failed to sync config: {}", e)))?;

        fs::rename(&temp_path, &self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to rename config file: {}", e)))?;

        Ok(())
    }

    /// Set the executable used for `wlan` commands.
    pub async fn set_netsh_path(&self, path: &str) -> Result<()> {
        let mut config = self.load().await?;
        config.netsh_path = path.to_string();
        self.save(&config).await
    }

    /// Set the per-command timeout in seconds (0 disables it).
    pub async fn set_command_timeout(&self, secs: u64) -> Result<()> {
        let mut config = self.load().await?;
        config.command_timeout_secs = secs;
        self.save(&config).await
    }

    /// Set or reset the allowed-list file location.
    pub async fn set_allowed_file(&self, path: Option<PathBuf>) -> Result<()> {
        let mut config = self.load().await?;
        config.allowed_file = path;
        self.save(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.netsh_path, "netsh");
        assert_eq!(config.command_timeout(), Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _dir) = test_store();

        let config = Config {
            netsh_path: "C:\\Windows\\System32\\netsh.exe".to_string(),
            allowed_file: Some(PathBuf::from("/tmp/allowed.txt")),
            command_timeout_secs: 0,
            log_file: None,
        };
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.command_timeout(), None);
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults() {
        let (store, _dir) = test_store();
        std::fs::write(store.config_path(), r#"{"commandTimeoutSecs": 5}"#).unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.command_timeout_secs, 5);
        assert_eq!(config.netsh_path, "netsh");
        assert!(config.allowed_file.is_none());
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let (store, _dir) = test_store();
        std::fs::write(store.config_path(), "not json").unwrap();
        assert!(matches!(store.load().await, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_default_paths_live_in_config_dir() {
        let (store, dir) = test_store();
        let config = Config::default();
        assert_eq!(
            store.allowed_file(&config),
            dir.path().join("allowed_ssids.txt")
        );
        assert_eq!(store.log_file(&config), dir.path().join("debug_log.txt"));
    }

    #[tokio::test]
    async fn test_setters() {
        let (store, _dir) = test_store();

        store.set_command_timeout(12).await.unwrap();
        store.set_netsh_path("/usr/local/bin/netsh").await.unwrap();
        store
            .set_allowed_file(Some(PathBuf::from("/data/allowed.txt")))
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.command_timeout_secs, 12);
        assert_eq!(config.netsh_path, "/usr/local/bin/netsh");
        assert_eq!(config.allowed_file, Some(PathBuf::from("/data/allowed.txt")));

        store.set_allowed_file(None).await.unwrap();
        assert!(store.load().await.unwrap().allowed_file.is_none());
    }
}
