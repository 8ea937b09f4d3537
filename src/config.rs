//! Application configuration.
//!
//! A small TOML-backed config covering the backend API endpoint, the
//! default language, and where the durable store lives. Every field has
//! a default so an absent config file yields a working local setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Filename of the durable key/value store inside `data_dir`.
const STORE_FILE: &str = "hakim.db";

/// Runtime configuration for the console core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the clinic backend API, including the version prefix.
    pub api_base_url: String,
    /// Request timeout for backend calls, in seconds.
    pub api_timeout_secs: u64,
    /// Language used when no preference has been persisted yet.
    pub default_language: String,
    /// Directory holding the durable storage scope.
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            api_timeout_secs: 10,
            default_language: "ar".to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    /// A missing file is not an error; defaults are returned instead.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Backend request timeout as a [`Duration`].
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    /// Path of the durable storage database.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/hakim.toml")).unwrap();
        assert_eq!(config.default_language, "ar");
        assert_eq!(config.api_timeout_secs, 10);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hakim.toml");
        std::fs::write(&path, "default_language = \"en\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.default_language, "en");
        assert_eq!(config.api_base_url, "http://localhost:3000/api/v1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hakim.toml");
        std::fs::write(&path, "api_timeout_secs = \"soon\"\n").unwrap();

        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn store_path_joins_data_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/var/lib/hakim"),
            ..Default::default()
        };
        assert_eq!(config.store_path(), PathBuf::from("/var/lib/hakim/hakim.db"));
    }
}
