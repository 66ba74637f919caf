//! Stored credentials.
//!
//! `config.json` holds the consumer key and access token handed over by the
//! credential provider. It is written with owner-only permissions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::remote::Credentials;
use crate::storage::atomic_write_private;

/// Contents of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub access_token: String,
}

impl AppConfig {
    /// Load the config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing, unreadable, or not
    /// valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Load the config file, or an empty config if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::load`] for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file yet");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config file as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        atomic_write_private(path, &content).map_err(|e| {
            Error::Config(format!("Failed to write config file {}: {e}", path.display()))
        })
    }

    /// Credentials for remote calls.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] if either value is empty.
    pub fn credentials(&self) -> Result<Credentials> {
        let consumer_key = self.consumer_key.trim();
        let access_token = self.access_token.trim();
        if consumer_key.is_empty() || access_token.is_empty() {
            return Err(Error::NotAuthenticated);
        }
        Ok(Credentials::new(consumer_key, access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("getpkt").join("config.json");
        let config = AppConfig {
            consumer_key: "1234-abcd1234abcd1234abcd1234".to_string(),
            access_token: "5678defg-5678-defg-5678-defg56".to_string(),
        };

        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"consumer_key\""));
    }

    #[test]
    fn test_load_or_default_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&temp_dir.path().join("none.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            AppConfig::load(&temp_dir.path().join("none.json")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "consumer_key=abc").unwrap();

        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_partial_config_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"consumer_key": "abc"}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.consumer_key, "abc");
        assert!(config.access_token.is_empty());
    }

    #[test]
    fn test_credentials_require_both_values() {
        let config = AppConfig {
            consumer_key: "abc".to_string(),
            access_token: String::new(),
        };
        assert!(matches!(config.credentials(), Err(Error::NotAuthenticated)));

        let config = AppConfig {
            consumer_key: " abc ".to_string(),
            access_token: "tok".to_string(),
        };
        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.consumer_key, "abc");
        assert_eq!(credentials.access_token, "tok");
    }
}
