//! Configuration management.
//!
//! This module resolves where getpkt keeps its files and which API it talks
//! to, and loads the stored credentials.
//!
//! # Layout
//!
//! Everything lives under `~/.config/getpkt/` unless overridden:
//! - **Config**: `config.json` holding the consumer key and access token
//! - **Snapshot**: `articles.json` written by `sync`
//!
//! Resolution happens once in `main`; the resulting [`Settings`] value is
//! passed by parameter to every command.

mod app_config;

pub use app_config::AppConfig;

use crate::error::{Error, Result};
use crate::remote::DEFAULT_API_URL;

use std::path::{Path, PathBuf};

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Snapshot file name inside the config directory.
pub const SNAPSHOT_FILE: &str = "articles.json";

/// Get the default getpkt directory (`~/.config/getpkt`).
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".config").join("getpkt"))
}

/// Resolve the config file path.
///
/// Priority:
/// 1. `explicit_path` (the `--config` flag or `GETPKT_CONFIG`)
/// 2. `~/.config/getpkt/config.json`
#[must_use]
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    default_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Resolve the snapshot file path.
///
/// Priority:
/// 1. `explicit_path` (the `--snapshot` flag or `GETPKT_SNAPSHOT`)
/// 2. `~/.config/getpkt/articles.json`
#[must_use]
pub fn resolve_snapshot_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    default_config_dir().map(|dir| dir.join(SNAPSHOT_FILE))
}

/// Process-wide settings, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub snapshot_path: PathBuf,
    pub api_url: String,
    pub page_size: usize,
}

impl Settings {
    /// Build settings from command-line values, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no home directory can be found and a path
    /// was not given explicitly, and [`Error::InvalidArgument`] for a zero
    /// page size.
    pub fn resolve(
        config_path: Option<&Path>,
        snapshot_path: Option<&Path>,
        api_url: Option<&str>,
        page_size: usize,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let config_path = resolve_config_path(config_path)
            .ok_or_else(|| Error::Config("Could not determine home directory".into()))?;
        let snapshot_path = resolve_snapshot_path(snapshot_path)
            .ok_or_else(|| Error::Config("Could not determine home directory".into()))?;
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        Ok(Self {
            config_path,
            snapshot_path,
            api_url,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_path_with_explicit() {
        let explicit = PathBuf::from("/custom/getpkt.json");
        assert_eq!(resolve_config_path(Some(&explicit)), Some(explicit));
    }

    #[test]
    fn test_default_paths_share_directory() {
        let config = resolve_config_path(None).unwrap();
        let snapshot = resolve_snapshot_path(None).unwrap();

        assert!(config.ends_with(".config/getpkt/config.json"));
        assert!(snapshot.ends_with(".config/getpkt/articles.json"));
        assert_eq!(config.parent(), snapshot.parent());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::resolve(None, None, None, 30).unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.page_size, 30);
        assert!(settings.snapshot_path.ends_with(SNAPSHOT_FILE));
    }

    #[test]
    fn test_settings_overrides() {
        let settings = Settings::resolve(
            Some(Path::new("/tmp/c.json")),
            Some(Path::new("/tmp/s.json")),
            Some("http://localhost:8080/v3"),
            5,
        )
        .unwrap();

        assert_eq!(settings.config_path, PathBuf::from("/tmp/c.json"));
        assert_eq!(settings.snapshot_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(settings.api_url, "http://localhost:8080/v3");
    }

    #[test]
    fn test_blank_api_url_uses_default() {
        let settings = Settings::resolve(None, None, Some("  "), 30).unwrap();
        assert_eq!(settings.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            Settings::resolve(None, None, None, 0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
