//! Command implementations.

pub mod archive;
pub mod auth;
pub mod completions;
pub mod list;
pub mod rand;
pub mod show;
pub mod sync;
pub mod version;

use crate::config::{AppConfig, Settings};
use crate::error::{Error, Result};
use crate::remote::PocketClient;

/// Build the async runtime that drives remote calls.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Error::Other(format!("Failed to create async runtime: {e}")))
}

/// Client for the configured API, using the stored credentials.
fn authenticated_client(settings: &Settings) -> Result<PocketClient> {
    let credentials = AppConfig::load_or_default(&settings.config_path)?.credentials()?;
    Ok(PocketClient::with_base_url(settings.api_url.as_str(), credentials))
}
