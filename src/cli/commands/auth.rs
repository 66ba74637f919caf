//! Auth command implementation.
//!
//! Records the consumer key and access token obtained from the Pocket
//! developer console into the config file. Values not given as flags are
//! read from stdin; values already stored are kept when left blank.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::info;

use crate::config::{AppConfig, Settings};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct AuthOutput<'a> {
    config_path: &'a str,
    consumer_key: &'a str,
}

/// Execute the auth command.
///
/// # Errors
///
/// Returns an error if the config cannot be read or written, or if either
/// value ends up empty.
pub fn execute(
    settings: &Settings,
    consumer_key: Option<&str>,
    access_token: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut config = AppConfig::load_or_default(&settings.config_path)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    config.consumer_key = resolve_value(
        consumer_key,
        "Please enter consumer key",
        &config.consumer_key,
        &mut input,
    )?;
    config.access_token = resolve_value(
        access_token,
        "Please enter access token",
        &config.access_token,
        &mut input,
    )?;

    // Validates that both values are present before anything is written.
    config.credentials()?;
    config.save(&settings.config_path)?;
    info!(path = %settings.config_path.display(), "credentials stored");

    let path = settings.config_path.display().to_string();
    if json {
        let output = AuthOutput {
            config_path: &path,
            consumer_key: &config.consumer_key,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Written to config {path}");
    }
    Ok(())
}

/// Take the flag value, or prompt for one, keeping `current` on blank input.
fn resolve_value<R: BufRead>(
    flag: Option<&str>,
    prompt: &str,
    current: &str,
    input: &mut R,
) -> Result<String> {
    if let Some(value) = flag.map(str::trim).filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }

    if current.is_empty() {
        eprint!("{prompt}: ");
    } else {
        eprint!("{prompt} [keep current]: ");
    }
    io::stderr().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();

    match (line.is_empty(), current.is_empty()) {
        (false, _) => Ok(line.to_string()),
        (true, false) => Ok(current.to_string()),
        (true, true) => Err(Error::InvalidArgument(format!("{prompt}: no value given"))),
    }
}
