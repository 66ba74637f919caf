//! Version command implementation.

use crate::error::Result;
use crate::remote::DEFAULT_API_URL;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    api: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if json {
        let output = VersionOutput {
            version,
            build,
            api: DEFAULT_API_URL,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("getpkt version {version} ({build})");
    Ok(())
}
