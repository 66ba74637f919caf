//! Archive command implementation.
//!
//! The local snapshot is left as is; run `sync` to see the change there.

use serde::Serialize;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::sync;

#[derive(Serialize)]
struct ArchiveOutput<'a> {
    item_id: &'a str,
    archived: bool,
}

/// Execute the archive command.
///
/// # Errors
///
/// Returns an error if credentials are missing, the request fails, or the
/// server declines the action.
pub fn execute(settings: &Settings, item_id: &str, json: bool) -> Result<()> {
    let item_id = item_id.trim();
    if item_id.is_empty() {
        return Err(Error::InvalidArgument("item id must not be empty".to_string()));
    }

    let client = super::authenticated_client(settings)?;
    let rt = super::runtime()?;
    rt.block_on(sync::archive(&client, item_id))?;

    if json {
        let output = ArchiveOutput {
            item_id,
            archived: true,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Archived {item_id}");
    }
    Ok(())
}
