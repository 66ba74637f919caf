//! Sync command implementation.
//!
//! Runs a full pass against the API and replaces the local snapshot. The
//! snapshot is only written once every page has arrived.

use std::io::Write;

use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::storage::SnapshotStore;
use crate::sync::{SyncOptions, sync_to_store};

/// Execute the sync command.
///
/// # Errors
///
/// Returns an error if credentials are missing, any page fails, or the
/// snapshot cannot be written.
pub fn execute(settings: &Settings, limit: usize, json: bool, quiet: bool) -> Result<()> {
    let client = super::authenticated_client(settings)?;
    let store = SnapshotStore::new(settings.snapshot_path.clone());
    let options = SyncOptions {
        step: settings.page_size,
        limit,
        ..SyncOptions::default()
    };
    let show_progress = !json && !quiet;

    if show_progress {
        eprint!("Downloading");
    }

    let rt = super::runtime()?;
    let result = rt.block_on(sync_to_store(&client, &store, &options, |progress| {
        info!(
            page = progress.page,
            offset = progress.offset,
            received = progress.received,
            total = progress.total,
            "page downloaded"
        );
        if show_progress {
            eprint!(".");
            let _ = std::io::stderr().flush();
        }
    }));

    if show_progress {
        eprintln!();
    }
    let report = result?;

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else if !quiet {
        println!(
            "Synced {} articles in {} pages",
            report.articles, report.pages
        );
        println!("  Location: {}", report.snapshot_path.display());
    }

    Ok(())
}
