//! Rand command implementation.

use crate::config::Settings;
use crate::error::Result;
use crate::storage::SnapshotStore;

/// Print one random article from the snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot is missing or corrupt.
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let snapshot = SnapshotStore::new(settings.snapshot_path.clone()).load()?;
    let picked = snapshot.random(&mut rand::thread_rng());

    if json {
        println!("{}", serde_json::to_string(&picked)?);
        return Ok(());
    }

    match picked {
        Some(article) => super::list::print_article(article),
        None => println!("No articles in snapshot."),
    }
    Ok(())
}
