//! Synchronization engine.
//!
//! - **Fetcher**: one bounded `/get` request per page
//! - **Driver**: repeated fetches into one deduplicated, newest-first pass
//! - **Mutation**: single-item actions sent to `/send`
//!
//! # Example
//!
//! ```ignore
//! use getpkt::sync::{sync_to_store, SyncOptions};
//!
//! let client = PocketClient::new(credentials);
//! let store = SnapshotStore::new(settings.snapshot_path.clone());
//! let report = sync_to_store(&client, &store, &SyncOptions::default(), |_| {}).await?;
//! ```

mod driver;
mod fetcher;
mod mutation;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use driver::{
    Accumulator, Collected, DEFAULT_PAGE_SIZE, PageProgress, SyncOptions, SyncReport,
    collect_articles, sort_newest_first, sync_to_store,
};
pub use fetcher::PageFetcher;
pub use mutation::{apply, archive};
