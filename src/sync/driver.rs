//! Sync driver: turns repeated page fetches into one ordered, deduplicated
//! collection.
//!
//! # Termination
//!
//! A pass stops when a page holds strictly fewer items than requested (the
//! end of the remote list) or when a positive `limit` has been reached by
//! the accumulated count. A dataset whose size is an exact multiple of the
//! page size therefore costs one extra, empty request.
//!
//! # Consistency
//!
//! Offsets are stepped client-side. If the remote list changes during a pass
//! (an item saved or archived elsewhere), later windows shift: an item can
//! be seen twice or skipped. Duplicates are absorbed by the insert-or-replace
//! merge; skips are only repaired by the next full sync.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use super::fetcher::PageFetcher;
use crate::error::Result;
use crate::model::{Article, Snapshot};
use crate::remote::{ArticleSource, Filter};
use crate::storage::SnapshotStore;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Parameters of one collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Items requested per page. Not clamped to any server maximum.
    pub step: usize,
    /// Stop once this many articles are accumulated; 0 means no cap.
    pub limit: usize,
    pub filter: Filter,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_PAGE_SIZE,
            limit: 0,
            filter: Filter::default(),
        }
    }
}

/// Notification emitted once per fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based page number.
    pub page: usize,
    pub offset: usize,
    /// Items the server returned for this page.
    pub received: usize,
    /// Unique articles accumulated so far.
    pub total: usize,
}

/// Result of a collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// Articles sorted newest first, unique by id.
    pub snapshot: Snapshot,
    /// Number of page requests issued.
    pub pages: usize,
    /// Articles that replaced an earlier copy with the same id.
    pub replaced: usize,
}

/// Summary of a pass written to the snapshot store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SyncReport {
    pub pages: usize,
    pub articles: usize,
    pub replaced: usize,
    pub snapshot_path: PathBuf,
}

/// Insert-or-replace accumulator keyed by `item_id`.
///
/// Re-inserting an id overwrites the stored article in place, so merging
/// the same page twice leaves the result unchanged.
#[derive(Debug, Default)]
pub struct Accumulator {
    articles: Vec<Article>,
    positions: HashMap<String, usize>,
}

impl Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one article. Returns `true` if it replaced an existing entry.
    pub fn upsert(&mut self, article: Article) -> bool {
        if let Some(&pos) = self.positions.get(&article.item_id) {
            self.articles[pos] = article;
            true
        } else {
            self.positions
                .insert(article.item_id.clone(), self.articles.len());
            self.articles.push(article);
            false
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Consume into articles ordered newest first.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Article> {
        let mut articles = self.articles;
        sort_newest_first(&mut articles);
        articles
    }
}

/// Stable sort by `time_added`, descending.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by_key(|a| Reverse(a.time_added));
}

/// Run one collection pass against `source`.
///
/// Pages are requested strictly one after another in offset order.
/// `on_page` is called after every successful page and has no influence on
/// the pass.
///
/// # Errors
///
/// The first failing page aborts the pass and its error is returned; no
/// partial result is produced.
pub async fn collect_articles<S, F>(
    source: &S,
    options: &SyncOptions,
    mut on_page: F,
) -> Result<Collected>
where
    S: ArticleSource,
    F: FnMut(&PageProgress),
{
    let fetcher = PageFetcher::new(source, &options.filter);
    let step = options.step;
    let mut accumulator = Accumulator::new();
    let mut offset = 0;
    let mut pages = 0;
    let mut replaced = 0;

    loop {
        let page = fetcher.fetch(offset, step).await?;
        pages += 1;

        for article in page.articles.into_values() {
            if accumulator.upsert(article) {
                replaced += 1;
            }
        }

        on_page(&PageProgress {
            page: pages,
            offset,
            received: page.raw_count,
            total: accumulator.len(),
        });
        debug!(
            page = pages,
            offset,
            received = page.raw_count,
            total = accumulator.len(),
            "page merged"
        );

        offset += step;

        if page.raw_count < step {
            break;
        }
        if options.limit > 0 && accumulator.len() >= options.limit {
            debug!(limit = options.limit, "limit reached");
            break;
        }
    }

    if replaced > 0 {
        warn!(replaced, "remote list shifted during sync; duplicate ids were merged");
    }

    Ok(Collected {
        snapshot: Snapshot::new(accumulator.into_sorted()),
        pages,
        replaced,
    })
}

/// Run a full pass and replace the stored snapshot with its result.
///
/// The store is written once, after the last page. A failed pass leaves
/// any existing snapshot untouched.
///
/// # Errors
///
/// Returns the first page failure, or a storage error from the final write.
pub async fn sync_to_store<S, F>(
    source: &S,
    store: &SnapshotStore,
    options: &SyncOptions,
    on_page: F,
) -> Result<SyncReport>
where
    S: ArticleSource,
    F: FnMut(&PageProgress),
{
    let collected = collect_articles(source, options, on_page).await?;
    store.save(&collected.snapshot)?;

    info!(
        pages = collected.pages,
        articles = collected.snapshot.len(),
        path = %store.path().display(),
        "sync complete"
    );

    Ok(SyncReport {
        pages: collected.pages,
        articles: collected.snapshot.len(),
        replaced: collected.replaced,
        snapshot_path: store.path().to_path_buf(),
    })
}
