//! List command implementation.
//!
//! Without `--cache` this runs a bounded pass against the API and prints the
//! newest articles; nothing is written to disk. With `--cache` it reads the
//! snapshot left by the last `sync`.

use colored::Colorize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::model::Article;
use crate::remote::Filter;
use crate::storage::SnapshotStore;
use crate::sync::{SyncOptions, collect_articles};

/// Which articles `list` shows.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub favorites: bool,
    /// Sent to the server; not stored in the snapshot.
    pub tag: Option<String>,
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read (`--cache`) or the
/// remote pass fails.
pub fn execute(
    settings: &Settings,
    limit: usize,
    cache: bool,
    filter: &ListFilter,
    json: bool,
) -> Result<()> {
    let mut articles = if cache {
        let snapshot = SnapshotStore::new(settings.snapshot_path.clone()).load()?;
        snapshot
            .into_articles()
            .into_iter()
            .filter(|a| !filter.favorites || a.favorite)
            .collect()
    } else {
        fetch_newest(settings, limit, filter)?
    };

    if limit > 0 {
        articles.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string(&articles)?);
    } else if articles.is_empty() {
        println!("No articles found.");
    } else {
        for article in &articles {
            print_article(article);
        }
    }

    Ok(())
}

/// Bounded newest-first pass; a zero limit fetches everything.
fn fetch_newest(
    settings: &Settings,
    limit: usize,
    list_filter: &ListFilter,
) -> Result<Vec<Article>> {
    let client = super::authenticated_client(settings)?;
    let step = if limit > 0 {
        limit.min(settings.page_size)
    } else {
        settings.page_size
    };
    let options = SyncOptions {
        step,
        limit,
        filter: Filter {
            favorite: list_filter.favorites.then_some(true),
            tag: list_filter.tag.clone(),
            ..Filter::default()
        },
    };

    let rt = super::runtime()?;
    let collected = rt.block_on(collect_articles(&client, &options, |progress| {
        debug!(page = progress.page, total = progress.total, "page downloaded");
    }))?;

    Ok(collected.snapshot.into_articles())
}

/// Print one article as a two-line entry.
pub(crate) fn print_article(article: &Article) {
    let date = match article.added_at() {
        Ok(added) => added.format("%Y-%m-%d").to_string(),
        Err(e) => {
            warn!("{e}");
            "----------".to_string()
        }
    };
    let title = if article.title().is_empty() {
        "(untitled)"
    } else {
        article.title()
    };
    let marker = if article.favorite { "*" } else { " " };

    println!(
        "{} {}{} {}",
        date.dimmed(),
        marker.yellow(),
        article.item_id.cyan(),
        title.bold()
    );
    if !article.url().is_empty() {
        println!("{:12}{}", "", article.url());
    }
}
