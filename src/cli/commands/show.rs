//! Show command implementation.

use colored::Colorize;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::model::Article;
use crate::storage::SnapshotStore;

/// Print every stored field of one snapshot article.
///
/// # Errors
///
/// Returns [`Error::ArticleNotFound`] if the id is not in the snapshot, and
/// the usual snapshot errors if it cannot be loaded.
pub fn execute(settings: &Settings, item_id: &str, json: bool) -> Result<()> {
    let snapshot = SnapshotStore::new(settings.snapshot_path.clone()).load()?;
    let article = snapshot
        .find(item_id.trim())
        .ok_or_else(|| Error::ArticleNotFound {
            item_id: item_id.trim().to_string(),
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(article)?);
    } else {
        print_details(article)?;
    }
    Ok(())
}

fn print_details(article: &Article) -> Result<()> {
    let added = article.added_at()?;

    println!("{}", article.title().bold());
    println!("  {:<10} {}", "id:".dimmed(), article.item_id);
    println!("  {:<10} {}", "url:".dimmed(), article.url());
    println!("  {:<10} {}", "added:".dimmed(), added.format("%Y-%m-%d %H:%M UTC"));
    println!("  {:<10} {}", "status:".dimmed(), article.status.as_str());
    if article.favorite {
        println!("  {:<10} {}", "favorite:".dimmed(), "yes".yellow());
    }
    if article.words_count > 0 {
        println!("  {:<10} {}", "words:".dimmed(), article.words_count);
    }
    if !article.excerpt.is_empty() {
        println!();
        println!("  {}", article.excerpt);
    }
    Ok(())
}
