//! Mutation applier: single-item state changes on the remote list.
//!
//! The local snapshot is never patched after a mutation. It mirrors the
//! last full sync; the change shows up locally after the next `sync`.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::remote::{ActionKind, ArticleSource, ModifyAction};

/// Archive one item, stamped with the current time.
///
/// # Errors
///
/// Transport and protocol errors propagate unchanged. A response whose
/// acknowledgement is not `true` yields [`Error::RejectedMutation`].
pub async fn archive<S: ArticleSource>(source: &S, item_id: &str) -> Result<()> {
    apply(source, ActionKind::Archive, item_id, Utc::now().timestamp()).await
}

/// Send one action as a one-element batch and check its acknowledgement.
///
/// # Errors
///
/// See [`archive`].
pub async fn apply<S: ArticleSource>(
    source: &S,
    action: ActionKind,
    item_id: &str,
    time: i64,
) -> Result<()> {
    let actions = [ModifyAction {
        action,
        item_id: item_id.to_string(),
        time,
    }];

    let response = source.send_actions(&actions).await?;
    debug!(
        item_id,
        status = response.status,
        results = ?response.action_results,
        "actions acknowledged"
    );

    if response.action_results.first() == Some(&true) {
        info!(item_id, ?action, "item updated");
        Ok(())
    } else {
        Err(Error::RejectedMutation {
            item_id: item_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Snapshot};
    use crate::storage::SnapshotStore;
    use crate::sync::test_helpers::{FakeSource, dataset};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_archive_sends_single_action() {
        let source = FakeSource::from_dataset(Vec::new());
        let before = Utc::now().timestamp();

        archive(&source, "229279689").await.unwrap();

        let actions = source.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action, ActionKind::Archive);
        assert_eq!(actions[0].item_id, "229279689");
        assert!(actions[0].time >= before);
        assert!(source.windows().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_archive_names_item() {
        let source = FakeSource::from_dataset(Vec::new()).acknowledging(vec![false]);

        let err = archive(&source, "42").await.unwrap_err();
        assert!(matches!(err, Error::RejectedMutation { ref item_id } if item_id == "42"));
    }

    #[tokio::test]
    async fn test_missing_acknowledgement_is_rejection() {
        let source = FakeSource::from_dataset(Vec::new()).acknowledging(Vec::new());
        assert!(matches!(
            apply(&source, ActionKind::Archive, "7", 0).await,
            Err(Error::RejectedMutation { .. })
        ));
    }

    #[tokio::test]
    async fn test_rejection_leaves_snapshot_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("articles.json"));
        let snapshot = Snapshot::new(dataset(3));
        store.save(&snapshot).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let source = FakeSource::from_dataset(Vec::new()).acknowledging(vec![false]);
        let target = snapshot.articles()[1].item_id.clone();
        assert!(archive(&source, &target).await.is_err());

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_accepted_archive_does_not_patch_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("articles.json"));
        let snapshot = Snapshot::new(vec![Article::new("1", 10)]);
        store.save(&snapshot).unwrap();

        let source = FakeSource::from_dataset(Vec::new());
        archive(&source, "1").await.unwrap();

        assert_eq!(store.load().unwrap(), snapshot);
    }
}
