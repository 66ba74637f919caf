//! Local snapshot store.
//!
//! The snapshot is a single indented JSON array of articles, newest first.
//! `save` replaces it wholesale; nothing is merged with the previous file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::file::atomic_write;
use crate::error::{Error, Result};
use crate::model::Snapshot;

/// Snapshot file at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a regular file exists at the snapshot path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replace the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut content = serde_json::to_string_pretty(snapshot)?;
        content.push('\n');
        atomic_write(&self.path, &content)?;

        info!(articles = snapshot.len(), path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// Read the stored snapshot.
    ///
    /// # Errors
    ///
    /// - [`Error::SnapshotNotFound`] if the path is missing, is not a
    ///   regular file, or cannot be read
    /// - [`Error::SnapshotCorrupt`] if the content is not a valid snapshot
    pub fn load(&self) -> Result<Snapshot> {
        let not_found = || Error::SnapshotNotFound {
            path: self.path.clone(),
        };

        if !self.exists() {
            return Err(not_found());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => Error::SnapshotCorrupt {
                path: self.path.clone(),
                message: e.to_string(),
            },
            _ => not_found(),
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| Error::SnapshotCorrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        debug!(articles = snapshot.len(), path = %self.path.display(), "snapshot loaded");
        Ok(snapshot)
    }
}
