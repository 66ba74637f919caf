//! Local persistence for getpkt.
//!
//! # Submodules
//!
//! - [`file`] - Atomic write helpers shared by the snapshot and config files
//! - [`snapshot`] - The snapshot store written by `sync`

pub mod file;
pub mod snapshot;

pub use file::{atomic_write, atomic_write_private};
pub use snapshot::SnapshotStore;
