//! Data models for getpkt.
//!
//! - [`Article`] - one saved item, decoded from the Pocket wire format
//! - [`Snapshot`] - the ordered result of the last full sync

mod article;
mod snapshot;
pub mod wire;

pub use article::{Article, ArticleStatus, Presence};
pub use snapshot::Snapshot;
