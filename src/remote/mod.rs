//! Remote article source.
//!
//! The Pocket v3 API exposes a paginated read endpoint (`/get`) and a batch
//! write endpoint (`/send`). Both take authenticated JSON over POST.
//!
//! [`ArticleSource`] is the seam the sync engine talks to: [`PocketClient`]
//! implements it over HTTP, tests implement it in memory.

mod client;
mod types;

pub use client::{DEFAULT_API_URL, PocketClient};
pub use types::{
    ActionKind, Credentials, DetailType, Filter, ModifyAction, ModifyRequest, ModifyResponse,
    Page, RetrieveRequest, RetrieveResponse, Sort, State, Window,
};

use crate::error::Result;

/// A source of saved articles.
///
/// Each call is exactly one request. Implementations never retry.
pub trait ArticleSource: Send + Sync {
    /// Retrieve one window of articles.
    fn fetch_page(
        &self,
        window: Window,
        filter: &Filter,
    ) -> impl std::future::Future<Output = Result<Page>> + Send;

    /// Send a batch of actions and return the server's acknowledgement.
    fn send_actions(
        &self,
        actions: &[ModifyAction],
    ) -> impl std::future::Future<Output = Result<ModifyResponse>> + Send;
}
