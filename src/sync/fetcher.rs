//! Page fetcher: one bounded retrieval call per page.

use tracing::trace;

use crate::error::{Error, Result};
use crate::remote::{ArticleSource, Filter, Page, Window};

/// Issues single page requests against a source with a fixed filter.
pub struct PageFetcher<'a, S> {
    source: &'a S,
    filter: &'a Filter,
}

impl<'a, S: ArticleSource> PageFetcher<'a, S> {
    #[must_use]
    pub const fn new(source: &'a S, filter: &'a Filter) -> Self {
        Self { source, filter }
    }

    /// Fetch `count` newest-first articles starting at `offset`.
    ///
    /// Exactly one request. Any failure comes back as [`Error::PageFetch`]
    /// wrapping the cause; there is no partial page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a zero `count` and
    /// [`Error::PageFetch`] when the request fails.
    pub async fn fetch(&self, offset: usize, count: usize) -> Result<Page> {
        if count == 0 {
            return Err(Error::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        trace!(offset, count, "fetching page");
        self.source
            .fetch_page(Window::newest(offset, count), self.filter)
            .await
            .map_err(|e| Error::PageFetch {
                offset,
                source: Box::new(e),
            })
    }
}
