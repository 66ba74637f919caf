//! In-memory article source for engine tests.

use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::model::Article;
use crate::remote::{ArticleSource, Filter, ModifyAction, ModifyResponse, Page, Window};

/// `n` articles with distinct save times, newest first like the server.
pub fn dataset(n: usize) -> Vec<Article> {
    (0..n)
        .rev()
        .map(|i| {
            let mut article = Article::new(format!("item-{i}"), 1_600_000_000 + i as i64 * 60);
            article.given_title = format!("Article {i}");
            article.given_url = format!("https://example.com/{i}");
            article
        })
        .collect()
}

/// Scripted reply for one request.
pub enum Reply {
    Items(Vec<Article>),
    Fail,
}

enum Mode {
    /// Serve slices of a fixed dataset by offset.
    Dataset(Vec<Article>),
    /// Serve replies in request order regardless of the window.
    Scripted(Vec<Reply>),
}

/// Fake source that records every request it receives.
pub struct FakeSource {
    mode: Mode,
    fail_on_request: Option<usize>,
    windows: Mutex<Vec<Window>>,
    actions: Mutex<Vec<ModifyAction>>,
    action_results: Vec<bool>,
}

impl FakeSource {
    pub fn from_dataset(articles: Vec<Article>) -> Self {
        Self::with_mode(Mode::Dataset(articles))
    }

    pub fn scripted(replies: Vec<Reply>) -> Self {
        Self::with_mode(Mode::Scripted(replies))
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            fail_on_request: None,
            windows: Mutex::new(Vec::new()),
            actions: Mutex::new(Vec::new()),
            action_results: vec![true],
        }
    }

    /// Fail the `n`th request (zero-based) with a transport error.
    pub fn failing_on(mut self, n: usize) -> Self {
        self.fail_on_request = Some(n);
        self
    }

    /// Acknowledgements returned by `send_actions`.
    pub fn acknowledging(mut self, results: Vec<bool>) -> Self {
        self.action_results = results;
        self
    }

    pub fn windows(&self) -> Vec<Window> {
        self.windows.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<ModifyAction> {
        self.actions.lock().unwrap().clone()
    }

    fn transport_error() -> Error {
        Error::Transport {
            url: "fake://get".to_string(),
            message: "connection reset".to_string(),
        }
    }
}

fn page_of(items: Vec<Article>) -> Page {
    let raw_count = items.len();
    Page {
        articles: items.into_iter().map(|a| (a.item_id.clone(), a)).collect(),
        raw_count,
    }
}

impl ArticleSource for FakeSource {
    async fn fetch_page(&self, window: Window, _filter: &Filter) -> Result<Page> {
        let request_index = {
            let mut windows = self.windows.lock().unwrap();
            windows.push(window);
            windows.len() - 1
        };

        if self.fail_on_request == Some(request_index) {
            return Err(Self::transport_error());
        }

        match &self.mode {
            Mode::Dataset(articles) => {
                let start = window.offset.min(articles.len());
                let end = (window.offset + window.count).min(articles.len());
                Ok(page_of(articles[start..end].to_vec()))
            }
            Mode::Scripted(replies) => match replies.get(request_index) {
                Some(Reply::Items(items)) => Ok(page_of(items.clone())),
                Some(Reply::Fail) => Err(Self::transport_error()),
                None => Ok(Page::default()),
            },
        }
    }

    async fn send_actions(&self, actions: &[ModifyAction]) -> Result<ModifyResponse> {
        self.actions.lock().unwrap().extend_from_slice(actions);
        Ok(ModifyResponse {
            action_results: self.action_results.clone(),
            status: 1,
        })
    }
}
