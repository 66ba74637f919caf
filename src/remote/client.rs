//! HTTP client for the Pocket v3 API.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::types::{
    Credentials, Filter, ModifyAction, ModifyRequest, ModifyResponse, Page, RetrieveRequest,
    RetrieveResponse, Window,
};
use super::ArticleSource;
use crate::error::{Error, Result};

/// Production API root.
pub const DEFAULT_API_URL: &str = "https://getpocket.com/v3";

/// Pocket API client bound to one set of credentials.
pub struct PocketClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl PocketClient {
    /// Create a client against the production API.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(DEFAULT_API_URL, credentials)
    }

    /// Create a client against a custom API root (no trailing endpoint).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url)
    }

    /// POST a JSON body and decode a JSON reply.
    ///
    /// Anything but `200 OK` is a protocol error carrying the server's
    /// `X-Error-Code` and `X-Error` headers verbatim.
    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        debug!(url, "POST");

        let response = self
            .client
            .post(url)
            .header("X-Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let header = |name: &str| {
                response
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(String::from)
            };
            return Err(Error::Protocol {
                url: url.to_string(),
                status: status.as_u16(),
                error_code: header("X-Error-Code"),
                error_message: header("X-Error"),
            });
        }

        let text = response.text().await.map_err(|e| Error::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        trace!(url, bytes = text.len(), "response body received");

        serde_json::from_str(&text).map_err(|e| Error::MalformedResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl ArticleSource for PocketClient {
    async fn fetch_page(&self, window: Window, filter: &Filter) -> Result<Page> {
        let url = self.endpoint("get");
        let request = RetrieveRequest::new(&self.credentials, window, filter);
        let response: RetrieveResponse = self.post_json(&url, &request).await?;

        debug!(
            offset = window.offset,
            count = window.count,
            returned = response.list.len(),
            status = response.status,
            "page retrieved"
        );
        Ok(Page::from(response))
    }

    async fn send_actions(&self, actions: &[ModifyAction]) -> Result<ModifyResponse> {
        let url = self.endpoint("send");
        let request = ModifyRequest {
            actions,
            credentials: &self.credentials,
        };
        self.post_json(&url, &request).await
    }
}
