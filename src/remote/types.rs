//! Request and response shapes for the Pocket v3 API.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, de};

use crate::model::Article;

/// Consumer key and access token sent with every request.
///
/// Opaque to the engine: never validated, cached, or refreshed here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub consumer_key: String,
    pub access_token: String,
}

impl Credentials {
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Ordering requested from the server. Offsets only step correctly over
/// newest-first windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Newest,
}

/// Which read states to retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Unread,
    Archive,
    #[default]
    All,
}

/// How much per-article data the server returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailType {
    #[default]
    Simple,
    Complete,
}

/// One page request: `count` items starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: usize,
    pub count: usize,
    pub sort: Sort,
}

impl Window {
    /// Newest-first window, the only order the sync engine uses.
    #[must_use]
    pub const fn newest(offset: usize, count: usize) -> Self {
        Self {
            offset,
            count,
            sort: Sort::Newest,
        }
    }
}

/// Retrieval filters that stay fixed for a whole pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub state: State,
    /// `Some(true)` for favorites only, `Some(false)` for non-favorites.
    pub favorite: Option<bool>,
    pub tag: Option<String>,
    pub detail: DetailType,
}

/// Body of `POST /v3/get`.
#[derive(Debug, Serialize)]
pub struct RetrieveRequest<'a> {
    #[serde(flatten)]
    pub credentials: &'a Credentials,
    pub state: State,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'a str>,
    pub count: usize,
    pub offset: usize,
    pub sort: Sort,
    #[serde(rename = "detailType")]
    pub detail_type: DetailType,
}

impl<'a> RetrieveRequest<'a> {
    #[must_use]
    pub fn new(credentials: &'a Credentials, window: Window, filter: &'a Filter) -> Self {
        Self {
            credentials,
            state: filter.state,
            favorite: filter.favorite.map(u8::from),
            tag: filter.tag.as_deref(),
            count: window.count,
            offset: window.offset,
            sort: window.sort,
            detail_type: filter.detail,
        }
    }
}

/// Body returned by `POST /v3/get`.
#[derive(Debug, Default, Deserialize)]
pub struct RetrieveResponse {
    #[serde(default)]
    pub status: i64,
    /// Items keyed by id. Absent, `null` or `[]` when the window is past the end.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub list: BTreeMap<String, Article>,
}

/// Pocket sends `"list": []` instead of `{}` when there is nothing left.
///
/// A bad article fails the whole list with the item key and the field error.
fn deserialize_list<'de, D>(deserializer: D) -> Result<BTreeMap<String, Article>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ListVisitor;

    impl<'de> Visitor<'de> for ListVisitor {
        type Value = BTreeMap<String, Article>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of articles keyed by id, an array, or null")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut list = BTreeMap::new();
            while let Some(key) = map.next_key::<String>()? {
                let article = map
                    .next_value::<Article>()
                    .map_err(|e| de::Error::custom(format!("item {key}: {e}")))?;
                list.insert(key, article);
            }
            Ok(list)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut list = BTreeMap::new();
            while let Some(article) = seq.next_element::<Article>()? {
                list.insert(article.item_id.clone(), article);
            }
            Ok(list)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }
    }

    deserializer.deserialize_any(ListVisitor)
}

/// One page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Articles keyed by `item_id`.
    pub articles: BTreeMap<String, Article>,
    /// Number of entries the server sent for this window.
    pub raw_count: usize,
}

impl From<RetrieveResponse> for Page {
    fn from(response: RetrieveResponse) -> Self {
        let raw_count = response.list.len();
        let articles = response
            .list
            .into_values()
            .map(|a| (a.item_id.clone(), a))
            .collect();
        Self {
            articles,
            raw_count,
        }
    }
}

/// Kind of state change sent to `/v3/send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Archive,
}

/// One entry of the `actions` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifyAction {
    pub action: ActionKind,
    pub item_id: String,
    /// Client-observed Unix time of the action.
    pub time: i64,
}

/// Body of `POST /v3/send`.
#[derive(Debug, Serialize)]
pub struct ModifyRequest<'a> {
    pub actions: &'a [ModifyAction],
    #[serde(flatten)]
    pub credentials: &'a Credentials,
}

/// Body returned by `POST /v3/send`.
#[derive(Debug, Default, Deserialize)]
pub struct ModifyResponse {
    /// One acknowledgement per action, in request order.
    #[serde(default)]
    pub action_results: Vec<bool>,
    #[serde(default)]
    pub status: i64,
}
