//! Article model.
//!
//! One saved item from the reading list. Field names and encodings follow
//! the Pocket v3 `list` entries so an article decodes straight from a
//! retrieval response and round-trips through the snapshot file unchanged.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::wire;
use crate::error::{Error, Result};

/// Read state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleStatus {
    #[default]
    Unread,
    Archived,
    Deleted,
}

impl ArticleStatus {
    /// Wire code (`0`, `1`, `2`).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unread => 0,
            Self::Archived => 1,
            Self::Deleted => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unread),
            1 => Some(Self::Archived),
            2 => Some(Self::Deleted),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Archived => "archived",
            Self::Deleted => "deleted",
        }
    }
}

impl Serialize for ArticleStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for ArticleStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code: u8 = wire::deserialize_int(deserializer)?;
        Self::from_code(code).ok_or_else(|| de::Error::custom(format!("invalid status {code}")))
    }
}

/// Whether an article carries images or videos.
///
/// `Is` means the saved item itself is an image or a video page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    None,
    Has,
    Is,
}

impl Presence {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Has => 1,
            Self::Is => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Has),
            2 => Some(Self::Is),
            _ => None,
        }
    }
}

impl Serialize for Presence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for Presence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code: u8 = wire::deserialize_int(deserializer)?;
        Self::from_code(code).ok_or_else(|| de::Error::custom(format!("invalid presence {code}")))
    }
}

/// A single saved article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Primary key within a snapshot.
    pub item_id: String,
    #[serde(default)]
    pub resolved_id: String,
    #[serde(default)]
    pub given_url: String,
    #[serde(default)]
    pub given_title: String,
    #[serde(
        default,
        deserialize_with = "wire::deserialize_flag",
        serialize_with = "wire::serialize_flag"
    )]
    pub favorite: bool,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub resolved_url: String,
    #[serde(default)]
    pub resolved_title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(
        default,
        deserialize_with = "wire::deserialize_flag",
        serialize_with = "wire::serialize_flag"
    )]
    pub is_article: bool,
    #[serde(default)]
    pub has_video: Presence,
    #[serde(default)]
    pub has_image: Presence,
    #[serde(
        default,
        alias = "word_count",
        deserialize_with = "wire::deserialize_int",
        serialize_with = "wire::serialize_int"
    )]
    pub words_count: u64,
    /// Unix seconds when the item was saved; the only ordering key.
    #[serde(
        default,
        deserialize_with = "wire::deserialize_int",
        serialize_with = "wire::serialize_int"
    )]
    pub time_added: i64,
}

impl Article {
    /// Minimal article with only an id and a save time.
    #[must_use]
    pub fn new(item_id: impl Into<String>, time_added: i64) -> Self {
        let item_id = item_id.into();
        Self {
            resolved_id: item_id.clone(),
            item_id,
            given_url: String::new(),
            given_title: String::new(),
            favorite: false,
            status: ArticleStatus::Unread,
            resolved_url: String::new(),
            resolved_title: String::new(),
            excerpt: String::new(),
            is_article: false,
            has_video: Presence::None,
            has_image: Presence::None,
            words_count: 0,
            time_added,
        }
    }

    /// Resolved title, falling back to the title the item was saved with.
    #[must_use]
    pub fn title(&self) -> &str {
        if self.resolved_title.is_empty() {
            &self.given_title
        } else {
            &self.resolved_title
        }
    }

    /// Resolved URL, falling back to the URL the item was saved with.
    #[must_use]
    pub fn url(&self) -> &str {
        if self.resolved_url.is_empty() {
            &self.given_url
        } else {
            &self.resolved_url
        }
    }

    /// `time_added` as a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimestamp`] when the value is outside the
    /// range chrono can represent.
    pub fn added_at(&self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_added, 0).ok_or_else(|| Error::InvalidTimestamp {
            item_id: self.item_id.clone(),
            value: self.time_added,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POCKET_ITEM: &str = r#"{
        "item_id": "229279689",
        "resolved_id": "229279689",
        "given_url": "http://www.grantland.com/blog/the-triangle/post/_/id/38347/ryder-cup-preview",
        "given_title": "The Massive Ryder Cup Preview - The Triangle Blog - Grantland",
        "favorite": "0",
        "status": "0",
        "resolved_title": "The Massive Ryder Cup Preview",
        "resolved_url": "http://www.grantland.com/blog/the-triangle/post/_/id/38347/ryder-cup-preview",
        "excerpt": "The list of things I love about the Ryder Cup is so long",
        "is_article": "1",
        "has_video": "1",
        "has_image": "2",
        "word_count": "3197",
        "time_added": "1471869712",
        "tags": {"golf": {"item_id": "229279689", "tag": "golf"}}
    }"#;

    #[test]
    fn test_decode_pocket_item() {
        let article: Article = serde_json::from_str(POCKET_ITEM).unwrap();
        assert_eq!(article.item_id, "229279689");
        assert_eq!(article.status, ArticleStatus::Unread);
        assert!(!article.favorite);
        assert!(article.is_article);
        assert_eq!(article.has_video, Presence::Has);
        assert_eq!(article.has_image, Presence::Is);
        assert_eq!(article.words_count, 3197);
        assert_eq!(article.time_added, 1_471_869_712);
        assert_eq!(article.title(), "The Massive Ryder Cup Preview");
    }

    #[test]
    fn test_decode_sparse_item() {
        // Deleted items come back with little more than an id and a status.
        let article: Article =
            serde_json::from_str(r#"{"item_id":"42","status":"2"}"#).unwrap();
        assert_eq!(article.status, ArticleStatus::Deleted);
        assert_eq!(article.time_added, 0);
        assert_eq!(article.title(), "");
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let result = serde_json::from_str::<Article>(r#"{"item_id":"1","time_added":"soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_uses_wire_text() {
        let mut article = Article::new("7", 1_600_000_000);
        article.status = ArticleStatus::Archived;
        article.words_count = 12;
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["status"], "1");
        assert_eq!(value["time_added"], "1600000000");
        assert_eq!(value["words_count"], "12");
        assert!(value.get("word_count").is_none());
        assert_eq!(value["favorite"], "0");
    }

    #[test]
    fn test_accepts_api_word_count_key() {
        let article: Article =
            serde_json::from_str(r#"{"item_id":"1","word_count":"88"}"#).unwrap();
        assert_eq!(article.words_count, 88);
    }

    #[test]
    fn test_added_at() {
        let article = Article::new("1", 1_471_869_712);
        let added = article.added_at().unwrap();
        assert_eq!(added.to_rfc3339(), "2016-08-22T12:41:52+00:00");

        let broken = Article::new("2", i64::MAX);
        assert!(matches!(
            broken.added_at(),
            Err(Error::InvalidTimestamp { ref item_id, .. }) if item_id == "2"
        ));
    }

    #[test]
    fn test_title_and_url_fallback() {
        let mut article = Article::new("1", 0);
        article.given_title = "Given".to_string();
        article.given_url = "https://example.com/a".to_string();
        assert_eq!(article.title(), "Given");
        assert_eq!(article.url(), "https://example.com/a");

        article.resolved_title = "Resolved".to_string();
        article.resolved_url = "https://example.com/b".to_string();
        assert_eq!(article.title(), "Resolved");
        assert_eq!(article.url(), "https://example.com/b");
    }
}
