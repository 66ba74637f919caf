//! Error types for getpkt.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=storage, 3=not_found, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for `--json` consumers
//!
//! Nothing in the sync engine retries or swallows an error. Every variant
//! carries enough context (URL, status, server error headers, item id, path)
//! to diagnose a failure from the message alone.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for getpkt operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string or on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Storage (exit 2)
    SnapshotCorrupt,

    // Not Found (exit 3)
    SnapshotNotFound,
    ArticleNotFound,

    // Validation (exit 4)
    InvalidArgument,
    InvalidTimestamp,

    // Remote rejected (exit 5)
    MutationRejected,

    // Remote (exit 6)
    TransportError,
    ProtocolError,

    // Config (exit 7)
    NotAuthenticated,
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::SnapshotCorrupt => "SNAPSHOT_CORRUPT",
            Self::SnapshotNotFound => "SNAPSHOT_NOT_FOUND",
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidTimestamp => "INVALID_TIMESTAMP",
            Self::MutationRejected => "MUTATION_REJECTED",
            Self::TransportError => "TRANSPORT_ERROR",
            Self::ProtocolError => "PROTOCOL_ERROR",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code (1-8).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::SnapshotCorrupt => 2,
            Self::SnapshotNotFound | Self::ArticleNotFound => 3,
            Self::InvalidArgument | Self::InvalidTimestamp => 4,
            Self::MutationRejected => 5,
            Self::TransportError | Self::ProtocolError => 6,
            Self::NotAuthenticated | Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether running the same command again may succeed.
    ///
    /// True for network-level failures only. A rejected mutation or a
    /// protocol error with a 4xx status will fail the same way again.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportError)
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in getpkt operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced an HTTP response.
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status.
    #[error(
        "URL: {url}, HTTP Status: {status}, X-Error-Code: {}, X-Error: {}",
        error_code.as_deref().unwrap_or("-"),
        error_message.as_deref().unwrap_or("-")
    )]
    Protocol {
        url: String,
        status: u16,
        error_code: Option<String>,
        error_message: Option<String>,
    },

    /// The server answered 200 but the body could not be decoded.
    #[error("Failed to decode json response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// One page of a sync pass failed; the whole pass is aborted.
    #[error("Page fetch failed at offset {offset}: {source}")]
    PageFetch {
        offset: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to do an update on item {item_id}")]
    RejectedMutation { item_id: String },

    #[error("{} is not readable", path.display())]
    SnapshotNotFound { path: PathBuf },

    #[error("Snapshot {} is corrupt: {message}", path.display())]
    SnapshotCorrupt { path: PathBuf, message: String },

    #[error("Article not found in snapshot: {item_id}")]
    ArticleNotFound { item_id: String },

    #[error("Invalid time_added {value:?} on item {item_id}")]
    InvalidTimestamp { item_id: String, value: i64 },

    #[error("Authenticate first")]
    NotAuthenticated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    ///
    /// A `PageFetch` wrapper reports the code of the failure it wraps.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Transport { .. } => ErrorCode::TransportError,
            Self::Protocol { .. } | Self::MalformedResponse { .. } => ErrorCode::ProtocolError,
            Self::PageFetch { source, .. } => source.error_code(),
            Self::RejectedMutation { .. } => ErrorCode::MutationRejected,
            Self::SnapshotNotFound { .. } => ErrorCode::SnapshotNotFound,
            Self::SnapshotCorrupt { .. } => ErrorCode::SnapshotCorrupt,
            Self::ArticleNotFound { .. } => ErrorCode::ArticleNotFound,
            Self::InvalidTimestamp { .. } => ErrorCode::InvalidTimestamp,
            Self::NotAuthenticated => ErrorCode::NotAuthenticated,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotAuthenticated => Some(
                "Store your credentials first:\n  \
                 getpkt auth --consumer-key <KEY> --access-token <TOKEN>"
                    .to_string(),
            ),

            Self::SnapshotNotFound { .. } => {
                Some("Run `getpkt sync` to download your reading list.".to_string())
            }

            Self::SnapshotCorrupt { .. } => Some(
                "Run `getpkt sync` to replace the snapshot with a fresh copy.".to_string(),
            ),

            Self::ArticleNotFound { .. } => Some(
                "The local snapshot may be stale. Run `getpkt sync` and try again.".to_string(),
            ),

            Self::Protocol { status: 401, .. } => Some(
                "The access token was rejected. Run `getpkt auth` with a fresh token.".to_string(),
            ),

            Self::PageFetch { source, .. } => source.hint(),

            Self::Transport { .. }
            | Self::Protocol { .. }
            | Self::MalformedResponse { .. }
            | Self::RejectedMutation { .. }
            | Self::InvalidTimestamp { .. }
            | Self::Io(_)
            | Self::Json(_)
            | Self::InvalidArgument(_)
            | Self::Config(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
