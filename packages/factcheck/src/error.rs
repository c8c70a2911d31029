//! Typed errors for the fact-check engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during fact-check operations.
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// Page or search fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Reasoning backend unavailable or failed
    #[error("reasoner error: {0}")]
    Reasoner(#[from] ReasonerError),

    /// Result store operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Empty input rejected before classification
    #[error("empty input")]
    EmptyInput,
}

/// Errors that can occur while fetching a URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is missing a scheme or host
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP request failed (transport error or non-2xx status)
    #[error("{0}")]
    Http(String),

    /// Request exceeded its deadline
    #[error("timeout fetching: {url}")]
    Timeout { url: String },
}

/// Errors from the reasoning backend, collapsed into one opaque
/// transport class plus configuration problems.
#[derive(Debug, Clone, Error)]
pub enum ReasonerError {
    /// Any transport, protocol, or response-envelope failure
    #[error("{0}")]
    Transport(String),

    /// Backend misconfiguration (missing key, bad endpoint)
    #[error("config error: {0}")]
    Config(String),
}

/// Errors from the result store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read/write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for fact-check operations.
pub type Result<T> = std::result::Result<T, FactCheckError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
