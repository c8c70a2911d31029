//! Search types - results, responses, and result classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which provider actually produced a response's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchEngine {
    /// DuckDuckGo HTML endpoint
    DuckDuckGo,
    /// Bing HTML endpoint
    Bing,
    /// Deterministic placeholder results (all real providers failed)
    Synthetic,
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuckDuckGo => write!(f, "DuckDuckGo"),
            Self::Bing => write!(f, "Bing"),
            Self::Synthetic => write!(f, "Synthetic"),
        }
    }
}

/// Coarse category of a search result, derived from its URL and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Reference,
    Video,
    Discussion,
    Academic,
    Official,
    News,
    General,
}

/// A single extracted search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title text
    pub title: String,

    /// Destination URL (redirect wrappers already unwrapped)
    pub url: String,

    /// Search-engine snippet, may be empty
    pub snippet: String,

    /// 1-based position within this response, dense
    pub rank: u32,

    /// URL host with a leading `www.` stripped; `"unknown"` if unparseable
    #[serde(default)]
    pub domain: String,

    /// Result category
    #[serde(rename = "type")]
    pub result_type: ResultType,
}

impl SearchResult {
    /// Create a new result with the given rank. Domain and type are filled
    /// in by response post-processing.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
        rank: u32,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            rank,
            domain: String::new(),
            result_type: ResultType::General,
        }
    }

    /// Set the result type.
    pub fn with_type(mut self, result_type: ResultType) -> Self {
        self.result_type = result_type;
        self
    }
}

/// A full search response from one provider attempt (or the synthetic
/// fallback).
///
/// Invariant: `error` present implies `results` is empty, and
/// `search_engine` always names the provider that produced `results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as given
    pub query: String,

    /// Extracted results in rank order
    pub results: Vec<SearchResult>,

    /// Convenience count, equal to `results.len()`
    pub total_results: usize,

    /// When this response was assembled
    pub timestamp: DateTime<Utc>,

    /// Provider that produced the results
    pub search_engine: SearchEngine,

    /// Provider-level failure detail; set only when `results` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Set on synthetic responses so callers can tell placeholder data
    /// from live results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SearchResponse {
    /// Build a successful response.
    pub fn success(query: impl Into<String>, engine: SearchEngine, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.into(),
            total_results: results.len(),
            results,
            timestamp: Utc::now(),
            search_engine: engine,
            error: None,
            note: None,
        }
    }

    /// Build a failed provider attempt (no results, error detail set).
    pub fn failure(query: impl Into<String>, engine: SearchEngine, error: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            total_results: 0,
            timestamp: Utc::now(),
            search_engine: engine,
            error: Some(error.into()),
            note: None,
        }
    }

    /// Attach a note (used by the synthetic fallback).
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether this response carries at least one result.
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_response_has_no_results() {
        let response = SearchResponse::failure("q", SearchEngine::Bing, "HTTP 503");
        assert!(response.error.is_some());
        assert!(response.results.is_empty());
        assert_eq!(response.total_results, 0);
    }

    #[test]
    fn result_type_serializes_snake_case() {
        let result = SearchResult::new("t", "https://a.com", "s", 1).with_type(ResultType::Reference);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "reference");
        assert_eq!(json["rank"], 1);
    }
}
