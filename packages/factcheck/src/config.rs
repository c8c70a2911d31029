//! Engine configuration.
//!
//! Constructed once at process entry and passed into the engine; core
//! logic never reads ambient environment state.

use std::path::PathBuf;

/// Configuration for the fact-check engine.
#[derive(Debug, Clone)]
pub struct FactCheckConfig {
    /// Path of the append-only result store.
    pub store_path: PathBuf,

    /// How many search results to request per query.
    pub num_search_results: usize,

    /// Character cap for per-result page previews in research prompts.
    pub preview_chars: usize,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("results.json"),
            num_search_results: 8,
            preview_chars: 1000,
        }
    }
}

impl FactCheckConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result store path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Set the number of search results per query.
    pub fn with_num_search_results(mut self, n: usize) -> Self {
        self.num_search_results = n;
        self
    }

    /// Set the preview cap for research prompts.
    pub fn with_preview_chars(mut self, n: usize) -> Self {
        self.preview_chars = n;
        self
    }
}
