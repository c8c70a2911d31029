//! Extracted page content and metadata.

use serde::{Deserialize, Serialize};

/// Plain-text payload and metadata extracted from one fetched page.
///
/// Created per scrape call and consumed immediately by the credibility
/// engine or the URL analysis prompt; not persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// The URL as requested
    pub url: String,

    /// `<title>` text, empty when absent
    pub title: String,

    /// Main content, whitespace-collapsed and capped
    pub content: String,

    /// `meta[name="description"]` content, empty when absent
    pub meta_description: String,

    /// Best-effort publication date string, empty when absent
    pub publication_date: String,

    /// URL host component
    pub domain: String,

    /// Whitespace-token count of `content` (after capping)
    pub word_count: usize,
}

impl PageContent {
    /// Whether any usable content survived extraction.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
