//! Resilient multi-engine web search.
//!
//! Provider order is fixed: DuckDuckGo → Bing → Synthetic. A provider
//! succeeds iff it yields at least one extracted result; transport errors,
//! non-2xx responses, and zero-result pages all fall through to the next
//! provider. The synthetic tail never fails, so callers always get a
//! response with results for a nonempty query.
//!
//! Post-processing is uniform across providers: every result gets a
//! `domain` derived from its URL, and real-provider results get a
//! `result_type` classified from URL and title substrings.

pub mod bing;
pub mod duckduckgo;
pub mod synthetic;

use tracing::{debug, warn};
use url::Url;

use crate::types::{ResultType, SearchEngine, SearchResponse};

/// Browser-identifying User-Agent sent on all outbound fetches.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Timeout applied to each provider fetch.
pub(crate) const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Web search client with the fixed fallback chain.
pub struct SearchClient {
    client: reqwest::Client,
    duckduckgo_endpoint: String,
    bing_endpoint: String,
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchClient {
    /// Create a search client with browser-identifying headers.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            duckduckgo_endpoint: duckduckgo::DEFAULT_ENDPOINT.to_string(),
            bing_endpoint: bing::DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Use an existing HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Override the provider endpoints (for proxies and tests).
    pub fn with_endpoints(
        mut self,
        duckduckgo: impl Into<String>,
        bing: impl Into<String>,
    ) -> Self {
        self.duckduckgo_endpoint = duckduckgo.into();
        self.bing_endpoint = bing.into();
        self
    }

    /// Search the web, degrading through the provider chain.
    ///
    /// Never returns an empty-results response: when both real providers
    /// fail, the synthetic fallback fabricates placeholder results tagged
    /// with [`SearchEngine::Synthetic`].
    pub async fn search(&self, query: &str, num_results: usize) -> SearchResponse {
        let mut response =
            duckduckgo::search(&self.client, &self.duckduckgo_endpoint, query, num_results).await;

        if !response.has_results() {
            warn!(
                query = %query,
                error = response.error.as_deref().unwrap_or("no results"),
                "DuckDuckGo failed, trying Bing"
            );
            response = bing::search(&self.client, &self.bing_endpoint, query, num_results).await;
        }

        if !response.has_results() {
            warn!(
                query = %query,
                error = response.error.as_deref().unwrap_or("no results"),
                "all search providers failed, using synthetic results"
            );
            response = synthetic::results(query);
        }

        postprocess(&mut response);
        debug!(
            query = %query,
            engine = %response.search_engine,
            count = response.total_results,
            "search complete"
        );
        response
    }
}

/// Derive domains for every result and classify real-provider results.
/// Synthetic results keep their pre-assigned types.
fn postprocess(response: &mut SearchResponse) {
    let classify = response.search_engine != SearchEngine::Synthetic;
    for result in &mut response.results {
        result.domain = domain_of(&result.url);
        if classify {
            result.result_type = classify_result(&result.url, &result.title);
        }
    }
}

/// URL host with a leading `www.` stripped; `"unknown"` when the URL does
/// not parse to a host.
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Classify a result by fixed precedence over URL and title substrings.
/// Earlier rules win when several match.
pub fn classify_result(url: &str, title: &str) -> ResultType {
    let url = url.to_lowercase();
    let title = title.to_lowercase();

    const REFERENCE: &[&str] = &["wikipedia.org", "britannica.com"];
    const VIDEO: &[&str] = &["youtube.com", "youtu.be"];
    const DISCUSSION: &[&str] = &["reddit.com", "stackoverflow.com"];
    const ACADEMIC: &[&str] = &[".edu", "scholar.google"];
    const OFFICIAL: &[&str] = &[".gov", ".org"];
    const NEWS_WORDS: &[&str] = &["news", "breaking", "report"];

    if REFERENCE.iter().any(|d| url.contains(d)) {
        ResultType::Reference
    } else if VIDEO.iter().any(|d| url.contains(d)) {
        ResultType::Video
    } else if DISCUSSION.iter().any(|d| url.contains(d)) {
        ResultType::Discussion
    } else if ACADEMIC.iter().any(|d| url.contains(d)) {
        ResultType::Academic
    } else if OFFICIAL.iter().any(|d| url.contains(d)) {
        ResultType::Official
    } else if NEWS_WORDS.iter().any(|w| title.contains(w)) {
        ResultType::News
    } else {
        ResultType::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_strips_www_prefix() {
        assert_eq!(domain_of("https://www.bbc.com/news/article"), "bbc.com");
        assert_eq!(domain_of("https://en.wikipedia.org/wiki/Rust"), "en.wikipedia.org");
    }

    #[test]
    fn unparseable_url_is_unknown_domain() {
        assert_eq!(domain_of("not a url"), "unknown");
        assert_eq!(domain_of("/relative/path"), "unknown");
    }

    #[test]
    fn reference_beats_official_for_wikipedia() {
        // wikipedia.org also ends in .org; the reference rule is earlier.
        assert_eq!(
            classify_result("https://en.wikipedia.org/wiki/X", "X"),
            ResultType::Reference
        );
    }

    #[tokio::test]
    async fn chain_degrades_to_synthetic_when_providers_unreachable() {
        let client = SearchClient::new()
            .with_endpoints("http://127.0.0.1:1/ddg", "http://127.0.0.1:1/bing");

        let response = client.search("cold fusion", 5).await;

        assert_eq!(response.search_engine, SearchEngine::Synthetic);
        assert_eq!(response.results.len(), 3);
        assert!(response.note.is_some());
        assert!(response.error.is_none());
        // Post-processing still derives domains; pre-assigned types survive
        // (the guide result would classify as General otherwise).
        assert_eq!(response.results[0].domain, "example.com");
        assert_eq!(response.results[0].result_type, ResultType::Reference);
        assert_eq!(response.results[1].domain, "en.wikipedia.org");
        let ranks: Vec<u32> = response.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn classification_precedence() {
        assert_eq!(
            classify_result("https://youtu.be/abc", "watch this"),
            ResultType::Video
        );
        assert_eq!(
            classify_result("https://stackoverflow.com/q/1", "how do I"),
            ResultType::Discussion
        );
        assert_eq!(
            classify_result("https://mit.edu/research", "study"),
            ResultType::Academic
        );
        assert_eq!(
            classify_result("https://cdc.gov/page", "guidance"),
            ResultType::Official
        );
        assert_eq!(
            classify_result("https://example.com/a", "Breaking update on the storm"),
            ResultType::News
        );
        assert_eq!(
            classify_result("https://example.com/a", "a plain page"),
            ResultType::General
        );
    }
}
