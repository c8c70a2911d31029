//! The fact-check orchestrator.
//!
//! Routes classified inputs through the right analysis path, dispatches
//! reasoning-backend calls, and coerces output into verdict records.
//! Every operation persists its record before returning it. Processing is
//! strictly sequential: one input runs to completion before the next.

pub mod prompts;

use tracing::{info, warn};

use crate::config::FactCheckConfig;
use crate::credibility;
use crate::error::{FactCheckError, Result};
use crate::intent::{self, Intent};
use crate::parser;
use crate::scrape::PageScraper;
use crate::search::SearchClient;
use crate::store::ResultStore;
use crate::traits::Reasoner;
use crate::types::{
    ClaimVerdict, CredibilityAnalysis, CredibilityAssessment, ImageVerdict, PageContent,
    PromoVerdict, Recommendation, ResearchSummary, RiskLevel, SearchEngine, SearchResponse,
    SearchResult, StoredRecord, UrlVerdict, Verdict,
};

/// Fact-check engine over a reasoning backend.
pub struct FactChecker<R: Reasoner> {
    reasoner: R,
    search: SearchClient,
    scraper: PageScraper,
    store: ResultStore,
    config: FactCheckConfig,
}

impl<R: Reasoner> FactChecker<R> {
    /// Create an engine with default configuration.
    pub fn new(reasoner: R) -> Self {
        Self::with_config(reasoner, FactCheckConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(reasoner: R, config: FactCheckConfig) -> Self {
        Self {
            reasoner,
            search: SearchClient::new(),
            scraper: PageScraper::new(),
            store: ResultStore::new(&config.store_path),
            config,
        }
    }

    /// Replace the search client (custom endpoints, shared HTTP client).
    pub fn with_search_client(mut self, search: SearchClient) -> Self {
        self.search = search;
        self
    }

    /// Replace the page scraper.
    pub fn with_scraper(mut self, scraper: PageScraper) -> Self {
        self.scraper = scraper;
        self
    }

    /// The engine's result store.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Classify an input, run the matching analysis path, persist and
    /// return the record.
    pub async fn check(&self, input: &str) -> Result<StoredRecord> {
        let input = input.trim();
        if input.is_empty() {
            return Err(FactCheckError::EmptyInput);
        }

        let intent = intent::classify(input);
        info!(?intent, "processing input");

        let record: StoredRecord = match intent {
            Intent::Image => self.check_image(input).await.into(),
            Intent::Url => self.check_url(input).await,
            Intent::Claim => self.check_claim(input).await.into(),
            Intent::Promo => self.check_promo(input).await.into(),
        };

        self.store.append(&record)?;
        Ok(record)
    }

    /// Scrape a page and assess its credibility, heuristically when
    /// possible and via the backend otherwise.
    pub async fn analyze_page(&self, url: &str) -> Result<StoredRecord> {
        let record: StoredRecord = match self.scraper.fetch_and_extract(url).await {
            Err(e) => Verdict::failure(format!("Failed to fetch page: {e}")).into(),
            Ok(page) => match credibility::assess(&page) {
                Some(assessment) => assessment.into(),
                None => self.backend_assessment(&page).await.into(),
            },
        };

        self.store.append(&record)?;
        Ok(record)
    }

    /// Search the web for a query and fact-check each result in rank
    /// order, accumulating a numbered summary. A failed per-result call
    /// degrades that line only.
    pub async fn research(&self, query: &str) -> Result<StoredRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FactCheckError::EmptyInput);
        }

        let response = self.search.search(query, self.config.num_search_results).await;

        let mut summary = String::new();
        for result in &response.results {
            let context = self.result_context(&response, result).await;
            let prompt = prompts::research_item_prompt(&result.title, &result.url, &context);
            let verdict = self.dispatch(&prompt).await;
            summary.push_str(&format!(
                "{}. {} ({}) → {}\n",
                result.rank,
                result.title,
                result.url,
                verdict.trim()
            ));
        }

        if summary.is_empty() {
            summary = "No search results found.".to_string();
        }

        let record: StoredRecord = ResearchSummary {
            query: query.to_string(),
            summary,
        }
        .into();

        self.store.append(&record)?;
        Ok(record)
    }

    // -------------------------------------------------------------------
    // Per-intent paths
    // -------------------------------------------------------------------

    async fn check_claim(&self, claim: &str) -> Verdict {
        let raw = self.dispatch(&prompts::claim_prompt(claim)).await;
        parser::parse_verdict::<ClaimVerdict, _>(&raw, Verdict::Claim)
    }

    async fn check_promo(&self, query: &str) -> Verdict {
        let raw = self.dispatch(&prompts::promo_prompt(query)).await;
        parser::parse_verdict::<PromoVerdict, _>(&raw, Verdict::Promo)
    }

    /// URL path: scrape first (fetch failure short-circuits without any
    /// backend call), then the credibility heuristics, then the backend.
    async fn check_url(&self, url: &str) -> StoredRecord {
        let page = match self.scraper.fetch_and_extract(url).await {
            Ok(page) => page,
            Err(e) => return Verdict::failure(format!("Failed to fetch page: {e}")).into(),
        };

        if let Some(assessment) = credibility::assess(&page) {
            return assessment.into();
        }

        let raw = self.dispatch(&prompts::url_prompt(url, &page.content)).await;
        parser::parse_verdict::<UrlVerdict, _>(&raw, Verdict::Url).into()
    }

    async fn check_image(&self, data_url: &str) -> Verdict {
        let Some((media_type, data)) = split_data_url(data_url) else {
            return Verdict::parse_error("Failed to process image: malformed data URL", data_url);
        };

        let raw = match self
            .reasoner
            .complete_with_image(prompts::image_prompt(), media_type, data)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "image reasoning call failed");
                format!("Failed to fetch or parse API response: {e}")
            }
        };

        parser::parse_verdict::<ImageVerdict, _>(&raw, Verdict::Image)
    }

    // -------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------

    /// One backend call. Transport failures become a parseable error
    /// string instead of propagating, so callers always get a uniform
    /// verdict-shaped result.
    async fn dispatch(&self, prompt: &str) -> String {
        match self.reasoner.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "reasoning call failed");
                format!("Failed to fetch or parse API response: {e}")
            }
        }
    }

    /// Backend credibility analysis with a tolerant parse and a neutral
    /// fallback assessment when no payload can be recovered.
    async fn backend_assessment(&self, page: &PageContent) -> CredibilityAssessment {
        let raw = self.dispatch(&prompts::credibility_prompt(page)).await;

        let analysis = match parser::extract_structured(&raw) {
            Ok(value) => serde_json::from_value::<CredibilityAnalysis>(value)
                .unwrap_or_else(|_| fallback_analysis(&raw)),
            Err(_) => fallback_analysis(&raw),
        };

        analysis.into_assessment(page)
    }

    /// Context for a per-result research prompt: a short page preview for
    /// live results, the search snippet otherwise.
    async fn result_context(&self, response: &SearchResponse, result: &SearchResult) -> String {
        if response.search_engine != SearchEngine::Synthetic {
            if let Ok(preview) = self
                .scraper
                .fetch_preview(&result.url, self.config.preview_chars)
                .await
            {
                if !preview.is_empty() {
                    return preview;
                }
            }
        }
        result.snippet.clone()
    }
}

/// Neutral mid-credibility analysis used when backend output carries no
/// recoverable payload.
fn fallback_analysis(raw: &str) -> CredibilityAnalysis {
    CredibilityAnalysis {
        overall_credibility_score: 50,
        is_misleading: raw.to_lowercase().contains("misleading"),
        risk_level: RiskLevel::Medium,
        issues_found: vec![crate::types::Issue {
            issue_type: "analysis_error".to_string(),
            severity: Default::default(),
            description: "Could not parse detailed analysis".to_string(),
            evidence: String::new(),
            location: String::new(),
        }],
        positive_indicators: vec![],
        sources_mentioned: 0,
        fact_check_summary: raw.chars().take(500).collect(),
        recommendation: Recommendation::Caution,
    }
}

/// Split a `data:image/...;base64,...` URL into media type and payload.
fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let (header, data) = data_url.split_once(',')?;
    let media_type = header.strip_prefix("data:")?.split(';').next()?;
    if media_type.is_empty() || data.is_empty() {
        return None;
    }
    Some((media_type, data))
}
