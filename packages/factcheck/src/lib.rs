//! Fact-Check Orchestration Engine
//!
//! A single-user fact-checking pipeline: classify an arbitrary input
//! (claim, URL, short keyword, or inline image), route it to the right
//! analysis path, call a reasoning backend, and coerce its free-text
//! answer into a strict machine-readable record.
//!
//! # Design Philosophy
//!
//! **Degrade, never die**
//!
//! - Every pipeline invocation ends in a well-formed record or an
//!   error-shaped record; nothing is fatal mid-pipeline
//! - Search falls through DuckDuckGo → Bing → deterministic synthetic
//!   placeholders that are clearly tagged
//! - Backend failures become parseable error strings, not exceptions
//! - Deterministic credibility heuristics short-circuit the backend for
//!   well-known domains and phrase patterns
//!
//! # Usage
//!
//! ```rust,ignore
//! use factcheck::{FactChecker, FactCheckConfig};
//! use factcheck::ai::GeminiReasoner;
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::new(api_key);
//! let checker = FactChecker::new(GeminiReasoner::new(client));
//!
//! // Intent-routed fact check
//! let record = checker.check("Drinking bleach cures COVID-19 according to studies").await?;
//!
//! // Page credibility analysis
//! let assessment = checker.analyze_page("https://example.com/article").await?;
//!
//! // Search-backed research summary
//! let summary = checker.research("cold fusion").await?;
//! ```
//!
//! # Modules
//!
//! - [`intent`] - Input classification (image / url / claim / promo)
//! - [`parser`] - Tolerant JSON recovery from noisy model output
//! - [`search`] - Multi-engine search with synthetic fallback
//! - [`scrape`] - Page content extraction
//! - [`credibility`] - Deterministic credibility heuristics
//! - [`pipeline`] - The orchestrator tying it all together
//! - [`store`] - Append-only JSON result store
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod credibility;
pub mod error;
pub mod intent;
pub mod parser;
pub mod pipeline;
pub mod scrape;
pub mod search;
pub mod store;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use config::FactCheckConfig;
pub use error::{FactCheckError, FetchError, ReasonerError, Result, StoreError};
pub use intent::{classify, Intent};
pub use parser::{extract_structured, ParseError};
pub use pipeline::FactChecker;
pub use scrape::PageScraper;
pub use search::SearchClient;
pub use store::ResultStore;
pub use traits::Reasoner;
pub use types::{
    ClaimVerdict, CredibilityAssessment, ErrorVerdict, ImageVerdict, Issue, PageContent,
    PromoVerdict, Recommendation, ResearchSummary, ResultType, RiskLevel, SearchEngine,
    SearchResponse, SearchResult, Severity, StoredRecord, UrlVerdict, Verdict,
};
