//! Domain types for the fact-check engine.

pub mod credibility;
pub mod page;
pub mod search;
pub mod verdict;

use serde::Serialize;

pub use credibility::{
    CredibilityAnalysis, CredibilityAssessment, Issue, Recommendation, RiskLevel, Severity,
};
pub use page::PageContent;
pub use search::{ResultType, SearchEngine, SearchResponse, SearchResult};
pub use verdict::{
    ClaimVerdict, ErrorVerdict, ImageVerdict, PromoVerdict, ResearchSummary, UrlVerdict, Verdict,
};

/// Any record the pipeline can produce and persist.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StoredRecord {
    Verdict(Verdict),
    Assessment(CredibilityAssessment),
    Research(ResearchSummary),
}

impl From<Verdict> for StoredRecord {
    fn from(verdict: Verdict) -> Self {
        Self::Verdict(verdict)
    }
}

impl From<CredibilityAssessment> for StoredRecord {
    fn from(assessment: CredibilityAssessment) -> Self {
        Self::Assessment(assessment)
    }
}

impl From<ResearchSummary> for StoredRecord {
    fn from(summary: ResearchSummary) -> Self {
        Self::Research(summary)
    }
}
