//! Verdict records - the tagged union of analysis outcomes.
//!
//! One variant per intent kind, each with a fixed field set; unknown or
//! missing fields in backend output become explicit optional slots rather
//! than silent absence. Parse failure degrades to [`Verdict::Error`].

use serde::{Deserialize, Serialize};

/// Verdict for a free-text claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimVerdict {
    /// The claim as analyzed
    pub claim: String,

    /// Whether the backend judged the claim factually correct
    #[serde(default)]
    pub is_correct: Option<bool>,

    /// Backend confidence, 0-100
    #[serde(default)]
    pub confidence_score: Option<u8>,

    /// Topic category (Science, History, Health, ...)
    #[serde(default)]
    pub category: Option<String>,

    /// Supporting sources in backend order
    #[serde(default)]
    pub sources: Vec<String>,

    /// Backend reasoning
    #[serde(default)]
    pub explanation: String,
}

/// Verdict for a URL input (page analyzed as a whole).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlVerdict {
    /// The analyzed URL
    pub url: String,

    #[serde(default)]
    pub is_correct: Option<bool>,

    /// Brief summary of the page content
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub explanation: String,
}

/// Verdict for a short keyword / promo query (research-style conclusion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoVerdict {
    /// The query as given
    pub query: String,

    /// Summary conclusion over discovered sources
    #[serde(default)]
    pub conclusion: String,

    #[serde(default)]
    pub confidence_score: Option<u8>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub explanation: String,
}

/// Verdict for an inline image input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageVerdict {
    /// The main claim extracted from the image
    #[serde(default)]
    pub claim: String,

    #[serde(default)]
    pub is_correct: Option<bool>,

    #[serde(default)]
    pub confidence_score: Option<u8>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub explanation: String,

    /// What the image shows
    #[serde(default)]
    pub image_description: String,

    /// Fixed marker distinguishing image-derived records
    #[serde(default = "image_source_type")]
    pub source_type: String,
}

fn image_source_type() -> String {
    "image".to_string()
}

/// Degraded record when no structured payload could be recovered, or an
/// upstream step failed before the backend was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorVerdict {
    /// Failure description
    pub error: String,

    /// The backend's output verbatim, when there was any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

/// The polymorphic verdict record, tagged by originating intent.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Verdict {
    Image(ImageVerdict),
    Url(UrlVerdict),
    Claim(ClaimVerdict),
    Promo(PromoVerdict),
    Error(ErrorVerdict),
}

impl Verdict {
    /// Build an error verdict with the backend's raw output attached.
    pub fn parse_error(error: impl Into<String>, raw_response: impl Into<String>) -> Self {
        Self::Error(ErrorVerdict {
            error: error.into(),
            raw_response: Some(raw_response.into()),
        })
    }

    /// Build an error verdict for a failure with no backend output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Error(ErrorVerdict {
            error: error.into(),
            raw_response: None,
        })
    }

    /// Whether this is the degraded error shape.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Aggregated research summary over a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSummary {
    /// The researched query
    pub query: String,

    /// Numbered per-result fact-check lines, in rank order
    pub summary: String,
}
