//! Credibility assessment types for page analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::page::PageContent;

/// Overall risk classification of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

/// Severity of an individual issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

/// What the caller should do with the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Proceed,
    #[default]
    Caution,
    Avoid,
}

/// One specific problem found in page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Open-ended issue kind: misinformation, bias, unsubstantiated_claim,
    /// misleading_headline, false_fact, ...
    #[serde(rename = "type")]
    pub issue_type: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default)]
    pub description: String,

    /// Why this is problematic
    #[serde(default)]
    pub evidence: String,

    /// Where in the content it appears
    #[serde(default)]
    pub location: String,
}

/// Full credibility assessment of one analyzed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityAssessment {
    /// 0-100, higher is more credible
    pub overall_credibility_score: u8,

    pub is_misleading: bool,

    pub risk_level: RiskLevel,

    #[serde(default)]
    pub issues_found: Vec<Issue>,

    #[serde(default)]
    pub positive_indicators: Vec<String>,

    /// Number of cited sources the analysis counted
    #[serde(default)]
    pub sources_mentioned: u32,

    #[serde(default)]
    pub fact_check_summary: String,

    pub recommendation: Recommendation,

    /// URL of the analyzed page
    pub analyzed_url: String,

    /// Title of the analyzed page
    pub analyzed_title: String,

    /// Domain of the analyzed page
    pub analyzed_domain: String,

    /// When the assessment was produced
    pub analysis_timestamp: DateTime<Utc>,

    /// Word count of the analyzed content
    pub word_count: usize,
}

/// The analysis fields as the backend reports them, before page metadata
/// is attached. Every field tolerates absence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredibilityAnalysis {
    #[serde(default = "default_score")]
    pub overall_credibility_score: u8,

    #[serde(default)]
    pub is_misleading: bool,

    #[serde(default)]
    pub risk_level: RiskLevel,

    #[serde(default)]
    pub issues_found: Vec<Issue>,

    #[serde(default)]
    pub positive_indicators: Vec<String>,

    #[serde(default)]
    pub sources_mentioned: u32,

    #[serde(default)]
    pub fact_check_summary: String,

    #[serde(default)]
    pub recommendation: Recommendation,
}

fn default_score() -> u8 {
    50
}

impl CredibilityAnalysis {
    /// Attach page metadata, producing the full stored assessment.
    pub fn into_assessment(self, page: &PageContent) -> CredibilityAssessment {
        CredibilityAssessment {
            overall_credibility_score: self.overall_credibility_score,
            is_misleading: self.is_misleading,
            risk_level: self.risk_level,
            issues_found: self.issues_found,
            positive_indicators: self.positive_indicators,
            sources_mentioned: self.sources_mentioned,
            fact_check_summary: self.fact_check_summary,
            recommendation: self.recommendation,
            analyzed_url: page.url.clone(),
            analyzed_title: page.title.clone(),
            analyzed_domain: page.domain.clone(),
            analysis_timestamp: Utc::now(),
            word_count: page.word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_value(RiskLevel::High).unwrap(), "high");
        assert_eq!(serde_json::to_value(Recommendation::Proceed).unwrap(), "proceed");
        assert_eq!(serde_json::to_value(Severity::Low).unwrap(), "low");
    }

    #[test]
    fn analysis_tolerates_empty_object() {
        let analysis: CredibilityAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(analysis.overall_credibility_score, 50);
        assert_eq!(analysis.risk_level, RiskLevel::Unknown);
        assert_eq!(analysis.recommendation, Recommendation::Caution);
    }

    #[test]
    fn issue_type_round_trips_as_type_key() {
        let issue: Issue = serde_json::from_str(
            r#"{"type": "misleading_headline", "severity": "high"}"#,
        )
        .unwrap();
        assert_eq!(issue.issue_type, "misleading_headline");
        assert_eq!(issue.severity, Severity::High);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "misleading_headline");
    }
}
