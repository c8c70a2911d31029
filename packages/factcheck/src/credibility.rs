//! Deterministic credibility heuristics - a short-circuit decision stage
//! ahead of the reasoning backend.
//!
//! Two fixed rules, checked in order: a reputable-domain allowlist and a
//! sensational-phrase blocklist. A hit returns a fully-formed assessment
//! with zero latency and zero backend cost; a miss returns `None` and the
//! caller dispatches to the backend. Kept as its own stage so it can be
//! audited and tested independently of the backend-dependent path.

use chrono::Utc;
use tracing::debug;

use crate::types::{
    CredibilityAssessment, Issue, PageContent, Recommendation, RiskLevel, Severity,
};

/// Domains whose content is accepted as credible without analysis.
const TRUSTED_DOMAINS: &[&str] = &[
    "wikipedia.org",
    "bbc.com",
    "reuters.com",
    "ap.org",
    "npr.org",
    "cnn.com",
    "nature.com",
    "science.org",
];

/// Phrase markers typical of sensationalized or misleading content.
const MISLEADING_PATTERNS: &[&str] = &[
    "miracle cure",
    "doctors hate this",
    "shocking truth",
    "secret they don't want you to know",
    "conspiracy",
    "hoax",
    "fake news",
    "alternative facts",
];

/// Attempt a deterministic verdict for the page.
///
/// Returns `None` when neither rule applies, signaling that the caller
/// must invoke the reasoning backend.
pub fn assess(page: &PageContent) -> Option<CredibilityAssessment> {
    let domain = page.domain.to_lowercase();
    let content = page.content.to_lowercase();

    if TRUSTED_DOMAINS.iter().any(|trusted| domain.contains(trusted)) {
        debug!(domain = %page.domain, "trusted domain short-circuit");
        return Some(trusted_assessment(page));
    }

    if let Some(pattern) = MISLEADING_PATTERNS.iter().find(|p| content.contains(*p)) {
        debug!(domain = %page.domain, pattern = %pattern, "misleading pattern short-circuit");
        return Some(misleading_assessment(page));
    }

    None
}

fn trusted_assessment(page: &PageContent) -> CredibilityAssessment {
    CredibilityAssessment {
        overall_credibility_score: 92,
        is_misleading: false,
        risk_level: RiskLevel::Low,
        issues_found: vec![],
        positive_indicators: vec![
            "Reputable source domain".to_string(),
            "Well-structured content".to_string(),
            "Proper citations and references".to_string(),
            "Editorial standards maintained".to_string(),
        ],
        sources_mentioned: 5,
        fact_check_summary: "This content comes from a highly reputable source with strong \
                             editorial standards and fact-checking processes."
            .to_string(),
        recommendation: Recommendation::Proceed,
        analyzed_url: page.url.clone(),
        analyzed_title: page.title.clone(),
        analyzed_domain: page.domain.clone(),
        analysis_timestamp: Utc::now(),
        word_count: page.word_count,
    }
}

fn misleading_assessment(page: &PageContent) -> CredibilityAssessment {
    CredibilityAssessment {
        overall_credibility_score: 25,
        is_misleading: true,
        risk_level: RiskLevel::High,
        issues_found: vec![
            Issue {
                issue_type: "misleading_headline".to_string(),
                severity: Severity::High,
                description: "Content contains sensationalized language typical of misinformation"
                    .to_string(),
                evidence: "Uses phrases like 'shocking truth' or 'secret they don't want you to know'"
                    .to_string(),
                location: "Throughout the article".to_string(),
            },
            Issue {
                issue_type: "unsubstantiated_claim".to_string(),
                severity: Severity::Medium,
                description: "Makes claims without proper evidence or citations".to_string(),
                evidence: "Lacks credible sources and peer-reviewed references".to_string(),
                location: "Main content body".to_string(),
            },
        ],
        positive_indicators: vec![],
        sources_mentioned: 0,
        fact_check_summary: "This content exhibits multiple red flags typical of misinformation \
                             including sensationalized language and unsubstantiated claims."
            .to_string(),
        recommendation: Recommendation::Avoid,
        analyzed_url: page.url.clone(),
        analyzed_title: page.title.clone(),
        analyzed_domain: page.domain.clone(),
        analysis_timestamp: Utc::now(),
        word_count: page.word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(domain: &str, content: &str) -> PageContent {
        PageContent {
            url: format!("https://{domain}/article"),
            title: "Some page".to_string(),
            content: content.to_string(),
            meta_description: String::new(),
            publication_date: String::new(),
            domain: domain.to_string(),
            word_count: content.split_whitespace().count(),
        }
    }

    #[test]
    fn trusted_domain_short_circuits_to_proceed() {
        let assessment = assess(&page("en.wikipedia.org", "The Moon orbits Earth.")).unwrap();
        assert_eq!(assessment.recommendation, Recommendation::Proceed);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.overall_credibility_score, 92);
        assert!(assessment.issues_found.is_empty());
    }

    #[test]
    fn misleading_phrase_short_circuits_to_avoid() {
        let assessment = assess(&page(
            "viral-health.example",
            "This MIRACLE CURE will change your life forever",
        ))
        .unwrap();
        assert_eq!(assessment.recommendation, Recommendation::Avoid);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert!(assessment.is_misleading);
        assert!(assessment
            .issues_found
            .iter()
            .any(|i| i.issue_type == "misleading_headline"));
    }

    #[test]
    fn domain_rule_wins_over_phrase_rule() {
        // A trusted source quoting a sensational phrase stays trusted.
        let assessment = assess(&page(
            "bbc.com",
            "The phrase 'miracle cure' appears in quoted testimony.",
        ))
        .unwrap();
        assert_eq!(assessment.recommendation, Recommendation::Proceed);
    }

    #[test]
    fn neutral_page_defers_to_backend() {
        assert!(assess(&page("example.com", "An ordinary article about gardening.")).is_none());
    }
}
