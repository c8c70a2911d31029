//! Reasoning-backend prompts, one fixed template per analysis path.
//!
//! Templates ask for "JSON ONLY"; the tolerant parser cleans up whatever
//! comes back anyway.

use crate::types::PageContent;

/// Character cap for page content embedded in the credibility prompt.
const CREDIBILITY_CONTENT_CHARS: usize = 6000;

const CLAIM_PROMPT: &str = r#"You are an expert fact-checking AI. Analyze the claim: "{input}".
Return JSON ONLY with keys:
{
"claim": "{input}",
"is_correct": true or false,
"confidence_score": 0-100,
"category": "Science/History/Health/etc.",
"sources": ["List of URLs or documents supporting your conclusion"],
"explanation": "Explain why this claim is true or false with proof from sources"
}"#;

const URL_PROMPT: &str = r#"You are an expert fact-checking AI. Analyze this URL and return JSON ONLY:
{
"url": "{url}",
"is_correct": true or false,
"summary": "Brief summary of content",
"sources": ["{url}"],
"explanation": "Explain why the claim is true or false using evidence from the page"
}

Page content:
{content}"#;

const PROMO_PROMPT: &str = r#"You are an expert AI agent. The user gave a keyword/promo: "{query}".
Browse the web, find 10-15 reliable sources, and summarize your findings.
Return JSON ONLY with:
{
"query": "{query}",
"conclusion": "Brief summary/conclusion",
"confidence_score": 0-100,
"sources": ["List of URLs found"],
"explanation": "Provide reasoning and proof based on sources"
}"#;

const IMAGE_PROMPT: &str = r#"Analyze this image and extract any claims, statements, or information that can be fact-checked. Then evaluate whether the information shown is true or false.

Return your analysis in JSON format with these exact keys:
{
"claim": "The main claim or statement extracted from the image",
"is_correct": true or false,
"confidence_score": 0-100,
"category": "Science/Health/Politics/History/etc.",
"sources": ["List of URLs or references supporting your conclusion"],
"explanation": "Detailed explanation of why this claim is true or false with evidence",
"image_description": "Brief description of what's shown in the image"
}"#;

const CREDIBILITY_PROMPT: &str = r#"Analyze the following web page content for factual accuracy, misinformation, and potential bias.
Focus on identifying specific claims that may be misleading, false, or lack proper evidence.

Page Information:
- Title: {title}
- Domain: {domain}
- URL: {url}

Content to analyze:
{content}

Please provide analysis in the following JSON format:
{
    "overall_credibility_score": <number 0-100>,
    "is_misleading": <boolean>,
    "risk_level": "<low|medium|high>",
    "issues_found": [
        {
            "type": "<misinformation|bias|unsubstantiated_claim|misleading_headline|false_fact>",
            "severity": "<low|medium|high>",
            "description": "<detailed description of the issue>",
            "evidence": "<why this is problematic>",
            "location": "<where in content this appears>"
        }
    ],
    "positive_indicators": [
        "<list of credibility indicators found>"
    ],
    "sources_mentioned": <number of sources cited>,
    "fact_check_summary": "<brief summary of findings>",
    "recommendation": "<proceed|caution|avoid>"
}

Be thorough but fair in your analysis. Focus on factual accuracy rather than opinion differences."#;

const RESEARCH_ITEM_PROMPT: &str = r#"You are an AI research assistant. Fact-check this information:
Title: {title}
Link: {link}
Context: {context}

Is this true or misleading? Explain in 1-2 lines."#;

/// Prompt for a free-text claim.
pub fn claim_prompt(claim: &str) -> String {
    CLAIM_PROMPT.replace("{input}", claim)
}

/// Prompt for a URL, enriched with the extracted page content.
pub fn url_prompt(url: &str, content: &str) -> String {
    URL_PROMPT.replace("{url}", url).replace("{content}", content)
}

/// Prompt for a short keyword / promo query.
pub fn promo_prompt(query: &str) -> String {
    PROMO_PROMPT.replace("{query}", query)
}

/// Fixed prompt accompanying an image attachment.
pub fn image_prompt() -> &'static str {
    IMAGE_PROMPT
}

/// Prompt for backend credibility analysis of an extracted page.
pub fn credibility_prompt(page: &PageContent) -> String {
    let content: String = page.content.chars().take(CREDIBILITY_CONTENT_CHARS).collect();
    CREDIBILITY_PROMPT
        .replace("{title}", &page.title)
        .replace("{domain}", &page.domain)
        .replace("{url}", &page.url)
        .replace("{content}", &content)
}

/// Per-result prompt for the research aggregation path.
pub fn research_item_prompt(title: &str, link: &str, context: &str) -> String {
    RESEARCH_ITEM_PROMPT
        .replace("{title}", title)
        .replace("{link}", link)
        .replace("{context}", context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_prompt_interpolates_both_occurrences() {
        let prompt = claim_prompt("the moon is cheese");
        assert_eq!(prompt.matches("the moon is cheese").count(), 2);
        assert!(prompt.contains("JSON ONLY"));
    }

    #[test]
    fn url_prompt_carries_page_content() {
        let prompt = url_prompt("https://a.com", "extracted text here");
        assert!(prompt.contains("https://a.com"));
        assert!(prompt.contains("extracted text here"));
    }

    #[test]
    fn credibility_prompt_caps_content() {
        let page = PageContent {
            url: "https://a.com".into(),
            title: "T".into(),
            content: "x".repeat(10_000),
            meta_description: String::new(),
            publication_date: String::new(),
            domain: "a.com".into(),
            word_count: 1,
        };
        let prompt = credibility_prompt(&page);
        // 6000 chars of content plus the fixed template text.
        assert!(prompt.len() < 6000 + CREDIBILITY_PROMPT.len());
    }
}
