//! DuckDuckGo HTML search provider.
//!
//! Scrapes the `html.duckduckgo.com` endpoint; no API key required.

use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};

use super::FETCH_TIMEOUT;
use crate::types::{SearchEngine, SearchResponse, SearchResult};

pub(crate) const DEFAULT_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Run one DuckDuckGo attempt. Any provider-level failure is captured in
/// the response's `error` field so the chain can fall through.
pub(crate) async fn search(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    num_results: usize,
) -> SearchResponse {
    match attempt(client, endpoint, query, num_results).await {
        Ok(results) => SearchResponse::success(query, SearchEngine::DuckDuckGo, results),
        Err(detail) => SearchResponse::failure(
            query,
            SearchEngine::DuckDuckGo,
            format!("DuckDuckGo search failed: {detail}"),
        ),
    }
}

async fn attempt(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    num_results: usize,
) -> Result<Vec<SearchResult>, String> {
    let response = client
        .get(endpoint)
        .query(&[("q", query)])
        .header("Accept", "text/html")
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {status}"));
    }

    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(parse_results(&body, num_results))
}

/// Extract results from the DuckDuckGo results page. A malformed container
/// is skipped, never fatal to the whole attempt.
pub(crate) fn parse_results(html: &str, num_results: usize) -> Vec<SearchResult> {
    // The HTML endpoint has served both container classes over time.
    let container_sel = Selector::parse("div.web-result, div.result").unwrap();
    let title_sel = Selector::parse("a.result__a").unwrap();
    let snippet_sel = Selector::parse("a.result__snippet, .result__snippet").unwrap();

    let doc = Html::parse_document(html);
    let mut results = Vec::new();

    for container in doc.select(&container_sel) {
        if results.len() >= num_results {
            break;
        }

        let Some(link) = container.select(&title_sel).next() else {
            continue;
        };
        let title = link.text().collect::<String>().trim().to_string();
        let url = unwrap_redirect(link.value().attr("href").unwrap_or(""));

        let snippet = container
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        if title.is_empty() || url.is_empty() {
            continue;
        }

        let rank = results.len() as u32 + 1;
        results.push(SearchResult::new(title, url, snippet, rank));
    }

    results
}

/// DuckDuckGo wraps result URLs in redirect links like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
/// Extract and percent-decode the actual destination URL.
fn unwrap_redirect(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let start = pos + 5;
        let end = href[start..].find('&').map(|i| start + i).unwrap_or(href.len());
        let encoded = &href[start..end];
        if !encoded.is_empty() {
            return percent_decode_str(encoded).decode_utf8_lossy().into_owned();
        }
    }
    href.to_string()
}
