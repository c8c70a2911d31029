//! Bing HTML search provider (backup engine).

use scraper::{Html, Selector};

use super::FETCH_TIMEOUT;
use crate::types::{SearchEngine, SearchResponse, SearchResult};

pub(crate) const DEFAULT_ENDPOINT: &str = "https://www.bing.com/search";

/// Run one Bing attempt. Provider-level failures land in the response's
/// `error` field for the chain to inspect.
pub(crate) async fn search(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    num_results: usize,
) -> SearchResponse {
    match attempt(client, endpoint, query, num_results).await {
        Ok(results) => SearchResponse::success(query, SearchEngine::Bing, results),
        Err(detail) => SearchResponse::failure(
            query,
            SearchEngine::Bing,
            format!("Bing search failed: {detail}"),
        ),
    }
}

async fn attempt(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
    num_results: usize,
) -> Result<Vec<SearchResult>, String> {
    let count = num_results.to_string();
    let response = client
        .get(endpoint)
        .query(&[("q", query), ("count", count.as_str())])
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

/// Extract results from a Bing results page, skipping malformed containers.
pub(crate) fn parse_results(html: &str, num_results: usize) -> Vec<SearchResult> {
    let container_sel = Selector::parse("li.b_algo").unwrap();
    let title_sel = Selector::parse("h2 a").unwrap();
    let snippet_sel = Selector::parse("p").unwrap();

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
        let url = link.value().attr("href").unwrap_or("").to_string();

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

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body><ol id="b_results">
          <li class="b_algo">
            <h2><a href="https://www.reuters.com/science/moon">Moon landing anniversary</a></h2>
            <div class="b_caption"><p>Reuters coverage of the anniversary.</p></div>
          </li>
          <li class="b_algo">
            <h2>No anchor here</h2>
          </li>
          <li class="b_algo">
            <h2><a href="https://example.org/moon">Moon page</a></h2>
          </li>
        </ol></body></html>"#;

    #[test]
    fn extracts_title_url_snippet() {
        let results = parse_results(RESULTS_PAGE, 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Moon landing anniversary");
        assert_eq!(results[0].url, "https://www.reuters.com/science/moon");
        assert_eq!(results[0].snippet, "Reuters coverage of the anniversary.");
    }

    #[test]
    fn ranks_are_dense_after_skips() {
        let results = parse_results(RESULTS_PAGE, 10);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn zero_containers_means_empty() {
        assert!(parse_results("<html></html>", 5).is_empty());
    }
}
