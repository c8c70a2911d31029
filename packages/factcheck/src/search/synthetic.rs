//! Synthetic placeholder results for when every real provider fails.
//!
//! The fabricated set is deterministic and clearly tagged so callers can
//! distinguish placeholder data from live results.

use crate::types::{ResultType, SearchEngine, SearchResponse, SearchResult};

/// Note attached to every synthetic response.
const SYNTHETIC_NOTE: &str = "Synthetic placeholder results; no search provider was reachable";

/// Fabricate exactly three placeholder results referencing the query.
pub(crate) fn results(query: &str) -> SearchResponse {
    let results = vec![
        SearchResult::new(
            format!("Everything you need to know about {query}"),
            "https://www.example.com/comprehensive-guide",
            format!(
                "A comprehensive guide covering all aspects of {query}, \
                 including the latest developments and expert insights."
            ),
            1,
        )
        .with_type(ResultType::Reference),
        SearchResult::new(
            format!("{} - Wikipedia", title_case(query)),
            "https://en.wikipedia.org/wiki/Example",
            format!(
                "Wikipedia article providing detailed information about {query} \
                 with references and citations."
            ),
            2,
        )
        .with_type(ResultType::Reference),
        SearchResult::new(
            format!("Latest news about {query}"),
            "https://news.example.com/latest",
            format!("Stay updated with the latest news and developments related to {query}."),
            3,
        )
        .with_type(ResultType::News),
    ];

    SearchResponse::success(query, SearchEngine::Synthetic, results).with_note(SYNTHETIC_NOTE)
}

/// Uppercase the first letter of each whitespace-delimited word.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_exactly_three_results() {
        let response = results("cold fusion");
        assert_eq!(response.results.len(), 3);
        assert_eq!(response.total_results, 3);
        assert_eq!(response.search_engine, SearchEngine::Synthetic);
        assert!(response.error.is_none());
    }

    #[test]
    fn tagged_with_note_and_dense_ranks() {
        let response = results("cold fusion");
        assert!(response.note.is_some());
        let ranks: Vec<u32> = response.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn results_reference_the_query() {
        let response = results("cold fusion");
        assert!(response.results[0].title.contains("cold fusion"));
        assert!(response.results[1].title.starts_with("Cold Fusion"));
    }

    #[test]
    fn types_are_preassigned() {
        let response = results("anything");
        assert_eq!(response.results[0].result_type, ResultType::Reference);
        assert_eq!(response.results[2].result_type, ResultType::News);
    }
}
