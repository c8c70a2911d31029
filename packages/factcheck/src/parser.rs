//! Tolerant response parsing - recovers a JSON object from noisy
//! free-text model output.
//!
//! Backends are asked for "JSON ONLY" but routinely wrap the payload in
//! markdown fences or surrounding prose. This module strips the noise and
//! takes the first-`{` .. last-`}` span as the candidate object. It is
//! best-effort recovery, not JSON repair: a candidate whose interior is
//! invalid JSON is reported as a parse failure, not retried with other
//! heuristics.

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::Verdict;

/// Why no structured payload could be recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{...}` span was found but did not decode as JSON
    InvalidJson,
    /// The text contains no `{...}` span at all
    NoPayload,
}

impl ParseError {
    /// Stable error string used in degraded records.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "Failed to parse cleaned JSON",
            Self::NoPayload => "No JSON found in response",
        }
    }
}

/// Extract the embedded JSON object from free-text model output.
///
/// Strips markdown code fences (language-tagged or not), trims, then
/// strict-decodes the inclusive span between the first `{` and the last
/// `}`.
pub fn extract_structured(text: &str) -> Result<Value, ParseError> {
    let fence = Regex::new(r"(?i)```(json)?").unwrap();
    let cleaned = fence.replace_all(text, "");
    let cleaned = cleaned.trim();

    let start = cleaned.find('{').ok_or(ParseError::NoPayload)?;
    let end = cleaned.rfind('}').ok_or(ParseError::NoPayload)?;
    if end < start {
        return Err(ParseError::NoPayload);
    }

    serde_json::from_str(&cleaned[start..=end]).map_err(|_| ParseError::InvalidJson)
}

/// Decode model output into a typed verdict variant.
///
/// Any recovery or decode failure degrades to [`Verdict::Error`] carrying
/// the original text verbatim; this function never fails hard.
pub fn parse_verdict<T, F>(raw: &str, wrap: F) -> Verdict
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Verdict,
{
    match extract_structured(raw) {
        Ok(value) => match serde_json::from_value::<T>(value) {
            Ok(decoded) => wrap(decoded),
            Err(_) => Verdict::parse_error(ParseError::InvalidJson.message(), raw),
        },
        Err(e) => Verdict::parse_error(e.message(), raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClaimVerdict;

    #[test]
    fn clean_json_round_trips() {
        let text = r#"{"claim": "water is wet", "is_correct": true}"#;
        let value = extract_structured(text).unwrap();
        assert_eq!(value["claim"], "water is wet");
        // Idempotent: re-serializing and re-parsing yields the same value.
        let again = extract_structured(&value.to_string()).unwrap();
        assert_eq!(value, again);
    }

    #[test]
    fn fenced_json_with_trailing_prose_is_recovered() {
        let text = "```json\n{\"is_correct\": false, \"explanation\": \"nope\"}\n```\nLet me know if you need more detail!";
        let value = extract_structured(text).unwrap();
        assert_eq!(value["is_correct"], false);
    }

    #[test]
    fn unfenced_prose_wrapping_is_recovered() {
        let text = "Here is the analysis you asked for: {\"confidence_score\": 88} hope that helps";
        let value = extract_structured(text).unwrap();
        assert_eq!(value["confidence_score"], 88);
    }

    #[test]
    fn no_braces_yields_no_payload() {
        let text = "Failed to fetch or parse API response: connection refused";
        assert_eq!(extract_structured(text), Err(ParseError::NoPayload));
    }

    #[test]
    fn unbalanced_interior_is_invalid_json_not_retried() {
        let text = "{ \"a\": 1, } plus some prose with a stray }";
        assert_eq!(extract_structured(text), Err(ParseError::InvalidJson));
    }

    #[test]
    fn parse_verdict_preserves_raw_response_verbatim() {
        let raw = "no structured output here at all";
        let verdict = parse_verdict::<ClaimVerdict, _>(raw, Verdict::Claim);
        match verdict {
            Verdict::Error(e) => {
                assert_eq!(e.error, "No JSON found in response");
                assert_eq!(e.raw_response.as_deref(), Some(raw));
            }
            other => panic!("expected error verdict, got {other:?}"),
        }
    }

    #[test]
    fn parse_verdict_decodes_typed_variant() {
        let raw = r#"```json
{"claim": "the sky is green", "is_correct": false, "sources": ["https://a.com"]}
```"#;
        let verdict = parse_verdict::<ClaimVerdict, _>(raw, Verdict::Claim);
        match verdict {
            Verdict::Claim(c) => {
                assert_eq!(c.is_correct, Some(false));
                assert_eq!(c.sources.len(), 1);
            }
            other => panic!("expected claim verdict, got {other:?}"),
        }
    }
}
