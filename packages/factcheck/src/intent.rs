//! Intent classification - decides which analysis path an input takes.

use serde::{Deserialize, Serialize};

/// The classified category of a raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Embedded data-URL image
    Image,
    /// Web address to analyze as a page
    Url,
    /// Free-text claim (more than five tokens)
    Claim,
    /// Short keyword or promo string
    Promo,
}

/// Classify a raw input. Rules are checked in order, first match wins:
/// image data-URL prefix, then URL scheme, then token count. Total over
/// any string; the empty string classifies as [`Intent::Promo`] and must
/// be rejected by callers as empty input.
pub fn classify(text: &str) -> Intent {
    if text.starts_with("data:image/") {
        Intent::Image
    } else if text.starts_with("http://") || text.starts_with("https://") {
        Intent::Url
    } else if text.split_whitespace().count() > 5 {
        Intent::Claim
    } else {
        Intent::Promo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_is_image() {
        assert_eq!(classify("data:image/png;base64,iVBORw0KGgo="), Intent::Image);
    }

    #[test]
    fn http_and_https_are_url() {
        assert_eq!(classify("https://example.com/article"), Intent::Url);
        assert_eq!(classify("http://example.com"), Intent::Url);
    }

    #[test]
    fn prefix_rules_beat_token_count() {
        assert_eq!(
            classify("https://example.com/a b c d e f g h"),
            Intent::Url
        );
        assert_eq!(
            classify("data:image/png;base64,AAAA BBBB CCCC DDDD EEEE FFFF GGGG"),
            Intent::Image
        );
    }

    #[test]
    fn more_than_five_tokens_is_claim() {
        assert_eq!(
            classify("Drinking bleach cures COVID-19 according to recent studies"),
            Intent::Claim
        );
        assert_eq!(classify("one two three four five six"), Intent::Claim);
    }

    #[test]
    fn five_or_fewer_tokens_is_promo() {
        assert_eq!(classify("The Earth is flat"), Intent::Promo);
        assert_eq!(classify("one two three four five"), Intent::Promo);
        assert_eq!(classify("quantum computing"), Intent::Promo);
    }

    #[test]
    fn empty_string_falls_to_promo() {
        assert_eq!(classify(""), Intent::Promo);
        assert_eq!(classify("   "), Intent::Promo);
    }
}
