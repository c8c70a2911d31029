//! Gemini API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Generate Content
// =============================================================================

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Conversation contents (Gemini's message container)
    pub contents: Vec<Content>,

    /// Optional sampling configuration
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Create a request from a single text prompt.
    pub fn from_text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt.into() }],
            }],
            generation_config: None,
        }
    }

    /// Create a request from a text prompt plus an inline image.
    ///
    /// `data` is the base64-encoded image payload; `mime_type` is its
    /// declared media type (e.g. "image/png").
    pub fn from_text_and_image(
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt.into() },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.into(),
                            data: data.into(),
                        },
                    },
                ],
            }],
            generation_config: None,
        }
    }

    /// Set the generation config.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// A single content entry (one turn of a conversation).
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Parts making up this content (text, inline data, ...)
    pub parts: Vec<Part>,
}

/// A content part: plain text or inline binary data.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text part
    Text { text: String },

    /// Inline binary attachment (base64-encoded)
    InlineData {
        #[serde(rename = "inline_data")]
        inline_data: InlineData,
    },
}

/// Inline binary data with a declared media type.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    /// MIME type, e.g. "image/jpeg"
    #[serde(rename = "mime_type")]
    pub mime_type: String,

    /// Base64-encoded payload
    pub data: String,
}

/// Sampling configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens in the completion
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    pub max_output_tokens: Option<u32>,
}

// =============================================================================
// Response (raw wire shape)
// =============================================================================

/// Raw response from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponseRaw {
    /// Generated candidates (usually one)
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single generation candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The generated content
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Generated parts
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A generated part (text only — the client never requests binary output).
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    /// Generated text
    pub text: Option<String>,
}

impl GenerateResponseRaw {
    /// Extract the first candidate's first text part.
    ///
    /// Returns `None` when the response envelope is missing any link of
    /// the `candidates[0].content.parts[0].text` path.
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_request_serializes_to_parts() {
        let request = GenerateRequest::from_text("hello");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn image_request_carries_inline_data() {
        let request = GenerateRequest::from_text_and_image("check this", "image/png", "aGk=");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "check this");
        assert_eq!(
            json["contents"][0]["parts"][1]["inline_data"]["mime_type"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["inline_data"]["data"], "aGk=");
    }

    #[test]
    fn first_text_walks_the_candidate_path() {
        let raw: GenerateResponseRaw = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"generated"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(raw.first_text().as_deref(), Some("generated"));
    }

    #[test]
    fn first_text_is_none_for_empty_candidates() {
        let raw: GenerateResponseRaw = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(raw.first_text().is_none());
    }

    #[test]
    fn first_text_is_none_for_missing_content() {
        let raw: GenerateResponseRaw =
            serde_json::from_str(r#"{"candidates":[{"content":null}]}"#).unwrap();
        assert!(raw.first_text().is_none());
    }
}
