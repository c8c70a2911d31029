//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` API with no
//! domain-specific logic. Supports text completions and inline-image
//! (vision) completions.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Text completion
//! let text = client.generate_content("Is the sky blue?").await?;
//!
//! // Vision completion (base64 payload + media type)
//! let text = client
//!     .generate_with_image("Describe this image", "image/png", b64_data)
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default request timeout for generation calls.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    ///
    /// Intended for process entry points only; library code receives an
    /// already-constructed client.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the generation model (default: gemini-2.0-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies, regional endpoints, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Text-in/text-out completion.
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        self.generate(GenerateRequest::from_text(prompt)).await
    }

    /// Completion with an inline image attachment.
    ///
    /// `data` is the base64-encoded image payload; `mime_type` its declared
    /// media type.
    pub async fn generate_with_image(
        &self,
        prompt: &str,
        mime_type: &str,
        data: &str,
    ) -> Result<String> {
        self.generate(GenerateRequest::from_text_and_image(prompt, mime_type, data))
            .await
    }

    /// Send a `generateContent` request and unwrap the first text part.
    pub async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/{}:generateContent", self.base_url, self.model))
            .header("X-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error: {}", error_text)));
        }

        let raw: GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = raw
            .first_text()
            .ok_or_else(|| GeminiError::Api("No candidates in Gemini response".into()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generation complete"
        );

        Ok(text)
    }
}
