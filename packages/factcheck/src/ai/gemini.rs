//! Gemini implementation of the `Reasoner` trait.
//!
//! A thin bridge over the `gemini-client` package. Every client failure
//! collapses into the engine's single opaque transport class.

use async_trait::async_trait;
use gemini_client::GeminiClient;

use crate::error::ReasonerError;
use crate::traits::Reasoner;

/// Gemini-backed reasoner.
///
/// # Example
///
/// ```rust,ignore
/// use factcheck::{ai::GeminiReasoner, FactChecker};
/// use gemini_client::GeminiClient;
///
/// let client = GeminiClient::new(api_key);
/// let checker = FactChecker::new(GeminiReasoner::new(client));
/// ```
#[derive(Clone)]
pub struct GeminiReasoner {
    client: GeminiClient,
}

impl GeminiReasoner {
    /// Wrap an already-configured client.
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Reasoner for GeminiReasoner {
    async fn complete(&self, prompt: &str) -> Result<String, ReasonerError> {
        self.client
            .generate_content(prompt)
            .await
            .map_err(|e| ReasonerError::Transport(e.to_string()))
    }

    async fn complete_with_image(
        &self,
        prompt: &str,
        media_type: &str,
        data: &str,
    ) -> Result<String, ReasonerError> {
        self.client
            .generate_with_image(prompt, media_type, data)
            .await
            .map_err(|e| ReasonerError::Transport(e.to_string()))
    }
}
