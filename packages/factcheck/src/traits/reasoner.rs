//! Reasoner trait - the seam to the generative reasoning backend.
//!
//! The engine treats the backend as a black-box text (and vision)
//! completion service: prompt in, untrusted free text out. Implementations
//! wrap a concrete provider; the engine never constructs one itself and
//! never reads credentials from the environment.

use async_trait::async_trait;

use crate::error::ReasonerError;

/// Text/vision completion backend.
#[async_trait]
pub trait Reasoner: Send + Sync {
    /// Single blocking text completion.
    async fn complete(&self, prompt: &str) -> Result<String, ReasonerError>;

    /// Completion with an inline image attachment.
    ///
    /// `data` is the base64-encoded image payload and `media_type` its
    /// declared MIME type; both travel as a side-channel attachment, not
    /// inline prompt text.
    async fn complete_with_image(
        &self,
        prompt: &str,
        media_type: &str,
        data: &str,
    ) -> Result<String, ReasonerError>;
}
