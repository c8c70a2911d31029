//! Testing utilities including mock implementations.
//!
//! Useful for testing pipelines without making real backend calls.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::ReasonerError;
use crate::traits::Reasoner;

/// A mock reasoning backend with scripted responses.
///
/// Responses are consumed in order; when the script runs dry every further
/// call fails with a transport error, which exercises the degraded path.
/// All prompts are recorded for assertions.
#[derive(Clone, Default)]
pub struct MockReasoner {
    responses: Arc<RwLock<VecDeque<Result<String, ReasonerError>>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockReasoner {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.write().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a transport failure.
    pub fn with_error(self, detail: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push_back(Err(ReasonerError::Transport(detail.into())));
        self
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Prompts seen so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    fn next(&self, prompt: &str) -> Result<String, ReasonerError> {
        self.calls.write().unwrap().push(prompt.to_string());
        self.responses
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ReasonerError::Transport("mock reasoner: script exhausted".into())))
    }
}

#[async_trait]
impl Reasoner for MockReasoner {
    async fn complete(&self, prompt: &str) -> Result<String, ReasonerError> {
        self.next(prompt)
    }

    async fn complete_with_image(
        &self,
        prompt: &str,
        _media_type: &str,
        _data: &str,
    ) -> Result<String, ReasonerError> {
        self.next(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_responses_are_consumed_in_order() {
        let mock = MockReasoner::new().with_response("first").with_response("second");
        assert_eq!(mock.complete("a").await.unwrap(), "first");
        assert_eq!(mock.complete("b").await.unwrap(), "second");
        assert!(mock.complete("c").await.is_err());
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn errors_are_scripted_too() {
        let mock = MockReasoner::new().with_error("boom");
        let err = mock.complete("a").await.unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
