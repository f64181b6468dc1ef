use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::PromptMessage;

/// Canned generation capability for scaffold mode and tests.
pub struct MockLlmClient {
    response: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockLlmClient {
    pub fn returning(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    /// Five well-formed questions, enough to pass quiz shape validation.
    pub fn sample_quiz() -> Self {
        let questions: Vec<serde_json::Value> = (1..=5)
            .map(|n| {
                serde_json::json!({
                    "question": format!("Sample question {n}?"),
                    "choices": ["First", "Second", "Third", "Fourth"],
                    "answerIndex": n % 4,
                    "explanation": "Scaffold mode returns a fixed quiz."
                })
            })
            .collect();

        Self::returning(serde_json::Value::Array(questions).to_string())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _messages: &[PromptMessage]) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.response
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }
}
