use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::NormalizedText;

use super::quiz_prompt::build_quiz_prompt;

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Sends the quiz prompt to the generation capability and hands back its raw text.
///
/// Single attempt, no retries, and no inspection of the output.
pub struct QuizGenerator<L: ?Sized>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Provider(#[from] LlmClientError),
    #[error("generation timed out after {0:?}")]
    TimedOut(Duration),
}

impl<L: ?Sized> QuizGenerator<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, timeout: Duration) -> Self {
        Self {
            llm_client,
            timeout,
        }
    }

    #[tracing::instrument(skip(self, content), fields(chars = content.char_count()))]
    pub async fn generate(&self, content: &NormalizedText) -> Result<String, GenerationError> {
        let messages = build_quiz_prompt(content);

        let raw = tokio::time::timeout(self.timeout, self.llm_client.complete(&messages))
            .await
            .map_err(|_| GenerationError::TimedOut(self.timeout))??;

        tracing::debug!(output_len = raw.len(), "Generation complete");
        Ok(raw)
    }
}
