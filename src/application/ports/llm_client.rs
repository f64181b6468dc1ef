use async_trait::async_trait;

use crate::domain::PromptMessage;

/// Text-in/text-out generation capability.
///
/// Implementations return the completion verbatim; nothing here promises the
/// text is JSON.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("provider request failed: {0}")]
    ApiRequestFailed(String),
    #[error("provider rejected the API key (HTTP {0})")]
    Unauthorized(u16),
    #[error("provider rate limit reached")]
    RateLimited,
    #[error("provider returned an unusable response: {0}")]
    InvalidResponse(String),
}
