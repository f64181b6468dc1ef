mod llm_client;
mod text_extractor;

pub use llm_client::{LlmClient, LlmClientError};
pub use text_extractor::{ExtractionError, TextExtractor};
