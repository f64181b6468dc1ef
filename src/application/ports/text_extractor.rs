use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ContentType, Document};

/// Turns the bytes of an uploaded document into raw, unnormalized text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("no extractor registered for .{}", .0.extension())]
    Unsupported(ContentType),
    #[error("{format}: {reason}")]
    Malformed { format: &'static str, reason: String },
    #[error("{format} extraction timed out after {}s", .after.as_secs())]
    TimedOut { format: &'static str, after: Duration },
}

impl ExtractionError {
    pub fn malformed(format: &'static str, reason: impl fmt::Display) -> Self {
        Self::Malformed {
            format,
            reason: reason.to_string(),
        }
    }
}
