use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{ContentType, Document};

/// Hands each document to the extractor registered for its content type.
#[derive(Default)]
pub struct FormatDispatcher {
    extractors: HashMap<ContentType, Arc<dyn TextExtractor>>,
}

impl FormatDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `extractor` for `content_type`, replacing any earlier one.
    pub fn register(
        mut self,
        content_type: ContentType,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        self.extractors.insert(content_type, extractor);
        self
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.extractors.contains_key(&content_type)
    }

    /// Registered formats in dispatch precedence order.
    pub fn formats(&self) -> Vec<ContentType> {
        ContentType::ALL
            .into_iter()
            .filter(|ct| self.supports(*ct))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

#[async_trait]
impl TextExtractor for FormatDispatcher {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        match self.extractors.get(&document.content_type) {
            Some(extractor) => extractor.extract_text(data, document).await,
            None => Err(ExtractionError::Unsupported(document.content_type)),
        }
    }
}
