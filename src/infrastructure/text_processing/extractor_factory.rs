use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TextExtractor;
use crate::domain::ContentType;
use crate::presentation::config::ExtractionSettings;

use super::docx_extractor::DocxExtractor;
use super::format_dispatcher::FormatDispatcher;
use super::pdf_extractor::PdfExtractor;
use super::plain_text_extractor::PlainTextExtractor;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("at least one of enable_pdf, enable_docx or enable_text must be set")]
    NoFormatsEnabled,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Builds the dispatcher for the formats switched on in `settings`.
    pub fn create(
        settings: &ExtractionSettings,
    ) -> Result<Arc<dyn TextExtractor>, ExtractorFactoryError> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let mut dispatcher = FormatDispatcher::new();

        if settings.enable_pdf {
            dispatcher = dispatcher.register(
                ContentType::Pdf,
                Arc::new(PdfExtractor::with_timeout(timeout)),
            );
        }
        if settings.enable_docx {
            dispatcher = dispatcher.register(
                ContentType::Docx,
                Arc::new(DocxExtractor::with_timeout(timeout)),
            );
        }
        if settings.enable_text {
            dispatcher = dispatcher.register(ContentType::Text, Arc::new(PlainTextExtractor));
        }

        if dispatcher.is_empty() {
            return Err(ExtractorFactoryError::NoFormatsEnabled);
        }

        let formats: Vec<&str> = dispatcher
            .formats()
            .iter()
            .map(ContentType::extension)
            .collect();
        tracing::info!(?formats, timeout_secs = settings.timeout_secs, "Extractors configured");

        Ok(Arc::new(dispatcher))
    }
}
