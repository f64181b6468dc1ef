mod blocking;
mod docx_extractor;
mod extractor_factory;
mod format_dispatcher;
mod pdf_extractor;
mod plain_text_extractor;

pub use blocking::EXTRACTION_TIMEOUT;
pub use docx_extractor::DocxExtractor;
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use format_dispatcher::FormatDispatcher;
pub use pdf_extractor::PdfExtractor;
pub use plain_text_extractor::PlainTextExtractor;
