use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;
use unicode_normalization::UnicodeNormalization;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{ContentType, Document};

use super::blocking::{EXTRACTION_TIMEOUT, decode_blocking};

const FORMAT: &str = "pdf";

/// Reads the embedded text layer of every page, in page order.
///
/// Scanned pages carry no text layer and contribute nothing; there is no OCR.
pub struct PdfExtractor {
    timeout: Duration,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::with_timeout(EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

fn read_text_layer(path: &Path) -> Result<String, ExtractionError> {
    let mut pdf = PdfDocument::open(path).map_err(|e| ExtractionError::malformed(FORMAT, e))?;
    let page_count = pdf
        .page_count()
        .map_err(|e| ExtractionError::malformed(FORMAT, format!("unreadable page tree: {e}")))?;

    let mut text = String::new();
    let mut pages_with_text = 0usize;

    for page_index in 0..page_count {
        let page = match pdf.extract_text(page_index) {
            Ok(page) => page,
            Err(e) => {
                tracing::debug!(page_index, error = %e, "Skipping unreadable PDF page");
                continue;
            }
        };
        if page.trim().is_empty() {
            continue;
        }

        if pages_with_text > 0 {
            text.push_str("\n\n");
        }
        // NFKC folds ligature glyphs (ﬁ, ﬂ) back into plain letters.
        text.extend(page.nfkc());
        pages_with_text += 1;
    }

    tracing::debug!(page_count, pages_with_text, "PDF text layer read");
    Ok(text)
}

/// The parser reads from a path; the staged copy is removed when dropped.
fn stage_for_parser(bytes: &[u8]) -> Result<NamedTempFile, ExtractionError> {
    let staging_failed =
        |e: std::io::Error| ExtractionError::malformed(FORMAT, format!("staging failed: {e}"));

    let mut staged = tempfile::Builder::new()
        .prefix("pdf-")
        .suffix(".pdf")
        .tempfile()
        .map_err(staging_failed)?;
    staged.write_all(bytes).map_err(staging_failed)?;
    staged.flush().map_err(staging_failed)?;
    Ok(staged)
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    #[tracing::instrument(skip(self, data), fields(document_id = %document.id, size_bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.content_type != ContentType::Pdf {
            return Err(ExtractionError::Unsupported(document.content_type));
        }

        let bytes = data.to_vec();
        decode_blocking(FORMAT, self.timeout, move || {
            let staged = stage_for_parser(&bytes)?;
            read_text_layer(staged.path())
        })
        .await
    }
}
