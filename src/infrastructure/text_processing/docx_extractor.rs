use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{ContentType, Document};

use super::blocking::{EXTRACTION_TIMEOUT, decode_blocking};

const FORMAT: &str = "docx";
const DOCUMENT_PART: &str = "word/document.xml";

/// Cap on the inflated main document part, checked against both the size the
/// zip header declares and the bytes actually inflated.
const MAX_DOCUMENT_XML_BYTES: u64 = 64 * 1024 * 1024;

/// Pulls raw inline text out of a DOCX package.
///
/// Paragraphs are separated by a blank line, `w:tab` becomes a tab and
/// `w:br`/`w:cr` a line break. Styles, tables, images and everything outside
/// the main document part are discarded.
pub struct DocxExtractor {
    timeout: Duration,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self::with_timeout(EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

fn read_document_part(package: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(package))
        .map_err(|e| ExtractionError::malformed(FORMAT, format!("not a zip package: {e}")))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::malformed(FORMAT, format!("missing {DOCUMENT_PART}: {e}")))?;

    if part.size() > MAX_DOCUMENT_XML_BYTES {
        return Err(too_large());
    }

    let mut xml = Vec::new();
    part.by_ref()
        .take(MAX_DOCUMENT_XML_BYTES + 1)
        .read_to_end(&mut xml)
        .map_err(|e| ExtractionError::malformed(FORMAT, format!("unreadable {DOCUMENT_PART}: {e}")))?;

    if xml.len() as u64 > MAX_DOCUMENT_XML_BYTES {
        return Err(too_large());
    }

    String::from_utf8(xml)
        .map_err(|e| ExtractionError::malformed(FORMAT, format!("{DOCUMENT_PART} is not UTF-8: {e}")))
}

fn too_large() -> ExtractionError {
    ExtractionError::malformed(FORMAT, format!("{DOCUMENT_PART} too large"))
}

/// Flattens WordprocessingML into text, one entry per `w:p`.
fn paragraphs_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run_text = false;
    let mut in_paragraph_props = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = true,
                b"pPr" => in_paragraph_props = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                // Tab stops declared in paragraph properties are layout, not content.
                b"tab" if !in_paragraph_props => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"pPr" => in_paragraph_props = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(e)) if in_run_text => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractionError::malformed(FORMAT, format!("bad text run: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::malformed(
                    FORMAT,
                    format!("malformed XML at byte {}: {e}", reader.error_position()),
                ));
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n\n"))
}

#[async_trait]
impl TextExtractor for DocxExtractor {
    #[tracing::instrument(skip(self, data), fields(document_id = %document.id, size_bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.content_type != ContentType::Docx {
            return Err(ExtractionError::Unsupported(document.content_type));
        }

        let package = data.to_vec();
        let text = decode_blocking(FORMAT, self.timeout, move || {
            read_document_part(&package).and_then(|xml| paragraphs_to_text(&xml))
        })
        .await?;

        tracing::debug!(chars = text.chars().count(), "DOCX text read");
        Ok(text)
    }
}
