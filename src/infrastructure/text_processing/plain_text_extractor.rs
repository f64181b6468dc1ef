use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{ContentType, Document};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Decodes `.txt` uploads as UTF-8.
///
/// Invalid sequences become U+FFFD instead of failing the request, and a
/// leading byte order mark is dropped.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.content_type != ContentType::Text {
            return Err(ExtractionError::Unsupported(document.content_type));
        }

        let decoded = String::from_utf8_lossy(data);
        if let std::borrow::Cow::Owned(_) = decoded {
            tracing::warn!(
                document_id = %document.id,
                "Text upload is not valid UTF-8; invalid bytes replaced"
            );
        }

        Ok(decoded
            .strip_prefix(BYTE_ORDER_MARK)
            .unwrap_or(&*decoded)
            .to_string())
    }
}
