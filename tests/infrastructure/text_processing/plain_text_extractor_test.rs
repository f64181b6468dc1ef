use doc2quiz::application::ports::{ExtractionError, TextExtractor};
use doc2quiz::domain::{ContentType, Document};
use doc2quiz::infrastructure::text_processing::PlainTextExtractor;

fn text_document() -> Document {
    Document::new("notes.txt".to_string(), ContentType::Text, 0)
}

#[tokio::test]
async fn given_utf8_bytes_when_extracting_then_returns_text_verbatim() {
    let text = PlainTextExtractor
        .extract_text("Zürich\r\n  naïve  ".as_bytes(), &text_document())
        .await
        .unwrap();

    assert_eq!(text, "Zürich\r\n  naïve  ");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_substitutes_replacement_character() {
    let text = PlainTextExtractor
        .extract_text(&[b'f', b'o', 0xff, b'o'], &text_document())
        .await
        .unwrap();

    assert_eq!(text, "fo\u{fffd}o");
}

#[tokio::test]
async fn given_leading_byte_order_mark_when_extracting_then_drops_it() {
    let text = PlainTextExtractor
        .extract_text(b"\xef\xbb\xbfHello", &text_document())
        .await
        .unwrap();

    assert_eq!(text, "Hello");
}

#[tokio::test]
async fn given_non_text_document_when_extracting_then_rejects_content_type() {
    let document = Document::new("notes.pdf".to_string(), ContentType::Pdf, 0);

    let result = PlainTextExtractor.extract_text(b"hello", &document).await;

    assert!(matches!(
        result,
        Err(ExtractionError::Unsupported(ContentType::Pdf))
    ));
}
