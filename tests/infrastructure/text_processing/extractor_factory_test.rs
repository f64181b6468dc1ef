use doc2quiz::domain::{ContentType, Document};
use doc2quiz::infrastructure::text_processing::{ExtractorFactory, ExtractorFactoryError};
use doc2quiz::presentation::config::ExtractionSettings;

fn settings(enable_pdf: bool, enable_docx: bool, enable_text: bool) -> ExtractionSettings {
    ExtractionSettings {
        enable_pdf,
        enable_docx,
        enable_text,
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn given_text_enabled_when_creating_then_loader_reads_text_files() {
    let loader = ExtractorFactory::create(&settings(true, true, true)).unwrap();
    let document = Document::new("a.txt".to_string(), ContentType::Text, 5);

    assert_eq!(loader.extract_text(b"hello", &document).await.unwrap(), "hello");
}

#[tokio::test]
async fn given_format_disabled_when_extracting_that_format_then_reports_unsupported() {
    let loader = ExtractorFactory::create(&settings(true, true, false)).unwrap();
    let document = Document::new("a.txt".to_string(), ContentType::Text, 5);

    assert!(loader.extract_text(b"hello", &document).await.is_err());
}

#[test]
fn given_every_format_disabled_when_creating_then_fails() {
    let result = ExtractorFactory::create(&settings(false, false, false));

    assert!(matches!(result, Err(ExtractorFactoryError::NoFormatsEnabled)));
}
