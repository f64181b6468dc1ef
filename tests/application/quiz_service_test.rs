use std::sync::Arc;
use std::time::Duration;

use doc2quiz::application::ports::TextExtractor;
use doc2quiz::application::services::{QuizError, QuizGenerator, QuizLimits, QuizService};
use doc2quiz::domain::Upload;
use doc2quiz::infrastructure::llm::MockLlmClient;
use doc2quiz::infrastructure::text_processing::{DocxExtractor, FormatDispatcher};

use crate::helpers::{
    CountingExtractor, FixedTextExtractor, lorem_ipsum, quiz_json, quiz_service,
};

#[tokio::test]
async fn given_successful_request_when_processing_then_releases_staged_file() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(FixedTextExtractor(lorem_ipsum(500)));
    let service = quiz_service(extractor, Arc::new(MockLlmClient::sample_quiz()));
    let upload = Upload::from_bytes("notes.pdf", b"%PDF").unwrap();
    let path = upload.path().to_path_buf();

    let outcome = service.process(Some(upload)).await.unwrap();

    assert_eq!(outcome.filename, "notes.pdf");
    assert_eq!(outcome.chars, 500);
    assert!(!path.exists());
}

#[tokio::test]
async fn given_failing_request_when_processing_then_still_releases_staged_file() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(FixedTextExtractor(lorem_ipsum(500)));
    let service = quiz_service(extractor, Arc::new(MockLlmClient::returning("nope")));
    let upload = Upload::from_bytes("notes.pdf", b"%PDF").unwrap();
    let path = upload.path().to_path_buf();

    let err = service.process(Some(upload)).await.unwrap_err();

    assert!(matches!(err, QuizError::InvalidModelOutput));
    assert!(!path.exists());
}

#[tokio::test]
async fn given_no_upload_when_processing_then_returns_no_file() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(CountingExtractor::default());
    let llm = Arc::new(MockLlmClient::sample_quiz());
    let service = quiz_service(extractor, Arc::clone(&llm));

    let err = service.process(None).await.unwrap_err();

    assert!(matches!(err, QuizError::NoFile));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_oversized_upload_when_processing_then_rejects_before_extraction() {
    let extractor = Arc::new(CountingExtractor::default());
    let service = QuizService::new(
        Arc::clone(&extractor),
        QuizGenerator::new(Arc::new(MockLlmClient::sample_quiz()), Duration::from_secs(5)),
        QuizLimits {
            max_file_bytes: 16,
            ..QuizLimits::default()
        },
        true,
    );
    let upload = Upload::from_bytes("big.txt", &[b'a'; 17]).unwrap();
    let path = upload.path().to_path_buf();

    let err = service.process(Some(upload)).await.unwrap_err();

    assert!(matches!(err, QuizError::FileTooLarge { limit_bytes: 16 }));
    assert_eq!(extractor.call_count(), 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn given_upload_at_exact_limit_when_processing_then_accepts_size() {
    let extractor = Arc::new(CountingExtractor::default());
    let service = QuizService::new(
        Arc::clone(&extractor),
        QuizGenerator::new(Arc::new(MockLlmClient::sample_quiz()), Duration::from_secs(5)),
        QuizLimits {
            max_file_bytes: 300,
            ..QuizLimits::default()
        },
        true,
    );
    let upload = Upload::from_bytes("exact.txt", lorem_ipsum(300).as_bytes()).unwrap();

    let outcome = service.process(Some(upload)).await.unwrap();

    assert_eq!(outcome.chars, 300);
    assert_eq!(extractor.call_count(), 1);
}

#[tokio::test]
async fn given_unsupported_suffix_when_processing_then_skips_extraction() {
    let extractor = Arc::new(CountingExtractor::default());
    let service = quiz_service(
        Arc::clone(&extractor) as Arc<dyn TextExtractor>,
        Arc::new(MockLlmClient::sample_quiz()),
    );
    let upload = Upload::from_bytes("slides.pptx", b"data").unwrap();

    let err = service.process(Some(upload)).await.unwrap_err();

    assert!(matches!(err, QuizError::UnsupportedFormat));
    assert_eq!(extractor.call_count(), 0);
}

#[tokio::test]
async fn given_text_of_exactly_min_chars_when_processing_then_generates() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(FixedTextExtractor(lorem_ipsum(200)));
    let llm = Arc::new(MockLlmClient::sample_quiz());
    let service = quiz_service(extractor, Arc::clone(&llm));
    let upload = Upload::from_bytes("notes.pdf", b"%PDF").unwrap();

    let outcome = service.process(Some(upload)).await.unwrap();

    assert_eq!(outcome.chars, 200);
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn given_text_just_below_min_chars_when_processing_then_skips_generation() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(FixedTextExtractor("x".repeat(199)));
    let llm = Arc::new(MockLlmClient::sample_quiz());
    let service = quiz_service(extractor, Arc::clone(&llm));
    let upload = Upload::from_bytes("notes.pdf", b"%PDF").unwrap();

    let err = service.process(Some(upload)).await.unwrap_err();

    assert!(matches!(
        err,
        QuizError::InsufficientContent {
            chars: 199,
            min_chars: 200
        }
    ));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_very_long_text_when_processing_then_reports_clamped_char_count() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(FixedTextExtractor(lorem_ipsum(150_000)));
    let service = quiz_service(
        extractor,
        Arc::new(MockLlmClient::returning(quiz_json(8).to_string())),
    );
    let upload = Upload::from_bytes("book.pdf", b"%PDF").unwrap();

    let outcome = service.process(Some(upload)).await.unwrap();

    assert_eq!(outcome.chars, 120_000);
    assert_eq!(outcome.quiz.as_value(), &quiz_json(8));
}

#[tokio::test]
async fn given_corrupt_docx_when_processing_then_reports_extraction_failure() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(DocxExtractor::new());
    let service = quiz_service(extractor, Arc::new(MockLlmClient::sample_quiz()));
    let upload = Upload::from_bytes("broken.docx", b"PK not really a zip").unwrap();

    let err = service.process(Some(upload)).await.unwrap_err();

    assert!(matches!(err, QuizError::Extraction(_)));
    assert!(err.to_string().starts_with("Failed to extract text: docx"));
}

#[tokio::test]
async fn given_extension_with_disabled_extractor_when_processing_then_reports_unsupported() {
    let extractor: Arc<dyn TextExtractor> = Arc::new(FormatDispatcher::new());
    let service = quiz_service(extractor, Arc::new(MockLlmClient::sample_quiz()));
    let upload = Upload::from_bytes("notes.txt", lorem_ipsum(400).as_bytes()).unwrap();

    let err = service.process(Some(upload)).await.unwrap_err();

    assert!(matches!(err, QuizError::UnsupportedFormat));
}
