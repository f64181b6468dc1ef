use std::sync::Arc;

use crate::application::ports::{ExtractionError, LlmClient, TextExtractor};
use crate::domain::{ContentType, Document, Quiz, Upload};

use super::output_validator::{OutputValidationError, validate_quiz_output};
use super::quiz_generator::QuizGenerator;
use super::text_normalizer::{DEFAULT_MAX_CHARS, normalize_extracted_text};

pub const DEFAULT_MAX_FILE_BYTES: u64 = 25 * 1024 * 1024;
pub const DEFAULT_MIN_CHARS: usize = 200;

/// Size bounds applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizLimits {
    pub max_file_bytes: u64,
    pub max_chars: usize,
    pub min_chars: usize,
}

impl Default for QuizLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_chars: DEFAULT_MAX_CHARS,
            min_chars: DEFAULT_MIN_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub filename: String,
    pub chars: usize,
    pub quiz: Quiz,
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("No file uploaded")]
    NoFile,
    #[error("File too large (max {}MB)", .limit_bytes / (1024 * 1024))]
    FileTooLarge { limit_bytes: u64 },
    #[error("Unsupported file type. Use PDF, DOCX, or TXT.")]
    UnsupportedFormat,
    #[error("Not enough readable text. If this is a scanned PDF, OCR is needed.")]
    InsufficientContent { chars: usize, min_chars: usize },
    #[error("Failed to extract text: {0}")]
    Extraction(String),
    #[error("{0}")]
    GenerationFailure(String),
    #[error("Model did not return valid JSON")]
    InvalidModelOutput,
    #[error("Model returned a malformed quiz: {0}")]
    InvalidQuizShape(String),
    #[error("{0}")]
    Upload(String),
}

/// Runs one upload through extract → normalize → generate → validate.
pub struct QuizService<E: ?Sized, L: ?Sized>
where
    E: TextExtractor,
    L: LlmClient,
{
    extractor: Arc<E>,
    generator: QuizGenerator<L>,
    limits: QuizLimits,
    enforce_shape: bool,
}

impl<E: ?Sized, L: ?Sized> QuizService<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub fn new(
        extractor: Arc<E>,
        generator: QuizGenerator<L>,
        limits: QuizLimits,
        enforce_shape: bool,
    ) -> Self {
        Self {
            extractor,
            generator,
            limits,
            enforce_shape,
        }
    }

    pub fn limits(&self) -> QuizLimits {
        self.limits
    }

    /// Handles one request. The staged upload is released after the
    /// pipeline finishes, whatever its outcome; a failed release is logged
    /// and never replaces the pipeline's own result.
    pub async fn process(&self, upload: Option<Upload>) -> Result<QuizOutcome, QuizError> {
        let upload = upload.ok_or(QuizError::NoFile)?;

        let result = self.run(&upload).await;

        if let Err(e) = upload.release() {
            tracing::warn!(error = %e, "Failed to release staged upload");
        }

        result
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(filename = %upload.filename(), size_bytes = upload.size_bytes())
    )]
    async fn run(&self, upload: &Upload) -> Result<QuizOutcome, QuizError> {
        if upload.size_bytes() > self.limits.max_file_bytes {
            tracing::warn!(
                limit_bytes = self.limits.max_file_bytes,
                "Upload exceeds size limit"
            );
            return Err(QuizError::FileTooLarge {
                limit_bytes: self.limits.max_file_bytes,
            });
        }

        let content_type =
            ContentType::from_filename(upload.filename()).ok_or(QuizError::UnsupportedFormat)?;

        let data = upload
            .read_bytes()
            .await
            .map_err(|e| QuizError::Upload(e.to_string()))?;
        let document = Document::new(upload.filename().to_string(), content_type, data.len() as u64);

        let raw_text = self
            .extractor
            .extract_text(&data, &document)
            .await
            .map_err(|e| match e {
                ExtractionError::Unsupported(_) => QuizError::UnsupportedFormat,
                other => QuizError::Extraction(other.to_string()),
            })?;

        let text = normalize_extracted_text(&raw_text, self.limits.max_chars);
        let chars = text.char_count();
        tracing::info!(
            document_id = %document.id,
            raw_len = raw_text.len(),
            chars,
            "Text extracted and normalized"
        );

        if chars < self.limits.min_chars {
            return Err(QuizError::InsufficientContent {
                chars,
                min_chars: self.limits.min_chars,
            });
        }

        let raw_output = self.generator.generate(&text).await.map_err(|e| {
            tracing::error!(error = %e, "Quiz generation failed");
            QuizError::GenerationFailure(e.to_string())
        })?;

        let quiz = validate_quiz_output(&raw_output, self.enforce_shape).map_err(|e| {
            tracing::warn!(error = %e, "Rejected model output");
            match e {
                OutputValidationError::InvalidJson => QuizError::InvalidModelOutput,
                OutputValidationError::InvalidShape(shape) => {
                    QuizError::InvalidQuizShape(shape.to_string())
                }
            }
        })?;

        tracing::info!(document_id = %document.id, chars, "Quiz generated");

        Ok(QuizOutcome {
            filename: upload.filename().to_string(),
            chars,
            quiz,
        })
    }
}
