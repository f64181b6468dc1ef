mod output_validator;
mod quiz_generator;
pub mod quiz_prompt;
mod quiz_service;
mod text_normalizer;

pub use output_validator::{OutputValidationError, validate_quiz_output};
pub use quiz_generator::{DEFAULT_GENERATION_TIMEOUT, GenerationError, QuizGenerator};
pub use quiz_service::{
    DEFAULT_MAX_FILE_BYTES, DEFAULT_MIN_CHARS, QuizError, QuizLimits, QuizOutcome, QuizService,
};
pub use text_normalizer::{DEFAULT_MAX_CHARS, normalize_extracted_text};
