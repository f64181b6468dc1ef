use crate::domain::{Quiz, QuizShapeError};

#[derive(Debug, thiserror::Error)]
pub enum OutputValidationError {
    #[error("model did not return valid JSON")]
    InvalidJson,
    #[error("malformed quiz: {0}")]
    InvalidShape(#[from] QuizShapeError),
}

/// Strictly parses raw model output as JSON.
///
/// No fence stripping, no lenient parsing, no partial recovery. The parser's
/// own error detail is dropped. With `enforce_shape` the parsed value must
/// also satisfy the question contract.
pub fn validate_quiz_output(raw: &str, enforce_shape: bool) -> Result<Quiz, OutputValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|_| OutputValidationError::InvalidJson)?;
    let quiz = Quiz::new(value);

    if enforce_shape {
        let question_count = quiz.validate_shape()?;
        tracing::debug!(question_count, "Quiz shape validated");
    }

    Ok(quiz)
}
