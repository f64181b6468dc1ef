mod document;
mod document_id;
mod normalized_text;
mod prompt_message;
mod quiz;
mod upload;

pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use normalized_text::NormalizedText;
pub use prompt_message::{MessageRole, PromptMessage};
pub use quiz::{
    MAX_CHOICES, MAX_QUESTIONS, MIN_CHOICES, MIN_QUESTIONS, Quiz, QuizShapeError,
};
pub use upload::{Upload, UploadError};
