mod health;
mod upload;

pub use health::health_handler;
pub use upload::{ErrorResponse, FILE_FIELD, QuizResponse, status_for, upload_handler};
