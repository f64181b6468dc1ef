use std::sync::Arc;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::QuizService;

/// Shared by every handler; cloning only bumps the service's reference count.
pub struct AppState<E: ?Sized, L: ?Sized>
where
    E: TextExtractor,
    L: LlmClient,
{
    pub quiz_service: Arc<QuizService<E, L>>,
}

impl<E: ?Sized, L: ?Sized> Clone for AppState<E, L>
where
    E: TextExtractor,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            quiz_service: Arc::clone(&self.quiz_service),
        }
    }
}
