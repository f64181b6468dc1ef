use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::QuizError;
use crate::domain::Upload;
use crate::presentation::state::AppState;

/// Multipart field the client sends the document in.
pub const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct QuizResponse {
    pub ok: bool,
    pub filename: String,
    pub chars: usize,
    pub quiz: serde_json::Value,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<E, L>(
    State(state): State<AppState<E, L>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let upload = match multipart {
        Ok(multipart) => {
            match stage_upload(multipart, state.quiz_service.limits().max_file_bytes).await {
                Ok(upload) => upload,
                Err(e) => return error_response(&e),
            }
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not multipart");
            None
        }
    };

    match state.quiz_service.process(upload).await {
        Ok(outcome) => {
            tracing::info!(filename = %outcome.filename, chars = outcome.chars, "Quiz request served");
            (
                StatusCode::OK,
                Json(QuizResponse {
                    ok: true,
                    filename: outcome.filename,
                    chars: outcome.chars,
                    quiz: outcome.quiz.into_value(),
                }),
            )
                .into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Streams the chosen file part into a fresh temporary file.
///
/// The part named [`FILE_FIELD`] wins; otherwise the first part that carries
/// a filename is used. Parts without a filename are skipped. Reading stops
/// as soon as the part exceeds `limit_bytes`.
async fn stage_upload(
    mut multipart: Multipart,
    limit_bytes: u64,
) -> Result<Option<Upload>, QuizError> {
    let mut fallback: Option<Upload> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit_bytes))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let is_file_field = field.name() == Some(FILE_FIELD);

        if !is_file_field && fallback.is_some() {
            continue;
        }

        tracing::debug!(filename = %filename, field = ?field.name(), "Staging upload");

        let mut upload = Upload::create(filename).map_err(|e| QuizError::Upload(e.to_string()))?;

        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, limit_bytes))?
        {
            let within_limit = upload
                .append_within_limit(&chunk, limit_bytes)
                .map_err(|e| QuizError::Upload(e.to_string()))?;
            if !within_limit {
                break;
            }
        }

        if is_file_field {
            return Ok(Some(upload));
        }
        fallback = Some(upload);
    }

    Ok(fallback)
}

fn multipart_error(error: MultipartError, limit_bytes: u64) -> QuizError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        QuizError::FileTooLarge { limit_bytes }
    } else {
        tracing::error!(error = %error, "Failed to read multipart");
        QuizError::Upload(format!("Failed to read multipart: {}", error))
    }
}

pub fn status_for(error: &QuizError) -> StatusCode {
    match error {
        QuizError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        QuizError::InsufficientContent { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        QuizError::NoFile
        | QuizError::UnsupportedFormat
        | QuizError::Extraction(_)
        | QuizError::GenerationFailure(_)
        | QuizError::InvalidModelOutput
        | QuizError::InvalidQuizShape(_)
        | QuizError::Upload(_) => StatusCode::BAD_REQUEST,
    }
}

fn error_response(error: &QuizError) -> Response {
    let status = status_for(error);
    tracing::warn!(status = status.as_u16(), error = %error, "Quiz request failed");

    (
        status,
        Json(ErrorResponse {
            ok: false,
            error: error.to_string(),
        }),
    )
        .into_response()
}
