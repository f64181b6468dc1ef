use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::QuizLimits;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, upload_handler};
use crate::presentation::state::AppState;

/// Room for multipart boundaries and part headers on top of the file cap.
pub const MULTIPART_SLACK_BYTES: usize = 1024 * 1024;

/// Request body cap for `/upload`: the file limit plus multipart framing.
pub fn upload_body_limit(limits: &QuizLimits) -> usize {
    usize::try_from(limits.max_file_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_SLACK_BYTES)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_router<E, L>(state: AppState<E, L>) -> Router
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let body_limit = upload_body_limit(&state.quiz_service.limits());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/upload",
            post(upload_handler::<E, L>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer())
                .map_response(|res: axum::response::Response<_>| res.map(axum::body::Body::new))
                .layer(trace_layer)
                .layer(middleware::from_fn(request_id_middleware)),
        )
        .with_state(state)
}
