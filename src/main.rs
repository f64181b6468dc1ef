use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use doc2quiz::application::ports::LlmClient;
use doc2quiz::application::services::{QuizGenerator, QuizService};
use doc2quiz::infrastructure::llm::{MockLlmClient, OpenAiClient};
use doc2quiz::infrastructure::observability::{TracingConfig, init_tracing};
use doc2quiz::infrastructure::text_processing::ExtractorFactory;
use doc2quiz::presentation::{AppState, Environment, LlmProvider, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    )?;

    let llm_client: Arc<dyn LlmClient> = match settings.llm.provider {
        LlmProvider::Mock => {
            tracing::warn!("Mock LLM provider enabled; every upload returns the sample quiz");
            Arc::new(
                MockLlmClient::sample_quiz()
                    .with_delay(Duration::from_millis(settings.llm.mock_delay_ms)),
            )
        }
        LlmProvider::OpenAi => {
            if settings.llm.api_key.is_empty() {
                tracing::warn!("No LLM API key configured; generation requests will fail");
            }
            tracing::info!(model = %settings.llm.model, base_url = %settings.llm.base_url, "Using OpenAI-compatible provider");
            Arc::new(
                OpenAiClient::with_base_url(
                    settings.llm.api_key.clone(),
                    settings.llm.model.clone(),
                    &settings.llm.base_url,
                )
                .with_temperature(settings.llm.temperature),
            )
        }
    };

    let extractor = ExtractorFactory::create(&settings.extraction)?;
    let generator = QuizGenerator::new(llm_client, settings.generation_timeout());

    let quiz_service = Arc::new(QuizService::new(
        extractor,
        generator,
        settings.quiz_limits(),
        settings.quiz.enforce_shape,
    ));

    let router = create_router(AppState { quiz_service });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
