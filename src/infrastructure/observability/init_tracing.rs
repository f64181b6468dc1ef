use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use super::TracingConfig;
use super::tracing_config::DEFAULT_FILTER;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter;
/// an unparsable configured filter falls back to the default one.
pub fn init_tracing(config: &TracingConfig, port: u16) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let output: Box<dyn Layer<Registry> + Send + Sync> = if config.json_format {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(output)
        .with(env_filter)
        .try_init()?;

    tracing::info!(
        port,
        environment = %config.environment,
        json_format = config.json_format,
        "Quiz service starting"
    );

    Ok(())
}
