use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::QuizLimits;

/// Process-wide configuration, read once at start-up.
///
/// Sources, lowest priority first: built-in defaults, `config/base`,
/// `config/{environment}`, then `APP__SECTION__KEY` environment variables.
/// `OPENAI_API_KEY` always overrides `llm.api_key` when set.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub limits: LimitsSettings,
    pub quiz: QuizSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
    /// Artificial latency for the mock provider.
    pub mock_delay_ms: u64,
}

/// `mock` returns a fixed sample quiz, for client development without credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsSettings {
    pub max_file_size_mb: u64,
    pub max_chars: usize,
    pub min_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSettings {
    pub enforce_shape: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub enable_pdf: bool,
    pub enable_docx: bool,
    pub enable_text: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Settings {
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let environment_file = format!("config/{}", environment.config_name());

        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 4000)?
            .set_default("llm.provider", "openai")?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", crate::infrastructure::llm::DEFAULT_BASE_URL)?
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.timeout_secs", 120)?
            .set_default("llm.mock_delay_ms", 0)?
            .set_default("limits.max_file_size_mb", 25)?
            .set_default("limits.max_chars", 120_000)?
            .set_default("limits.min_chars", 200)?
            .set_default("quiz.enforce_shape", true)?
            .set_default("extraction.enable_pdf", true)?
            .set_default("extraction.enable_docx", true)?
            .set_default("extraction.enable_text", true)?
            .set_default("extraction.timeout_secs", 30)?
            .set_default(
                "logging.level",
                crate::infrastructure::observability::DEFAULT_FILTER,
            )?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&environment_file).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", std::env::var("OPENAI_API_KEY").ok())?
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.limits.max_file_size_mb == 0 {
            return Err(SettingsError::Invalid(
                "limits.max_file_size_mb must be positive".to_string(),
            ));
        }
        if self.limits.min_chars > self.limits.max_chars {
            return Err(SettingsError::Invalid(format!(
                "limits.min_chars ({}) exceeds limits.max_chars ({})",
                self.limits.min_chars, self.limits.max_chars
            )));
        }
        Ok(())
    }

    pub fn quiz_limits(&self) -> QuizLimits {
        QuizLimits {
            max_file_bytes: self.limits.max_file_size_mb * 1024 * 1024,
            max_chars: self.limits.max_chars,
            min_chars: self.limits.min_chars,
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.timeout_secs)
    }
}
