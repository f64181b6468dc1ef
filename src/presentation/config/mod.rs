mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment, UnknownEnvironment};
pub use settings::{
    ExtractionSettings, LimitsSettings, LlmProvider, LlmSettings, LoggingSettings, QuizSettings,
    ServerSettings, Settings, SettingsError,
};
