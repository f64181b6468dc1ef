use doc2quiz::application::services::QuizLimits;
use doc2quiz::presentation::{Environment, LlmProvider, Settings};

#[test]
fn given_base_config_when_loading_then_uses_documented_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 4000);
    assert_eq!(settings.llm.provider, LlmProvider::OpenAi);
    assert_eq!(settings.llm.model, "gpt-4o-mini");
    assert_eq!(settings.llm.temperature, None);
    assert!(settings.quiz.enforce_shape);
    assert!(settings.extraction.enable_pdf);
    assert!(settings.extraction.enable_docx);
    assert!(settings.extraction.enable_text);
    assert_eq!(settings.quiz_limits(), QuizLimits::default());
    assert_eq!(settings.generation_timeout().as_secs(), 120);
}
