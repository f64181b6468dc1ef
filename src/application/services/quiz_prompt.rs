//! Prompt contract for quiz generation.
//!
//! Kept apart from the generator so the wording can be inspected in tests
//! without a provider.

use crate::domain::{NormalizedText, PromptMessage};

pub const SYSTEM_PROMPT: &str =
    "You generate study quizzes. You MUST return valid JSON only. No prose.";

pub const QUIZ_INSTRUCTIONS: &str = "Create a multiple-choice quiz from the content below.\n\
Rules:\n\
- Return ONLY valid JSON\n\
- 5–10 questions\n\
- Each question has: question, choices (3–5), answerIndex, explanation\n\n";

pub const CONTENT_LABEL: &str = "CONTENT:\n";

/// Builds the system + user message pair for one document.
pub fn build_quiz_prompt(content: &NormalizedText) -> Vec<PromptMessage> {
    let mut user = String::with_capacity(
        QUIZ_INSTRUCTIONS.len() + CONTENT_LABEL.len() + content.as_str().len(),
    );
    user.push_str(QUIZ_INSTRUCTIONS);
    user.push_str(CONTENT_LABEL);
    user.push_str(content.as_str());

    vec![PromptMessage::system(SYSTEM_PROMPT), PromptMessage::user(user)]
}
