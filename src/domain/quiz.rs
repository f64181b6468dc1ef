use serde_json::Value;

pub const MIN_QUESTIONS: usize = 5;
pub const MAX_QUESTIONS: usize = 10;
pub const MIN_CHOICES: usize = 3;
pub const MAX_CHOICES: usize = 5;

/// A quiz as produced by the generator: whatever JSON value the model returned.
///
/// The value is kept verbatim so the caller receives exactly what was parsed.
/// [`Quiz::validate_shape`] checks it against the question contract without
/// rewriting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz(Value);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizShapeError {
    #[error("quiz must be a JSON array of questions or an object with a \"questions\" array")]
    NotAQuestionList,
    #[error("quiz must contain 5-10 questions, got {0}")]
    QuestionCount(usize),
    #[error("question {index} is not an object")]
    NotAnObject { index: usize },
    #[error("question {index} is missing a valid \"{field}\"")]
    InvalidField { index: usize, field: &'static str },
    #[error("question {index} must have 3-5 choices, got {count}")]
    ChoiceCount { index: usize, count: usize },
    #[error("question {index} has answerIndex {answer_index} outside 0..{choices}")]
    AnswerIndexOutOfRange {
        index: usize,
        answer_index: i64,
        choices: usize,
    },
}

impl Quiz {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn question_list(&self) -> Option<&Vec<Value>> {
        match &self.0 {
            Value::Array(items) => Some(items),
            Value::Object(map) => map.get("questions").and_then(Value::as_array),
            _ => None,
        }
    }

    /// Checks question count, per-question fields, choice count and answer
    /// bounds. Returns the number of questions on success.
    pub fn validate_shape(&self) -> Result<usize, QuizShapeError> {
        let questions = self.question_list().ok_or(QuizShapeError::NotAQuestionList)?;

        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&questions.len()) {
            return Err(QuizShapeError::QuestionCount(questions.len()));
        }

        for (index, question) in questions.iter().enumerate() {
            validate_question(index, question)?;
        }

        Ok(questions.len())
    }
}

fn validate_question(index: usize, question: &Value) -> Result<(), QuizShapeError> {
    let fields = question
        .as_object()
        .ok_or(QuizShapeError::NotAnObject { index })?;

    let has_text = fields
        .get("question")
        .and_then(Value::as_str)
        .is_some_and(|q| !q.trim().is_empty());
    if !has_text {
        return Err(QuizShapeError::InvalidField {
            index,
            field: "question",
        });
    }

    let choices = fields
        .get("choices")
        .and_then(Value::as_array)
        .filter(|c| c.iter().all(Value::is_string))
        .ok_or(QuizShapeError::InvalidField {
            index,
            field: "choices",
        })?;
    if !(MIN_CHOICES..=MAX_CHOICES).contains(&choices.len()) {
        return Err(QuizShapeError::ChoiceCount {
            index,
            count: choices.len(),
        });
    }

    let answer_index = fields
        .get("answerIndex")
        .and_then(Value::as_i64)
        .ok_or(QuizShapeError::InvalidField {
            index,
            field: "answerIndex",
        })?;
    if answer_index < 0 || answer_index as usize >= choices.len() {
        return Err(QuizShapeError::AnswerIndexOutOfRange {
            index,
            answer_index,
            choices: choices.len(),
        });
    }

    if !fields.get("explanation").is_some_and(Value::is_string) {
        return Err(QuizShapeError::InvalidField {
            index,
            field: "explanation",
        });
    }

    Ok(())
}
