use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Cannot load quiz catalog: {0}")]
    CatalogLoad(String),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Quiz {index} not found ({len} quizzes available)")]
    QuizNotFound { index: usize, len: usize },

    #[error("Question {index} not found ({len} questions in quiz)")]
    QuestionNotFound { index: usize, len: usize },

    #[error("Option {option} not found for question {question}")]
    OptionNotFound { question: usize, option: usize },

    #[error("Quiz is not complete: {remaining} questions unanswered")]
    SessionIncomplete { remaining: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Parse(format!("JSON: {}", err))
    }
}

impl From<serde_yaml::Error> for QuizError {
    fn from(err: serde_yaml::Error) -> Self {
        QuizError::Parse(format!("YAML: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
