use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::model::{AnswerOption, Question, Quiz};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionDraft {
    pub text: String,
    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<OptionDraft>,
}

impl Default for QuestionDraft {
    /// A new question starts with one blank option.
    fn default() -> Self {
        Self {
            text: String::new(),
            options: vec![OptionDraft::default()],
        }
    }
}

/// A quiz being written. Nothing is checked until [`QuizDraft::build`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

impl QuizDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the index of the new question.
    pub fn add_question(&mut self) -> usize {
        self.questions.push(QuestionDraft::default());
        log::debug!("Question added. Total questions: {}", self.questions.len());
        self.questions.len() - 1
    }

    pub fn remove_question(&mut self, index: usize) -> Result<QuestionDraft> {
        if index >= self.questions.len() {
            return Err(QuizError::QuestionNotFound {
                index,
                len: self.questions.len(),
            });
        }
        Ok(self.questions.remove(index))
    }

    pub fn set_question_text(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        self.question_mut(index)?.text = text.into();
        Ok(())
    }

    /// Returns the index of the new option.
    pub fn add_option(&mut self, question: usize) -> Result<usize> {
        let q = self.question_mut(question)?;
        q.options.push(OptionDraft::default());
        Ok(q.options.len() - 1)
    }

    pub fn set_option(
        &mut self,
        question: usize,
        option: usize,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<()> {
        let o = self
            .question_mut(question)?
            .options
            .get_mut(option)
            .ok_or(QuizError::OptionNotFound { question, option })?;
        o.text = text.into();
        o.is_correct = is_correct;
        Ok(())
    }

    pub fn remove_option(&mut self, question: usize, option: usize) -> Result<OptionDraft> {
        let q = self.question_mut(question)?;
        if option >= q.options.len() {
            return Err(QuizError::OptionNotFound { question, option });
        }
        Ok(q.options.remove(option))
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut QuestionDraft> {
        let len = self.questions.len();
        self.questions
            .get_mut(index)
            .ok_or(QuizError::QuestionNotFound { index, len })
    }

    /// Presence checks only: title, question texts and option texts must be
    /// non-blank and every question needs an option. Correctness flags are
    /// not checked.
    pub fn build(&self) -> Result<Quiz> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(QuizError::Validation("quiz title is required".to_string()));
        }

        let mut questions = Vec::with_capacity(self.questions.len());
        for (qi, q) in self.questions.iter().enumerate() {
            let text = q.text.trim();
            if text.is_empty() {
                return Err(QuizError::Validation(format!(
                    "question {} text is required",
                    qi + 1
                )));
            }
            if q.options.is_empty() {
                return Err(QuizError::Validation(format!(
                    "question {} needs at least one option",
                    qi + 1
                )));
            }

            let mut options = Vec::with_capacity(q.options.len());
            for (oi, o) in q.options.iter().enumerate() {
                let opt_text = o.text.trim();
                if opt_text.is_empty() {
                    return Err(QuizError::Validation(format!(
                        "question {} option {} text is required",
                        qi + 1,
                        oi + 1
                    )));
                }
                options.push(AnswerOption {
                    text: opt_text.to_string(),
                    is_correct: o.is_correct,
                });
            }
            questions.push(Question::new(text, options));
        }

        Ok(Quiz::new(title, questions))
    }
}
