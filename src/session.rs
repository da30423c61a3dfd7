use std::collections::BTreeSet;

use crate::error::{QuizError, Result};
use crate::history::{HistoryStore, Recorded};
use crate::model::Quiz;
use crate::score::Score;
use crate::storage::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Recorded { correct: bool },
    /// The question was answered before (or the session is over); nothing changed.
    AlreadyAnswered,
}

/// One attempt at a quiz.
///
/// Each question contributes to the score at most once: the first answer
/// counts and later answers to the same question are ignored.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    score: Score,
    answered: BTreeSet<usize>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        let state = initial_state(&quiz);
        Self {
            quiz,
            score: Score::default(),
            answered: BTreeSet::new(),
            state,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn start(&mut self) {
        if self.state == SessionState::NotStarted {
            self.state = SessionState::InProgress;
        }
    }

    /// Clear answers and score so the quiz can be taken again.
    pub fn restart(&mut self) {
        self.score.reset();
        self.answered.clear();
        self.state = initial_state(&self.quiz);
    }

    pub fn answer(&mut self, question_index: usize, is_correct: bool) -> Result<AnswerOutcome> {
        let len = self.quiz.questions.len();
        if question_index >= len {
            return Err(QuizError::QuestionNotFound {
                index: question_index,
                len,
            });
        }

        if self.state == SessionState::Complete || !self.answered.insert(question_index) {
            log::debug!("Question {} already answered, ignoring", question_index);
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        if is_correct {
            self.score.increment();
        }

        self.state = if self.answered.len() == len {
            SessionState::Complete
        } else {
            SessionState::InProgress
        };

        Ok(AnswerOutcome::Recorded {
            correct: is_correct,
        })
    }

    /// Answer `question_index` with the option at `option_index`.
    pub fn choose(&mut self, question_index: usize, option_index: usize) -> Result<AnswerOutcome> {
        let len = self.quiz.questions.len();
        let question = self
            .quiz
            .questions
            .get(question_index)
            .ok_or(QuizError::QuestionNotFound {
                index: question_index,
                len,
            })?;
        let is_correct = question
            .is_correct_option(option_index)
            .ok_or(QuizError::OptionNotFound {
                question: question_index,
                option: option_index,
            })?;
        self.answer(question_index, is_correct)
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn is_answered(&self, question_index: usize) -> bool {
        self.answered.contains(&question_index)
    }

    pub fn answered(&self) -> &BTreeSet<usize> {
        &self.answered
    }

    pub fn remaining(&self) -> usize {
        self.quiz.questions.len() - self.answered.len()
    }

    pub fn score(&self) -> u32 {
        self.score.get()
    }

    pub fn max_score(&self) -> u32 {
        self.quiz.max_score()
    }

    pub fn percentage(&self) -> f64 {
        let max = self.max_score();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.score()) / f64::from(max) * 100.0
    }

    /// Append the final result to `history`.
    pub fn record<S: Storage>(&self, history: &mut HistoryStore<S>) -> Result<Recorded> {
        if !self.is_complete() {
            return Err(QuizError::SessionIncomplete {
                remaining: self.remaining(),
            });
        }
        Ok(history.append(&self.quiz.title, self.score(), self.max_score()))
    }
}

fn initial_state(quiz: &Quiz) -> SessionState {
    if quiz.questions.is_empty() {
        SessionState::Complete
    } else {
        SessionState::NotStarted
    }
}
