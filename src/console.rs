use std::io::{BufRead, Write};

use crate::authoring::QuizDraft;
use crate::catalog::QuizCatalog;
use crate::error::{QuizError, Result};
use crate::history::HistoryStore;
use crate::model::{HistoryEntry, Quiz};
use crate::session::{AnswerOutcome, QuizSession};
use crate::storage::Storage;
use crate::timefmt::{format_percentage, format_short};

/// Line-oriented front end over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `msg` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, msg: &str) -> Result<Option<String>> {
        write!(self.out, "{}", msg)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn print_list(&mut self, quizzes: &[Quiz]) -> Result<()> {
        if quizzes.is_empty() {
            writeln!(self.out, "No quizzes available.")?;
            return Ok(());
        }
        for (i, quiz) in quizzes.iter().enumerate() {
            writeln!(
                self.out,
                "{:>3}. {} ({} questions)",
                i + 1,
                quiz.title,
                quiz.questions.len()
            )?;
        }
        Ok(())
    }

    pub fn print_history(&mut self, entries: &[HistoryEntry]) -> Result<()> {
        if entries.is_empty() {
            writeln!(self.out, "No quiz history yet.")?;
            return Ok(());
        }
        for e in entries {
            writeln!(
                self.out,
                "{}  {}  {}/{}",
                format_short(&e.date),
                e.quiz_title,
                e.score,
                e.max_score
            )?;
        }
        Ok(())
    }

    /// Run `quiz` question by question and record the result.
    ///
    /// Returns `None` when input ends before the quiz is complete; nothing is
    /// recorded in that case.
    pub fn take_quiz<S: Storage>(
        &mut self,
        quiz: Quiz,
        history: &mut HistoryStore<S>,
    ) -> Result<Option<HistoryEntry>> {
        let mut session = QuizSession::new(quiz);
        session.start();
        writeln!(self.out, "\n== {} ==", session.quiz().title)?;

        let total = session.quiz().questions.len();
        for qi in 0..total {
            let question = session.quiz().questions[qi].clone();
            writeln!(self.out, "\nQuestion {}/{}: {}", qi + 1, total, question.text)?;
            for (oi, o) in question.options.iter().enumerate() {
                writeln!(self.out, "  {}) {}", oi + 1, o.text)?;
            }

            loop {
                let Some(line) = self.prompt("Your answer: ")? else {
                    writeln!(self.out, "\nQuiz abandoned.")?;
                    return Ok(None);
                };
                let choice = match line.parse::<usize>() {
                    Ok(n) if n >= 1 => n - 1,
                    _ => {
                        writeln!(self.out, "Enter an option number.")?;
                        continue;
                    }
                };
                match session.choose(qi, choice) {
                    Ok(AnswerOutcome::Recorded { correct: true }) => {
                        writeln!(self.out, "Correct!")?;
                    }
                    Ok(AnswerOutcome::Recorded { correct: false }) => {
                        let right: Vec<&str> = question
                            .options
                            .iter()
                            .filter(|o| o.is_correct)
                            .map(|o| o.text.as_str())
                            .collect();
                        writeln!(self.out, "Wrong. Correct answer: {}", right.join(", "))?;
                    }
                    Ok(AnswerOutcome::AlreadyAnswered) => {}
                    Err(QuizError::OptionNotFound { .. }) => {
                        writeln!(self.out, "No such option.")?;
                        continue;
                    }
                    Err(e) => return Err(e),
                }
                break;
            }
        }

        writeln!(
            self.out,
            "\nScore: {}/{} ({})",
            session.score(),
            session.max_score(),
            format_percentage(session.percentage())
        )?;

        let recorded = session.record(history)?;
        if let Some(ref e) = recorded.persist_error {
            writeln!(self.out, "Warning: result not saved: {}", e)?;
        }
        Ok(Some(recorded.entry))
    }

    /// Ask for a new quiz. Returns `None` when input ends or the draft fails
    /// its presence checks.
    pub fn create_quiz(&mut self) -> Result<Option<Quiz>> {
        let mut draft = QuizDraft::new();
        let Some(title) = self.prompt("Quiz title: ")? else {
            return Ok(None);
        };
        draft.set_title(title);

        loop {
            let Some(text) = self.prompt("Question text (empty to finish): ")? else {
                return Ok(None);
            };
            if text.is_empty() {
                break;
            }
            let qi = draft.add_question();
            draft.set_question_text(qi, text)?;

            let mut oi = 0;
            loop {
                let Some(opt) = self.prompt(&format!("  Option {} (empty to finish): ", oi + 1))?
                else {
                    return Ok(None);
                };
                if opt.is_empty() {
                    break;
                }
                let Some(flag) = self.prompt("  Correct? [y/N]: ")? else {
                    return Ok(None);
                };
                let is_correct = matches!(flag.to_ascii_lowercase().as_str(), "y" | "yes");
                if oi > 0 {
                    draft.add_option(qi)?;
                }
                draft.set_option(qi, oi, opt, is_correct)?;
                oi += 1;
            }
        }

        match draft.build() {
            Ok(quiz) => Ok(Some(quiz)),
            Err(QuizError::Validation(msg)) => {
                writeln!(self.out, "Quiz not created: {}", msg)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Interactive menu until `q` or end of input.
    pub fn run_shell<S: Storage>(
        &mut self,
        catalog: &mut QuizCatalog,
        history: &mut HistoryStore<S>,
    ) -> Result<()> {
        if let Some(e) = catalog.load_error() {
            writeln!(self.out, "Warning: {}", e)?;
        }

        loop {
            writeln!(self.out, "\n[l]ist  [t]ake N  [c]reate  [h]istory  [q]uit")?;
            let Some(line) = self.prompt("> ")? else {
                return Ok(());
            };
            let mut parts = line.split_whitespace();
            let cmd = parts.next().unwrap_or("");
            let arg = parts.next();

            match cmd {
                "l" | "list" => self.print_list(catalog.quizzes())?,
                "t" | "take" => {
                    let Some(number) = arg.and_then(|a| a.parse::<usize>().ok()) else {
                        writeln!(self.out, "Usage: take N")?;
                        continue;
                    };
                    let quiz = match catalog.get(number.wrapping_sub(1)) {
                        Ok(q) => q.clone(),
                        Err(QuizError::QuizNotFound { len, .. }) => {
                            writeln!(self.out, "No quiz number {} ({} available)", number, len)?;
                            continue;
                        }
                        Err(e) => return Err(e),
                    };
                    self.take_quiz(quiz, history)?;
                }
                "c" | "create" => {
                    if let Some(quiz) = self.create_quiz()? {
                        let title = quiz.title.clone();
                        let idx = catalog.add(quiz);
                        writeln!(self.out, "Added quiz {}: {}", idx + 1, title)?;
                    }
                }
                "h" | "history" => self.print_history(&history.list())?,
                "q" | "quit" => return Ok(()),
                "" => {}
                other => writeln!(self.out, "Unknown command: {}", other)?,
            }
        }
    }
}
