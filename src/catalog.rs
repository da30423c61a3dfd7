use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use crate::error::{QuizError, Result};
use crate::model::Quiz;
use crate::parser;

/// In-memory collection of quizzes, filled once from a static catalog file.
///
/// Loading runs on a background thread. Every read waits for that load to
/// finish (or fail) before answering; after the first wait the catalog is
/// plain memory. Quizzes added with [`QuizCatalog::add`] are never written
/// back to the catalog file.
#[derive(Debug)]
pub struct QuizCatalog {
    quizzes: Vec<Quiz>,
    pending: Option<mpsc::Receiver<Result<Vec<Quiz>>>>,
    load_error: Option<QuizError>,
}

impl QuizCatalog {
    /// Start loading `path` in the background and return immediately.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = parser::parse_catalog_file(&path);
            // The catalog may have been dropped before the load finished.
            let _ = tx.send(result);
        });

        Self {
            quizzes: Vec::new(),
            pending: Some(rx),
            load_error: None,
        }
    }

    /// Load `path` and wait for the result.
    pub fn load(path: PathBuf) -> Self {
        let mut catalog = Self::spawn(path);
        catalog.wait();
        catalog
    }

    pub fn from_quizzes(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes,
            pending: None,
            load_error: None,
        }
    }

    /// Block until the initial load has resolved. No-op afterwards.
    pub fn wait(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };

        let result = rx
            .recv()
            .unwrap_or_else(|_| Err(QuizError::CatalogLoad("loader thread exited".to_string())));

        match result {
            Ok(loaded) => {
                log::info!("Quizzes loaded successfully ({} quizzes)", loaded.len());
                self.quizzes = loaded;
            }
            Err(e) => {
                log::error!("Failed to load quizzes: {}", e);
                self.load_error = Some(e);
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.pending.is_none()
    }

    /// The error from the initial load, if it failed.
    pub fn load_error(&mut self) -> Option<&QuizError> {
        self.wait();
        self.load_error.as_ref()
    }

    pub fn quizzes(&mut self) -> &[Quiz] {
        self.wait();
        &self.quizzes
    }

    pub fn get(&mut self, index: usize) -> Result<&Quiz> {
        self.wait();
        let len = self.quizzes.len();
        self.quizzes
            .get(index)
            .ok_or(QuizError::QuizNotFound { index, len })
    }

    /// Append a quiz to this catalog. Returns its index.
    pub fn add(&mut self, quiz: Quiz) -> usize {
        self.wait();
        log::debug!("Quiz added: {:?}", quiz.title);
        self.quizzes.push(quiz);
        self.quizzes.len() - 1
    }

    pub fn len(&mut self) -> usize {
        self.wait();
        self.quizzes.len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }
}
