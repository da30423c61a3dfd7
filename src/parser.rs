use std::path::Path;

use crate::error::{QuizError, Result};
use crate::model::Quiz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            _ => Err(QuizError::UnsupportedFormat(format!(
                "{} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Parse a serialized array of quiz records.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<Quiz>> {
    let quizzes: Vec<Quiz> = match format {
        CatalogFormat::Json => serde_json::from_str(content)?,
        CatalogFormat::Yaml => {
            // An empty YAML document is an empty catalog, not a parse error.
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_yaml::from_str(content)?
            }
        }
    };

    for (i, quiz) in quizzes.iter().enumerate() {
        for (j, q) in quiz.questions.iter().enumerate() {
            if !q.options.iter().any(|o| o.is_correct) {
                log::warn!(
                    "Quiz {} ({:?}) question {} has no correct option",
                    i,
                    quiz.title,
                    j + 1
                );
            }
        }
    }

    Ok(quizzes)
}

pub fn parse_catalog_file(path: &Path) -> Result<Vec<Quiz>> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        QuizError::CatalogLoad(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_catalog(&content, format)
}
