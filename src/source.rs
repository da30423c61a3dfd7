use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};

/// Well-known catalog file name.
pub const CATALOG_FILE: &str = "quizzes.json";

const CANDIDATES: [&str; 3] = [CATALOG_FILE, "quizzes.yaml", "quizzes.yml"];

/// Resolve a user-supplied path to a catalog file.
///
/// A file is taken as is. A directory is searched for the well-known catalog
/// names, JSON first.
pub fn resolve_catalog(path: &Path) -> Result<PathBuf> {
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| QuizError::CatalogLoad(format!("Cannot get cwd: {}", e)))?
            .join(path)
    } else {
        path.to_path_buf()
    };

    if path.is_file() {
        Ok(path)
    } else if path.is_dir() {
        find_catalog_file(&path)
    } else {
        Err(QuizError::CatalogLoad(format!(
            "Path not found: {}",
            path.display()
        )))
    }
}

fn find_catalog_file(dir: &Path) -> Result<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| {
            QuizError::CatalogLoad(format!(
                "No catalog found in {} (looked for {})",
                dir.display(),
                CANDIDATES.join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quizdeck_source_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_directory_prefers_json() {
        let dir = scratch("prefers_json");
        fs::write(dir.join("quizzes.yaml"), "[]").unwrap();
        fs::write(dir.join("quizzes.json"), "[]").unwrap();
        assert_eq!(resolve_catalog(&dir).unwrap(), dir.join("quizzes.json"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_directory_falls_back_to_yaml() {
        let dir = scratch("yaml_fallback");
        fs::write(dir.join("quizzes.yml"), "[]").unwrap();
        assert_eq!(resolve_catalog(&dir).unwrap(), dir.join("quizzes.yml"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = scratch("empty");
        assert!(matches!(
            resolve_catalog(&dir),
            Err(QuizError::CatalogLoad(_))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_explicit_file_is_kept() {
        let dir = scratch("explicit");
        let file = dir.join("custom.yaml");
        fs::write(&file, "[]").unwrap();
        assert_eq!(resolve_catalog(&file).unwrap(), file);
        let _ = fs::remove_dir_all(&dir);
    }
}
