use std::path::PathBuf;

use quizdeck::catalog::QuizCatalog;
use quizdeck::error::QuizError;
use quizdeck::model::Quiz;

#[test]
fn test_load_json_fixture() {
    let mut catalog = QuizCatalog::load(PathBuf::from("fixtures/quizzes.json"));
    assert!(catalog.load_error().is_none());
    assert_eq!(catalog.len(), 2);

    let geo = catalog.get(0).unwrap();
    assert_eq!(geo.title, "Geo");
    assert_eq!(geo.questions.len(), 2);
    assert_eq!(geo.questions[1].options[1].text, "Tiber");
    assert_eq!(geo.questions[1].is_correct_option(1), Some(true));

    assert_eq!(catalog.get(1).unwrap().max_score(), 3);
}

#[test]
fn test_load_yaml_fixture() {
    let mut catalog = QuizCatalog::spawn(PathBuf::from("fixtures/quizzes.yaml"));
    let quiz = catalog.get(0).unwrap();
    assert_eq!(quiz.title, "Rust basics");
    assert_eq!(quiz.questions[0].options.len(), 3);
    // isCorrect defaults to false when omitted
    assert_eq!(quiz.questions[0].is_correct_option(2), Some(false));
    assert_eq!(quiz.questions[1].is_correct_option(1), Some(true));
}

#[test]
fn test_lookup_past_end_is_not_found() {
    let mut catalog = QuizCatalog::load(PathBuf::from("fixtures/quizzes.json"));
    assert!(matches!(
        catalog.get(2),
        Err(QuizError::QuizNotFound { index: 2, len: 2 })
    ));
}

#[test]
fn test_added_quiz_is_not_written_back() {
    let mut catalog = QuizCatalog::load(PathBuf::from("fixtures/quizzes.json"));
    let idx = catalog.add(Quiz::new("Scratch", vec![]));
    assert_eq!(idx, 2);
    assert_eq!(catalog.get(2).unwrap().title, "Scratch");

    let mut reloaded = QuizCatalog::load(PathBuf::from("fixtures/quizzes.json"));
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn test_unsupported_extension_leaves_catalog_empty() {
    let mut catalog = QuizCatalog::load(PathBuf::from("fixtures/quizzes.txt"));
    assert!(catalog.is_empty());
    assert!(matches!(
        catalog.load_error(),
        Some(QuizError::UnsupportedFormat(_))
    ));
}
