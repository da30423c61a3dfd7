use std::io;

use clap::Parser;

use quizdeck::catalog::QuizCatalog;
use quizdeck::cli::{Cli, Command};
use quizdeck::config::Config;
use quizdeck::console::Console;
use quizdeck::error::Result;
use quizdeck::history::{HistoryStore, LoadStatus};
use quizdeck::source;
use quizdeck::storage::{FileStorage, MemoryStorage, Storage};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env().with_cli(Cli::parse());

    let catalog_path = source::resolve_catalog(&config.catalog).unwrap_or_else(|e| {
        log::warn!("{}", e);
        config.catalog.clone()
    });
    let catalog = QuizCatalog::spawn(catalog_path);

    if config.ephemeral {
        run_with(&config, catalog, HistoryStore::open(MemoryStorage::new()))
    } else {
        log::debug!("History directory: {}", config.data_dir.display());
        let storage = FileStorage::new(config.data_dir.clone());
        run_with(&config, catalog, HistoryStore::open(storage))
    }
}

fn run_with<S: Storage>(
    config: &Config,
    mut catalog: QuizCatalog,
    mut history: HistoryStore<S>,
) -> Result<()> {
    if let LoadStatus::Reset(reason) = history.load_status() {
        eprintln!("Warning: saved history was unreadable and has been reset ({})", reason);
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    if matches!(config.command, Command::List | Command::Take { .. }) {
        if let Some(e) = catalog.load_error() {
            eprintln!("Warning: {}", e);
        }
    }

    match config.command {
        Command::List => console.print_list(catalog.quizzes()),
        Command::Take { number } => {
            let quiz = catalog.get(number.wrapping_sub(1))?.clone();
            console.take_quiz(quiz, &mut history).map(|_| ())
        }
        Command::History => console.print_history(&history.list()),
        Command::Shell => console.run_shell(&mut catalog, &mut history),
    }
}
