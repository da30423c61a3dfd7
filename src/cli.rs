use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quizdeck", version, about = "Terminal multiple-choice quiz runner")]
pub struct Cli {
    /// Quiz catalog file or directory [default: ./quizzes.json]
    #[arg(long, value_name = "path")]
    pub catalog: Option<PathBuf>,

    /// Directory for saved history [default: platform data directory]
    #[arg(long, value_name = "dir")]
    pub data_dir: Option<PathBuf>,

    /// Keep history in memory only for this run
    #[arg(long)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List available quizzes
    List,
    /// Take the quiz with the given number (as shown by `list`)
    Take { number: usize },
    /// Show past attempts, newest first
    History,
    /// Interactive menu (default)
    Shell,
}
