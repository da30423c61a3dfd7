use std::env;
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::source::CATALOG_FILE;
use crate::storage::default_data_dir;

pub const CATALOG_ENV: &str = "QUIZDECK_CATALOG";
pub const DATA_DIR_ENV: &str = "QUIZDECK_DATA_DIR";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub catalog: PathBuf,
    pub data_dir: PathBuf,
    pub ephemeral: bool,
    pub command: Command,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            catalog: lookup(CATALOG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(CATALOG_FILE)),
            data_dir: lookup(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            ephemeral: false,
            command: Command::Shell,
        }
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(catalog) = cli.catalog {
            self.catalog = catalog;
        }
        if let Some(dir) = cli.data_dir {
            self.data_dir = dir;
        }
        self.ephemeral = cli.ephemeral;
        if let Some(command) = cli.command {
            self.command = command;
        }
        self
    }
}
