pub mod authoring;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod history;
pub mod model;
pub mod parser;
pub mod score;
pub mod session;
pub mod source;
pub mod storage;
pub mod timefmt;
