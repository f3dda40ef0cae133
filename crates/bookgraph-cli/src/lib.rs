//! Bookgraph CLI library.
//!
//! This library provides the core functionality for the Bookgraph command-line interface,
//! including configuration management, dataset loading, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use library::Library;
pub use output::Formatter;
