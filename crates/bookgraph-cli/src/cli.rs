//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Bookgraph CLI - Book recommendations from shared reading histories.
#[derive(Debug, Parser)]
#[command(name = "bookgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (.toml or .json); defaults to the bundled sample library
    #[arg(short, long, global = true, env = "BOOKGRAPH_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one value per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend books for a user
    Recommend(RecommendArgs),

    /// Rank other users by similarity to a user
    Similar(SimilarArgs),

    /// List users who share at least one book with another user
    RepeatedReaders,

    /// Show catalog sizes and load outcome
    Stats,

    /// Ask for a username and print recommendations (default)
    Prompt,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// User name
    pub user: String,

    /// Number of similar users to consult (defaults to the configured value)
    #[arg(short = 'k', long = "neighbors")]
    pub neighbors: Option<usize>,

    /// Maximum number of books to display
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the similar command.
#[derive(Debug, Parser)]
pub struct SimilarArgs {
    /// User name
    pub user: String,

    /// Only show the N most similar users
    #[arg(short, long)]
    pub top: Option<usize>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["bookgraph"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_recommend_command() {
        let cli = Cli::parse_from(["bookgraph", "recommend", "Shreya Bastia", "-k", "3", "--limit", "5"]);
        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.user, "Shreya Bastia");
                assert_eq!(args.neighbors, Some(3));
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("Expected Recommend command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bookgraph", "repeated-readers", "--format", "json", "-vv"]);
        assert!(matches!(cli.command, Some(Command::RepeatedReaders)));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, OutputFormat::Quiet);
    }
}
