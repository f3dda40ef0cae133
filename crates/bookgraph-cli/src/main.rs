//! Bookgraph CLI - Book recommendations from shared reading histories.

use bookgraph_cli::commands;
use bookgraph_cli::repl;
use bookgraph_cli::{Cli, Command, Config, Formatter, Library};
use bookgraph_recommender::RecommendationEngine;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> bookgraph_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit config path must parse; the default location may be missing or broken
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring config: {}", e);
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let dataset = cli.dataset.as_deref().or(config.dataset.as_deref());
    let library = Library::load(dataset)?;
    let engine = RecommendationEngine::new(config.recommender.clone());

    match cli.command {
        None | Some(Command::Prompt) => {
            repl::run_prompt(&library, &engine, &config, &formatter)?;
        }
        Some(Command::Recommend(args)) => {
            commands::execute_recommend(args, &library, &engine, &formatter)?;
        }
        Some(Command::Similar(args)) => {
            commands::execute_similar(args, &library, &formatter)?;
        }
        Some(Command::RepeatedReaders) => {
            commands::execute_repeated_readers(&library, &formatter)?;
        }
        Some(Command::Stats) => {
            commands::execute_stats(&library, &formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr. `-v` flags win over `RUST_LOG`; the fallback is `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
