//! Interactive prompt mode.
//!
//! Asks for a username and prints that user's recommendations, repeating
//! until `exit` or end of input.

use crate::commands::recommend::recommend_or_empty;
use crate::config::Config;
use crate::error::Result;
use crate::library::Library;
use crate::output::Formatter;
use bookgraph_recommender::{RecommendationEngine, RepeatedReaderDetector};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;

const PROMPT: &str = "Enter your username: ";

/// Run the interactive prompt.
pub fn run_prompt(
    library: &Library,
    engine: &RecommendationEngine,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("Bookgraph - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(true)
        .build();
    let mut editor: Editor<(), DefaultHistory> = Editor::with_config(editor_config)?;

    let history_path = history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match parse_prompt_line(line) {
                    PromptLine::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    PromptLine::Help => print_help(formatter),
                    PromptLine::RepeatedReaders => {
                        let readers = RepeatedReaderDetector::new().detect(&library.catalog);
                        print_or_report(formatter.format_users(&readers), formatter);
                    }
                    PromptLine::User(user) => {
                        let k = engine.config().neighbors;
                        let rec = recommend_or_empty(library, engine, user, k, formatter);
                        println!("Recommendations using kNN algorithm:");
                        print_or_report(formatter.format_recommendation(&rec), formatter);
                    }
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        editor.save_history(path).ok();
    }

    Ok(())
}

/// A parsed prompt line.
#[derive(Debug, PartialEq, Eq)]
enum PromptLine<'a> {
    Exit,
    Help,
    RepeatedReaders,
    User(&'a str),
}

/// Keywords take precedence; anything else is a username (which may contain spaces).
fn parse_prompt_line(line: &str) -> PromptLine<'_> {
    match line {
        "exit" | "quit" | "q" => PromptLine::Exit,
        "help" | "?" => PromptLine::Help,
        "readers" => PromptLine::RepeatedReaders,
        user => PromptLine::User(user),
    }
}

fn print_or_report(output: Result<String>, formatter: &Formatter) {
    match output {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available input:"));
    println!("  <username>   Recommend books for a user");
    println!("  readers      List users who share a book with someone else");
    println!("  help         Show this help");
    println!("  exit         Leave the prompt");
}

fn history_path() -> Option<PathBuf> {
    Config::dir().ok().map(|dir| dir.join("history.txt"))
}
