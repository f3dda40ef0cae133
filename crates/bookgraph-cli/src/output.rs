//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::library::Library;
use bookgraph_recommender::{Neighbor, Recommendation};
use colored::*;
use std::collections::BTreeSet;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a recommendation result.
    pub fn format_recommendation(&self, rec: &Recommendation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rec)?),
            OutputFormat::Table => Ok(self.format_recommendation_table(rec)),
            OutputFormat::Quiet => Ok(rec.titles().join("\n")),
        }
    }

    fn format_recommendation_table(&self, rec: &Recommendation) -> String {
        if rec.books.is_empty() {
            return self.colorize(&format!("No recommendations for {}.", rec.user), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Title", "Votes"]);
        for (rank, book) in rec.books.iter().enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                book.title.clone(),
                book.votes.to_string(),
            ]);
        }

        let neighbors: Vec<String> = rec
            .neighbors
            .iter()
            .map(|n| format!("{} ({:.2})", n.name, n.score))
            .collect();

        format!(
            "{}\n{}",
            self.styled_table(builder),
            self.colorize(&format!("Similar readers: {}", neighbors.join(", ")), "cyan")
        )
    }

    /// Format a similarity ranking.
    pub fn format_neighbors(&self, user: &str, neighbors: &[Neighbor]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(neighbors)?),
            OutputFormat::Quiet => Ok(neighbors
                .iter()
                .map(|n| n.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if neighbors.is_empty() {
                    return Ok(self.colorize(&format!("No other readers to compare with {}.", user), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "User", "Similarity"]);
                for (rank, neighbor) in neighbors.iter().enumerate() {
                    builder.push_record([
                        (rank + 1).to_string(),
                        neighbor.name.clone(),
                        format!("{:.3}", neighbor.score),
                    ]);
                }
                Ok(self.styled_table(builder))
            }
        }
    }

    /// Format a set of user names.
    pub fn format_users(&self, users: &BTreeSet<String>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(users)?),
            OutputFormat::Quiet => Ok(users.iter().cloned().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if users.is_empty() {
                    return Ok(self.colorize("No users found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["User"]);
                for user in users {
                    builder.push_record([user.as_str()]);
                }
                Ok(format!("{}\n{} user(s)", self.styled_table(builder), users.len()))
            }
        }
    }

    /// Format catalog statistics.
    ///
    /// `shared_books` are the titles with more than one reader.
    pub fn format_stats(&self, library: &Library, shared_books: &BTreeSet<String>) -> Result<String> {
        let catalog = &library.catalog;
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "source": library.source,
                "books": catalog.book_count(),
                "users": catalog.user_count(),
                "reads": catalog.read_count(),
                "shared_books": shared_books.len(),
                "load": library.report,
            }))?),
            OutputFormat::Quiet => Ok(format!(
                "{}\n{}\n{}",
                catalog.book_count(),
                catalog.user_count(),
                catalog.read_count()
            )),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Source", library.source.as_str()]);
                builder.push_record(["Books".to_string(), catalog.book_count().to_string()]);
                builder.push_record(["Users".to_string(), catalog.user_count().to_string()]);
                builder.push_record(["Reads".to_string(), catalog.read_count().to_string()]);
                builder.push_record(["Shared books".to_string(), shared_books.len().to_string()]);
                builder.push_record(["Duplicates skipped".to_string(), library.report.duplicates.to_string()]);
                builder.push_record(["Entries rejected".to_string(), library.report.rejected.to_string()]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(format!(
                    "{}\n{}",
                    self.success(&format!("Loaded {}", library.report)),
                    table
                ))
            }
        }
    }

    fn styled_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
