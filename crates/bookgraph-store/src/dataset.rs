//! Dataset files describing a catalog
//!
//! A dataset lists books, users and reads. Loading applies them in that
//! order; duplicates and reads that reference unknown entities are reported
//! and skipped rather than aborting the load.
//!
//! ```toml
//! books = ["Don Quixote", "Moby Dick"]
//! users = ["Ishmael"]
//! reads = [
//!     { user = "Ishmael", book = "Moby Dick" },
//! ]
//! ```

use crate::{Catalog, StoreError};
use bookgraph_domain::{LibraryStore, Registration};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A catalog description loaded from TOML or JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Book titles to register
    #[serde(default)]
    pub books: Vec<String>,

    /// User names to register
    #[serde(default)]
    pub users: Vec<String>,

    /// Reads to record
    #[serde(default)]
    pub reads: Vec<ReadRecord>,
}

/// A single "user has read book" entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRecord {
    /// User name
    pub user: String,

    /// Book title
    pub book: String,
}

/// Summary of applying a dataset to a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Books newly registered
    pub books_added: usize,

    /// Users newly registered
    pub users_added: usize,

    /// Registrations skipped because the entity already existed
    pub duplicates: usize,

    /// Reads recorded
    pub reads_recorded: usize,

    /// Entries the store refused (unknown user or book)
    pub rejected: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} books, {} users, {} reads loaded ({} duplicates, {} rejected)",
            self.books_added, self.users_added, self.reads_recorded, self.duplicates, self.rejected
        )
    }
}

impl Dataset {
    /// Parse a dataset from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a dataset file, choosing the format from its extension
    ///
    /// `.toml` and `.json` are recognised.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(StoreError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Apply this dataset to a store
    ///
    /// Registers books, then users, then records reads. Store errors are
    /// logged and counted in `LoadReport::rejected`.
    pub fn apply<S>(&self, store: &mut S) -> LoadReport
    where
        S: LibraryStore,
        S::Error: fmt::Display,
    {
        let mut report = LoadReport::default();

        for title in &self.books {
            match store.register_book(title) {
                Ok(outcome) => {
                    tracing::debug!("Register book '{}': {}", title, outcome.as_str());
                    match outcome {
                        Registration::Added => report.books_added += 1,
                        Registration::Duplicate => report.duplicates += 1,
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to register book '{}': {}", title, e);
                    report.rejected += 1;
                }
            }
        }

        for name in &self.users {
            match store.register_user(name) {
                Ok(outcome) => {
                    tracing::debug!("Register user '{}': {}", name, outcome.as_str());
                    match outcome {
                        Registration::Added => report.users_added += 1,
                        Registration::Duplicate => report.duplicates += 1,
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to register user '{}': {}", name, e);
                    report.rejected += 1;
                }
            }
        }

        for read in &self.reads {
            match store.record_read(&read.user, &read.book) {
                Ok(()) => report.reads_recorded += 1,
                Err(e) => {
                    tracing::warn!("Skipping read {} -> {}: {}", read.user, read.book, e);
                    report.rejected += 1;
                }
            }
        }

        tracing::info!("Dataset applied: {}", report);
        report
    }

    /// Build a fresh catalog from this dataset
    pub fn to_catalog(&self) -> (Catalog, LoadReport) {
        let mut catalog = Catalog::new();
        let report = self.apply(&mut catalog);
        (catalog, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookgraph_domain::ReadingIndex;

    const SAMPLE: &str = r#"
books = ["A", "B", "C", "A"]
users = ["X", "Y"]
reads = [
    { user = "X", book = "A" },
    { user = "Y", book = "A" },
    { user = "Y", book = "D" },
    { user = "W", book = "B" },
]
"#;

    #[test]
    fn test_parse_toml() {
        let dataset = Dataset::from_toml_str(SAMPLE).unwrap();
        assert_eq!(dataset.books.len(), 4);
        assert_eq!(dataset.users, vec!["X", "Y"]);
        assert_eq!(
            dataset.reads[0],
            ReadRecord {
                user: "X".to_string(),
                book: "A".to_string()
            }
        );
    }

    #[test]
    fn test_parse_json() {
        let dataset =
            Dataset::from_json_str(r#"{"books": ["A"], "reads": [{"user": "X", "book": "A"}]}"#)
                .unwrap();
        assert_eq!(dataset.books, vec!["A"]);
        assert!(dataset.users.is_empty());
        assert_eq!(dataset.reads.len(), 1);
    }

    #[test]
    fn test_apply_counts_outcomes() {
        let dataset = Dataset::from_toml_str(SAMPLE).unwrap();
        let (catalog, report) = dataset.to_catalog();

        assert_eq!(report.books_added, 3);
        assert_eq!(report.users_added, 2);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.reads_recorded, 2);
        assert_eq!(report.rejected, 2);

        assert_eq!(catalog.reader_count("A"), 2);
        assert!(catalog.is_consistent());
    }

    #[test]
    fn test_report_display() {
        let report = LoadReport {
            books_added: 3,
            users_added: 2,
            duplicates: 1,
            reads_recorded: 4,
            rejected: 0,
        };
        assert_eq!(
            report.to_string(),
            "3 books, 2 users, 4 reads loaded (1 duplicates, 0 rejected)"
        );
    }
}
