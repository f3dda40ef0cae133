//! Repeated-reader detection
//!
//! A user is a repeated reader when at least one book in their read-set has
//! more than one reader, i.e. their taste overlaps with someone else's. The
//! name does not mean the same user read a book twice.

use bookgraph_domain::ReadingIndex;
use std::collections::BTreeSet;

/// Finds users who share at least one book with another user
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatedReaderDetector;

impl RepeatedReaderDetector {
    /// Create a detector
    pub fn new() -> Self {
        Self
    }

    /// Names of every repeated reader, ascending
    ///
    /// Relies on the reader-set sizes the store maintains; each user stops at
    /// the first shared book found.
    pub fn detect<I: ReadingIndex>(&self, index: &I) -> BTreeSet<String> {
        let readers: BTreeSet<String> = index
            .user_names()
            .filter(|name| {
                index
                    .books_read(name)
                    .is_some_and(|books| books.iter().any(|title| index.reader_count(title) > 1))
            })
            .map(str::to_string)
            .collect();

        tracing::info!("Found {} repeated readers", readers.len());
        readers
    }

    /// Books with more than one reader, ascending by title
    pub fn shared_books<I: ReadingIndex>(&self, index: &I) -> BTreeSet<String> {
        index
            .book_titles()
            .filter(|title| index.reader_count(title) > 1)
            .map(str::to_string)
            .collect()
    }
}
