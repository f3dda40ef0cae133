//! Trait definitions for the layer boundaries
//!
//! `LibraryStore` is the mutating contract implemented by the storage layer.
//! `ReadingIndex` is the read-only view the analysis passes run against.

use crate::Registration;
use std::collections::BTreeSet;

/// Trait for registering entities and recording reads
///
/// Implemented by the infrastructure layer (bookgraph-store)
pub trait LibraryStore {
    /// Error type for store operations
    type Error;

    /// Register a book with an empty reader-set
    ///
    /// Returns `Registration::Duplicate` without changing state if the title
    /// is already known.
    fn register_book(&mut self, title: &str) -> Result<Registration, Self::Error>;

    /// Register a user with an empty read-set
    ///
    /// Returns `Registration::Duplicate` without changing state if the name
    /// is already known.
    fn register_user(&mut self, name: &str) -> Result<Registration, Self::Error>;

    /// Record that `user` has read `title`
    ///
    /// Both entities must already be registered. The read-set and the
    /// reader-set are updated together or not at all.
    fn record_read(&mut self, user: &str, title: &str) -> Result<(), Self::Error>;

    /// Check whether a book is registered
    fn has_book(&self, title: &str) -> bool;

    /// Check whether a user is registered
    fn has_user(&self, name: &str) -> bool;
}

/// Read-only view over the reading relation
///
/// Iteration order of `user_names` and `book_titles` is ascending.
pub trait ReadingIndex {
    /// All registered user names
    fn user_names(&self) -> impl Iterator<Item = &str> + '_;

    /// All registered book titles
    fn book_titles(&self) -> impl Iterator<Item = &str> + '_;

    /// Read-set of a user, or `None` if the user is unknown
    fn books_read(&self, user: &str) -> Option<&BTreeSet<String>>;

    /// Reader-set of a book, or `None` if the book is unknown
    fn readers_of(&self, title: &str) -> Option<&BTreeSet<String>>;

    /// Number of distinct readers of a book (0 for unknown titles)
    fn reader_count(&self, title: &str) -> usize {
        self.readers_of(title).map_or(0, BTreeSet::len)
    }
}
