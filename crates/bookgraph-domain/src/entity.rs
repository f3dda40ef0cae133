//! Entity module - the two node kinds of the reading graph

use std::collections::BTreeSet;

/// A book in the catalog
///
/// Identified by its title. Carries the reader-set: the names of every user
/// who has read it. The reader-set mirrors `User::books_read` and is only
/// grown by the catalog that owns both records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    readers: BTreeSet<String>,
}

impl Book {
    /// Create a book with an empty reader-set
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            readers: BTreeSet::new(),
        }
    }

    /// Title (unique key)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Names of the users who have read this book
    pub fn readers(&self) -> &BTreeSet<String> {
        &self.readers
    }

    /// Number of distinct readers
    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Whether more than one user has read this book
    pub fn is_shared(&self) -> bool {
        self.readers.len() > 1
    }

    /// Add a reader, returning `false` if already present
    pub fn add_reader(&mut self, user: impl Into<String>) -> bool {
        self.readers.insert(user.into())
    }
}

/// A user (reader) in the catalog
///
/// Identified by name. Carries the read-set: the titles of every book the
/// user has read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    books_read: BTreeSet<String>,
}

impl User {
    /// Create a user with an empty read-set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books_read: BTreeSet::new(),
        }
    }

    /// Name (unique key)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Titles this user has read
    pub fn books_read(&self) -> &BTreeSet<String> {
        &self.books_read
    }

    /// Whether this user has read `title`
    pub fn has_read(&self, title: &str) -> bool {
        self.books_read.contains(title)
    }

    /// Add a title to the read-set, returning `false` if already present
    pub fn add_book(&mut self, title: impl Into<String>) -> bool {
        self.books_read.insert(title.into())
    }
}
