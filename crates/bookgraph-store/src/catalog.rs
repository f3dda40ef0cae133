//! In-memory catalog of books, users and the reads between them

use crate::StoreError;
use bookgraph_domain::{Book, LibraryStore, ReadingIndex, Registration, User};
use std::collections::{BTreeMap, BTreeSet};

/// In-memory implementation of `LibraryStore` and `ReadingIndex`
///
/// The catalog exclusively owns its `Book` and `User` records and only hands
/// out shared references to them, so the two sides of the reading relation
/// can only change together through `record_read`:
///
/// ```text
/// title ∈ users[u].books_read  ⇔  u ∈ books[title].readers
/// ```
///
/// # Thread Safety
///
/// Mutation takes `&mut self`. Callers sharing a catalog across threads must
/// wrap it in a single writer lock.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: BTreeMap<String, Book>,
    users: BTreeMap<String, User>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a book by title
    pub fn book(&self, title: &str) -> Option<&Book> {
        self.books.get(title)
    }

    /// Look up a user by name
    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    /// All books, ordered by title
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    /// All users, ordered by name
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.values()
    }

    /// Number of registered books
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of recorded (user, book) pairs
    pub fn read_count(&self) -> usize {
        self.users.values().map(|u| u.books_read().len()).sum()
    }

    /// Check that every read-set and reader-set mirror each other
    pub fn is_consistent(&self) -> bool {
        let forward = self.users.values().all(|user| {
            user.books_read().iter().all(|title| {
                self.books
                    .get(title)
                    .is_some_and(|book| book.readers().contains(user.name()))
            })
        });

        let backward = self.books.values().all(|book| {
            book.readers().iter().all(|name| {
                self.users
                    .get(name)
                    .is_some_and(|user| user.has_read(book.title()))
            })
        });

        forward && backward
    }
}

impl LibraryStore for Catalog {
    type Error = StoreError;

    fn register_book(&mut self, title: &str) -> Result<Registration, Self::Error> {
        if self.books.contains_key(title) {
            tracing::warn!("Book already exists: {}", title);
            return Ok(Registration::Duplicate);
        }

        self.books.insert(title.to_string(), Book::new(title));
        tracing::debug!("Book added: {}", title);
        Ok(Registration::Added)
    }

    fn register_user(&mut self, name: &str) -> Result<Registration, Self::Error> {
        if self.users.contains_key(name) {
            tracing::warn!("User already exists: {}", name);
            return Ok(Registration::Duplicate);
        }

        self.users.insert(name.to_string(), User::new(name));
        tracing::debug!("User added: {}", name);
        Ok(Registration::Added)
    }

    fn record_read(&mut self, user: &str, title: &str) -> Result<(), Self::Error> {
        // Resolve both sides before touching either
        let Some(user_record) = self.users.get_mut(user) else {
            tracing::warn!("Cannot record read of '{}': user not found: {}", title, user);
            return Err(StoreError::UserNotFound(user.to_string()));
        };
        let Some(book_record) = self.books.get_mut(title) else {
            tracing::warn!("Cannot record read by '{}': book not found: {}", user, title);
            return Err(StoreError::BookNotFound(title.to_string()));
        };

        user_record.add_book(title);
        book_record.add_reader(user);
        tracing::debug!("Recorded read: {} -> {}", user, title);
        Ok(())
    }

    fn has_book(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    fn has_user(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }
}

impl ReadingIndex for Catalog {
    fn user_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.users.keys().map(String::as_str)
    }

    fn book_titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.books.keys().map(String::as_str)
    }

    fn books_read(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.users.get(user).map(User::books_read)
    }

    fn readers_of(&self, title: &str) -> Option<&BTreeSet<String>> {
        self.books.get(title).map(Book::readers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        for title in ["A", "B", "C"] {
            catalog.register_book(title).unwrap();
        }
        for name in ["X", "Y", "Z"] {
            catalog.register_user(name).unwrap();
        }
        catalog
    }

    #[test]
    fn test_register_book_twice_is_duplicate() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.register_book("A").unwrap(), Registration::Added);
        assert_eq!(catalog.register_book("A").unwrap(), Registration::Duplicate);
        assert_eq!(catalog.book_count(), 1);
    }

    #[test]
    fn test_register_user_twice_is_duplicate() {
        let mut catalog = Catalog::new();
        assert!(catalog.register_user("X").unwrap().is_added());
        assert!(catalog.register_user("X").unwrap().is_duplicate());
        assert_eq!(catalog.user_count(), 1);
    }

    #[test]
    fn test_duplicate_book_keeps_readers() {
        let mut catalog = sample();
        catalog.record_read("X", "A").unwrap();
        catalog.register_book("A").unwrap();
        assert_eq!(catalog.reader_count("A"), 1);
    }

    #[test]
    fn test_record_read_updates_both_sides() {
        let mut catalog = sample();
        catalog.record_read("X", "A").unwrap();

        assert!(catalog.user("X").unwrap().has_read("A"));
        assert!(catalog.book("A").unwrap().readers().contains("X"));
        assert!(catalog.is_consistent());
    }

    #[test]
    fn test_record_read_is_idempotent() {
        let mut catalog = sample();
        catalog.record_read("X", "A").unwrap();
        catalog.record_read("X", "A").unwrap();
        assert_eq!(catalog.read_count(), 1);
        assert_eq!(catalog.reader_count("A"), 1);
    }

    #[test]
    fn test_record_read_unknown_user() {
        let mut catalog = sample();
        let err = catalog.record_read("Nobody", "A").unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(ref name) if name == "Nobody"));
        assert_eq!(catalog.reader_count("A"), 0);
    }

    #[test]
    fn test_record_read_unknown_book() {
        let mut catalog = sample();
        let err = catalog.record_read("X", "Missing").unwrap_err();
        assert!(matches!(err, StoreError::BookNotFound(_)));
        assert!(err.is_not_found());
        assert!(catalog.books_read("X").unwrap().is_empty());
    }

    #[test]
    fn test_lookups() {
        let catalog = sample();
        assert!(catalog.has_book("A"));
        assert!(!catalog.has_book("D"));
        assert!(catalog.has_user("Z"));
        assert!(!catalog.has_user("W"));
        assert!(catalog.books_read("W").is_none());
        assert!(catalog.readers_of("D").is_none());
    }

    #[test]
    fn test_names_are_ordered() {
        let mut catalog = Catalog::new();
        for name in ["Zed", "Amy", "Mo"] {
            catalog.register_user(name).unwrap();
        }
        let names: Vec<&str> = catalog.user_names().collect();
        assert_eq!(names, vec!["Amy", "Mo", "Zed"]);
    }
}
