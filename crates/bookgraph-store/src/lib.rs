//! Bookgraph Storage Layer
//!
//! Implements the `LibraryStore` and `ReadingIndex` traits with an in-memory
//! catalog, and loads catalogs from dataset files.
//!
//! # Architecture
//!
//! - `Catalog` owns every `Book` and `User` record in two ordered maps
//! - The reading relation is the pair of mirrored sets on those records,
//!   updated together inside `record_read`
//! - `Dataset` describes books, users and reads in TOML or JSON
//!
//! # Examples
//!
//! ```
//! use bookgraph_domain::{LibraryStore, ReadingIndex};
//! use bookgraph_store::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.register_book("Moby Dick").unwrap();
//! catalog.register_user("Ishmael").unwrap();
//! catalog.record_read("Ishmael", "Moby Dick").unwrap();
//! assert_eq!(catalog.reader_count("Moby Dick"), 1);
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod dataset;
pub mod error;

pub use catalog::Catalog;
pub use dataset::{Dataset, LoadReport, ReadRecord};
pub use error::StoreError;
