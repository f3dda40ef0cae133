//! Bookgraph Recommender
//!
//! Read-only analysis passes over the reading relation.
//!
//! # Overview
//!
//! - **Similarity ranking**: Jaccard overlap between one user's read-set and
//!   every other user's
//! - **Recommendation**: k-nearest-neighbors over those scores, then a vote
//!   over the neighbors' books the target has not read
//! - **Repeated readers**: users who share at least one book with someone else
//!
//! Every pass is generic over `ReadingIndex` and never mutates the store.
//!
//! ## Ordering
//!
//! | Output | Primary key | Tie-break |
//! |--------|-------------|-----------|
//! | Neighbors | score, descending | user name, ascending |
//! | Recommended books | vote count, descending | title, ascending |
//! | Repeated readers | user name, ascending | - |
//!
//! # Usage
//!
//! ```
//! use bookgraph_domain::LibraryStore;
//! use bookgraph_recommender::{RecommendationEngine, RepeatedReaderDetector};
//! use bookgraph_store::Catalog;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::new();
//! for title in ["A", "B", "C"] {
//!     catalog.register_book(title)?;
//! }
//! for name in ["X", "Y", "Z"] {
//!     catalog.register_user(name)?;
//! }
//! for (user, book) in [("X", "A"), ("X", "B"), ("Y", "A"), ("Y", "B"), ("Y", "C"), ("Z", "C")] {
//!     catalog.record_read(user, book)?;
//! }
//!
//! let engine = RecommendationEngine::default_config();
//! assert_eq!(engine.recommend(&catalog, "X", 1)?, vec!["C".to_string()]);
//!
//! let readers = RepeatedReaderDetector::new().detect(&catalog);
//! assert_eq!(readers.len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod ranker;

pub use config::RecommenderConfig;
pub use detector::RepeatedReaderDetector;
pub use engine::{BookVote, Recommendation, RecommendationEngine};
pub use error::RecommendError;
pub use ranker::{Neighbor, SimilarityRanker};
