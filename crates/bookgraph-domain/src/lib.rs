//! Bookgraph Domain Layer
//!
//! This crate contains the domain model for Bookgraph, a small recommender over
//! the bipartite "has-read" relation between readers and books. It has ZERO
//! external dependencies and defines the entities, value objects and trait
//! interfaces that the storage, analysis and CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Book**: a title plus the set of users who have read it (its reader-set)
//! - **User**: a name plus the set of titles they have read (their read-set)
//! - **Reading relation**: the two mirrored sets, always kept in agreement
//! - **Similarity**: Jaccard overlap between two read-sets
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain logic only
//! - Storage implementations live in `bookgraph-store`
//! - Trait definitions for every seam between layers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod registration;
pub mod similarity;
pub mod traits;

// Re-exports for convenience
pub use entity::{Book, User};
pub use registration::Registration;
pub use similarity::jaccard;
pub use traits::{LibraryStore, ReadingIndex};
