//! Integration tests for bookgraph-recommender
//!
//! These tests run the recommendation and repeated-reader passes against a
//! real `Catalog` and check the ordering and monotonicity guarantees.

use bookgraph_domain::LibraryStore;
use bookgraph_recommender::{
    RecommendError, RecommendationEngine, RepeatedReaderDetector, SimilarityRanker,
};
use bookgraph_store::Catalog;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn build(books: &[&str], users: &[&str], reads: &[(&str, &str)]) -> Catalog {
    let mut catalog = Catalog::new();
    for title in books {
        catalog.register_book(title).unwrap();
    }
    for name in users {
        catalog.register_user(name).unwrap();
    }
    for (user, book) in reads {
        catalog.record_read(user, book).unwrap();
    }
    catalog
}

fn xyz() -> Catalog {
    build(
        &["A", "B", "C"],
        &["X", "Y", "Z"],
        &[("X", "A"), ("X", "B"), ("Y", "A"), ("Y", "B"), ("Y", "C"), ("Z", "C")],
    )
}

#[test]
fn test_x_prefers_y_and_gets_c() {
    let catalog = xyz();
    let engine = RecommendationEngine::default_config();

    let explained = engine.explain(&catalog, "X", 1).unwrap();
    assert_eq!(explained.neighbors[0].name, "Y");
    assert_eq!(engine.recommend(&catalog, "X", 1).unwrap(), vec!["C"]);
}

#[test]
fn test_repeated_readers_without_shared_c() {
    let catalog = build(
        &["A", "B", "C"],
        &["X", "Y", "Z"],
        &[("X", "A"), ("X", "B"), ("Y", "A"), ("Y", "B"), ("Z", "C")],
    );
    let readers = RepeatedReaderDetector::new().detect(&catalog);

    let expected: BTreeSet<String> = ["X", "Y"].iter().map(|s| s.to_string()).collect();
    assert_eq!(readers, expected);
}

#[test]
fn test_repeated_readers_once_c_is_shared() {
    let catalog = xyz();
    let readers = RepeatedReaderDetector::new().detect(&catalog);

    let expected: BTreeSet<String> = ["X", "Y", "Z"].iter().map(|s| s.to_string()).collect();
    assert_eq!(readers, expected);
}

#[test]
fn test_unknown_user_yields_not_found_and_empty_list() {
    let catalog = xyz();
    let engine = RecommendationEngine::default_config();

    let result = engine.recommend(&catalog, "Nobody", 3);
    assert!(matches!(result, Err(RecommendError::UserNotFound(ref name)) if name == "Nobody"));
    assert_eq!(result.unwrap_or_default(), Vec::<String>::new());
}

#[test]
fn test_k_larger_than_population_uses_everyone() {
    let catalog = xyz();
    let engine = RecommendationEngine::default_config();

    let explained = engine.explain(&catalog, "Z", 100).unwrap();
    let names: Vec<&str> = explained.neighbors.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Y", "X"]);
    // A and B are each read by both X and Y
    assert_eq!(explained.titles(), vec!["A", "B"]);
    assert!(explained.books.iter().all(|b| b.votes == 2));
}

#[test]
fn test_vote_ties_break_by_title() {
    let catalog = build(
        &["Shared", "Zebra", "Apple", "Mango"],
        &["T", "N1", "N2"],
        &[
            ("T", "Shared"),
            ("N1", "Shared"),
            ("N1", "Zebra"),
            ("N1", "Mango"),
            ("N2", "Shared"),
            ("N2", "Apple"),
            ("N2", "Mango"),
        ],
    );
    let engine = RecommendationEngine::default_config();

    let titles = engine.recommend(&catalog, "T", 2).unwrap();
    assert_eq!(titles, vec!["Mango", "Apple", "Zebra"]);
}

#[test]
fn test_users_with_empty_histories() {
    let catalog = build(&["A"], &["Quiet", "Silent"], &[]);
    let scores = SimilarityRanker::new().scores(&catalog, "Quiet").unwrap();
    assert_eq!(scores["Silent"], 0.0);

    let engine = RecommendationEngine::default_config();
    assert!(engine.recommend(&catalog, "Quiet", 1).unwrap().is_empty());
}

fn arbitrary_catalog() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec((0usize..6, 0usize..8), 0..40).prop_map(|reads| {
        let users: Vec<String> = (0..6).map(|i| format!("user{}", i)).collect();
        let books: Vec<String> = (0..8).map(|i| format!("book{}", i)).collect();

        let mut catalog = Catalog::new();
        for title in &books {
            catalog.register_book(title).unwrap();
        }
        for name in &users {
            catalog.register_user(name).unwrap();
        }
        for (u, b) in reads {
            catalog.record_read(&users[u], &books[b]).unwrap();
        }
        catalog
    })
}

proptest! {
    /// Property: the target never appears among its neighbors and never
    /// gets a book it has already read
    #[test]
    fn test_self_exclusion(catalog in arbitrary_catalog(), k in 0usize..8) {
        let engine = RecommendationEngine::default_config();
        let explained = engine.explain(&catalog, "user0", k).unwrap();

        prop_assert!(explained.neighbors.iter().all(|n| n.name != "user0"));
        let read = catalog.user("user0").unwrap();
        prop_assert!(explained.books.iter().all(|b| !read.has_read(&b.title)));
    }

    /// Property: a larger k keeps the smaller pool as a prefix and never
    /// drops a recommended book
    #[test]
    fn test_monotonic_in_k(catalog in arbitrary_catalog(), k1 in 0usize..6, extra in 1usize..6) {
        let engine = RecommendationEngine::default_config();
        let small = engine.explain(&catalog, "user0", k1).unwrap();
        let large = engine.explain(&catalog, "user0", k1 + extra).unwrap();

        prop_assert!(small.neighbors.len() <= large.neighbors.len());
        prop_assert_eq!(&small.neighbors[..], &large.neighbors[..small.neighbors.len()]);

        let large_titles: BTreeSet<String> = large.titles().into_iter().collect();
        prop_assert!(small.titles().iter().all(|t| large_titles.contains(t)));
    }

    /// Property: results are identical across repeated runs
    #[test]
    fn test_deterministic(catalog in arbitrary_catalog(), k in 0usize..8) {
        let engine = RecommendationEngine::default_config();
        let first = engine.recommend(&catalog, "user1", k).unwrap();
        let second = engine.recommend(&catalog.clone(), "user1", k).unwrap();
        prop_assert_eq!(first, second);
    }
}
