//! Similarity module
//!
//! Jaccard overlap between two read-sets:
//!
//! ```text
//! score = |A ∩ B| / |A ∪ B| = common / (|A| + |B| - common)
//! ```
//!
//! Two empty sets have a union of size zero; their score is defined as 0.0.

use std::collections::BTreeSet;

/// Compute the Jaccard similarity of two sets
///
/// Always returns a value in `[0.0, 1.0]`. Returns `0.0` when both sets are
/// empty.
///
/// # Examples
///
/// ```
/// use bookgraph_domain::jaccard;
/// use std::collections::BTreeSet;
///
/// let x: BTreeSet<&str> = ["A", "B"].into_iter().collect();
/// let y: BTreeSet<&str> = ["A", "B", "C"].into_iter().collect();
/// assert!((jaccard(&x, &y) - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let common = small.iter().filter(|item| large.contains(item)).count();
    let union = a.len() + b.len() - common;

    if union == 0 {
        return 0.0;
    }

    common as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(items: &[&'static str]) -> BTreeSet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_empty_sets_score_zero() {
        let empty: BTreeSet<&str> = BTreeSet::new();
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn test_one_empty_set_scores_zero() {
        assert_eq!(jaccard(&set(&["A"]), &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_identical_sets_score_one() {
        assert_eq!(jaccard(&set(&["A", "B"]), &set(&["A", "B"])), 1.0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        assert_eq!(jaccard(&set(&["A", "B"]), &set(&["C"])), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let score = jaccard(&set(&["A", "B"]), &set(&["A", "B", "C"]));
        assert!((score - 2.0 / 3.0).abs() < 1e-12);
    }

    proptest! {
        /// Property: score stays within [0, 1]
        #[test]
        fn test_score_in_unit_interval(
            a in proptest::collection::btree_set(0u8..20, 0..10),
            b in proptest::collection::btree_set(0u8..20, 0..10),
        ) {
            let score = jaccard(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        /// Property: argument order does not matter
        #[test]
        fn test_score_is_symmetric(
            a in proptest::collection::btree_set(0u8..20, 0..10),
            b in proptest::collection::btree_set(0u8..20, 0..10),
        ) {
            prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
        }

        /// Property: a non-empty set is fully similar to itself
        #[test]
        fn test_self_similarity(
            a in proptest::collection::btree_set(0u8..20, 1..10),
        ) {
            prop_assert_eq!(jaccard(&a, &a), 1.0);
        }
    }
}
