//! Similarity ranking between one user and every other user

use crate::RecommendError;
use bookgraph_domain::{jaccard, ReadingIndex};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Another user and their similarity to the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    /// User name
    pub name: String,

    /// Jaccard similarity in [0.0, 1.0]
    pub score: f64,
}

impl Neighbor {
    /// Ranking order: score descending, then name ascending
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Scores a target user against every other known user
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityRanker;

impl SimilarityRanker {
    /// Create a ranker
    pub fn new() -> Self {
        Self
    }

    /// Similarity of `target` to each other user, keyed by user name
    ///
    /// Contains one entry per other user, including zero scores. The target
    /// is never part of its own result.
    ///
    /// # Errors
    ///
    /// Returns `RecommendError::UserNotFound` if `target` is not registered.
    pub fn scores<I: ReadingIndex>(
        &self,
        index: &I,
        target: &str,
    ) -> Result<BTreeMap<String, f64>, RecommendError> {
        let target_books = index
            .books_read(target)
            .ok_or_else(|| RecommendError::UserNotFound(target.to_string()))?;

        Ok(self.score_against(index, target, target_books))
    }

    /// Similarity of every user other than `target` to an already resolved
    /// read-set
    pub fn score_against<I: ReadingIndex>(
        &self,
        index: &I,
        target: &str,
        target_books: &BTreeSet<String>,
    ) -> BTreeMap<String, f64> {
        index
            .user_names()
            .filter(|name| *name != target)
            .filter_map(|name| {
                index
                    .books_read(name)
                    .map(|books| (name.to_string(), jaccard(target_books, books)))
            })
            .collect()
    }

    /// Rank an already resolved set of scores: highest first, ties by name
    pub fn rank(&self, scores: BTreeMap<String, f64>) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = scores
            .into_iter()
            .map(|(name, score)| Neighbor { name, score })
            .collect();

        neighbors.sort_by(Neighbor::rank_cmp);
        neighbors
    }

    /// Other users ordered by similarity to `target`
    ///
    /// Highest score first; equal scores are ordered by name ascending.
    pub fn ranked<I: ReadingIndex>(
        &self,
        index: &I,
        target: &str,
    ) -> Result<Vec<Neighbor>, RecommendError> {
        Ok(self.rank(self.scores(index, target)?))
    }

    /// The `k` users most similar to `target`
    ///
    /// Returns every other user when `k` exceeds their number.
    pub fn nearest<I: ReadingIndex>(
        &self,
        index: &I,
        target: &str,
        k: usize,
    ) -> Result<Vec<Neighbor>, RecommendError> {
        let mut neighbors = self.ranked(index, target)?;
        neighbors.truncate(k);
        Ok(neighbors)
    }
}
