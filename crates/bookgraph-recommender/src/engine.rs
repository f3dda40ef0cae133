//! k-nearest-neighbors book recommendation

use crate::{Neighbor, RecommendError, RecommenderConfig, SimilarityRanker};
use bookgraph_domain::ReadingIndex;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A candidate book and how many neighbors have read it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookVote {
    /// Book title
    pub title: String,

    /// Number of neighbors in the pool who have read this book
    pub votes: usize,
}

impl BookVote {
    /// Ranking order: votes descending, then title ascending
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .votes
            .cmp(&self.votes)
            .then_with(|| self.title.cmp(&other.title))
    }
}

/// Full result of a recommendation query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Target user
    pub user: String,

    /// Neighbor pool, most similar first
    pub neighbors: Vec<Neighbor>,

    /// Candidate books, most votes first
    pub books: Vec<BookVote>,
}

impl Recommendation {
    /// Recommended titles in rank order
    pub fn titles(&self) -> Vec<String> {
        self.books.iter().map(|b| b.title.clone()).collect()
    }

    /// Whether no book could be recommended
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Recommends books from the reading histories of the most similar users
///
/// # Algorithm
///
/// 1. Score the target against every other user (`SimilarityRanker`)
/// 2. Keep the `min(k, other users)` highest-scoring users as the pool
/// 3. Count, for each book some pool member has read and the target has not,
///    how many pool members read it
/// 4. Rank those books by count, breaking ties by title
///
/// The output is not truncated: `k` bounds the pool, not the list.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommenderConfig,
    ranker: SimilarityRanker,
}

impl RecommendationEngine {
    /// Create an engine with the given configuration
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            ranker: SimilarityRanker::new(),
        }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(RecommenderConfig::default())
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Recommend titles for `user` using a pool of `k` neighbors
    ///
    /// # Errors
    ///
    /// Returns `RecommendError::UserNotFound` if `user` is not registered.
    /// Callers wanting an empty list instead can use `unwrap_or_default()`.
    pub fn recommend<I: ReadingIndex>(
        &self,
        index: &I,
        user: &str,
        k: usize,
    ) -> Result<Vec<String>, RecommendError> {
        Ok(self.explain(index, user, k)?.titles())
    }

    /// Recommend titles for `user` using the configured pool size
    pub fn recommend_default<I: ReadingIndex>(
        &self,
        index: &I,
        user: &str,
    ) -> Result<Vec<String>, RecommendError> {
        self.recommend(index, user, self.config.neighbors)
    }

    /// Recommend for `user`, keeping the neighbor pool and vote counts
    pub fn explain<I: ReadingIndex>(
        &self,
        index: &I,
        user: &str,
        k: usize,
    ) -> Result<Recommendation, RecommendError> {
        let Some(already_read) = index.books_read(user) else {
            let e = RecommendError::UserNotFound(user.to_string());
            tracing::warn!("Cannot recommend: {}", e);
            return Err(e);
        };

        let mut neighbors = self
            .ranker
            .rank(self.ranker.score_against(index, user, already_read));
        neighbors.truncate(k);

        let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
        for neighbor in &neighbors {
            let Some(books) = index.books_read(&neighbor.name) else {
                continue;
            };
            for title in books.iter().filter(|t| !already_read.contains(*t)) {
                *tally.entry(title.as_str()).or_insert(0) += 1;
            }
        }

        let mut books: Vec<BookVote> = tally
            .into_iter()
            .map(|(title, votes)| BookVote {
                title: title.to_string(),
                votes,
            })
            .collect();
        books.sort_by(BookVote::rank_cmp);

        tracing::info!(
            "Recommended {} books for {} from {} neighbors (k={})",
            books.len(),
            user,
            neighbors.len(),
            k
        );
        tracing::debug!(
            "Neighbor pool for {}: {:?}",
            user,
            neighbors.iter().map(|n| n.name.as_str()).collect::<Vec<_>>()
        );

        Ok(Recommendation {
            user: user.to_string(),
            neighbors,
            books,
        })
    }
}
