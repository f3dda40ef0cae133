//! Configuration for recommendation queries

use serde::{Deserialize, Serialize};

/// Default size of the neighbor pool
pub const DEFAULT_NEIGHBORS: usize = 2;

/// Configuration for the recommendation engine
///
/// # Examples
///
/// ```
/// use bookgraph_recommender::RecommenderConfig;
///
/// let config = RecommenderConfig::default();
/// assert_eq!(config.neighbors, 2);
///
/// let config = RecommenderConfig::with_neighbors(5);
/// assert_eq!(config.neighbors, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Number of most similar users consulted when no explicit k is given
    /// Default: 2
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,
}

fn default_neighbors() -> usize {
    DEFAULT_NEIGHBORS
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            neighbors: DEFAULT_NEIGHBORS,
        }
    }
}

impl RecommenderConfig {
    /// Create a configuration with the given neighbor pool size
    pub fn with_neighbors(neighbors: usize) -> Self {
        Self { neighbors }
    }
}
