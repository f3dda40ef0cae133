//! Recommend command implementation.

use crate::cli::RecommendArgs;
use crate::error::Result;
use crate::library::Library;
use crate::output::Formatter;
use bookgraph_recommender::{RecommendError, Recommendation, RecommendationEngine};

/// Execute the recommend command.
pub fn execute_recommend(
    args: RecommendArgs,
    library: &Library,
    engine: &RecommendationEngine,
    formatter: &Formatter,
) -> Result<()> {
    let k = args.neighbors.unwrap_or(engine.config().neighbors);
    let rec = recommend_or_empty(library, engine, &args.user, k, formatter);
    let rec = truncate(rec, args.limit);

    println!("{}", formatter.format_recommendation(&rec)?);
    Ok(())
}

/// Run a recommendation, turning an unknown user into a warning and an
/// empty result.
pub fn recommend_or_empty(
    library: &Library,
    engine: &RecommendationEngine,
    user: &str,
    k: usize,
    formatter: &Formatter,
) -> Recommendation {
    match engine.explain(&library.catalog, user, k) {
        Ok(rec) => rec,
        Err(e @ RecommendError::UserNotFound(_)) => {
            eprintln!("{}", formatter.warning(&e.to_string()));
            Recommendation {
                user: user.to_string(),
                neighbors: Vec::new(),
                books: Vec::new(),
            }
        }
    }
}

/// Keep only the first `limit` books, if a limit is given.
fn truncate(mut rec: Recommendation, limit: Option<usize>) -> Recommendation {
    if let Some(limit) = limit {
        rec.books.truncate(limit);
    }
    rec
}
