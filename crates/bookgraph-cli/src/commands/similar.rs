//! Similar command implementation.

use crate::cli::SimilarArgs;
use crate::error::Result;
use crate::library::Library;
use crate::output::Formatter;
use bookgraph_recommender::{Neighbor, SimilarityRanker};

/// Execute the similar command.
pub fn execute_similar(args: SimilarArgs, library: &Library, formatter: &Formatter) -> Result<()> {
    let neighbors = rank_or_empty(library, &args.user, args.top, formatter);

    println!("{}", formatter.format_neighbors(&args.user, &neighbors)?);
    Ok(())
}

/// Rank every other user against `user`, keeping the first `top` if given.
///
/// An unknown user prints a warning and ranks nobody.
pub fn rank_or_empty(
    library: &Library,
    user: &str,
    top: Option<usize>,
    formatter: &Formatter,
) -> Vec<Neighbor> {
    let mut neighbors = match SimilarityRanker::new().ranked(&library.catalog, user) {
        Ok(neighbors) => neighbors,
        Err(e) => {
            eprintln!("{}", formatter.warning(&e.to_string()));
            Vec::new()
        }
    };

    if let Some(top) = top {
        neighbors.truncate(top);
    }
    neighbors
}
