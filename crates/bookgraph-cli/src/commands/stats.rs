//! Stats command implementation.

use crate::error::Result;
use crate::library::Library;
use crate::output::Formatter;
use bookgraph_recommender::RepeatedReaderDetector;

/// Execute the stats command.
pub fn execute_stats(library: &Library, formatter: &Formatter) -> Result<()> {
    println!("{}", render_stats(library, formatter)?);
    Ok(())
}

fn render_stats(library: &Library, formatter: &Formatter) -> Result<String> {
    let shared_books = RepeatedReaderDetector::new().shared_books(&library.catalog);
    formatter.format_stats(library, &shared_books)
}
