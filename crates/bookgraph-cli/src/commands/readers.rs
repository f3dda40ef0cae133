//! Repeated-readers command implementation.

use crate::error::Result;
use crate::library::Library;
use crate::output::Formatter;
use bookgraph_recommender::RepeatedReaderDetector;

/// Execute the repeated-readers command.
pub fn execute_repeated_readers(library: &Library, formatter: &Formatter) -> Result<()> {
    let readers = RepeatedReaderDetector::new().detect(&library.catalog);
    println!("{}", formatter.format_users(&readers)?);
    Ok(())
}
