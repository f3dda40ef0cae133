//! Loading the catalog the commands run against.

use crate::error::Result;
use bookgraph_store::{Catalog, Dataset, LoadReport};
use std::path::Path;

/// Bundled sample library, used when no dataset is configured.
pub const SAMPLE_LIBRARY: &str = include_str!("sample_library.toml");

/// A loaded catalog together with how it was loaded.
#[derive(Debug, Clone)]
pub struct Library {
    /// The populated catalog
    pub catalog: Catalog,

    /// Outcome counts from applying the dataset
    pub report: LoadReport,

    /// Where the data came from (file path or "sample")
    pub source: String,
}

impl Library {
    /// Load from `path`, or the bundled sample when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::sample(),
        }
    }

    /// Load a dataset file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let dataset = Dataset::from_file(path)?;
        Ok(Self::from_dataset(&dataset, path.display().to_string()))
    }

    /// Load the bundled sample library.
    pub fn sample() -> Result<Self> {
        let dataset = Dataset::from_toml_str(SAMPLE_LIBRARY)?;
        Ok(Self::from_dataset(&dataset, "sample".to_string()))
    }

    fn from_dataset(dataset: &Dataset, source: String) -> Self {
        let (catalog, report) = dataset.to_catalog();
        tracing::info!("Loaded library from {}: {}", source, report);
        Self {
            catalog,
            report,
            source,
        }
    }
}
