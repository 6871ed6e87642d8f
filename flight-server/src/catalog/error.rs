//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the flight catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed or a record is invalid
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
