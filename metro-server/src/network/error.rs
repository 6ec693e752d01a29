//! Line data loading errors.

use std::path::PathBuf;

/// Errors that stop the network from loading at all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The line data directory does not exist
    #[error("line data directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// The line data directory exists but could not be listed
    #[error("failed to read line data directory {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that cause a single line file to be skipped.
#[derive(Debug, thiserror::Error)]
pub enum LineFileError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File parsed, but the top level is not an array of records
    #[error("expected a JSON array of station records")]
    NotAnArray,
}
