use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ttlbench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that abort a benchmark run.
///
/// A record type missing from a document is not an error; lookups report it
/// as `None`.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Fixture file does not exist
    #[error("fixture not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Fixture exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fixture is not a valid document of the expected shape
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
