//! Error handling for dataset loading.
//!
//! Only the loading path can fail; every query, insight, and view-building
//! function in this crate is total and returns plain values. A load failure
//! is terminal for the session, so each variant carries the file that broke.

use std::path::PathBuf;

/// Specialized error type for dashboard dataset loading
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Error opening or reading a dataset file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Error decoding dataset JSON
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the file (or dataset label for in-memory input) that failed to decode
        path: PathBuf,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// Error starting an async runtime for a blocking load
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result type for dashboard loading operations
pub type Result<T> = std::result::Result<T, DashboardError>;
