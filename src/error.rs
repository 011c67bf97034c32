//! Error types for linecensus

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a tree or saving a report
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Scan root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Failed to write a report file
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for linecensus operations
pub type Result<T> = std::result::Result<T, ScanError>;
