//! Error types for rn-io.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{source_name}: no valid road rows ({skipped} skipped)")]
    NoValidRows { source_name: String, skipped: usize },

    #[error("demand file: {0}")]
    Demand(String),

    #[error("{}: {what} not found", dir.display())]
    MissingFiles { dir: PathBuf, what: &'static str },
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
