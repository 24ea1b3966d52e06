//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they parse core values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid time of day {0:?}: expected HHMM between 0000 and 2359")]
    InvalidTime(String),

    #[error("invalid road direction {0:?}: expected \"one-way\" or \"two-way\"")]
    InvalidDirection(String),

    #[error("unknown area category {0:?}")]
    InvalidArea(String),
}

/// Shorthand result type for `rn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
