//! Error types for small-world
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for point operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Top-level error type for search operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// The run configuration was rejected before the search started
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation received input it cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rejection-resampling could loop (practically) forever with this law
    #[error(
        "Potential non-termination: {law} law accepts at worst {acceptance:.3e} of draws \
         under unbounded rejection-resampling"
    )]
    PotentialNonTermination {
        /// Which law triggered the check ("local" or "distant")
        law: &'static str,
        /// Worst-case per-draw acceptance probability
        acceptance: f64,
    },

    /// Point error
    #[error("Point error: {0}")]
    Genome(#[from] GenomeError),
}

/// Result type alias for search operations
pub type SearchOutcome<T> = Result<T, SearchError>;
