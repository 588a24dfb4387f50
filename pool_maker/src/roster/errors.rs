//! Roster error types.

use thiserror::Error;

/// Malformed competitor row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Rating field is empty
    #[error("Rating is empty")]
    EmptyRating,

    /// Rating has no year digits after the grade
    #[error("Rating {0:?} has no year")]
    MissingYear(String),

    /// Year digits are not a valid number
    #[error("Rating {0:?} has an invalid year")]
    InvalidYear(String),

    /// Field is not valid UTF-8 (1-based field number)
    #[error("Field {0} is not valid UTF-8")]
    Encoding(usize),

    /// Row does not have the expected number of fields
    #[error("Expected 4 or 5 fields, found {0}")]
    FieldCount(usize),
}

/// Roster loading errors
#[derive(Debug, Error)]
pub enum RosterError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Ranking queue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Extraction from an empty queue
    #[error("Ranking queue is empty")]
    Empty,
}
