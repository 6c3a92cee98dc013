//! Library-level type definitions.

use thiserror::Error;

/// An error describing why a difficulty value could not be formatted or
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    /// The value is the special not-a-number value.
    #[error("difficulty is not a number")]
    NotANumber,
    /// The value is not of a numeric type.
    #[error("difficulty is not numeric: got {0}")]
    NonNumeric(&'static str),
    /// The difficulty string was empty.
    #[error("difficulty string is empty")]
    Empty,
    /// The difficulty string could not be parsed as a number.
    #[error("unparseable difficulty: {0}")]
    Unparseable(String),
    /// The parsed difficulty is not a finite number.
    #[error("difficulty out of range: {0}")]
    OutOfRange(String),
}

/// A difficulty-related `Result`.
pub type DifficultyResult<T> = Result<T, DifficultyError>;
