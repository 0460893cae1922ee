//! Error type shared by the algorithm tiers.

use thiserror::Error;

/// Precondition failures reported by validated routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("operation requires a non-empty array")]
    Empty,

    #[error("window size {k} is invalid for an array of length {len}")]
    InvalidWindow { k: usize, len: usize },

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("value {value} at index {index} is not one of 0, 1, 2")]
    InvalidFlagValue { index: usize, value: i32 },

    #[error("value {value} at index {index} is negative")]
    NegativeValue { index: usize, value: i32 },

    #[error("destination holds {capacity} slots but {required} are required")]
    InsufficientCapacity { required: usize, capacity: usize },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("target {0} is outside the range of array elements")]
    TargetOutOfRange(i64),

    #[error("unknown tier: {0}")]
    UnknownTier(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
}

/// Result type for array operations.
pub type ArrayResult<T> = Result<T, ArrayError>;
