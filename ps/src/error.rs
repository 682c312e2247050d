//! Workplan error types

use thiserror::Error;

/// Errors raised while validating a workplan or assembling its chart
///
/// Validation failures always surface as one of these variants; there is no
/// boolean "invalid" result anywhere in the crate.
#[derive(Debug, Error)]
pub enum WorkplanError {
    #[error("The workplan expects a mapping, but received {actual}")]
    InvalidParameterType { actual: String },

    #[error("All workplan values must be integers, instead received type(s): {}", .types.join(", "))]
    ValuesNotTypeInt { types: Vec<String> },

    #[error("Workplan values should total 100, instead sum to {sum}")]
    ValuesDontSumTo100 { sum: i64 },

    #[error("Chart construction failed: {reason}")]
    ConstructionFailure { reason: String },
}
