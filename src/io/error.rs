//! Error types for algorithm operations

use std::fmt;

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A weight violates the non-negative input contract
    NegativeWeight {
        /// Position of the offending weight
        index: usize,
        /// The negative value encountered
        value: i64,
    },

    /// Input sequence exceeds the supported length
    SequenceTooLong {
        /// Length of the rejected sequence
        length: usize,
        /// Maximum supported length
        max_length: usize,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWeight { index, value } => {
                write!(f, "Negative weight {value} at index {index}")
            }
            Self::SequenceTooLong { length, max_length } => {
                write!(
                    f,
                    "Sequence length {length} exceeds supported maximum {max_length}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
