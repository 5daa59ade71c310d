//! Error types for the TOPSIS engine.

use std::fmt;
use thiserror::Error;

/// Failures of a TOPSIS computation.
///
/// Every variant is deterministic for a given input; none of them is
/// transient, so callers should never retry without changing the data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Field '{field}' expected {expected} criteria, got {actual}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("Impact '{token}' at position {position} must be '+' or '-'")]
    InvalidImpact { position: usize, token: String },

    #[error("Weight {value} at position {position} must be a finite, non-negative number")]
    InvalidWeight { position: usize, value: f64 },

    #[error("Value at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Criterion column {column} has zero norm (all values are zero)")]
    ZeroNormColumn { column: usize },

    #[error("Alternative at row {row} coincides with both ideal and negative-ideal solutions")]
    ZeroSeparation { row: usize },

    #[error("Separation of alternative at row {row} exceeds the floating point range")]
    SeparationOverflow { row: usize },
}

impl TopsisError {
    /// Creates a shape mismatch error for the named field.
    pub fn shape_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        TopsisError::ShapeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid impact error.
    pub fn invalid_impact(position: usize, token: impl Into<String>) -> Self {
        TopsisError::InvalidImpact {
            position,
            token: token.into(),
        }
    }

    /// Returns the error category.
    pub fn code(&self) -> TopsisErrorCode {
        match self {
            TopsisError::ShapeMismatch { .. } => TopsisErrorCode::ShapeMismatch,
            TopsisError::InvalidImpact { .. } => TopsisErrorCode::InvalidImpact,
            TopsisError::ZeroNormColumn { .. } | TopsisError::ZeroSeparation { .. } => {
                TopsisErrorCode::DegenerateInput
            }
            TopsisError::EmptyMatrix
            | TopsisError::InvalidWeight { .. }
            | TopsisError::NonFiniteValue { .. }
            | TopsisError::SeparationOverflow { .. } => TopsisErrorCode::InvalidInput,
        }
    }

    /// Returns true for inputs whose geometry makes closeness undefined.
    pub fn is_degenerate(&self) -> bool {
        self.code() == TopsisErrorCode::DegenerateInput
    }
}

/// Error categories, one per failure mode callers can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopsisErrorCode {
    ShapeMismatch,
    InvalidImpact,
    DegenerateInput,
    InvalidInput,
}

impl fmt::Display for TopsisErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopsisErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            TopsisErrorCode::InvalidImpact => "INVALID_IMPACT",
            TopsisErrorCode::DegenerateInput => "DEGENERATE_INPUT",
            TopsisErrorCode::InvalidInput => "INVALID_INPUT",
        };
        write!(f, "{}", s)
    }
}
