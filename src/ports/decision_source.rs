//! Decision Source Port - loading a decision table from outside the process.

use thiserror::Error;

use crate::domain::topsis::{DecisionMatrix, ImpactVector, TopsisError, WeightVector};

/// Port for reading the alternatives × criteria table.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first column as an opaque alternative label
/// - Reject tables with fewer than one criterion column
/// - Preserve row and column order exactly as read
/// - Never reorder or drop alternatives
pub trait DecisionSource: Send + Sync {
    /// Loads the decision table.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the data cannot be read or does not form a
    /// valid numeric matrix.
    fn load(&self) -> Result<DecisionTable, SourceError>;

    /// Human-readable origin of the data, used in logs.
    fn describe(&self) -> String;
}

/// A decision table as read from a source.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTable {
    /// Header of the alternative label column.
    pub label_header: String,
    pub matrix: DecisionMatrix,
    /// Weights embedded in the source, if the format carries them.
    pub weights: Option<WeightVector>,
    /// Impacts embedded in the source, if the format carries them.
    pub impacts: Option<ImpactVector>,
}

impl DecisionTable {
    /// Creates a table without embedded weights or impacts.
    pub fn new(label_header: impl Into<String>, matrix: DecisionMatrix) -> Self {
        Self {
            label_header: label_header.into(),
            matrix,
            weights: None,
            impacts: None,
        }
    }

    /// Attaches criterion weights and impacts carried by the source.
    pub fn with_criteria(mut self, weights: WeightVector, impacts: ImpactVector) -> Self {
        self.weights = Some(weights);
        self.impacts = Some(impacts);
        self
    }
}

/// Errors from decision source operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Input must have at least {min} columns (alternative label + criteria), found {found}")]
    TooFewColumns { min: usize, found: usize },

    #[error("Line {line} has {actual} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Line {line}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Input contains no alternatives")]
    NoAlternatives,

    #[error("Malformed document: {message}")]
    Malformed { message: String },

    #[error("Invalid decision matrix: {0}")]
    InvalidMatrix(#[from] TopsisError),
}

impl SourceError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a malformed document error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}
