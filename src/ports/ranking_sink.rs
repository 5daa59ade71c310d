//! Ranking Sink Port - publishing a ranked table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::topsis::RankedResult;

/// Port for writing a ranked result.
///
/// # Contract
///
/// Implementations must write, per alternative and in input row order:
/// the label, the original criterion values, the closeness and the rank.
pub trait RankingSink: Send + Sync {
    /// Writes the ranked table.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the destination cannot be written.
    fn write(&self, table: &RankedTable) -> Result<(), SinkError>;

    /// Human-readable destination, used in logs and success messages.
    fn describe(&self) -> String;
}

/// Ranked result together with the label column header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    pub label_header: String,
    #[serde(flatten)]
    pub result: RankedResult,
}

impl RankedTable {
    pub fn new(label_header: impl Into<String>, result: RankedResult) -> Self {
        Self {
            label_header: label_header.into(),
            result,
        }
    }
}

/// Errors from ranking sink operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SinkError {
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl SinkError {
    /// Creates an IO error for a destination.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}
