//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Delimiter must be a single character that cannot appear in a number, got '{0}'")]
    InvalidDelimiter(String),

    #[error("Worksheet name cannot be blank")]
    EmptySheetName,

    #[error("Closeness precision {0} exceeds maximum allowed (17)")]
    PrecisionTooLarge(usize),

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
