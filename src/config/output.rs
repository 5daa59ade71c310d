//! Ranked table output configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Largest precision that still changes an f64 rendering
const MAX_PRECISION: usize = 17;

/// How ranked tables are written
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for the closeness column; full precision when unset
    #[serde(default)]
    pub precision: Option<usize>,

    /// Output format; inferred from the output file extension when unset
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Serialization format of the ranked table
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// Infers the format from a file extension (`.json` → JSON, otherwise CSV)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}

impl OutputConfig {
    /// Resolve the format for a destination path
    pub fn format_for(&self, path: &Path) -> OutputFormat {
        self.format.unwrap_or_else(|| OutputFormat::from_path(path))
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.precision {
            Some(p) if p > MAX_PRECISION => Err(ValidationError::PrecisionTooLarge(p)),
            _ => Ok(()),
        }
    }
}
