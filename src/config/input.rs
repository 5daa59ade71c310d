//! Input table configuration

use serde::Deserialize;

use super::error::ValidationError;

/// How decision tables are read
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Cell delimiter for CSV input and output
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Worksheet to read from spreadsheet input; the first sheet when unset
    #[serde(default)]
    pub sheet: Option<String>,
}

impl InputConfig {
    /// The delimiter as a character, falling back to a comma when unset
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(',')
    }

    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sheet.as_deref().is_some_and(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptySheetName);
        }

        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_valid_delimiter(c) => Ok(()),
            _ => Err(ValidationError::InvalidDelimiter(self.delimiter.clone())),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            sheet: None,
        }
    }
}

fn is_valid_delimiter(c: char) -> bool {
    !(c.is_ascii_alphanumeric()
        || matches!(c, '.' | '-' | '+' | '"' | '\n' | '\r')
        || (c.is_whitespace() && c != '\t'))
}

fn default_delimiter() -> String {
    ",".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_delimiter(delimiter: &str) -> InputConfig {
        InputConfig {
            delimiter: delimiter.to_string(),
            sheet: None,
        }
    }

    #[test]
    fn test_input_config_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.delimiter_char(), ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_common_delimiters() {
        for delimiter in [";", "\t", "|"] {
            assert!(with_delimiter(delimiter).validate().is_ok(), "{delimiter:?}");
        }
    }

    #[test]
    fn test_rejects_numeric_characters() {
        for delimiter in [".", "-", "+", "1", "e", " "] {
            assert_eq!(
                with_delimiter(delimiter).validate(),
                Err(ValidationError::InvalidDelimiter(delimiter.to_string()))
            );
        }
    }

    #[test]
    fn test_rejects_blank_sheet_name() {
        let config = InputConfig {
            sheet: Some("  ".to_string()),
            ..InputConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptySheetName));

        let config = InputConfig {
            sheet: Some("Phones".to_string()),
            ..InputConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_multi_character_delimiter() {
        assert!(with_delimiter(",,").validate().is_err());
        assert!(with_delimiter("").validate().is_err());
    }
}
