//! Document Decision Source - JSON or YAML decision documents.
//!
//! Unlike CSV tables, documents carry each criterion's weight and impact
//! next to its name, so they can be ranked without extra arguments.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::csv_source::MIN_COLUMNS;
use crate::domain::topsis::{DecisionMatrix, ImpactVector, WeightVector};
use crate::ports::{DecisionSource, DecisionTable, SourceError};

/// Encoding of a decision document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Recognizes `.json`, `.yaml` and `.yml` extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DecisionDocument {
    #[serde(default = "default_label")]
    label: String,
    criteria: Vec<CriterionSpec>,
    alternatives: Vec<AlternativeSpec>,
}

#[derive(Debug, Deserialize)]
struct CriterionSpec {
    name: String,
    #[serde(default = "default_weight")]
    weight: f64,
    impact: String,
}

#[derive(Debug, Deserialize)]
struct AlternativeSpec {
    label: String,
    values: Vec<f64>,
}

fn default_label() -> String {
    "Alternative".to_string()
}

fn default_weight() -> f64 {
    1.0
}

/// Source reading a structured decision document.
///
/// ```yaml
/// label: Model
/// criteria:
///   - { name: Price, weight: 1, impact: "-" }
///   - { name: Storage, weight: 2, impact: "+" }
/// alternatives:
///   - { label: M1, values: [250, 16] }
///   - { label: M2, values: [200, 32] }
/// ```
#[derive(Debug, Clone)]
pub struct DocumentDecisionSource {
    path: PathBuf,
    format: DocumentFormat,
}

impl DocumentDecisionSource {
    pub fn new(path: impl Into<PathBuf>, format: DocumentFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Parses document content that has already been read.
    pub fn parse(&self, content: &str) -> Result<DecisionTable, SourceError> {
        let document: DecisionDocument = match self.format {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| SourceError::malformed(e.to_string()))?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| SourceError::malformed(e.to_string()))?
            }
        };

        let columns = document.criteria.len() + 1;
        if columns < MIN_COLUMNS {
            return Err(SourceError::TooFewColumns {
                min: MIN_COLUMNS,
                found: columns,
            });
        }
        if document.alternatives.is_empty() {
            return Err(SourceError::NoAlternatives);
        }

        let weights = WeightVector::new(document.criteria.iter().map(|c| c.weight).collect())?;
        let impacts = ImpactVector::from_tokens(document.criteria.iter().map(|c| &c.impact))?;
        let names = document.criteria.into_iter().map(|c| c.name).collect();
        let (labels, rows) = document
            .alternatives
            .into_iter()
            .map(|a| (a.label, a.values))
            .unzip();
        let matrix = DecisionMatrix::new(labels, names, rows)?;

        Ok(DecisionTable::new(document.label, matrix).with_criteria(weights, impacts))
    }
}

impl DecisionSource for DocumentDecisionSource {
    fn load(&self) -> Result<DecisionTable, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::not_found(self.path.display().to_string()),
            _ => SourceError::io(format!("Failed to read {}: {}", self.path.display(), e)),
        })?;

        let table = self.parse(&content)?;
        debug!(
            path = %self.path.display(),
            format = ?self.format,
            alternatives = table.matrix.alternative_count(),
            "Parsed decision document"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{Impact, TopsisError};

    const YAML: &str = r#"
label: Model
criteria:
  - { name: Price, weight: 1, impact: "-" }
  - { name: Storage, weight: 2, impact: "+" }
alternatives:
  - { label: M1, values: [250, 16] }
  - { label: M2, values: [200, 32] }
"#;

    fn yaml() -> DocumentDecisionSource {
        DocumentDecisionSource::new("unused.yaml", DocumentFormat::Yaml)
    }

    fn json() -> DocumentDecisionSource {
        DocumentDecisionSource::new("unused.json", DocumentFormat::Json)
    }

    #[test]
    fn format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("a.YML")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a.csv")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("a")), None);
    }

    #[test]
    fn parse_yaml_document() {
        let table = yaml().parse(YAML).unwrap();

        assert_eq!(table.label_header, "Model");
        assert_eq!(table.matrix.criteria(), &["Price", "Storage"].map(String::from));
        assert_eq!(table.matrix.rows()[1], vec![200.0, 32.0]);
        assert_eq!(table.weights.unwrap().as_slice(), &[1.0, 2.0]);
        assert_eq!(
            table.impacts.unwrap().as_slice(),
            &[Impact::Minimize, Impact::Maximize]
        );
    }

    #[test]
    fn parse_json_document_with_defaults() {
        let content = r#"{
            "criteria": [
                { "name": "Return", "impact": "max" },
                { "name": "Risk", "impact": "min" }
            ],
            "alternatives": [
                { "label": "F1", "values": [7.5, 2] },
                { "label": "F2", "values": [6, 1] }
            ]
        }"#;
        let table = json().parse(content).unwrap();

        assert_eq!(table.label_header, "Alternative");
        assert_eq!(table.weights.unwrap().as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn parse_rejects_unknown_impact() {
        let content = YAML.replace(r#"impact: "+""#, r#"impact: "up""#);
        let err = yaml().parse(&content).unwrap_err();
        assert_eq!(err, SourceError::InvalidMatrix(TopsisError::invalid_impact(1, "up")));
    }

    #[test]
    fn parse_rejects_negative_weight() {
        let content = YAML.replace("weight: 2", "weight: -2");
        let err = yaml().parse(&content).unwrap_err();
        assert_eq!(
            err,
            SourceError::InvalidMatrix(TopsisError::InvalidWeight {
                position: 1,
                value: -2.0
            })
        );
    }

    #[test]
    fn parse_rejects_single_criterion() {
        let content = r#"{
            "criteria": [{ "name": "Price", "impact": "-" }],
            "alternatives": [{ "label": "M1", "values": [1] }]
        }"#;
        let err = json().parse(content).unwrap_err();
        assert_eq!(err, SourceError::TooFewColumns { min: 3, found: 2 });
    }

    #[test]
    fn parse_rejects_row_of_wrong_length() {
        let content = YAML.replace("[200, 32]", "[200]");
        let err = yaml().parse(&content).unwrap_err();
        assert_eq!(
            err,
            SourceError::InvalidMatrix(TopsisError::shape_mismatch("row 1", 2, 1))
        );
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = json().parse("{ not json").unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }
}
