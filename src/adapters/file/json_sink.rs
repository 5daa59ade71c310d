//! JSON Ranking Sink - writes the ranked table as a JSON document.

use std::path::PathBuf;

use tracing::debug;

use crate::ports::{RankedTable, RankingSink, SinkError};

/// Pretty-printed JSON sink.
#[derive(Debug, Clone)]
pub struct JsonRankingSink {
    path: PathBuf,
}

impl JsonRankingSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RankingSink for JsonRankingSink {
    fn write(&self, table: &RankedTable) -> Result<(), SinkError> {
        let json = serde_json::to_string_pretty(table)
            .map_err(|e| SinkError::serialization(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| SinkError::io(self.path.display().to_string(), e.to_string()))?;

        debug!(path = %self.path.display(), rows = table.result.len(), "Wrote JSON ranking");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{RankedAlternative, RankedResult};

    #[test]
    fn write_produces_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let table = RankedTable::new(
            "Model",
            RankedResult {
                criteria: vec!["Price".to_string()],
                alternatives: vec![RankedAlternative {
                    label: "M1".to_string(),
                    values: vec![250.0],
                    closeness: 0.5,
                    rank: 1,
                }],
            },
        );

        JsonRankingSink::new(&path).write(&table).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["label_header"], "Model");
        assert_eq!(value["criteria"][0], "Price");
        assert_eq!(value["alternatives"][0]["rank"], 1);

        let read_back: RankedTable = serde_json::from_str(&content).unwrap();
        assert_eq!(read_back, table);
    }
}
