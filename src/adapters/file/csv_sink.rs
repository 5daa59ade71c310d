//! CSV Ranking Sink - writes the ranked table as delimited text.

use std::path::PathBuf;

use tracing::debug;

use crate::ports::{RankedTable, RankingSink, SinkError};

/// Header of the closeness column.
pub const CLOSENESS_HEADER: &str = "Closeness";
/// Header of the rank column.
pub const RANK_HEADER: &str = "Ranking";

/// Delimited text sink.
///
/// Columns: label, original criteria, closeness, rank. Rows stay in input
/// order.
#[derive(Debug, Clone)]
pub struct CsvRankingSink {
    path: PathBuf,
    delimiter: char,
    precision: Option<usize>,
}

impl CsvRankingSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: ',',
            precision: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Rounds closeness to `precision` decimal places.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Renders the table without writing it.
    pub fn render(&self, table: &RankedTable) -> String {
        let delimiter = self.delimiter.to_string();
        let mut out = String::new();

        let header: Vec<String> = std::iter::once(table.label_header.as_str())
            .chain(table.result.criteria.iter().map(String::as_str))
            .chain([CLOSENESS_HEADER, RANK_HEADER])
            .map(|cell| self.escape(cell))
            .collect();
        out.push_str(&header.join(&delimiter));
        out.push('\n');

        for alternative in &table.result.alternatives {
            let closeness = match self.precision {
                Some(p) => format!("{:.*}", p, alternative.closeness),
                None => alternative.closeness.to_string(),
            };
            let cells: Vec<String> = std::iter::once(self.escape(&alternative.label))
                .chain(alternative.values.iter().map(f64::to_string))
                .chain([closeness, alternative.rank.to_string()])
                .collect();
            out.push_str(&cells.join(&delimiter));
            out.push('\n');
        }

        out
    }

    fn escape(&self, cell: &str) -> String {
        if cell.contains(self.delimiter) || cell.contains('"') || cell.contains('\n') {
            format!("\"{}\"", cell.replace('"', "\"\""))
        } else {
            cell.to_string()
        }
    }
}

impl RankingSink for CsvRankingSink {
    fn write(&self, table: &RankedTable) -> Result<(), SinkError> {
        std::fs::write(&self.path, self.render(table))
            .map_err(|e| SinkError::io(self.path.display().to_string(), e.to_string()))?;

        debug!(path = %self.path.display(), rows = table.result.len(), "Wrote CSV ranking");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
