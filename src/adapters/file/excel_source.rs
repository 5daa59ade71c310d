//! Spreadsheet Decision Source - reads the decision table from a workbook.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use super::csv_source::table_from_records;
use crate::ports::{DecisionSource, DecisionTable, SourceError};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Returns true for spreadsheet file extensions.
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Source reading one worksheet of an Excel or OpenDocument workbook.
///
/// The worksheet has the same layout as a CSV table: a header row, then one
/// row per alternative with its label in the first column. Empty rows are
/// skipped and error line numbers are worksheet row numbers.
#[derive(Debug, Clone)]
pub struct ExcelDecisionSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl ExcelDecisionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    /// Reads the named worksheet instead of the first one.
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Parses a worksheet that has already been loaded.
    pub fn parse(range: &Range<Data>) -> Result<DecisionTable, SourceError> {
        let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
        let records = range
            .rows()
            .enumerate()
            .map(|(i, cells)| (first_row + i + 1, cells.iter().map(cell_text).collect::<Vec<_>>()))
            .filter(|(_, cells)| cells.iter().any(|cell| !cell.is_empty()));

        table_from_records(records)
    }

    fn read_range(&self) -> Result<Range<Data>, SourceError> {
        if let Err(e) = std::fs::metadata(&self.path) {
            return Err(match e.kind() {
                ErrorKind::NotFound => SourceError::not_found(self.path.display().to_string()),
                _ => SourceError::io(format!("Failed to read {}: {}", self.path.display(), e)),
            });
        }

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            SourceError::malformed(format!(
                "Failed to open workbook {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let range = match &self.sheet {
            Some(name) => workbook.worksheet_range(name),
            None => workbook.worksheet_range_at(0).ok_or_else(|| {
                SourceError::malformed(format!(
                    "Workbook {} has no worksheets",
                    self.path.display()
                ))
            })?,
        };

        range.map_err(|e| SourceError::malformed(format!("Failed to read worksheet: {}", e)))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

impl DecisionSource for ExcelDecisionSource {
    fn load(&self) -> Result<DecisionTable, SourceError> {
        let range = self.read_range()?;
        let table = Self::parse(&range)?;
        debug!(
            path = %self.path.display(),
            sheet = self.sheet.as_deref().unwrap_or("<first>"),
            alternatives = table.matrix.alternative_count(),
            criteria = table.matrix.criterion_count(),
            "Parsed workbook decision table"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        match &self.sheet {
            Some(sheet) => format!("{} [{}]", self.path.display(), sheet),
            None => self.path.display().to_string(),
        }
    }
}
