//! File adapters - decision sources and ranking sinks backed by local files.
//!
//! The input format is picked from the file extension: `.xlsx`, `.xlsm`,
//! `.xlsb`, `.xls` and `.ods` are workbooks, `.json`, `.yaml` and `.yml` are
//! decision documents, anything else is read as CSV. The output format
//! follows [`OutputConfig::format_for`].

mod csv_sink;
mod csv_source;
mod document_source;
mod excel_source;
mod json_sink;

pub use csv_sink::{CsvRankingSink, CLOSENESS_HEADER, RANK_HEADER};
pub use csv_source::{CsvDecisionSource, MIN_COLUMNS};
pub use document_source::{DocumentDecisionSource, DocumentFormat};
pub use excel_source::{is_workbook, ExcelDecisionSource};
pub use json_sink::JsonRankingSink;

use std::path::Path;
use std::sync::Arc;

use crate::config::{InputConfig, OutputConfig, OutputFormat};
use crate::ports::{DecisionSource, RankingSink};

/// Builds the source matching the input file extension.
pub fn source_for_path(path: &Path, input: &InputConfig) -> Arc<dyn DecisionSource> {
    if is_workbook(path) {
        return Arc::new(ExcelDecisionSource::new(path).with_sheet(input.sheet.clone()));
    }
    match DocumentFormat::from_path(path) {
        Some(format) => Arc::new(DocumentDecisionSource::new(path, format)),
        None => Arc::new(CsvDecisionSource::new(path).with_delimiter(input.delimiter_char())),
    }
}

/// Builds the sink for the configured or inferred output format.
pub fn sink_for_path(
    path: &Path,
    input: &InputConfig,
    output: &OutputConfig,
) -> Arc<dyn RankingSink> {
    match output.format_for(path) {
        OutputFormat::Json => Arc::new(JsonRankingSink::new(path)),
        OutputFormat::Csv => Arc::new(
            CsvRankingSink::new(path)
                .with_delimiter(input.delimiter_char())
                .with_precision(output.precision),
        ),
    }
}
