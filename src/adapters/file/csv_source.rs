//! CSV Decision Source - reads a delimited decision table from disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::topsis::DecisionMatrix;
use crate::ports::{DecisionSource, DecisionTable, SourceError};

/// Alternative label plus at least two criteria.
pub const MIN_COLUMNS: usize = 3;

/// Delimited text source.
///
/// # Format
///
/// ```text
/// Model,Price,Storage,Camera,Looks
/// M1,250,16,12,5
/// M2,200,16,8,3
/// ```
///
/// The first line is the header, the first column holds the alternative
/// labels and every other column must be numeric. Blank lines are skipped.
/// Cells may be wrapped in double quotes.
#[derive(Debug, Clone)]
pub struct CsvDecisionSource {
    path: PathBuf,
    delimiter: char,
}

impl CsvDecisionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: ',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses table content that has already been read.
    pub fn parse(&self, content: &str) -> Result<DecisionTable, SourceError> {
        let records = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, split_record(line, self.delimiter)));

        table_from_records(records)
    }
}

/// Builds a decision table from `(line, cells)` records.
///
/// The first record is the header. Every later record is one alternative:
/// a label followed by one numeric cell per criterion.
pub(super) fn table_from_records(
    records: impl IntoIterator<Item = (usize, Vec<String>)>,
) -> Result<DecisionTable, SourceError> {
    let mut records = records.into_iter();

    let (_, header) = records
        .next()
        .ok_or(SourceError::TooFewColumns { min: MIN_COLUMNS, found: 0 })?;
    if header.len() < MIN_COLUMNS {
        return Err(SourceError::TooFewColumns {
            min: MIN_COLUMNS,
            found: header.len(),
        });
    }

    let mut labels = Vec::new();
    let mut rows = Vec::new();
    for (line, cells) in records {
        if cells.len() != header.len() {
            return Err(SourceError::RaggedRow {
                line,
                expected: header.len(),
                actual: cells.len(),
            });
        }

        let values = cells[1..]
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                cell.parse::<f64>().map_err(|_| SourceError::InvalidNumber {
                    line,
                    column: j + 2,
                    value: cell.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut cells = cells.into_iter();
        labels.push(cells.next().unwrap_or_default());
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(SourceError::NoAlternatives);
    }

    let mut header = header.into_iter();
    let label_header = header.next().unwrap_or_default();
    let matrix = DecisionMatrix::new(labels, header.collect(), rows)?;

    Ok(DecisionTable::new(label_header, matrix))
}

/// Splits one line into cells.
///
/// A cell that opens with `"` runs to the matching closing quote, so it may
/// contain the delimiter; `""` inside it is a literal quote. Unquoted cells
/// are trimmed.
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
        } else if c == delimiter {
            cells.push(finish_cell(&mut cell, quoted));
            quoted = false;
        } else if c == '"' && !quoted && cell.trim().is_empty() {
            cell.clear();
            quoted = true;
            in_quotes = true;
        } else if !(quoted && c.is_whitespace()) {
            cell.push(c);
        }
    }
    cells.push(finish_cell(&mut cell, quoted));
    cells
}

fn finish_cell(cell: &mut String, quoted: bool) -> String {
    let value = std::mem::take(cell);
    if quoted {
        value
    } else {
        value.trim().to_string()
    }
}

impl DecisionSource for CsvDecisionSource {
    fn load(&self) -> Result<DecisionTable, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::not_found(self.path.display().to_string()),
            _ => SourceError::io(format!("Failed to read {}: {}", self.path.display(), e)),
        })?;

        let table = self.parse(&content)?;
        debug!(
            path = %self.path.display(),
            alternatives = table.matrix.alternative_count(),
            criteria = table.matrix.criterion_count(),
            "Parsed CSV decision table"
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
    use crate::adapters::file::CsvRankingSink;
    use crate::domain::topsis::{ImpactVector, TopsisEngine, TopsisError, WeightVector};
    use crate::ports::RankedTable;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOBILES: &str = "\
Model,Price,Storage,Camera,Looks
M1,250,16,12,5
M2,200,16,8,3
M3,300,32,16,4
";

    fn source() -> CsvDecisionSource {
        CsvDecisionSource::new("unused.csv")
    }

    #[test]
    fn parse_reads_header_labels_and_values() {
        let table = source().parse(MOBILES).unwrap();

        assert_eq!(table.label_header, "Model");
        assert_eq!(
            table.matrix.criteria(),
            &["Price", "Storage", "Camera", "Looks"].map(String::from)
        );
        assert_eq!(table.matrix.labels(), &["M1", "M2", "M3"].map(String::from));
        assert_eq!(table.matrix.rows()[2], vec![300.0, 32.0, 16.0, 4.0]);
        assert!(table.weights.is_none());
        assert!(table.impacts.is_none());
    }

    #[test]
    fn parse_skips_blank_lines_and_trims_cells() {
        let content = "\n Fund , Return , Risk \n\nF1, 7.5 ,2\n  \nF2,6,1\n";
        let table = source().parse(content).unwrap();
        assert_eq!(table.label_header, "Fund");
        assert_eq!(table.matrix.rows(), &[vec![7.5, 2.0], vec![6.0, 1.0]]);
    }

    #[test]
    fn parse_handles_quoted_cells() {
        let content = "\"Name\",A,B\n\"Plan \"\"X\"\"\",1,2\nY,3,4\n";
        let table = source().parse(content).unwrap();
        assert_eq!(table.label_header, "Name");
        assert_eq!(table.matrix.labels()[0], "Plan \"X\"");
    }

    #[test]
    fn parse_keeps_delimiter_inside_quotes() {
        let content = "Model,A,B\n\"M2, Pro\",1,2\nX,3,1\n";
        let table = source().parse(content).unwrap();
        assert_eq!(table.matrix.labels(), &["M2, Pro", "X"].map(String::from));
        assert_eq!(table.matrix.rows()[0], vec![1.0, 2.0]);
    }

    #[test]
    fn split_record_handles_quotes_and_padding() {
        assert_eq!(
            split_record(r#" "a;b" ; "say ""hi""" ;c"#, ';'),
            vec!["a;b", "say \"hi\"", "c"]
        );
        assert_eq!(split_record("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_record("\"\",x", ','), vec!["", "x"]);
    }

    #[test]
    fn parse_reads_back_ranked_csv_output() {
        let content = "Model,Price,Storage\n\"M1, \"\"Lite\"\"\",250,16\nM2,200,32\nM3,300,8\n";
        let table = source().parse(content).unwrap();
        let weights = WeightVector::uniform(2);
        let impacts = ImpactVector::from_tokens(["-", "+"]).unwrap();
        let result = TopsisEngine::compute(&table.matrix, &weights, &impacts).unwrap();
        let rendered = CsvRankingSink::new("unused.csv")
            .render(&RankedTable::new(table.label_header.clone(), result.clone()));

        let reread = source().parse(&rendered).unwrap();

        assert_eq!(reread.label_header, "Model");
        assert_eq!(reread.matrix.labels(), table.matrix.labels());
        assert_eq!(
            reread.matrix.criteria(),
            &["Price", "Storage", "Closeness", "Ranking"].map(String::from)
        );
        for (row, alternative) in reread.matrix.rows().iter().zip(&result.alternatives) {
            assert_eq!(&row[..2], alternative.values.as_slice());
            assert_eq!(row[2], alternative.closeness);
            assert_eq!(row[3], alternative.rank as f64);
        }
    }

    #[test]
    fn parse_uses_custom_delimiter() {
        let content = "Model;Price;Storage\nM1;250;16\nM2;200;32\n";
        let table = source().with_delimiter(';').parse(content).unwrap();
        assert_eq!(table.matrix.criterion_count(), 2);
    }

    #[test]
    fn parse_rejects_too_few_columns() {
        let err = source().parse("Model,Price\nM1,250\n").unwrap_err();
        assert_eq!(err, SourceError::TooFewColumns { min: 3, found: 2 });
    }

    #[test]
    fn parse_rejects_empty_content() {
        let err = source().parse("").unwrap_err();
        assert_eq!(err, SourceError::TooFewColumns { min: 3, found: 0 });
    }

    #[test]
    fn parse_rejects_header_only() {
        let err = source().parse("Model,Price,Storage\n").unwrap_err();
        assert_eq!(err, SourceError::NoAlternatives);
    }

    #[test]
    fn parse_rejects_ragged_row() {
        let err = source().parse("Model,Price,Storage\nM1,250\n").unwrap_err();
        assert_eq!(
            err,
            SourceError::RaggedRow {
                line: 2,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn parse_rejects_non_numeric_cell() {
        let err = source()
            .parse("Model,Price,Storage\nM1,250,16\nM2,cheap,32\n")
            .unwrap_err();
        assert_eq!(
            err,
            SourceError::InvalidNumber {
                line: 3,
                column: 2,
                value: "cheap".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_non_finite_value() {
        let err = source()
            .parse("Model,Price,Storage\nM1,250,16\nM2,NaN,32\n")
            .unwrap_err();
        assert_eq!(
            err,
            SourceError::InvalidMatrix(TopsisError::NonFiniteValue { row: 1, column: 0 })
        );
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MOBILES.as_bytes()).unwrap();

        let table = CsvDecisionSource::new(file.path()).load().unwrap();
        assert_eq!(table.matrix.alternative_count(), 3);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = CsvDecisionSource::new(&path).load().unwrap_err();
        assert_eq!(err, SourceError::not_found(path.display().to_string()));
    }
}
