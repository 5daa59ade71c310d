//! Decision Matrix - alternatives × criteria table fed to the engine.

use serde::Serialize;

use super::TopsisError;

/// Rows are alternatives, columns are criteria.
///
/// Labels and criterion names are carried through to the result untouched;
/// the engine only ever reads the numeric values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    labels: Vec<String>,
    criteria: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a matrix, checking that it is non-empty, rectangular and finite.
    ///
    /// # Errors
    /// - `EmptyMatrix` when there are no rows or no criteria
    /// - `ShapeMismatch` when a row or the label list has the wrong length
    /// - `NonFiniteValue` for NaN or infinite cells
    pub fn new(
        labels: Vec<String>,
        criteria: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, TopsisError> {
        if rows.is_empty() || criteria.is_empty() {
            return Err(TopsisError::EmptyMatrix);
        }
        if labels.len() != rows.len() {
            return Err(TopsisError::shape_mismatch("labels", rows.len(), labels.len()));
        }

        let width = criteria.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TopsisError::shape_mismatch(
                    format!("row {}", i),
                    width,
                    row.len(),
                ));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::NonFiniteValue { row: i, column: j });
            }
        }

        Ok(Self {
            labels,
            criteria,
            rows,
        })
    }

    /// Creates a matrix with generated labels (`A1`, `A2`, ...) and criterion
    /// names (`C1`, `C2`, ...). Width is taken from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let labels = (1..=rows.len()).map(|i| format!("A{}", i)).collect();
        let criteria = (1..=width).map(|j| format!("C{}", j)).collect();
        Self::new(labels, criteria, rows)
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Number of alternatives (n).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (m).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates the values of one criterion in row order.
    ///
    /// # Panics
    ///
    /// The iterator panics on its first item if `column` is not below
    /// [`criterion_count`](Self::criterion_count). Use [`value`](Self::value)
    /// for checked access.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows.iter().map(move |row| row[column])
    }
}

/// Builder for DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    labels: Vec<String>,
    criteria: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends an alternative.
    pub fn alternative(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.labels.push(label.into());
        self.rows.push(values);
        self
    }

    /// Builds and validates the matrix.
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        DecisionMatrix::new(self.labels, self.criteria, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_matrix() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Price", "Storage"])
            .alternative("M1", vec![250.0, 16.0])
            .alternative("M2", vec![200.0, 32.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 2);
        assert_eq!(matrix.labels(), &["M1".to_string(), "M2".to_string()]);
        assert_eq!(matrix.value(1, 1), Some(32.0));
        assert_eq!(matrix.value(2, 0), None);
    }

    #[test]
    fn from_rows_generates_names() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.labels(), &["A1".to_string(), "A2".to_string()]);
        assert_eq!(matrix.criteria(), &["C1".to_string(), "C2".to_string()]);
    }

    #[test]
    fn column_iterates_in_row_order() {
        let matrix =
            DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 1.0]])
                .unwrap();
        let column: Vec<f64> = matrix.column(1).collect();
        assert_eq!(column, vec![2.0, 4.0, 1.0]);
    }

    #[test]
    fn empty_matrix_is_rejected() {
        assert_eq!(
            DecisionMatrix::from_rows(Vec::new()).unwrap_err(),
            TopsisError::EmptyMatrix
        );
        assert_eq!(
            DecisionMatrix::from_rows(vec![Vec::new()]).unwrap_err(),
            TopsisError::EmptyMatrix
        );
    }

    #[test]
    fn ragged_row_is_shape_mismatch() {
        let err = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, TopsisError::shape_mismatch("row 1", 2, 1));
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let err =
            DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, f64::NAN]]).unwrap_err();
        assert_eq!(err, TopsisError::NonFiniteValue { row: 1, column: 1 });

        let err = DecisionMatrix::from_rows(vec![vec![f64::NEG_INFINITY]]).unwrap_err();
        assert_eq!(err, TopsisError::NonFiniteValue { row: 0, column: 0 });
    }

    #[test]
    fn label_count_must_match_rows() {
        let err = DecisionMatrix::new(
            vec!["A".to_string()],
            vec!["C1".to_string()],
            vec![vec![1.0], vec![2.0]],
        )
        .unwrap_err();
        assert_eq!(err, TopsisError::shape_mismatch("labels", 2, 1));
    }

    #[test]
    fn single_criterion_is_allowed() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(matrix.criterion_count(), 1);
    }

    #[test]
    fn column_iterates_in_row_order_and_value_out_of_range() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![2.0, 4.0]);
        assert_eq!(matrix.value(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn column_out_of_range_panics() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let _ = matrix.column(2).count();
    }
}
