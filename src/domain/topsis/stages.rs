//! Intermediate values produced between pipeline stages.
//!
//! All of these are immutable once the engine has built them.

use serde::Serialize;

/// Declares a read-only n × m matrix newtype.
macro_rules! derived_matrix {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $name(Vec<Vec<f64>>);

        impl $name {
            pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
                Self(rows)
            }

            pub fn rows(&self) -> &[Vec<f64>] {
                &self.0
            }

            pub fn row_count(&self) -> usize {
                self.0.len()
            }

            pub fn column_count(&self) -> usize {
                self.0.first().map(Vec::len).unwrap_or(0)
            }

            pub fn value(&self, row: usize, column: usize) -> Option<f64> {
                self.0.get(row).and_then(|r| r.get(column)).copied()
            }

            /// Iterates the values of one column in row order.
            ///
            /// # Panics
            ///
            /// The iterator panics on its first item if `column` is not
            /// below `column_count()`.
            pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + Clone + '_ {
                self.0.iter().map(move |row| row[column])
            }
        }
    };
}

/// Declares a length-m per-criterion vector newtype.
macro_rules! criterion_vector {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(transparent)]
        pub struct $name(Vec<f64>);

        impl $name {
            pub(crate) fn new(values: Vec<f64>) -> Self {
                Self(values)
            }

            pub fn as_slice(&self) -> &[f64] {
                &self.0
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }
    };
}

derived_matrix!(
    /// Decision matrix with every column scaled to unit Euclidean norm.
    NormalizedMatrix
);

derived_matrix!(
    /// Normalized matrix with each column multiplied by its weight.
    WeightedMatrix
);

criterion_vector!(
    /// Best weighted value per criterion.
    IdealSolution
);

criterion_vector!(
    /// Worst weighted value per criterion.
    NegativeIdealSolution
);

/// Euclidean distance of each alternative to both reference points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Separations {
    pub to_ideal: Vec<f64>,
    pub to_negative_ideal: Vec<f64>,
}

impl Separations {
    pub fn len(&self) -> usize {
        self.to_ideal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_ideal.is_empty()
    }
}
