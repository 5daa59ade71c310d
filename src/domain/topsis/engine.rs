//! TOPSIS Engine - closeness scoring and ranking of alternatives.

use serde::Serialize;

use super::{
    DecisionMatrix, IdealSolution, Impact, ImpactVector, NegativeIdealSolution, NormalizedMatrix,
    RankedAlternative, RankedResult, Separations, TopsisError, WeightVector, WeightedMatrix,
};

/// Every intermediate value of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisAnalysis {
    pub normalized: NormalizedMatrix,
    pub weighted: WeightedMatrix,
    pub ideal: IdealSolution,
    pub negative_ideal: NegativeIdealSolution,
    pub separations: Separations,
    pub result: RankedResult,
}

/// TOPSIS pipeline functions.
///
/// Stateless: each call works on its own inputs and allocates its own
/// outputs, so the engine can be shared freely between threads.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Ranks the alternatives of `matrix`.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `weights` or `impacts` length differs from the
    ///   criterion count
    /// - `ZeroNormColumn` if a criterion is zero for every alternative
    /// - `ZeroSeparation` if an alternative sits on both reference points
    /// - `SeparationOverflow` if a distance exceeds the `f64` range
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<RankedResult, TopsisError> {
        Self::analyze(matrix, weights, impacts).map(|analysis| analysis.result)
    }

    /// Runs the full pipeline and keeps every intermediate value.
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisAnalysis, TopsisError> {
        Self::check_shape(matrix, weights, impacts)?;

        let normalized = Self::normalize(matrix)?;
        let weighted = Self::weight(&normalized, weights);
        let (ideal, negative_ideal) = Self::ideal_solutions(&weighted, impacts);
        let separations = Self::separations(&weighted, &ideal, &negative_ideal);
        let closeness = Self::closeness(&separations)?;
        let ranks = Self::rank(&closeness);

        let alternatives = matrix
            .labels()
            .iter()
            .zip(matrix.rows())
            .zip(closeness.iter().zip(&ranks))
            .map(|((label, values), (&closeness, &rank))| RankedAlternative {
                label: label.clone(),
                values: values.clone(),
                closeness,
                rank,
            })
            .collect();

        Ok(TopsisAnalysis {
            normalized,
            weighted,
            ideal,
            negative_ideal,
            separations,
            result: RankedResult {
                criteria: matrix.criteria().to_vec(),
                alternatives,
            },
        })
    }

    fn check_shape(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<(), TopsisError> {
        let m = matrix.criterion_count();
        if weights.len() != m {
            return Err(TopsisError::shape_mismatch("weights", m, weights.len()));
        }
        if impacts.len() != m {
            return Err(TopsisError::shape_mismatch("impacts", m, impacts.len()));
        }
        Ok(())
    }

    /// Divides every value by the Euclidean norm of its column.
    ///
    /// The norm is taken as `scale * root`, with `scale` the largest absolute
    /// value of the column, and each value is divided by the two factors in
    /// turn. Neither the squares nor the quotient leave the `f64` range, so
    /// only a column of zeros has zero norm.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<NormalizedMatrix, TopsisError> {
        let norms = (0..matrix.criterion_count())
            .map(|j| {
                scaled_norm(matrix.column(j)).ok_or(TopsisError::ZeroNormColumn { column: j })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&norms)
                    .map(|(x, &(scale, root))| (x / scale) / root)
                    .collect()
            })
            .collect();

        Ok(NormalizedMatrix::from_rows(rows))
    }

    /// Multiplies each column by its weight.
    pub fn weight(normalized: &NormalizedMatrix, weights: &WeightVector) -> WeightedMatrix {
        let rows = normalized
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.as_slice())
                    .map(|(r, w)| r * w)
                    .collect()
            })
            .collect();

        WeightedMatrix::from_rows(rows)
    }

    /// Picks the best and worst weighted value of each criterion.
    ///
    /// For `Maximize` the ideal is the column maximum; for `Minimize` it is
    /// the column minimum. The negative ideal is the other extreme.
    pub fn ideal_solutions(
        weighted: &WeightedMatrix,
        impacts: &ImpactVector,
    ) -> (IdealSolution, NegativeIdealSolution) {
        let (ideal, negative_ideal): (Vec<f64>, Vec<f64>) = impacts
            .as_slice()
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let max = weighted.column(j).fold(f64::NEG_INFINITY, f64::max);
                let min = weighted.column(j).fold(f64::INFINITY, f64::min);
                match impact {
                    Impact::Maximize => (max, min),
                    Impact::Minimize => (min, max),
                }
            })
            .unzip();

        (
            IdealSolution::new(ideal),
            NegativeIdealSolution::new(negative_ideal),
        )
    }

    /// Euclidean distance of each row to both reference points.
    pub fn separations(
        weighted: &WeightedMatrix,
        ideal: &IdealSolution,
        negative_ideal: &NegativeIdealSolution,
    ) -> Separations {
        let (to_ideal, to_negative_ideal) = weighted
            .rows()
            .iter()
            .map(|row| {
                (
                    euclidean(row, ideal.as_slice()),
                    euclidean(row, negative_ideal.as_slice()),
                )
            })
            .unzip();

        Separations {
            to_ideal,
            to_negative_ideal,
        }
    }

    /// Relative closeness `S- / (S+ + S-)` per row.
    ///
    /// A zero denominator means the row equals both the ideal and the
    /// negative ideal, which only happens when every alternative is the same
    /// after weighting (or there is only one). A separation that overflowed
    /// to infinity is reported as `SeparationOverflow`.
    pub fn closeness(separations: &Separations) -> Result<Vec<f64>, TopsisError> {
        separations
            .to_ideal
            .iter()
            .zip(&separations.to_negative_ideal)
            .enumerate()
            .map(|(row, (&best, &worst))| {
                if !(best.is_finite() && worst.is_finite()) {
                    return Err(TopsisError::SeparationOverflow { row });
                }
                if best == 0.0 && worst == 0.0 {
                    return Err(TopsisError::ZeroSeparation { row });
                }

                let total = best + worst;
                let closeness = if total.is_finite() {
                    worst / total
                } else {
                    (worst / 2.0) / (best / 2.0 + worst / 2.0)
                };
                if closeness.is_finite() {
                    Ok(closeness)
                } else {
                    Err(TopsisError::SeparationOverflow { row })
                }
            })
            .collect()
    }

    /// Assigns ranks 1..=n by descending closeness.
    ///
    /// The sort is stable: equal scores keep their row order, so the earlier
    /// row gets the better rank. Ties never share a rank.
    pub fn rank(closeness: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..closeness.len()).collect();
        order.sort_by(|&a, &b| closeness[b].total_cmp(&closeness[a]));

        let mut ranks = vec![0; closeness.len()];
        for (position, &row) in order.iter().enumerate() {
            ranks[row] = position + 1;
        }
        ranks
    }
}

/// Splits the Euclidean norm of `values` into `(scale, root)` with
/// `norm = scale * root`. Returns `None` when every value is zero.
fn scaled_norm(values: impl Iterator<Item = f64> + Clone) -> Option<(f64, f64)> {
    let scale = values.clone().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if scale == 0.0 {
        return None;
    }
    let root = values.map(|x| (x / scale).powi(2)).sum::<f64>().sqrt();
    Some((scale, root))
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let differences = a.iter().zip(b).map(|(x, y)| x - y);
    match scaled_norm(differences) {
        Some((scale, root)) if scale.is_finite() => scale * root,
        Some(_) => f64::INFINITY,
        None => 0.0,
    }
}
