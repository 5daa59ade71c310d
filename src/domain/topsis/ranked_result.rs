//! Ranked Result - input rows augmented with closeness and rank.

use serde::{Deserialize, Serialize};

/// One alternative with its TOPSIS score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub label: String,
    /// Original criterion values, unmodified.
    pub values: Vec<f64>,
    /// Relative closeness to the ideal solution, in [0, 1].
    pub closeness: f64,
    /// 1 is the most preferred alternative.
    pub rank: usize,
}

/// Ranking of every alternative, kept in input row order.
///
/// The order is conveyed by `rank`; rows are never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub criteria: Vec<String>,
    pub alternatives: Vec<RankedAlternative>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the rank-1 alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.alternatives.iter().find(|a| a.rank == 1)
    }

    /// Returns the alternatives sorted by rank, best first.
    pub fn in_rank_order(&self) -> Vec<&RankedAlternative> {
        let mut sorted: Vec<_> = self.alternatives.iter().collect();
        sorted.sort_by_key(|a| a.rank);
        sorted
    }

    /// Ranks in input row order.
    pub fn ranks(&self) -> Vec<usize> {
        self.alternatives.iter().map(|a| a.rank).collect()
    }

    /// Closeness scores in input row order.
    pub fn closeness_scores(&self) -> Vec<f64> {
        self.alternatives.iter().map(|a| a.closeness).collect()
    }
}
