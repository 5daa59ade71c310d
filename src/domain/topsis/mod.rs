//! TOPSIS Module - Pure domain services for multi-criteria ranking.
//!
//! Ranks alternatives by their relative closeness to an ideal solution
//! built from the best weighted value of each criterion.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives × criteria values with opaque labels
//! - `WeightVector` / `ImpactVector` - Per-criterion weight and direction
//! - `TopsisEngine` - Normalize, weight, ideal solutions, distances, rank
//! - `RankedResult` - Input rows augmented with closeness and rank
//!
//! # Design Philosophy
//!
//! The engine is a set of pure functions. It never parses strings, logs or
//! touches the filesystem; adapters produce its inputs and consume its
//! output.

mod criteria;
mod decision_matrix;
mod engine;
mod errors;
mod ranked_result;
mod stages;

pub use criteria::{Impact, ImpactVector, WeightVector};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use engine::{TopsisAnalysis, TopsisEngine};
pub use errors::{TopsisError, TopsisErrorCode};
pub use ranked_result::{RankedAlternative, RankedResult};
pub use stages::{
    IdealSolution, NegativeIdealSolution, NormalizedMatrix, Separations, WeightedMatrix,
};
