//! RankAlternativesHandler - Command handler for ranking a decision table.
//!
//! Loads the table from a source, runs the TOPSIS engine and hands the
//! ranked table to a sink. Weights and impacts come from the command when
//! given, otherwise from the source.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::topsis::{ImpactVector, TopsisEngine, TopsisError, WeightVector};
use crate::ports::{DecisionSource, RankedTable, RankingSink, SinkError, SourceError};

/// Command to rank the alternatives of a decision table.
#[derive(Debug, Clone, Default)]
pub struct RankAlternativesCommand {
    /// Overrides weights embedded in the source.
    pub weights: Option<WeightVector>,
    /// Overrides impacts embedded in the source.
    pub impacts: Option<ImpactVector>,
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub table: RankedTable,
    /// Where the table was written.
    pub destination: String,
}

/// Errors from the ranking workflow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankAlternativesError {
    #[error("Failed to load decision table: {0}")]
    Source(#[from] SourceError),

    #[error("No criterion weights given and the input does not define any")]
    MissingWeights,

    #[error("No criterion impacts given and the input does not define any")]
    MissingImpacts,

    #[error("TOPSIS analysis failed: {0}")]
    Ranking(#[from] TopsisError),

    #[error("Failed to write ranked table: {0}")]
    Sink(#[from] SinkError),
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    source: Arc<dyn DecisionSource>,
    sink: Arc<dyn RankingSink>,
}

impl RankAlternativesHandler {
    pub fn new(source: Arc<dyn DecisionSource>, sink: Arc<dyn RankingSink>) -> Self {
        Self { source, sink }
    }

    pub fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, RankAlternativesError> {
        // 1. Load the decision table
        let table = self.source.load()?;
        info!(
            source = %self.source.describe(),
            alternatives = table.matrix.alternative_count(),
            criteria = table.matrix.criterion_count(),
            "Loaded decision table"
        );

        // 2. Resolve criteria, command first
        let weights = cmd
            .weights
            .or(table.weights)
            .ok_or(RankAlternativesError::MissingWeights)?;
        let impacts = cmd
            .impacts
            .or(table.impacts)
            .ok_or(RankAlternativesError::MissingImpacts)?;

        // 3. Rank
        let result = TopsisEngine::compute(&table.matrix, &weights, &impacts).map_err(|e| {
            warn!(code = %e.code(), error = %e, "TOPSIS rejected the decision table");
            e
        })?;
        if let Some(best) = result.best() {
            debug!(best = %best.label, closeness = best.closeness, "Ranked alternatives");
        }

        // 4. Write
        let ranked = RankedTable::new(table.label_header, result);
        self.sink.write(&ranked)?;
        let destination = self.sink.describe();
        info!(destination = %destination, rows = ranked.result.len(), "Wrote ranked table");

        Ok(RankAlternativesResult {
            table: ranked,
            destination,
        })
    }
}
