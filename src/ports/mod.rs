//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionSource` - Loads the alternatives × criteria table
//! - `RankingSink` - Publishes the ranked table

mod decision_source;
mod ranking_sink;

pub use decision_source::{DecisionSource, DecisionTable, SourceError};
pub use ranking_sink::{RankedTable, RankingSink, SinkError};
