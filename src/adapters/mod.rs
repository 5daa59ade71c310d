//! Adapters - Implementations of port interfaces.
//!
//! - `file` - CSV, JSON and YAML sources and sinks on the local filesystem
//! - `cli` - Parsing of weight and impact arguments

pub mod cli;
pub mod file;
