//! Command-line adapters - turning argument strings into domain values.

mod arguments;

pub use arguments::{parse_impacts, parse_weights, InputError, FROM_INPUT};
