//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `topsis` - Pure domain services for TOPSIS ranking (matrix, criteria, engine)

pub mod topsis;
