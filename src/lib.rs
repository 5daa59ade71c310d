//! Topsis Rank - Multi-criteria ranking of alternatives
//!
//! This crate ranks alternatives against weighted, possibly conflicting
//! criteria using TOPSIS (Technique for Order Preference by Similarity to
//! Ideal Solution).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
