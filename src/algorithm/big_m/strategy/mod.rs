//! # Strategies
//!
//! Choices within the simplex method that don't affect correctness, only the path taken.
pub mod pivot_rule;
