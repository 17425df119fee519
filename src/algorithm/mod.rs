//! # Algorithms
//!
//! Only the Big-M method lives here; it operates directly on the data structures in
//! `data::linear_program`.
pub mod big_m;
