//! # Representing linear programs
//!
//! A problem is described by its objective coefficients and a list of constraints, each of which
//! may be of any type. The solution is what is read back from an optimal tableau.
pub mod elements;
pub mod problem;
pub mod solution;
