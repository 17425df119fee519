//! # A Big-M linear program solver
//!
//! Maximizes a linear objective over non-negative variables subject to `<=`, `=` and `>=`
//! constraints, using the simplex method on a dense tableau. Feasibility is found in the same
//! phase as optimality: every `=` and `>=` constraint gets an artificial variable that costs a
//! symbolic constant `M`, larger than any other number.
//!
//! ```
//! use bigm::algorithm::big_m::solve;
//! use bigm::data::linear_program::elements::ConstraintType;
//! use bigm::data::linear_program::problem::{Constraint, Problem};
//!
//! # fn main() -> Result<(), bigm::error::LinearProgramError> {
//! let problem = Problem::new(
//!     vec![1_f64, 1_f64],
//!     vec![
//!         Constraint::new(vec![1_f64, 2_f64], ConstraintType::Equal, 6_f64)?,
//!         Constraint::new(vec![1_f64, 0_f64], ConstraintType::Less, 4_f64)?,
//!     ],
//! )?;
//!
//! let solution = solve(&problem)?;
//! assert_eq!(solution.objective_value(), 5_f64);
//! assert_eq!(solution.value(1), Some(4_f64));
//! assert_eq!(solution.value(2), Some(1_f64));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

#[cfg(test)]
mod tests;
