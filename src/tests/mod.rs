//! # Problems shared between unit tests.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn tableau_form()`: the tableau directly after construction
pub mod infeasible;
pub mod problem_3;
