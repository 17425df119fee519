//! No `x` is both at least `5` and at most `3`.
//!
//! ```text
//! max x
//! s.t. x >= 5
//!      x <= 3
//! ```
//!
//! Ends after a single pivot with `x = 3`, the artificial variable at `2` and objective `3 - 2M`.
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::problem::{Constraint, Problem};

pub fn problem() -> Problem {
    Problem::new(
        vec![1_f64],
        vec![
            Constraint::new(vec![1_f64], ConstraintType::Greater, 5_f64).unwrap(),
            Constraint::new(vec![1_f64], ConstraintType::Less, 3_f64).unwrap(),
        ],
    ).unwrap()
}
