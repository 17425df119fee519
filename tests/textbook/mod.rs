//! # Small problems as they appear in textbooks
//!
//! Each is solved by hand in a few pivots, such that intermediate values can be checked.
use bigm::data::linear_program::elements::ConstraintType;
use bigm::data::linear_program::problem::{Constraint, Problem};

mod test;

/// ```text
/// max 90x + 120y
/// s.t.          x <= 5000
///               y <= 7000
///      50x + 100y <= 800000
/// ```
fn production() -> Problem {
    Problem::new(
        vec![90_f64, 120_f64],
        vec![
            Constraint::new(vec![1_f64, 0_f64], ConstraintType::Less, 5000_f64).unwrap(),
            Constraint::new(vec![0_f64, 1_f64], ConstraintType::Less, 7000_f64).unwrap(),
            Constraint::new(vec![50_f64, 100_f64], ConstraintType::Less, 800_000_f64).unwrap(),
        ],
    ).unwrap()
}

/// ```text
/// max 3x + 2y
/// s.t. x +  y  = 4
///      x + 3y >= 6
///      x      <= 3
/// ```
fn blend() -> Problem {
    Problem::new(
        vec![3_f64, 2_f64],
        vec![
            Constraint::from_symbol(vec![1_f64, 1_f64], "=", 4_f64).unwrap(),
            Constraint::from_symbol(vec![1_f64, 3_f64], ">=", 6_f64).unwrap(),
            Constraint::from_symbol(vec![1_f64, 0_f64], "<=", 3_f64).unwrap(),
        ],
    ).unwrap()
}

/// ```text
/// max x
/// s.t. x - y <= 10
/// ```
fn unbounded() -> Problem {
    Problem::new(
        vec![1_f64, 0_f64],
        vec![Constraint::new(vec![1_f64, -1_f64], ConstraintType::Less, 10_f64).unwrap()],
    ).unwrap()
}

/// ```text
/// max 2x + y
/// s.t. x + y  = 4
///      x     <= 3
/// ```
fn shared_row() -> Problem {
    Problem::new(
        vec![2_f64, 1_f64],
        vec![
            Constraint::from_symbol(vec![1_f64, 1_f64], "=", 4_f64).unwrap(),
            Constraint::from_symbol(vec![1_f64, 0_f64], "<=", 3_f64).unwrap(),
        ],
    ).unwrap()
}

/// ```text
/// max x
/// s.t. x >= 5
///      x <= 3
/// ```
fn infeasible() -> Problem {
    Problem::new(
        vec![1_f64],
        vec![
            Constraint::from_symbol(vec![1_f64], ">=", 5_f64).unwrap(),
            Constraint::from_symbol(vec![1_f64], "<=", 3_f64).unwrap(),
        ],
    ).unwrap()
}
