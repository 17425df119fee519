//! A `>=` constraint, which needs both a surplus and an artificial variable.
//!
//! ```text
//! max 2x + 3y
//! s.t. x + y <= 10
//!      x     >= 2
//! ```
//!
//! Optimal at `x = 2, y = 8` with value `28`. Only found when the artificial variable is priced
//! out before iterating: otherwise its column starts with a cost of `M` while being basic, and
//! `y` alone is brought in, leaving the artificial variable at value `2`.
use num_traits::{One, Zero};

use crate::algorithm::big_m::tableau::Tableau;
use crate::data::linear_program::elements::{ColumnKind, ConstraintType};
use crate::data::linear_program::problem::{Constraint, Problem};
use crate::data::number_types::extended::ExtendedNumber;

type E = ExtendedNumber;

pub fn problem() -> Problem {
    Problem::new(
        vec![2_f64, 3_f64],
        vec![
            Constraint::new(vec![1_f64, 1_f64], ConstraintType::Less, 10_f64).unwrap(),
            Constraint::new(vec![1_f64, 0_f64], ConstraintType::Greater, 2_f64).unwrap(),
        ],
    ).unwrap()
}

pub fn tableau_form() -> Tableau {
    let (o, z) = (E::one(), E::zero());
    Tableau::from_rows(
        vec![o, E::from(-2), E::from(-3), z, z, E::BIG_M, z],
        vec![
            vec![z, o, o, o, z, z, E::from(10)],
            vec![z, o, z, z, -o, o, E::from(2)],
        ],
        vec![
            ColumnKind::Objective,
            ColumnKind::Structural(0),
            ColumnKind::Structural(1),
            ColumnKind::Slack(0),
            ColumnKind::Surplus(1),
            ColumnKind::Artificial(1),
            ColumnKind::RightHandSide,
        ],
    )
}
