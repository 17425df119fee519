//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use num_traits::Zero;

use crate::algorithm::big_m::tableau::Tableau;
use crate::data::number_types::extended::ExtendedNumber;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, the row is found with the ratio test, independent of the
/// strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of a column with a negative relative cost, or `None` if there is no such column
    /// and the tableau is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize>;
}

/// Pivot on the column with the smallest relative cost.
///
/// Columns are scanned from left to right with a running minimum that starts at positive
/// infinity and is only replaced by a strictly smaller cost, so the leftmost column wins a tie.
pub struct SmallestRelativeCost;
impl PivotRule for SmallestRelativeCost {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        let mut smallest = ExtendedNumber::infinity();
        let mut chosen = None;
        for column in tableau.variable_columns() {
            let cost = tableau.relative_cost(column);
            if cost < smallest {
                smallest = cost;
                chosen = Some(column);
            }
        }

        chosen.filter(|_| smallest < ExtendedNumber::zero())
    }
}

/// Simply pivot on the first column which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau) -> Option<usize> {
        tableau.variable_columns()
            .find(|&column| tableau.relative_cost(column) < ExtendedNumber::zero())
    }
}
