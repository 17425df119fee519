//! # Representation of optimal solutions
//!
//! Once the tableau is optimal, the values of all variables and the basis partition are read from
//! it and collected here for the caller to report.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::number_types::extended::ExtendedNumber;

/// The outcome of a solve that ended without error.
///
/// Infeasibility is not detected as an error: if the problem has no feasible solution, the run
/// ends with artificial variables at a nonzero value, which `is_feasible` reports.
///
/// Variables are identified by their tableau column index: structural variables come first
/// (starting at `1`), followed by slack, surplus and artificial variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Right hand side of the objective row, exact.
    objective: ExtendedNumber,
    /// Display approximation of `objective`.
    objective_value: f64,
    /// (column index, value) for the basic variables in column order, then the non-basic ones.
    values: Vec<(usize, f64)>,
    basic_variables: Vec<usize>,
    non_basic_variables: Vec<usize>,
    nr_iterations: usize,
    /// No artificial variable is nonzero.
    feasible: bool,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        objective: ExtendedNumber,
        objective_value: f64,
        values: Vec<(usize, f64)>,
        basic_variables: Vec<usize>,
        non_basic_variables: Vec<usize>,
        nr_iterations: usize,
        feasible: bool,
    ) -> Self {
        debug_assert_eq!(values.len(), basic_variables.len() + non_basic_variables.len());

        Self {
            objective,
            objective_value,
            values,
            basic_variables,
            non_basic_variables,
            nr_iterations,
            feasible,
        }
    }

    /// Objective value, optimal if the solution `is_feasible`.
    ///
    /// If a penalty is left in the objective, this is an approximation using `APPROXIMATE_M`, and
    /// the penalty means that artificial variables are still nonzero.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Optimal objective value including the coefficient of `M`.
    pub fn objective(&self) -> ExtendedNumber {
        self.objective
    }

    /// All `(column index, value)` pairs.
    pub fn values(&self) -> &[(usize, f64)] {
        &self.values
    }

    /// Value of the variable in a column, if that column is a variable.
    pub fn value(&self, column: usize) -> Option<f64> {
        self.values.iter()
            .find(|&&(index, _)| index == column)
            .map(|&(_, value)| value)
    }

    /// Indices of the basic variables, sorted.
    pub fn basic_variables(&self) -> &[usize] {
        &self.basic_variables
    }

    /// Indices of the non-basic variables, sorted.
    pub fn non_basic_variables(&self) -> &[usize] {
        &self.non_basic_variables
    }

    /// Whether all artificial variables are zero, such that the values satisfy the constraints.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Number of pivots it took.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "Iterations: {}", self.nr_iterations)?;
        if self.feasible {
            writeln!(f, "Optimal value: {}", self.objective_value)?;
        } else {
            writeln!(
                f,
                "Objective value: {} (artificial variables are nonzero, no feasible solution was found)",
                self.objective,
            )?;
        }
        writeln!(
            f,
            "Solution: {}",
            self.values.iter().map(|(j, value)| format!("x{j} = {value}")).join(", "),
        )?;
        writeln!(f, "Basic variables: {}", self.basic_variables.iter().map(|j| format!("x{j}")).join(", "))?;
        write!(f, "Non-basic variables: {}", self.non_basic_variables.iter().map(|j| format!("x{j}")).join(", "))
    }
}
