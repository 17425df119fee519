//! # Dense Big-M tableau
//!
//! Holds the objective row and one row per constraint, and the elementary operations the simplex
//! method performs upon them.
//!
//! The column layout is the same for every row:
//!
//! ```text
//! | z | structural variables | auxiliary variables | b |
//! ```
//!
//! Column `0` is reserved for the coefficient of `z` and the last column holds the right hand side.
//! The auxiliary region is `m + #(constraints that are not <=)` wide; each constraint claims its
//! columns from the start of that region, in order, using one column for `<=` (slack) and `=`
//! (artificial) and two for `>=` (surplus, artificial). The columns left over at the end are never
//! written to.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::iter::once;
use std::ops::Range;

use itertools::{Itertools, repeat_n};
use log::debug;
use num_traits::{One, Zero};

use crate::data::linear_program::elements::{ColumnKind, ConstraintType};
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::extended::ExtendedNumber;
use crate::error::LinearProgramError;

/// The simplex tableau.
///
/// Created once from a `Problem`. Pivots mutate the rows in place; rows and columns are never
/// added or removed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// `z - c'x = 0`, so objective coefficients appear negated.
    objective_row: Vec<ExtendedNumber>,
    /// One row per constraint, in the order of the problem's constraints.
    constraint_rows: Vec<Vec<ExtendedNumber>>,
    /// What each column represents, fixed at construction.
    column_kinds: Vec<ColumnKind>,
}

impl Tableau {
    /// Build the initial tableau.
    ///
    /// Every slack column of a `<=` constraint and every artificial column is a unit vector in the
    /// row of its constraint, which together form the initial basis. Artificial columns cost `M`
    /// in the objective row.
    pub fn new(problem: &Problem) -> Self {
        let nr_variables = problem.nr_variables();
        let counts = problem.constraint_type_counts();
        let nr_auxiliary = problem.nr_constraints()
            + counts.iter()
                .filter(|(constraint_type, _)| constraint_type.needs_artificial())
                .map(|(_, &count)| count)
                .sum::<usize>();

        let mut objective_row = once(ExtendedNumber::one())
            // Subtracted from zero rather than negated, to not introduce negative zeros
            .chain(problem.objective().iter().map(|&cost| ExtendedNumber::zero() - cost))
            .chain(repeat_n(ExtendedNumber::zero(), nr_auxiliary + 1))
            .collect::<Vec<_>>();
        let mut column_kinds = once(ColumnKind::Objective)
            .chain((0..nr_variables).map(ColumnKind::Structural))
            .chain(repeat_n(ColumnKind::Unused, nr_auxiliary))
            .chain(once(ColumnKind::RightHandSide))
            .collect::<Vec<_>>();

        let mut constraint_rows = Vec::with_capacity(problem.nr_constraints());
        let mut next_free_column = 1 + nr_variables;
        for (i, constraint) in problem.constraints().iter().enumerate() {
            let mut row = once(ExtendedNumber::zero())
                .chain(constraint.coefficients().iter().copied())
                .chain(repeat_n(ExtendedNumber::zero(), nr_auxiliary))
                .chain(once(constraint.rhs()))
                .collect::<Vec<_>>();

            let column = next_free_column;
            match constraint.constraint_type() {
                ConstraintType::Less => {
                    row[column] = ExtendedNumber::one();
                    column_kinds[column] = ColumnKind::Slack(i);
                },
                ConstraintType::Equal => {
                    row[column] = ExtendedNumber::one();
                    objective_row[column] = ExtendedNumber::BIG_M;
                    column_kinds[column] = ColumnKind::Artificial(i);
                },
                ConstraintType::Greater => {
                    row[column] = -ExtendedNumber::one();
                    column_kinds[column] = ColumnKind::Surplus(i);
                    row[column + 1] = ExtendedNumber::one();
                    objective_row[column + 1] = ExtendedNumber::BIG_M;
                    column_kinds[column + 1] = ColumnKind::Artificial(i);
                },
            }
            next_free_column += constraint.constraint_type().nr_columns_used();

            constraint_rows.push(row);
        }
        debug_assert!(next_free_column <= 1 + nr_variables + nr_auxiliary);

        debug!(
            "Tableau of {} rows and {} columns ({} <=, {} =, {} >=)",
            constraint_rows.len(),
            objective_row.len(),
            counts[ConstraintType::Less],
            counts[ConstraintType::Equal],
            counts[ConstraintType::Greater],
        );

        Self { objective_row, constraint_rows, column_kinds }
    }

    /// Create a tableau from its rows directly.
    #[cfg(test)]
    pub(crate) fn from_rows(
        objective_row: Vec<ExtendedNumber>,
        constraint_rows: Vec<Vec<ExtendedNumber>>,
        column_kinds: Vec<ColumnKind>,
    ) -> Self {
        debug_assert!(constraint_rows.iter().all(|row| row.len() == objective_row.len()));
        debug_assert_eq!(column_kinds.len(), objective_row.len());

        Self { objective_row, constraint_rows, column_kinds }
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// This is the row with the smallest ratio between the right hand side and a strictly
    /// positive coefficient in the column. Ties go to the lowest row index.
    ///
    /// # Errors
    ///
    /// `Unbounded` if no row has a positive coefficient in the column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Result<usize, LinearProgramError> {
        debug_assert!(self.variable_columns().contains(&column));

        let rhs_column = self.rhs_column();
        let mut smallest = ExtendedNumber::infinity();
        let mut chosen = None;
        for (i, row) in self.constraint_rows.iter().enumerate() {
            let coefficient = row[column];
            if coefficient > ExtendedNumber::zero() {
                let ratio = row[rhs_column].try_div(coefficient)?;
                if ratio < smallest {
                    smallest = ratio;
                    chosen = Some(i);
                }
            }
        }

        chosen.ok_or(LinearProgramError::Unbounded { column })
    }

    /// Pivot on an element, bringing its column into the basis.
    ///
    /// Afterwards, the column is a unit vector with its `1` in `row` and zero in all other rows,
    /// the objective row included.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the pivot element is zero. The ratio test only selects positive
    /// elements, so that signals a broken invariant.
    pub fn bring_into_basis(&mut self, row: usize, column: usize) -> Result<(), LinearProgramError> {
        debug_assert!(row < self.nr_rows());
        debug_assert!(self.variable_columns().contains(&column));

        let pivot = self.constraint_rows[row][column];
        debug_assert!(pivot.is_finite(), "pivot element {pivot} is not finite");
        let pivot_row = self.constraint_rows[row].iter()
            .map(|value| value.try_div(pivot))
            .collect::<Result<Vec<_>, _>>()?;

        let factor = self.objective_row[column];
        subtract_multiple(&mut self.objective_row, factor, &pivot_row);
        for (i, other) in self.constraint_rows.iter_mut().enumerate() {
            if i != row {
                let factor = other[column];
                subtract_multiple(other, factor, &pivot_row);
            }
        }
        self.constraint_rows[row] = pivot_row;

        Ok(())
    }

    /// Remove the cost of the artificial variables from the objective row.
    ///
    /// Subtracts, for each artificial column that is currently a unit vector, its objective
    /// coefficient times the row holding its `1`. The artificial columns then have a relative cost
    /// of zero and the penalty moves to the columns that can replace them.
    pub fn price_out_artificials(&mut self) {
        for column in self.variable_columns() {
            if !self.column_kinds[column].is_artificial() {
                continue;
            }

            if let Some(row) = self.basis_row(column) {
                let factor = self.objective_row[column];
                subtract_multiple(&mut self.objective_row, factor, &self.constraint_rows[row]);
            }
        }
    }

    /// Row in which the column has its `1`, if the column is a unit vector.
    ///
    /// A unit vector has exactly one entry equal to `1` in the constraint rows and all other
    /// entries equal to `0`. The objective row is not considered.
    ///
    /// Scans the column, which is `O(m)`.
    pub fn basis_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut found = None;
        for (i, row) in self.constraint_rows.iter().enumerate() {
            let value = row[column];
            if value == ExtendedNumber::one() {
                if found.is_some() {
                    return None;
                }
                found = Some(i);
            } else if !value.is_zero() {
                return None;
            }
        }

        found
    }

    /// The basic column of each constraint row, if any.
    ///
    /// Several columns can be a unit vector with their `1` in the same row, for example once a
    /// structural column has become equal to the artificial column of an `=` constraint. Only one
    /// of them is basic: the lowest indexed column that is not artificial, or the lowest indexed
    /// artificial column if there is no other.
    pub fn basis(&self) -> Vec<Option<usize>> {
        let mut basis: Vec<Option<usize>> = vec![None; self.nr_rows()];
        for column in self.variable_columns() {
            if let Some(row) = self.basis_row(column) {
                let claims_row = match basis[row] {
                    None => true,
                    Some(current) => {
                        self.column_kinds[current].is_artificial()
                            && !self.column_kinds[column].is_artificial()
                    },
                };
                if claims_row {
                    basis[row] = Some(column);
                }
            }
        }

        basis
    }

    /// Relative cost of a column, its entry in the objective row.
    pub fn relative_cost(&self, column: usize) -> ExtendedNumber {
        self.objective_row[column]
    }

    /// Right hand side of a constraint row.
    pub fn rhs(&self, row: usize) -> ExtendedNumber {
        self.constraint_rows[row][self.rhs_column()]
    }

    /// Current value of the objective function, the right hand side of the objective row.
    pub fn objective_function_value(&self) -> ExtendedNumber {
        self.objective_row[self.rhs_column()]
    }

    /// The objective row, including the `z` and right hand side columns.
    pub fn objective_row(&self) -> &[ExtendedNumber] {
        &self.objective_row
    }

    /// All constraint rows.
    pub fn constraint_rows(&self) -> &[Vec<ExtendedNumber>] {
        &self.constraint_rows
    }

    /// What each column represents.
    pub fn column_kinds(&self) -> &[ColumnKind] {
        &self.column_kinds
    }

    /// Indices of the structural and auxiliary columns, excluding `z` and the right hand side.
    pub fn variable_columns(&self) -> Range<usize> {
        1..self.rhs_column()
    }

    /// Index of the right hand side column, the last one.
    pub fn rhs_column(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.constraint_rows.len()
    }

    /// Number of columns, `z` and right hand side included.
    pub fn nr_columns(&self) -> usize {
        self.objective_row.len()
    }
}

/// `row -= factor * pivot_row`, elementwise.
fn subtract_multiple(row: &mut [ExtendedNumber], factor: ExtendedNumber, pivot_row: &[ExtendedNumber]) {
    if factor.is_zero() {
        return;
    }

    for (value, &pivot_value) in row.iter_mut().zip_eq(pivot_row) {
        *value -= factor * pivot_value;
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let header = self.column_kinds.iter().map(ToString::to_string).collect::<Vec<_>>();
        let rows = once(&self.objective_row)
            .chain(self.constraint_rows.iter())
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let labels = once("z".to_string())
            .chain((1..=self.nr_rows()).map(|i| format!("r{i}")))
            .collect::<Vec<_>>();

        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let column_width = (0..self.nr_columns())
            .map(|j| rows.iter().map(|row| row[j].len()).fold(header[j].len(), max))
            .collect::<Vec<_>>();

        write!(f, "{:>label_width$} |", "")?;
        for (label, width) in header.iter().zip(&column_width) {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        let total_width = label_width + 2 + column_width.iter().map(|width| width + 1).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;

        for (label, row) in labels.iter().zip(&rows) {
            write!(f, "{label:>label_width$} |")?;
            for (value, width) in row.iter().zip(&column_width) {
                write!(f, " {value:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
