//! # The Big-M simplex method
//!
//! A single phase primal simplex over a dense tableau. Artificial variables start in the basis and
//! are driven out by their cost of `M`, which is kept symbolic by computing with
//! `ExtendedNumber`s.
//!
//! A `SolverRun` owns the tableau of one problem and the count of pivots made so far. Which
//! variables are basic is never stored, it is read from the tableau when asked for.
use itertools::Itertools;
use log::{debug, info, trace, warn};
use num_traits::Zero;

use crate::algorithm::big_m::strategy::pivot_rule::{PivotRule, SmallestRelativeCost};
use crate::algorithm::big_m::tableau::Tableau;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::extended::ExtendedNumber;
use crate::error::LinearProgramError;

pub mod strategy;
pub mod tableau;

/// Settings of a solver run.
///
/// These are the default values, overwrite any of them with the builder methods:
///
/// ```
/// use bigm::algorithm::big_m::Options;
///
/// let options = Options::default()
///     .max_iterations(Some(100))
///     .price_out_artificials(true);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Options {
    max_iterations: Option<usize>,
    price_out_artificials: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_iterations: None,
            price_out_artificials: true,
        }
    }
}

impl Options {
    /// Fail with `IterationLimitExceeded` instead of pivoting more than this many times.
    ///
    /// No limit by default.
    #[must_use]
    pub fn max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Whether to remove the cost of the initially basic artificial variables from the objective
    /// row before the first pivot.
    ///
    /// Without it, the objective row of a problem with `=` or `>=` constraints doesn't describe
    /// relative costs with respect to the initial basis, and the method may stop at a "solution"
    /// in which artificial variables are nonzero. Enabled by default; disable to iterate on the
    /// tableau exactly as constructed.
    #[must_use]
    pub fn price_out_artificials(mut self, price_out_artificials: bool) -> Self {
        self.price_out_artificials = price_out_artificials;
        self
    }
}

/// Where a run is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    /// Some relative cost is still negative.
    Running,
    /// No relative cost is negative; final.
    Optimal,
    /// The ratio test failed for the entering column; final.
    Unbounded {
        /// The column that could be increased without limit.
        column: usize,
    },
}

/// The outcome of a single `SolverRun::step`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// A pivot was made on this element.
    Pivoted {
        /// Leaving row.
        row: usize,
        /// Entering column.
        column: usize,
    },
    /// The tableau is optimal, nothing was changed.
    Optimal,
}

/// Solving a single problem.
///
/// Created at the start of a solve and dropped with it; nothing is shared between runs.
#[derive(Debug)]
pub struct SolverRun<PR = SmallestRelativeCost> {
    tableau: Tableau,
    rule: PR,
    options: Options,
    /// Number of pivots made.
    nr_iterations: usize,
    state: State,
    artificials_priced_out: bool,
}

impl SolverRun<SmallestRelativeCost> {
    /// Start solving a problem with the default pivot rule and options.
    pub fn new(problem: &Problem) -> Self {
        Self::with_options(problem, Options::default())
    }
}

impl<PR: PivotRule> SolverRun<PR> {
    /// Start solving a problem.
    ///
    /// Only builds the tableau; no pivots are made until `step` or `run` is called.
    pub fn with_options(problem: &Problem, options: Options) -> Self {
        Self {
            tableau: Tableau::new(problem),
            rule: PR::new(),
            options,
            nr_iterations: 0,
            state: State::Running,
            artificials_priced_out: false,
        }
    }

    /// Perform a single iteration: select an entering column, a leaving row, and pivot.
    ///
    /// Once the run is optimal, this does nothing.
    ///
    /// # Errors
    ///
    /// `Unbounded` if no row can leave the basis, after which every call returns that error
    /// again. `IterationLimitExceeded` if a pivot is needed but the configured maximum has been
    /// reached. `DivisionByZero` if a pivot element is zero, which the ratio test should prevent.
    pub fn step(&mut self) -> Result<Step, LinearProgramError> {
        match self.state {
            State::Optimal => return Ok(Step::Optimal),
            State::Unbounded { column } => return Err(LinearProgramError::Unbounded { column }),
            State::Running => {},
        }

        if self.options.price_out_artificials && !self.artificials_priced_out {
            self.tableau.price_out_artificials();
            self.artificials_priced_out = true;
            trace!("Priced out artificial variables\n{}", self.tableau);
        }

        let column = match self.rule.select_primal_pivot_column(&self.tableau) {
            Some(column) => column,
            None => {
                self.state = State::Optimal;
                info!(
                    "Optimal after {} iterations, objective value {}",
                    self.nr_iterations, self.tableau.objective_function_value(),
                );
                if !self.is_feasible() {
                    warn!("Artificial variables are nonzero at optimality, the problem is infeasible");
                }
                return Ok(Step::Optimal);
            },
        };

        if let Some(limit) = self.options.max_iterations {
            if self.nr_iterations >= limit {
                return Err(LinearProgramError::IterationLimitExceeded(limit));
            }
        }

        let row = match self.tableau.select_primal_pivot_row(column) {
            Ok(row) => row,
            Err(error) => {
                if let LinearProgramError::Unbounded { column } = error {
                    self.state = State::Unbounded { column };
                    info!("Unbounded after {} iterations, entering column {column}", self.nr_iterations);
                }
                return Err(error);
            },
        };

        self.tableau.bring_into_basis(row, column)?;
        self.nr_iterations += 1;

        debug!(
            "Iteration {}: column {column} enters at row {row}, objective value {}",
            self.nr_iterations, self.tableau.objective_function_value(),
        );
        trace!("\n{}", self.tableau);

        Ok(Step::Pivoted { row, column })
    }

    /// Iterate until the tableau is optimal.
    ///
    /// # Errors
    ///
    /// See `step`; the first error ends the run.
    pub fn run(&mut self) -> Result<(), LinearProgramError> {
        while self.step()? != Step::Optimal {}

        Ok(())
    }

    /// Iterate until the tableau is optimal and read the solution from it.
    ///
    /// # Errors
    ///
    /// See `step`.
    pub fn solve(mut self) -> Result<Solution, LinearProgramError> {
        self.run()?;

        Ok(self.solution())
    }

    /// Columns that are basic in some constraint row, in increasing order.
    ///
    /// A column is basic when it is a unit vector in the constraint rows, with at most one basic
    /// column per row; see `Tableau::basis`. Computed from the tableau on every call, in `O(mn)`.
    pub fn basic_variables(&self) -> Vec<usize> {
        self.tableau.basis().into_iter()
            .flatten()
            .sorted_unstable()
            .collect()
    }

    /// All other structural and auxiliary columns, in increasing order.
    pub fn non_basic_variables(&self) -> Vec<usize> {
        let basic = self.basic_variables();

        self.tableau.variable_columns()
            .filter(|column| basic.binary_search(column).is_err())
            .collect()
    }

    /// Values of the variables in the current basic solution.
    ///
    /// A basic variable has the right hand side of its row; non-basic variables are zero. Basic
    /// variables are listed first, in column order.
    pub fn solution_values(&self) -> Vec<(usize, f64)> {
        let basic = self.tableau.basis().into_iter()
            .enumerate()
            .filter_map(|(row, column)| {
                column.map(|column| (column, self.tableau.rhs(row).approximate()))
            })
            .sorted_unstable_by_key(|&(column, _)| column);
        let non_basic = self.non_basic_variables().into_iter()
            .map(|column| (column, 0_f64));

        basic.chain(non_basic).collect()
    }

    /// Whether every basic artificial variable is zero in the current basic solution.
    ///
    /// Non-basic variables are zero anyway. At optimality, a nonzero artificial variable means
    /// that the problem has no feasible solution.
    pub fn is_feasible(&self) -> bool {
        self.tableau.basis().into_iter()
            .enumerate()
            .filter_map(|(row, column)| column.map(|column| (row, column)))
            .filter(|&(_, column)| self.tableau.column_kinds()[column].is_artificial())
            .all(|(row, _)| self.tableau.rhs(row).is_zero())
    }

    /// Current value of the objective function.
    pub fn objective_function_value(&self) -> ExtendedNumber {
        self.tableau.objective_function_value()
    }

    /// Collect the current basic solution.
    ///
    /// Meant to be called once the run is `Optimal`; earlier, it describes an intermediate
    /// basic solution.
    pub fn solution(&self) -> Solution {
        let objective = self.objective_function_value();

        Solution::new(
            objective,
            objective.approximate(),
            self.solution_values(),
            self.basic_variables(),
            self.non_basic_variables(),
            self.nr_iterations,
            self.is_feasible(),
        )
    }

    /// The tableau in its current state.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Number of pivots made so far.
    pub fn nr_iterations(&self) -> usize {
        self.nr_iterations
    }

    /// Where the run is.
    pub fn state(&self) -> State {
        self.state
    }
}

/// Solve a problem with the default pivot rule and options.
///
/// # Errors
///
/// `Unbounded` if the problem has no finite optimum, see `SolverRun::step` for the others.
pub fn solve(problem: &Problem) -> Result<Solution, LinearProgramError> {
    SolverRun::new(problem).solve()
}

/// Solve a problem with a specific pivot rule and options.
///
/// # Errors
///
/// See `solve`.
pub fn solve_with<PR: PivotRule>(
    problem: &Problem,
    options: Options,
) -> Result<Solution, LinearProgramError> {
    SolverRun::<PR>::with_options(problem, options).solve()
}
