//! # Errors
//!
//! Every failure aborts the solve of the problem instance it occurred in; there is no recovery.
use thiserror::Error;

/// Anything that can go wrong while building or solving a linear program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearProgramError {
    /// An input value has no representation as an `ExtendedNumber`.
    #[error("The value {0} can't be represented as an extended number.")]
    ValueConversion(f64),
    /// Division by an extended number of which the finite part is zero.
    #[error("Division by an extended number with a finite part equal to zero.")]
    DivisionByZero,
    /// No row could leave the basis for the entering column.
    #[error("The problem is unbounded: no row has a positive coefficient in entering column {column}.")]
    Unbounded {
        /// Index of the entering column for which the ratio test failed.
        column: usize,
    },
    /// A constraint doesn't have one coefficient per objective coefficient.
    #[error("Constraint {constraint} has {found} coefficients, but the objective has {expected}.")]
    IncompatibleInputDimensions {
        /// Index of the offending constraint.
        constraint: usize,
        /// Number of objective coefficients.
        expected: usize,
        /// Number of coefficients of the constraint.
        found: usize,
    },
    /// A relation symbol other than `<=`, `=` or `>=`.
    #[error("Unknown constraint type {0:?}, expected one of \"<=\", \"=\" or \">=\".")]
    UnknownConstraintType(String),
    /// The configured maximum number of iterations was reached before optimality.
    #[error("The solver did not reach optimality within {0} iterations.")]
    IterationLimitExceeded(usize),
}
