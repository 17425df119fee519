//! # Problem input
//!
//! A maximization problem `max c'x` subject to a list of linear constraints and `x >= 0`. Values
//! are coerced to `ExtendedNumber` and dimensions are checked on creation, so that building a
//! tableau from a `Problem` can't fail.
use std::convert::TryFrom;

use enum_map::EnumMap;

use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::extended::ExtendedNumber;
use crate::error::LinearProgramError;

/// A single constraint `a'x (<=|=|>=) b`.
///
/// The right hand side is assumed to be non-negative, which is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    coefficients: Vec<ExtendedNumber>,
    constraint_type: ConstraintType,
    rhs: ExtendedNumber,
}

impl Constraint {
    /// Create a new constraint.
    ///
    /// # Errors
    ///
    /// `ValueConversion` if any of the values is `NaN`.
    pub fn new(
        coefficients: Vec<f64>,
        constraint_type: ConstraintType,
        rhs: f64,
    ) -> Result<Self, LinearProgramError> {
        let coefficients = coefficients.into_iter()
            .map(ExtendedNumber::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            coefficients,
            constraint_type,
            rhs: ExtendedNumber::try_from(rhs)?,
        })
    }

    /// Create a new constraint with the relation given as one of `"<="`, `"="` or `">="`.
    ///
    /// # Errors
    ///
    /// `UnknownConstraintType` for any other symbol, `ValueConversion` for `NaN` values.
    pub fn from_symbol(
        coefficients: Vec<f64>,
        symbol: &str,
        rhs: f64,
    ) -> Result<Self, LinearProgramError> {
        Self::new(coefficients, symbol.parse()?, rhs)
    }

    /// Coefficients of the structural variables.
    pub fn coefficients(&self) -> &[ExtendedNumber] {
        &self.coefficients
    }

    /// Type of the relation.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// Right hand side.
    pub fn rhs(&self) -> ExtendedNumber {
        self.rhs
    }
}

/// A linear program to maximize.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    objective: Vec<ExtendedNumber>,
    constraints: Vec<Constraint>,
}

impl Problem {
    /// Create a new problem.
    ///
    /// # Arguments
    ///
    /// * `objective`: One coefficient per structural variable; the objective is maximized.
    /// * `constraints`: Each with exactly as many coefficients as `objective`.
    ///
    /// # Errors
    ///
    /// `IncompatibleInputDimensions` naming the first constraint with the wrong number of
    /// coefficients, or `ValueConversion` if an objective coefficient is `NaN`.
    pub fn new(
        objective: Vec<f64>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, LinearProgramError> {
        let objective = objective.into_iter()
            .map(ExtendedNumber::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((index, constraint)) = constraints.iter().enumerate()
            .find(|(_, constraint)| constraint.coefficients.len() != objective.len()) {
            return Err(LinearProgramError::IncompatibleInputDimensions {
                constraint: index,
                expected: objective.len(),
                found: constraint.coefficients.len(),
            });
        }

        Ok(Self { objective, constraints })
    }

    /// Objective coefficients, not negated.
    pub fn objective(&self) -> &[ExtendedNumber] {
        &self.objective
    }

    /// Constraints in their original order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of structural variables.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// How many constraints there are of each type.
    pub fn constraint_type_counts(&self) -> EnumMap<ConstraintType, usize> {
        let mut counts = EnumMap::default();
        for constraint in &self.constraints {
            counts[constraint.constraint_type] += 1;
        }

        counts
    }
}
