//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::str::FromStr;

use enum_map::Enum;

use crate::error::LinearProgramError;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// How many auxiliary columns a constraint of this type is allotted in the tableau.
    ///
    /// A slack for `<=`, an artificial for `=`, a surplus and an artificial for `>=`. Note that the
    /// total width of the auxiliary region is computed differently; see `Tableau::new`.
    pub fn nr_columns_used(self) -> usize {
        match self {
            ConstraintType::Less | ConstraintType::Equal => 1,
            ConstraintType::Greater => 2,
        }
    }

    /// Whether the constraint needs an artificial variable to start from a feasible basis.
    pub fn needs_artificial(self) -> bool {
        self != ConstraintType::Less
    }

    /// The usual symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        }
    }
}

impl FromStr for ConstraintType {
    type Err = LinearProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<=" => Ok(ConstraintType::Less),
            "=" => Ok(ConstraintType::Equal),
            ">=" => Ok(ConstraintType::Greater),
            other => Err(LinearProgramError::UnknownConstraintType(other.to_string())),
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(self.symbol())
    }
}

/// What a tableau column represents.
///
/// Constraint indices are those of the original constraint list; structural variables are
/// numbered from zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColumnKind {
    /// The reserved coefficient of `z`, column `0`.
    Objective,
    /// A decision variable of the problem.
    Structural(usize),
    /// Slack of a `<=` constraint.
    Slack(usize),
    /// Surplus of a `>=` constraint.
    Surplus(usize),
    /// Artificial variable of a `=` or `>=` constraint.
    Artificial(usize),
    /// Allotted to the auxiliary region but never written; stays zero.
    Unused,
    /// Right hand side, the last column.
    RightHandSide,
}

impl ColumnKind {
    /// Whether this column belongs to an artificial variable.
    pub fn is_artificial(self) -> bool {
        matches!(self, ColumnKind::Artificial(_))
    }
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            ColumnKind::Objective => write!(f, "z"),
            ColumnKind::Structural(j) => write!(f, "x{}", j + 1),
            ColumnKind::Slack(i) => write!(f, "s{}", i + 1),
            ColumnKind::Surplus(i) => write!(f, "e{}", i + 1),
            ColumnKind::Artificial(i) => write!(f, "a{}", i + 1),
            ColumnKind::Unused => write!(f, "-"),
            ColumnKind::RightHandSide => write!(f, "b"),
        }
    }
}
