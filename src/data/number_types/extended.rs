//! # Numbers extended with a symbolic big constant
//!
//! The Big-M method penalizes artificial variables with a constant `M` that is larger than any
//! number it is compared to. Rather than picking a concrete large value, which would either be too
//! small for some problems or destroy the precision of others, `M` is kept symbolic: a number is a
//! pair of a finite part and the coefficient of `M`.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_traits::{One, ToPrimitive, Zero};

use crate::error::LinearProgramError;

/// Stand-in value for `M` when converting to a plain float.
///
/// Only used for display. Algorithmic decisions compare the two parts exactly and never see this.
pub const APPROXIMATE_M: f64 = 1e6;

/// A number of the form `finite + penalty * M`.
///
/// Ordering is lexicographic on `(penalty, finite)`: any difference in the coefficient of `M`
/// decides a comparison, whatever the finite parts are.
///
/// Equality is exact on both parts, there is no tolerance. That suits the small, hand-written
/// problems this crate targets, whose coefficients are integers or short decimals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ExtendedNumber {
    finite: f64,
    penalty: f64,
}

impl ExtendedNumber {
    /// The symbolic constant itself, `0 + 1M`.
    pub const BIG_M: Self = Self::new(0_f64, 1_f64);

    /// Create a number from its two parts.
    ///
    /// Doesn't validate its input, use `TryFrom<f64>` to coerce untrusted values.
    pub const fn new(finite: f64, penalty: f64) -> Self {
        Self { finite, penalty }
    }

    /// Positive infinity without any penalty.
    pub const fn infinity() -> Self {
        Self::new(f64::INFINITY, 0_f64)
    }

    /// The part not multiplied by `M`.
    pub fn finite_part(&self) -> f64 {
        self.finite
    }

    /// The coefficient of `M`.
    pub fn penalty_part(&self) -> f64 {
        self.penalty
    }

    /// Plain float value, with `M` replaced by `APPROXIMATE_M`.
    ///
    /// For display only.
    pub fn approximate(self) -> f64 {
        if self.penalty == 0_f64 {
            self.finite
        } else {
            self.finite + self.penalty * APPROXIMATE_M
        }
    }

    /// Whether both parts are finite.
    pub fn is_finite(&self) -> bool {
        self.finite.is_finite() && self.penalty.is_finite()
    }

    /// Divide by a number without penalty.
    ///
    /// The penalty of `rhs` is ignored. In the simplex method, divisors are pivot elements taken
    /// from constraint rows, which never carry a penalty.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when the finite part of `rhs` is zero, whatever its penalty.
    pub fn try_div(self, rhs: Self) -> Result<Self, LinearProgramError> {
        debug_assert!(rhs.penalty == 0_f64, "dividing by {rhs}, which has a penalty");

        if rhs.finite == 0_f64 {
            return Err(LinearProgramError::DivisionByZero);
        }

        Ok(Self::new(self.finite / rhs.finite, self.penalty / rhs.finite))
    }
}

impl TryFrom<f64> for ExtendedNumber {
    type Error = LinearProgramError;

    /// Coerce a plain float, infinities included.
    ///
    /// # Errors
    ///
    /// `ValueConversion` for `NaN`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            Err(LinearProgramError::ValueConversion(value))
        } else {
            Ok(Self::new(value, 0_f64))
        }
    }
}

impl From<i32> for ExtendedNumber {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value), 0_f64)
    }
}

impl PartialOrd for ExtendedNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.penalty.partial_cmp(&other.penalty)? {
            Ordering::Equal => self.finite.partial_cmp(&other.finite),
            unequal => Some(unequal),
        }
    }
}

impl Add for ExtendedNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.finite + rhs.finite, self.penalty + rhs.penalty)
    }
}

impl AddAssign for ExtendedNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ExtendedNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.finite - rhs.finite, self.penalty - rhs.penalty)
    }
}

impl SubAssign for ExtendedNumber {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Products of two penalty terms (`M^2`) are dropped.
///
/// Pivoting only ever multiplies a row entry, which is free of `M`, with a multiplier that may
/// carry it, so every intermediate value stays linear in `M`.
impl Mul for ExtendedNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.finite * rhs.finite,
            self.penalty * rhs.finite + self.finite * rhs.penalty,
        )
    }
}

impl Neg for ExtendedNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.finite, -self.penalty)
    }
}

impl Zero for ExtendedNumber {
    fn zero() -> Self {
        Self::new(0_f64, 0_f64)
    }

    fn is_zero(&self) -> bool {
        self.finite == 0_f64 && self.penalty == 0_f64
    }
}

impl One for ExtendedNumber {
    fn one() -> Self {
        Self::new(1_f64, 0_f64)
    }
}

/// Lossy conversion, see `APPROXIMATE_M`.
impl ToPrimitive for ExtendedNumber {
    fn to_i64(&self) -> Option<i64> {
        self.to_f64()?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_f64()?.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.approximate())
    }
}

impl Display for ExtendedNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        if self.penalty == 0_f64 {
            write!(f, "{}", self.finite)
        } else if self.finite == 0_f64 {
            write!(f, "{}M", self.penalty)
        } else if self.penalty < 0_f64 {
            write!(f, "{} - {}M", self.finite, -self.penalty)
        } else {
            write!(f, "{} + {}M", self.finite, self.penalty)
        }
    }
}
