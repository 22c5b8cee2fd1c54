//! Exact scale factors
//!
//! [`Ratio`] is a fixed-width fraction used for unit prefixes and
//! conversions. It is deliberately never reduced: `1000/1 * 1/1000` is
//! `1000/1000`, which compares unequal to `1/1` under `==` but equal under
//! [`Ratio::same_value`]. Only the sign is normalised, so the denominator
//! is always positive.

use std::fmt;
use std::ops::{Div, Mul};

use crate::error::{Result, UnitError};

/// An unreduced fraction of two `i64`s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numer: i64,
    denom: i64,
}

impl Ratio {
    /// `1/1`
    pub const ONE: Ratio = Ratio { numer: 1, denom: 1 };

    /// Build `numer/denom`, rejecting a zero denominator
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(UnitError::ZeroDenominator);
        }
        Ok(Self::with_sign(numer, denom))
    }

    /// `n/1`
    pub const fn integer(numer: i64) -> Self {
        Self { numer, denom: 1 }
    }

    /// Move the sign onto the numerator; `denom` must be nonzero
    fn with_sign(numer: i64, denom: i64) -> Self {
        if denom < 0 {
            Self {
                numer: -numer,
                denom: -denom,
            }
        } else {
            Self { numer, denom }
        }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    /// `denom/numer`
    pub fn recip(self) -> Result<Self> {
        Self::new(self.denom, self.numer)
    }

    /// `(a/b)·(c/d) = (ac)/(bd)`, failing on overflow
    pub fn checked_mul(self, rhs: Ratio) -> Result<Self> {
        let overflow = || UnitError::RatioOverflow {
            operation: "multiplication",
        };
        let numer = self.numer.checked_mul(rhs.numer).ok_or_else(overflow)?;
        let denom = self.denom.checked_mul(rhs.denom).ok_or_else(overflow)?;
        Ok(Self { numer, denom })
    }

    /// `(a/b)÷(c/d) = (ad)/(bc)`, failing on overflow or a zero divisor
    pub fn checked_div(self, rhs: Ratio) -> Result<Self> {
        let overflow = || UnitError::RatioOverflow {
            operation: "division",
        };
        let numer = self.numer.checked_mul(rhs.denom).ok_or_else(overflow)?;
        let denom = self.denom.checked_mul(rhs.numer).ok_or_else(overflow)?;
        Self::new(numer, denom)
    }

    /// Integer power; negative powers go through the reciprocal
    ///
    /// # Panics
    ///
    /// On a negative power of a zero ratio.
    pub fn pow(self, power: i32) -> Self {
        let base = if power < 0 { self.invert_or_panic() } else { self };
        let mut acc = Self::ONE;
        for _ in 0..power.unsigned_abs() {
            acc = acc * base;
        }
        acc
    }

    fn invert_or_panic(self) -> Self {
        assert!(self.numer != 0, "reciprocal of a zero ratio");
        Self::with_sign(self.denom, self.numer)
    }

    /// Compare the represented values, ignoring representation
    pub fn same_value(&self, other: &Ratio) -> bool {
        i128::from(self.numer) * i128::from(other.denom)
            == i128::from(other.numer) * i128::from(self.denom)
    }

    /// Nearest `f64`
    pub fn to_f64(self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

/// Multiplication with host integer overflow behaviour
impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Ratio) -> Ratio {
        Ratio {
            numer: self.numer * rhs.numer,
            denom: self.denom * rhs.denom,
        }
    }
}

/// Division with host integer overflow behaviour
///
/// # Panics
///
/// When dividing by a zero ratio, like integer division by zero.
impl Div for Ratio {
    type Output = Ratio;

    fn div(self, rhs: Ratio) -> Ratio {
        assert!(rhs.numer != 0, "attempt to divide by a zero ratio");
        Ratio::with_sign(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
