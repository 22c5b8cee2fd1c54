//! The Quantity Type: Numeric Value with a Checked Unit
//!
//! `Quantity<N>` pairs a value of numeric type `N` with a [`UnitSignature`].
//! The value is always stored against the signature's unscaled base: a
//! scale factor is multiplied in when the quantity is built from a
//! [`ScaledUnit`] and never kept.
//!
//! Multiplication and division are always allowed and compute the result
//! signature. Addition, subtraction and comparison need identical
//! signatures; `+` and `-` therefore yield `Result`, and the `try_*`
//! comparison methods report a [`UnitError::Mismatch`]. The std comparison
//! traits treat quantities of different units as incomparable.
//!
//! # Example
//!
//! ```
//! use dimensional::{DimensionRegistry, Ratio};
//!
//! let registry = DimensionRegistry::new();
//! let (_, meter) = registry.define("Distance", "meter").unwrap();
//! let (_, second) = registry.define("time", "second").unwrap();
//! let kilometer = Ratio::integer(1000) * &meter;
//! let hour = Ratio::integer(3600) * &second;
//!
//! let speed = (1.0_f64 * &kilometer) / (1.0_f64 * &hour);
//! assert!((speed.value() - 0.2778).abs() < 1e-4);
//! assert_eq!(speed.unit().to_string(), "meter/second");
//!
//! // Mixing units is reported, not computed
//! assert!(((1.0_f64 * &meter) + (1.0_f64 * &second)).is_err());
//! ```

use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Result, UnitError};
use crate::number::Numeric;
use crate::scaled::ScaledUnit;
use crate::signature::UnitSignature;

/// A numeric value tagged with its unit signature
#[derive(Debug, Clone)]
pub struct Quantity<N> {
    value: N,
    unit: UnitSignature,
}

impl<N> Quantity<N> {
    /// Wrap a raw value with a signature, no scaling
    pub fn new(value: N, unit: UnitSignature) -> Self {
        Self { value, unit }
    }

    /// A dimensionless quantity
    pub fn scalar(value: N) -> Self {
        Self::new(value, UnitSignature::scalar())
    }

    /// Raw value, relative to the signature's base scale
    ///
    /// This erases the unit; the caller is responsible for having
    /// accounted for it.
    pub fn into_value(self) -> N {
        self.value
    }

    pub fn unit(&self) -> &UnitSignature {
        &self.unit
    }

    pub fn into_parts(self) -> (N, UnitSignature) {
        (self.value, self.unit)
    }

    /// Convert the value to a wider numeric type, keeping the unit
    pub fn cast<M: From<N>>(self) -> Quantity<M> {
        Quantity::new(M::from(self.value), self.unit)
    }

    /// Fail with a mismatch unless `other` has the same signature
    fn ensure_same(&self, other: &UnitSignature, operation: &'static str) -> Result<()> {
        if self.unit == *other {
            Ok(())
        } else {
            Err(UnitError::mismatch(operation, &self.unit, other))
        }
    }
}

impl<N: Copy> Quantity<N> {
    /// Raw value, relative to the signature's base scale
    #[inline]
    pub fn value(&self) -> N {
        self.value
    }
}

/// `numer / denom` in `N`
///
/// # Panics
///
/// When either component is out of range for `N`, the same way integer
/// overflow fails.
fn scale_factor<N: Numeric>(numer: i64, denom: i64) -> N {
    match (N::from_i64(numer), N::from_i64(denom)) {
        (Some(numer), Some(denom)) => numer / denom,
        _ => panic!(
            "scale factor {}/{} does not fit in {}",
            numer,
            denom,
            type_name::<N>()
        ),
    }
}

impl<N: Numeric> Quantity<N> {
    /// Build from a scaled unit, folding the ratio into the value
    ///
    /// # Panics
    ///
    /// When the ratio does not fit `N` (`1_u8 * kilometer`); see
    /// [`Quantity::try_from_scaled`].
    pub fn from_scaled(value: N, unit: &ScaledUnit) -> Self {
        let ratio = unit.ratio();
        let factor = scale_factor::<N>(ratio.numer(), ratio.denom());
        Self::new(value * factor, unit.unit().clone())
    }

    /// Build from a scaled unit, failing when the ratio or the scaled value
    /// does not fit `N`
    pub fn try_from_scaled(value: N, unit: &ScaledUnit) -> Result<Self> {
        let overflow = || UnitError::RatioOverflow {
            operation: "scaling",
        };
        let factor = N::from_ratio(unit.ratio()).ok_or_else(overflow)?;
        let value = value.checked_scale(factor).ok_or_else(overflow)?;
        Ok(Self::new(value, unit.unit().clone()))
    }

    /// Multiply by a dimensionless factor
    pub fn scale(&self, factor: N) -> Self {
        Self::new(self.value * factor, self.unit.clone())
    }

    /// Value and signature raised to an integer power
    pub fn pow(&self, power: i32) -> Self {
        let mut value = N::ONE;
        for _ in 0..power.unsigned_abs() {
            value = value * self.value;
        }
        if power < 0 {
            value = N::ONE / value;
        }
        Self::new(value, self.unit.pow(power))
    }

    /// The value expressed in `unit`, which must share this signature
    ///
    /// `(5000.0_f64 * &meter).value_in(&kilometer)` is `5.0`.
    pub fn value_in(&self, unit: &ScaledUnit) -> Result<N> {
        self.ensure_same(unit.unit(), "conversion")?;
        let overflow = || UnitError::RatioOverflow {
            operation: "conversion",
        };
        let inverse = N::from_ratio(unit.ratio().recip()?).ok_or_else(overflow)?;
        self.value.checked_scale(inverse).ok_or_else(overflow)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same(&other.unit, "addition")?;
        Ok(Self::new(self.value + other.value, self.unit.clone()))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same(&other.unit, "subtraction")?;
        Ok(Self::new(self.value - other.value, self.unit.clone()))
    }

    /// In-place addition; `self` is untouched on mismatch
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same(&other.unit, "addition")?;
        self.value = self.value + other.value;
        Ok(())
    }

    /// In-place subtraction; `self` is untouched on mismatch
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        self.ensure_same(&other.unit, "subtraction")?;
        self.value = self.value - other.value;
        Ok(())
    }

    /// Compare values of identically-united quantities
    ///
    /// `Ok(None)` when the numeric type itself has no order for the pair
    /// (NaN).
    pub fn try_cmp(&self, other: &Self) -> Result<Option<Ordering>> {
        self.ensure_same(&other.unit, "comparison")?;
        Ok(self.value.partial_cmp(&other.value))
    }

    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        self.ensure_same(&other.unit, "comparison")?;
        Ok(self.value < other.value)
    }

    pub fn try_le(&self, other: &Self) -> Result<bool> {
        self.ensure_same(&other.unit, "comparison")?;
        Ok(self.value <= other.value)
    }

    pub fn try_gt(&self, other: &Self) -> Result<bool> {
        self.ensure_same(&other.unit, "comparison")?;
        Ok(self.value > other.value)
    }

    pub fn try_ge(&self, other: &Self) -> Result<bool> {
        self.ensure_same(&other.unit, "comparison")?;
        Ok(self.value >= other.value)
    }

    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.ensure_same(&other.unit, "comparison")?;
        Ok(self.value == other.value)
    }

    pub fn try_ne(&self, other: &Self) -> Result<bool> {
        self.try_eq(other).map(|equal| !equal)
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// Equal only when both the signature and the value match
impl<N: PartialEq> PartialEq for Quantity<N> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

/// `None` across different signatures, so every `<`/`>` between them is
/// false; use [`Quantity::try_cmp`] to surface the mismatch
impl<N: PartialOrd> PartialOrd for Quantity<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit != other.unit {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

// =============================================================================
// Additive Arithmetic (same units only)
// =============================================================================

impl<N: Numeric> Add<&Quantity<N>> for &Quantity<N> {
    type Output = Result<Quantity<N>>;

    fn add(self, rhs: &Quantity<N>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<N: Numeric> Add for Quantity<N> {
    type Output = Result<Quantity<N>>;

    fn add(self, rhs: Quantity<N>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<N: Numeric> Sub<&Quantity<N>> for &Quantity<N> {
    type Output = Result<Quantity<N>>;

    fn sub(self, rhs: &Quantity<N>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<N: Numeric> Sub for Quantity<N> {
    type Output = Result<Quantity<N>>;

    fn sub(self, rhs: Quantity<N>) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<N: Neg<Output = N>> Neg for Quantity<N> {
    type Output = Quantity<N>;

    fn neg(self) -> Quantity<N> {
        Quantity::new(-self.value, self.unit)
    }
}

impl<N: Neg<Output = N> + Copy> Neg for &Quantity<N> {
    type Output = Quantity<N>;

    fn neg(self) -> Quantity<N> {
        Quantity::new(-self.value, self.unit.clone())
    }
}

// =============================================================================
// Multiplicative Arithmetic (units combine)
// =============================================================================

impl<N: Numeric> Mul<&Quantity<N>> for &Quantity<N> {
    type Output = Quantity<N>;

    fn mul(self, rhs: &Quantity<N>) -> Quantity<N> {
        Quantity::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl<N: Numeric> Div<&Quantity<N>> for &Quantity<N> {
    type Output = Quantity<N>;

    fn div(self, rhs: &Quantity<N>) -> Quantity<N> {
        Quantity::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

/// Re-tag with a combined signature, value unchanged
impl<N: Numeric> Mul<&UnitSignature> for &Quantity<N> {
    type Output = Quantity<N>;

    fn mul(self, rhs: &UnitSignature) -> Quantity<N> {
        Quantity::new(self.value, self.unit.multiply(rhs))
    }
}

impl<N: Numeric> Div<&UnitSignature> for &Quantity<N> {
    type Output = Quantity<N>;

    fn div(self, rhs: &UnitSignature) -> Quantity<N> {
        Quantity::new(self.value, self.unit.divide(rhs))
    }
}

/// Combine signatures and scale the value by the unit's ratio
impl<N: Numeric> Mul<&ScaledUnit> for &Quantity<N> {
    type Output = Quantity<N>;

    fn mul(self, rhs: &ScaledUnit) -> Quantity<N> {
        let ratio = rhs.ratio();
        let factor = scale_factor::<N>(ratio.numer(), ratio.denom());
        Quantity::new(self.value * factor, self.unit.multiply(rhs.unit()))
    }
}

/// `quantity / kilometer` reads the value off in kilometers
impl<N: Numeric> Div<&ScaledUnit> for &Quantity<N> {
    type Output = Quantity<N>;

    fn div(self, rhs: &ScaledUnit) -> Quantity<N> {
        let ratio = rhs.ratio();
        let inverse = scale_factor::<N>(ratio.denom(), ratio.numer());
        Quantity::new(self.value * inverse, self.unit.divide(rhs.unit()))
    }
}

macro_rules! forward_owned {
    ($trait:ident, $method:ident, $rhs:ty) => {
        impl<N: Numeric> $trait<$rhs> for Quantity<N> {
            type Output = Quantity<N>;

            fn $method(self, rhs: $rhs) -> Quantity<N> {
                $trait::$method(&self, &rhs)
            }
        }

        impl<N: Numeric> $trait<&$rhs> for Quantity<N> {
            type Output = Quantity<N>;

            fn $method(self, rhs: &$rhs) -> Quantity<N> {
                $trait::$method(&self, rhs)
            }
        }

        impl<N: Numeric> $trait<$rhs> for &Quantity<N> {
            type Output = Quantity<N>;

            fn $method(self, rhs: $rhs) -> Quantity<N> {
                $trait::$method(self, &rhs)
            }
        }
    };
}

forward_owned!(Mul, mul, Quantity<N>);
forward_owned!(Div, div, Quantity<N>);
forward_owned!(Mul, mul, UnitSignature);
forward_owned!(Div, div, UnitSignature);
forward_owned!(Mul, mul, ScaledUnit);
forward_owned!(Div, div, ScaledUnit);

// =============================================================================
// Construction from numeric literals
// =============================================================================

macro_rules! impl_literal_construction {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<UnitSignature> for $t {
                type Output = Quantity<$t>;

                fn mul(self, rhs: UnitSignature) -> Quantity<$t> {
                    Quantity::new(self, rhs)
                }
            }

            impl Mul<&UnitSignature> for $t {
                type Output = Quantity<$t>;

                fn mul(self, rhs: &UnitSignature) -> Quantity<$t> {
                    Quantity::new(self, rhs.clone())
                }
            }

            impl Mul<ScaledUnit> for $t {
                type Output = Quantity<$t>;

                fn mul(self, rhs: ScaledUnit) -> Quantity<$t> {
                    Quantity::from_scaled(self, &rhs)
                }
            }

            impl Mul<&ScaledUnit> for $t {
                type Output = Quantity<$t>;

                fn mul(self, rhs: &ScaledUnit) -> Quantity<$t> {
                    Quantity::from_scaled(self, rhs)
                }
            }
        )*
    };
}

impl_literal_construction!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Display
// =============================================================================

impl<N: fmt::Display> fmt::Display for Quantity<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
