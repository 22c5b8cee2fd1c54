//! Numeric types a quantity can carry

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};

use crate::ratio::Ratio;

/// Arithmetic value types usable inside a [`Quantity`](crate::Quantity)
///
/// Implemented for the primitive integer and floating-point types. Ratio
/// components convert exactly or not at all: an integer type rejects a
/// component it cannot represent (`1000` in `u8`, `-1` in `u32`) instead of
/// wrapping it. Once both components fit, a scale factor is applied with the
/// type's own division, so sub-unit ratios truncate for integer `N` exactly
/// as the host type would.
pub trait Numeric:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Multiplicative identity
    const ONE: Self;

    /// Convert a ratio component, `None` when it is out of range
    fn from_i64(value: i64) -> Option<Self>;

    /// Product that reports overflow instead of wrapping or panicking
    fn checked_scale(self, factor: Self) -> Option<Self>;

    /// `N::from(numer) / N::from(denom)`, `None` when either side does not fit
    fn from_ratio(ratio: Ratio) -> Option<Self> {
        Some(Self::from_i64(ratio.numer())? / Self::from_i64(ratio.denom())?)
    }
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ONE: Self = 1.0;

                #[inline]
                fn from_i64(value: i64) -> Option<Self> {
                    Some(value as $t)
                }

                #[inline]
                fn checked_scale(self, factor: Self) -> Option<Self> {
                    Some(self * factor)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ONE: Self = 1;

                #[inline]
                fn from_i64(value: i64) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline]
                fn checked_scale(self, factor: Self) -> Option<Self> {
                    <$t>::checked_mul(self, factor)
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_ratio() {
        let ratio = Ratio::new(1, 4).unwrap();
        assert_eq!(f64::from_ratio(ratio), Some(0.25));
        assert_eq!(f32::from_ratio(ratio), Some(0.25));
        assert_eq!(f64::from_ratio(Ratio::integer(-3)), Some(-3.0));
    }

    #[test]
    fn test_integer_ratio_truncates() {
        assert_eq!(i32::from_ratio(Ratio::new(1, 1000).unwrap()), Some(0));
        assert_eq!(i64::from_ratio(Ratio::integer(1000)), Some(1000));
        assert_eq!(u32::from_ratio(Ratio::new(7, 2).unwrap()), Some(3));
    }

    #[test]
    fn test_out_of_range_component_rejected() {
        assert_eq!(u8::from_ratio(Ratio::integer(1000)), None);
        assert_eq!(u8::from_ratio(Ratio::new(1, 1000).unwrap()), None);
        assert_eq!(u32::from_ratio(Ratio::integer(-1)), None);
        assert_eq!(i8::from_i64(-128), Some(-128));
        assert_eq!(i8::from_i64(-129), None);
        assert_eq!(u128::from_i64(i64::MAX), Some(i64::MAX as u128));
    }

    #[test]
    fn test_checked_scale() {
        assert_eq!(200_u8.checked_scale(2), None);
        assert_eq!(100_u8.checked_scale(2), Some(200));
        assert_eq!(1.5_f64.checked_scale(2.0), Some(3.0));
    }
}
