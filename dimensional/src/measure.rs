//! Statically-tagged quantities
//!
//! A [`Measure<N, U>`] carries its unit in the type through a zero-sized
//! [`UnitMarker`], so same-unit addition, subtraction and comparison need no
//! runtime check. The signature is checked once, when a runtime
//! [`Quantity`] is narrowed with [`Quantity::into_measure`]; widening back
//! is always possible.
//!
//! Products and quotients change the unit and are left to `Quantity`.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Result, UnitError};
use crate::quantity::Quantity;
use crate::signature::UnitSignature;

/// Zero-sized type naming one canonical signature
///
/// ```
/// use dimensional::{define_dimension, UnitMarker, UnitSignature};
///
/// struct Seconds;
///
/// impl UnitMarker for Seconds {
///     fn unit() -> UnitSignature {
///         define_dimension("time", "second")
///             .map(|(_, unit)| unit)
///             .unwrap_or_default()
///     }
/// }
/// ```
pub trait UnitMarker {
    /// The signature every `Measure<_, Self>` is expressed in
    fn unit() -> UnitSignature;
}

/// A numeric value whose unit is fixed by the type `U`
pub struct Measure<N, U: UnitMarker> {
    value: N,
    _unit: PhantomData<U>,
}

impl<N, U: UnitMarker> Measure<N, U> {
    #[inline]
    pub const fn new(value: N) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    #[inline]
    pub fn value(&self) -> &N {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> N {
        self.value
    }

    pub fn unit() -> UnitSignature {
        U::unit()
    }

    /// Widen to a runtime-checked quantity
    pub fn into_quantity(self) -> Quantity<N> {
        Quantity::new(self.value, U::unit())
    }
}

impl<N> Quantity<N> {
    /// Narrow to a statically-tagged measure
    ///
    /// Fails with a mismatch unless this quantity's signature is exactly
    /// `U::unit()`.
    pub fn into_measure<U: UnitMarker>(self) -> Result<Measure<N, U>> {
        let expected = U::unit();
        if *self.unit() != expected {
            return Err(UnitError::mismatch("narrowing", self.unit(), &expected));
        }
        Ok(Measure::new(self.into_value()))
    }
}

impl<N, U: UnitMarker> From<Measure<N, U>> for Quantity<N> {
    fn from(measure: Measure<N, U>) -> Self {
        measure.into_quantity()
    }
}

impl<N: Clone, U: UnitMarker> Clone for Measure<N, U> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<N: Copy, U: UnitMarker> Copy for Measure<N, U> {}

impl<N: fmt::Debug, U: UnitMarker> fmt::Debug for Measure<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("value", &self.value)
            .field("unit", &U::unit())
            .finish()
    }
}

impl<N: fmt::Display, U: UnitMarker> fmt::Display for Measure<N, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::unit())
    }
}

// =============================================================================
// Same-Unit Arithmetic
// =============================================================================

impl<N: Add<Output = N>, U: UnitMarker> Add for Measure<N, U> {
    type Output = Measure<N, U>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Measure::new(self.value + rhs.value)
    }
}

impl<N: Sub<Output = N>, U: UnitMarker> Sub for Measure<N, U> {
    type Output = Measure<N, U>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Measure::new(self.value - rhs.value)
    }
}

impl<N: Neg<Output = N>, U: UnitMarker> Neg for Measure<N, U> {
    type Output = Measure<N, U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Measure::new(-self.value)
    }
}

/// Scaling by a dimensionless factor
impl<N: Mul<Output = N>, U: UnitMarker> Mul<N> for Measure<N, U> {
    type Output = Measure<N, U>;

    #[inline]
    fn mul(self, rhs: N) -> Self::Output {
        Measure::new(self.value * rhs)
    }
}

impl<N: Div<Output = N>, U: UnitMarker> Div<N> for Measure<N, U> {
    type Output = Measure<N, U>;

    #[inline]
    fn div(self, rhs: N) -> Self::Output {
        Measure::new(self.value / rhs)
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl<N: PartialEq, U: UnitMarker> PartialEq for Measure<N, U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<N: PartialOrd, U: UnitMarker> PartialOrd for Measure<N, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}
