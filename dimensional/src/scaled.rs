//! Units with an exact scale factor
//!
//! A [`ScaledUnit`] is a ratio over a signature: `kilometer` is `1000/1`
//! over `meter`, `hour` is `3600/1` over `second`. Ratios combine by
//! plain fraction arithmetic and signatures through the canonicalization
//! engine.

use std::fmt;
use std::ops::{Div, Mul};

use crate::ratio::Ratio;
use crate::signature::UnitSignature;

/// A signature scaled by an exact ratio
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScaledUnit {
    ratio: Ratio,
    unit: UnitSignature,
}

impl ScaledUnit {
    pub fn new(ratio: Ratio, unit: UnitSignature) -> Self {
        Self { ratio, unit }
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// The unscaled signature
    pub fn unit(&self) -> &UnitSignature {
        &self.unit
    }

    pub fn into_parts(self) -> (Ratio, UnitSignature) {
        (self.ratio, self.unit)
    }

    /// Ratio and signature both raised to `power`
    ///
    /// # Panics
    ///
    /// On a negative power of a zero-ratio unit.
    pub fn pow(&self, power: i32) -> Self {
        Self::new(self.ratio.pow(power), self.unit.pow(power))
    }
}

impl From<UnitSignature> for ScaledUnit {
    fn from(unit: UnitSignature) -> Self {
        Self::new(Ratio::ONE, unit)
    }
}

impl fmt::Display for ScaledUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ratio, self.unit)
    }
}

// =============================================================================
// Scaling by a bare ratio
// =============================================================================

impl Mul<Ratio> for ScaledUnit {
    type Output = ScaledUnit;

    fn mul(self, rhs: Ratio) -> ScaledUnit {
        ScaledUnit::new(self.ratio * rhs, self.unit)
    }
}

impl Mul<Ratio> for &ScaledUnit {
    type Output = ScaledUnit;

    fn mul(self, rhs: Ratio) -> ScaledUnit {
        ScaledUnit::new(self.ratio * rhs, self.unit.clone())
    }
}

impl Div<Ratio> for ScaledUnit {
    type Output = ScaledUnit;

    fn div(self, rhs: Ratio) -> ScaledUnit {
        ScaledUnit::new(self.ratio / rhs, self.unit)
    }
}

impl Div<Ratio> for &ScaledUnit {
    type Output = ScaledUnit;

    fn div(self, rhs: Ratio) -> ScaledUnit {
        ScaledUnit::new(self.ratio / rhs, self.unit.clone())
    }
}

/// `rational × scaledUnit` commutes with `scaledUnit × rational`
impl Mul<ScaledUnit> for Ratio {
    type Output = ScaledUnit;

    fn mul(self, rhs: ScaledUnit) -> ScaledUnit {
        rhs * self
    }
}

impl Mul<&ScaledUnit> for Ratio {
    type Output = ScaledUnit;

    fn mul(self, rhs: &ScaledUnit) -> ScaledUnit {
        rhs * self
    }
}

/// Prefixing a bare unit
impl Mul<UnitSignature> for Ratio {
    type Output = ScaledUnit;

    fn mul(self, rhs: UnitSignature) -> ScaledUnit {
        ScaledUnit::new(self, rhs)
    }
}

impl Mul<&UnitSignature> for Ratio {
    type Output = ScaledUnit;

    fn mul(self, rhs: &UnitSignature) -> ScaledUnit {
        ScaledUnit::new(self, rhs.clone())
    }
}

// =============================================================================
// Scaled × scaled, scaled × signature
// =============================================================================

impl Mul<&ScaledUnit> for &ScaledUnit {
    type Output = ScaledUnit;

    fn mul(self, rhs: &ScaledUnit) -> ScaledUnit {
        ScaledUnit::new(self.ratio * rhs.ratio, self.unit.multiply(&rhs.unit))
    }
}

impl Div<&ScaledUnit> for &ScaledUnit {
    type Output = ScaledUnit;

    fn div(self, rhs: &ScaledUnit) -> ScaledUnit {
        ScaledUnit::new(self.ratio / rhs.ratio, self.unit.divide(&rhs.unit))
    }
}

impl Mul<&UnitSignature> for &ScaledUnit {
    type Output = ScaledUnit;

    fn mul(self, rhs: &UnitSignature) -> ScaledUnit {
        ScaledUnit::new(self.ratio, self.unit.multiply(rhs))
    }
}

impl Div<&UnitSignature> for &ScaledUnit {
    type Output = ScaledUnit;

    fn div(self, rhs: &UnitSignature) -> ScaledUnit {
        ScaledUnit::new(self.ratio, self.unit.divide(rhs))
    }
}

impl Mul<&ScaledUnit> for &UnitSignature {
    type Output = ScaledUnit;

    fn mul(self, rhs: &ScaledUnit) -> ScaledUnit {
        ScaledUnit::new(rhs.ratio, self.multiply(&rhs.unit))
    }
}

impl Div<&ScaledUnit> for &UnitSignature {
    type Output = ScaledUnit;

    fn div(self, rhs: &ScaledUnit) -> ScaledUnit {
        ScaledUnit::new(Ratio::ONE / rhs.ratio, self.divide(&rhs.unit))
    }
}

macro_rules! forward_owned {
    ($trait:ident, $method:ident, $lhs:ty, $rhs:ty) => {
        impl $trait<$rhs> for $lhs {
            type Output = ScaledUnit;

            fn $method(self, rhs: $rhs) -> ScaledUnit {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

forward_owned!(Mul, mul, ScaledUnit, ScaledUnit);
forward_owned!(Div, div, ScaledUnit, ScaledUnit);
forward_owned!(Mul, mul, ScaledUnit, UnitSignature);
forward_owned!(Div, div, ScaledUnit, UnitSignature);
forward_owned!(Mul, mul, UnitSignature, ScaledUnit);
forward_owned!(Div, div, UnitSignature, ScaledUnit);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DimensionRegistry;

    fn base() -> (UnitSignature, UnitSignature) {
        let registry = DimensionRegistry::new();
        let (_, meter) = registry.define("Distance", "meter").unwrap();
        let (_, second) = registry.define("time", "second").unwrap();
        (meter, second)
    }

    #[test]
    fn test_prefix_bare_unit() {
        let (meter, _) = base();
        let kilometer = Ratio::integer(1000) * &meter;
        assert_eq!(kilometer.ratio(), Ratio::integer(1000));
        assert_eq!(kilometer.unit(), &meter);
    }

    #[test]
    fn test_scale_by_ratio_keeps_signature() {
        let (_, second) = base();
        let minute = Ratio::integer(60) * &second;
        let hour = &minute * Ratio::integer(60);
        assert_eq!(hour.ratio(), Ratio::integer(3600));
        assert_eq!(hour.unit(), &second);

        let half_hour = hour.clone() / Ratio::integer(2);
        assert_eq!((half_hour.ratio().numer(), half_hour.ratio().denom()), (3600, 2));
    }

    #[test]
    fn test_ratio_times_scaled_commutes() {
        let (meter, _) = base();
        let yard = Ratio::new(9144, 10000).unwrap() * &meter;
        let foot = Ratio::new(1, 3).unwrap() * &yard;
        assert_eq!(foot, &yard * Ratio::new(1, 3).unwrap());
        assert_eq!(foot.ratio(), Ratio::new(9144, 30000).unwrap());
    }

    #[test]
    fn test_scaled_quotient() {
        let (meter, second) = base();
        let kilometer = Ratio::integer(1000) * &meter;
        let hour = Ratio::integer(3600) * &second;
        let kph = &kilometer / &hour;

        assert_eq!(kph.ratio(), Ratio::new(1000, 3600).unwrap());
        assert_eq!(kph.unit(), &(&meter / &second));
    }

    #[test]
    fn test_scaled_times_scaled() {
        let (meter, second) = base();
        let kilometer = Ratio::integer(1000) * &meter;
        let hour = Ratio::integer(3600) * &second;

        let km_h = &kilometer * &hour;
        assert_eq!(km_h.ratio(), Ratio::integer(3_600_000));
        assert_eq!(km_h.unit(), &(&meter * &second));
        assert_eq!(km_h.to_string(), "3600000/1 meter*second");

        let owned = kilometer.clone() * hour.clone();
        assert_eq!(owned, km_h);

        let square_km = &kilometer * &kilometer;
        assert_eq!(square_km, kilometer.pow(2));
    }

    #[test]
    fn test_scaled_product_with_signature() {
        let (meter, second) = base();
        let kilometer = Ratio::integer(1000) * &meter;
        let km_s = &kilometer * &second;
        assert_eq!(km_s.unit(), &(&meter * &second));
        assert_eq!(km_s.ratio(), Ratio::integer(1000));

        let per_km = &second / &kilometer;
        assert_eq!(per_km.ratio(), Ratio::new(1, 1000).unwrap());
    }

    #[test]
    fn test_pow() {
        let (meter, _) = base();
        let kilometer = Ratio::integer(1000) * &meter;
        let km3 = kilometer.pow(3);
        assert_eq!(km3.ratio(), Ratio::integer(1_000_000_000));
        assert_eq!(km3.unit(), &meter.pow(3));
    }

    #[test]
    fn test_display() {
        let (meter, second) = base();
        let kph = Ratio::new(1000, 3600).unwrap() * (&meter / &second);
        assert_eq!(kph.to_string(), "1000/3600 meter/second");
        assert_eq!(ScaledUnit::from(meter).to_string(), "1/1 meter");
    }
}
