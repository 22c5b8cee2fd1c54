//! Shared fixture catalog for integration tests
//!
//! Dimension names are chosen so that canonical order matches the usual
//! SI reading order: `"Mass" < "distance" < "time" < "xcurrent"` under
//! character-code comparison.

#![allow(dead_code)]

use dimensional::{Dimension, DimensionRegistry, Ratio, ScaledUnit, UnitSignature};

pub struct Catalog {
    pub registry: DimensionRegistry,
    pub mass: Dimension,
    pub length: Dimension,
    pub time: Dimension,
    pub current: Dimension,
    pub kilogram: UnitSignature,
    pub meter: UnitSignature,
    pub second: UnitSignature,
    pub ampere: UnitSignature,
    pub mps: UnitSignature,
    pub mps2: UnitSignature,
    pub newton: UnitSignature,
    pub joule: UnitSignature,
    pub kilometer: ScaledUnit,
    pub hour: ScaledUnit,
}

pub fn catalog() -> Catalog {
    let registry = DimensionRegistry::new();
    let (mass, kilogram) = registry.define("Mass", "kilogram").unwrap();
    let (length, meter) = registry.define("distance", "meter").unwrap();
    let (time, second) = registry.define("time", "second").unwrap();
    let (current, ampere) = registry.define("xcurrent", "ampere").unwrap();

    let mps = &meter / &second;
    let mps2 = &meter / &second.pow(2);
    let newton = &kilogram * &mps2;
    let joule = &newton * &meter;
    let kilometer = Ratio::integer(1000) * &meter;
    let hour = Ratio::integer(3600) * &second;

    Catalog {
        registry,
        mass,
        length,
        time,
        current,
        kilogram,
        meter,
        second,
        ampere,
        mps,
        mps2,
        newton,
        joule,
        kilometer,
        hour,
    }
}

impl Catalog {
    /// The four base dimensions, indexable by property-test generators
    pub fn dimensions(&self) -> [Dimension; 4] {
        [
            self.mass.clone(),
            self.length.clone(),
            self.time.clone(),
            self.current.clone(),
        ]
    }

    /// Build a signature from `(dimension index, exponent)` pairs
    pub fn signature(&self, raw: &[(usize, i32)]) -> UnitSignature {
        let dims = self.dimensions();
        UnitSignature::normalize(raw.iter().map(|&(i, e)| (dims[i % dims.len()].clone(), e)))
    }
}
