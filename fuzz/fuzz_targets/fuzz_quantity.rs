//! Fuzz target for unit-checked quantity arithmetic
//!
//! Random operation sequences over two base units must never panic, and
//! addition must succeed exactly when the two signatures match.

#![no_main]

use arbitrary::Arbitrary;
use dimensional::{DimensionRegistry, Quantity, Ratio, UnitSignature};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    start: f64,
    steps: Vec<Step>,
}

#[derive(Debug, Arbitrary)]
enum Step {
    Add(f64, bool),
    Sub(f64, bool),
    Mul(f64, bool),
    Div(f64, bool),
    Scaled(f64, i16, i16),
    Compare(f64, bool),
}

fuzz_target!(|input: FuzzInput| {
    let registry = DimensionRegistry::new();
    let (Ok((_, meter)), Ok((_, second))) = (
        registry.define("Distance", "meter"),
        registry.define("time", "second"),
    ) else {
        return;
    };
    let units: [UnitSignature; 2] = [second, meter.clone()];
    let pick = |flag: bool| &units[usize::from(flag)];

    let mut current = Quantity::new(input.start, meter.clone());
    for step in input.steps.iter().take(64) {
        match *step {
            Step::Add(value, flag) => {
                let other = Quantity::new(value, pick(flag).clone());
                let same = current.unit() == other.unit();
                match &current + &other {
                    Ok(sum) => {
                        assert!(same);
                        current = sum;
                    }
                    Err(err) => {
                        assert!(!same);
                        assert!(err.is_mismatch());
                    }
                }
            }
            Step::Sub(value, flag) => {
                let other = Quantity::new(value, pick(flag).clone());
                let same = current.unit() == other.unit();
                assert_eq!((&current - &other).is_ok(), same);
            }
            Step::Mul(value, flag) => current = &current * &Quantity::new(value, pick(flag).clone()),
            Step::Div(value, flag) => current = &current / &Quantity::new(value, pick(flag).clone()),
            Step::Scaled(value, numer, denom) => {
                if let Ok(ratio) = Ratio::new(i64::from(numer), i64::from(denom)) {
                    let unit = ratio * current.unit();
                    let _ = value * &unit;
                    let _ = current.value_in(&unit);
                }
            }
            Step::Compare(value, flag) => {
                let other = Quantity::new(value, pick(flag).clone());
                let same = current.unit() == other.unit();
                assert_eq!(current.try_cmp(&other).is_ok(), same);
                assert_eq!(current != other, !(current == other));
            }
        }
        // Bound signature growth
        if current.unit().entries().iter().any(|e| e.exponent().abs() > 1 << 12) {
            break;
        }
    }
});
