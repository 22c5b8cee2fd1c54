//! Fuzz target for signature canonicalization
//!
//! Drives arbitrary chains of multiply/divide/pow/invert and raw
//! normalization, checking after every step that the result is canonical
//! and agrees with exponent arithmetic done by hand.

#![no_main]

use arbitrary::Arbitrary;
use dimensional::{format_signature, Dimension, DimensionRegistry, UnitSignature};
use libfuzzer_sys::fuzz_target;

const NAMES: [(&str, &str); 5] = [
    ("Mass", "kilogram"),
    ("distance", "meter"),
    ("time", "second"),
    ("xcurrent", "ampere"),
    ("zz", "z"),
];

/// Exponents beyond this are left alone so `pow` cannot overflow `i32`
const EXPONENT_CAP: i32 = 1 << 12;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    raw: Vec<(u8, i8)>,
    ops: Vec<FuzzOp>,
}

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Multiply(u8, i8),
    Divide(u8, i8),
    Pow(i8),
    Invert,
}

fn dimension(dims: &[Dimension], index: u8) -> Dimension {
    dims[index as usize % dims.len()].clone()
}

fn check_canonical(signature: &UnitSignature, expected: &[i32]) {
    let entries = signature.entries();
    assert!(entries.iter().all(|e| e.exponent() != 0));
    assert!(entries.windows(2).all(|w| w[0].dimension() < w[1].dimension()));
    assert!(UnitSignature::from_entries(entries.to_vec()).is_ok());
    assert_eq!(signature.is_scalar(), expected.iter().all(|&e| e == 0));
    assert_eq!(format_signature(signature) == "[scalar]", signature.is_scalar());
}

fuzz_target!(|input: FuzzInput| {
    let registry = DimensionRegistry::new();
    let dims: Vec<Dimension> = NAMES
        .iter()
        .filter_map(|(name, unit)| registry.define(*name, *unit).ok().map(|(d, _)| d))
        .collect();
    if dims.len() != NAMES.len() {
        return;
    }

    let mut expected = vec![0i32; dims.len()];
    for &(i, e) in &input.raw {
        expected[i as usize % dims.len()] += i32::from(e);
    }
    let mut current = UnitSignature::normalize(
        input
            .raw
            .iter()
            .map(|&(i, e)| (dimension(&dims, i), i32::from(e))),
    );
    check_canonical(&current, &expected);

    for op in &input.ops {
        if expected.iter().any(|e| e.abs() > EXPONENT_CAP) {
            break;
        }
        current = match *op {
            FuzzOp::Multiply(i, e) => {
                expected[i as usize % dims.len()] += i32::from(e);
                let factor = UnitSignature::normalize([(dimension(&dims, i), i32::from(e))]);
                &current * &factor
            }
            FuzzOp::Divide(i, e) => {
                expected[i as usize % dims.len()] -= i32::from(e);
                let factor = UnitSignature::normalize([(dimension(&dims, i), i32::from(e))]);
                &current / &factor
            }
            FuzzOp::Pow(p) => {
                let power = i32::from(p % 4);
                expected.iter_mut().for_each(|e| *e *= power);
                current.pow(power)
            }
            FuzzOp::Invert => {
                expected.iter_mut().for_each(|e| *e = -*e);
                current.invert()
            }
        };
        check_canonical(&current, &expected);
        for (dim, &exponent) in dims.iter().zip(&expected) {
            assert_eq!(current.exponent_of(dim), exponent);
        }
    }
});
