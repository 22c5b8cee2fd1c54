//! End-to-end scenarios over the fixture catalog

mod common;

use common::catalog;
use dimensional::prelude::*;
use dimensional::{format_signature, DimensionExponent};
use miette::Diagnostic;

// ============================================================================
// Quantity scenarios
// ============================================================================

#[test]
fn test_velocity_from_acceleration_and_time() {
    let cat = catalog();
    let velocity = (9.8_f64 * &cat.mps2) * (10.0_f64 * &cat.second);

    assert_eq!(velocity.value(), 98.0);
    assert_eq!(velocity.unit(), &cat.mps);
    assert_eq!(velocity.to_string(), "98 meter/second");
}

#[test]
fn test_derived_conversion_km_per_hour() {
    let cat = catalog();
    let speed = (1.0_f64 * &cat.kilometer) / (1.0_f64 * &cat.hour);

    assert!((speed.value() - 0.2778).abs() < 1e-4);
    assert_eq!(format_signature(speed.unit()), "meter/second");
}

#[test]
fn test_newton_plus_joule_is_rejected() {
    let cat = catalog();
    let force = 1.0_f64 * &cat.newton;
    let energy = 1.0_f64 * &cat.joule;

    let err = (force + energy).unwrap_err();
    assert!(err.is_mismatch());
    assert_eq!(
        err.to_string(),
        "cannot combine units: (kilogram*meter)/second^2 vs (kilogram*meter^2)/second^2 (in addition)"
    );
    assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("U0001"));
}

#[test]
fn test_frequency() {
    let cat = catalog();
    let frequency = Quantity::scalar(1.0_f64) / (100.0_f64 * &cat.second);

    assert_eq!(frequency.value(), 0.01);
    assert_eq!(frequency.unit(), &cat.second.invert());
    assert_eq!(frequency.unit().to_string(), "1/second");
}

#[test]
fn test_same_unit_sum_and_comparison() {
    let cat = catalog();
    let a = 3.0_f64 * &cat.newton;
    let b = 4.0_f64 * &cat.newton;

    let total = (&a + &b).unwrap();
    assert_eq!(total.value(), 7.0);
    assert!(a < b);
    assert!(a.try_lt(&b).unwrap());
    assert!(a.try_lt(&(1.0_f64 * &cat.joule)).unwrap_err().is_mismatch());
}

#[test]
fn test_work_is_force_times_distance() {
    let cat = catalog();
    let work = (2.0_f64 * &cat.newton) * (3.0_f64 * &cat.kilometer);

    assert_eq!(work.value(), 6000.0);
    assert_eq!(work.unit(), &cat.joule);
    assert!(work.try_add(&(1.0_f64 * &cat.joule)).is_ok());
}

#[test]
fn test_read_back_in_scaled_unit() {
    let cat = catalog();
    let trip = 90_000.0_f64 * &cat.meter;

    assert_eq!(trip.value_in(&cat.kilometer).unwrap(), 90.0);
    assert_eq!((&trip / &cat.kilometer).value(), 90.0);

    let kph = &cat.kilometer / &cat.hour;
    let cruise = 100.0_f64 * &kph;
    assert_eq!(cruise.value_in(&kph).unwrap(), 100.0);
}

// ============================================================================
// Signature scenarios
// ============================================================================

#[test]
fn test_canonical_uniqueness() {
    let cat = catalog();
    let roundabout = &(&cat.meter * &cat.second) * &cat.meter.invert();

    assert_eq!(roundabout, cat.second);
    assert_eq!(roundabout.entries(), cat.second.entries());
}

#[test]
fn test_construction_paths_agree() {
    let cat = catalog();
    let direct = UnitSignature::normalize([
        (cat.mass.clone(), 1),
        (cat.length.clone(), 2),
        (cat.time.clone(), -2),
    ]);
    let shuffled = UnitSignature::normalize([
        (cat.time.clone(), -3),
        (cat.length.clone(), 1),
        (cat.mass.clone(), 1),
        (cat.time.clone(), 1),
        (cat.length.clone(), 1),
    ]);

    assert_eq!(direct, cat.joule);
    assert_eq!(shuffled, cat.joule);
}

#[test]
fn test_printer_determinism() {
    let cat = catalog();
    assert_eq!(format_signature(&(&cat.meter / &cat.second)), "meter/second");
    assert_eq!(format_signature(&cat.newton), "(kilogram*meter)/second^2");
    assert_eq!(format_signature(&UnitSignature::scalar()), "[scalar]");

    let ohm = &(&cat.kilogram * &cat.meter.pow(2)) / &(&cat.second.pow(3) * &cat.ampere.pow(2));
    assert_eq!(ohm.to_string(), "(kilogram*meter^2)/(second^3*ampere^2)");
}

#[test]
fn test_validating_constructor() {
    let cat = catalog();
    let good = vec![
        DimensionExponent::new(cat.mass.clone(), 1).unwrap(),
        DimensionExponent::new(cat.time.clone(), -2).unwrap(),
    ];
    assert!(UnitSignature::from_entries(good).is_ok());

    let unsorted = vec![
        DimensionExponent::new(cat.time.clone(), 1).unwrap(),
        DimensionExponent::new(cat.mass.clone(), 1).unwrap(),
    ];
    assert!(matches!(
        UnitSignature::from_entries(unsorted),
        Err(UnitError::UnsortedEntries { .. })
    ));

    let duplicated = vec![
        DimensionExponent::new(cat.time.clone(), 1).unwrap(),
        DimensionExponent::new(cat.time.clone(), 2).unwrap(),
    ];
    assert!(matches!(
        UnitSignature::from_entries(duplicated),
        Err(UnitError::DuplicateDimension { .. })
    ));
}

// ============================================================================
// Registry scenarios
// ============================================================================

#[test]
fn test_redeclaration_is_idempotent() {
    let cat = catalog();
    let (again, unit) = cat.registry.define("time", "second").unwrap();

    assert_eq!(again, cat.time);
    assert_eq!(unit, cat.second);
    assert_eq!(cat.registry.len(), 4);
}

#[test]
fn test_conflicting_declaration_is_rejected() {
    let cat = catalog();
    let err = cat.registry.define("time", "hour").unwrap_err();

    assert!(matches!(err, UnitError::ConflictingDimension { .. }));
    assert_eq!(cat.registry.len(), 4);
}

#[test]
fn test_separate_registries_do_not_interact() {
    let first = catalog();
    let second = catalog();

    assert_eq!(first.meter, second.meter);
    assert_eq!(first.newton.to_string(), second.newton.to_string());
}
