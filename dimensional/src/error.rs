//! Errors raised by the unit algebra
//!
//! Two families share one enum: malformed construction input (bad
//! signatures, empty symbols, zero denominators, conflicting dimension
//! declarations) and unit mismatches between quantities. Normal combination
//! of well-formed values never produces the first family.

use miette::Diagnostic;
use thiserror::Error;

use crate::dimension::Dimension;
use crate::signature::UnitSignature;
use crate::symbol::Symbol;

/// Result alias used throughout the crate
pub type Result<T, E = UnitError> = std::result::Result<T, E>;

/// Errors produced by unit construction and unit-checked arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum UnitError {
    /// Two quantities with different signatures met in an operation that
    /// requires identical units
    #[error("cannot combine units: {left} vs {right} (in {operation})")]
    #[diagnostic(
        code(U0001),
        help("addition, subtraction and comparison need identical units; convert one side first")
    )]
    Mismatch {
        operation: &'static str,
        left: UnitSignature,
        right: UnitSignature,
    },

    #[error("zero exponent for dimension {dimension} in unit signature")]
    #[diagnostic(
        code(U0002),
        help("zero-exponent entries must be dropped; use UnitSignature::normalize")
    )]
    ZeroExponent { dimension: Dimension },

    #[error("unit signature entries out of order: {previous} must come after {next}")]
    #[diagnostic(
        code(U0003),
        help("entries are ordered by dimension name; use UnitSignature::normalize")
    )]
    UnsortedEntries { previous: Dimension, next: Dimension },

    #[error("dimension {dimension} appears more than once in unit signature")]
    #[diagnostic(
        code(U0004),
        help("combine repeated dimensions by adding exponents; use UnitSignature::normalize")
    )]
    DuplicateDimension { dimension: Dimension },

    #[error("symbol must not be empty")]
    #[diagnostic(code(U0005))]
    EmptySymbol,

    #[error("dimension `{name}` already declared with base unit `{existing}`, not `{requested}`")]
    #[diagnostic(
        code(U0006),
        help("a dimension name identifies exactly one base unit per registry")
    )]
    ConflictingDimension {
        name: Symbol,
        existing: Symbol,
        requested: Symbol,
    },

    #[error("ratio denominator is zero")]
    #[diagnostic(code(U0007))]
    ZeroDenominator,

    #[error("ratio overflow in {operation}")]
    #[diagnostic(
        code(U0008),
        help("ratios are unreduced 64-bit fractions, and a scale factor must fit the quantity's numeric type")
    )]
    RatioOverflow { operation: &'static str },
}

impl UnitError {
    /// Build a mismatch error, logging it at trace level
    pub(crate) fn mismatch(
        operation: &'static str,
        left: &UnitSignature,
        right: &UnitSignature,
    ) -> Self {
        tracing::trace!(%left, %right, operation, "unit mismatch");
        Self::Mismatch {
            operation,
            left: left.clone(),
            right: right.clone(),
        }
    }

    /// True for the user-facing unit mismatch family
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DimensionRegistry;

    #[test]
    fn test_mismatch_message() {
        let registry = DimensionRegistry::new();
        let (_, meter) = registry.define("Distance", "meter").unwrap();
        let (_, second) = registry.define("time", "second").unwrap();

        let err = UnitError::mismatch("addition", &meter, &(&meter / &second));
        assert!(err.is_mismatch());
        assert_eq!(
            err.to_string(),
            "cannot combine units: meter vs meter/second (in addition)"
        );
    }

    #[test]
    fn test_construction_errors_are_not_mismatches() {
        assert!(!UnitError::ZeroDenominator.is_mismatch());
        assert!(!UnitError::EmptySymbol.is_mismatch());
    }
}
