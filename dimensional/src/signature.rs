//! Unit signature canonicalization
//!
//! A [`UnitSignature`] is the shape of a compound unit with scale ignored:
//! a sequence of (dimension, exponent) entries that is sorted by dimension
//! name, holds each dimension at most once and carries no zero exponent.
//! Every constructor either checks that invariant or produces it by a
//! merge of inputs that already satisfy it, so two physically equivalent
//! constructions always end up with identical entries.
//!
//! # Example
//!
//! ```
//! use dimensional::DimensionRegistry;
//!
//! let registry = DimensionRegistry::new();
//! let (_, meter) = registry.define("Distance", "meter").unwrap();
//! let (_, second) = registry.define("time", "second").unwrap();
//!
//! let velocity = &meter / &second;
//! assert_eq!(velocity.to_string(), "meter/second");
//! assert_eq!(&(&meter * &second) / &meter, second);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};
use std::sync::Arc;

use crate::dimension::{Dimension, DimensionExponent};
use crate::error::{Result, UnitError};
use crate::printer;
use crate::seq;

/// Canonical product of dimensions raised to integer powers
#[derive(Clone)]
pub struct UnitSignature {
    entries: Arc<[DimensionExponent]>,
}

impl UnitSignature {
    /// The dimensionless unit
    pub fn scalar() -> Self {
        Self::from_canonical(Vec::new())
    }

    /// One dimension to the first power
    pub(crate) fn base(dimension: Dimension) -> Self {
        Self::from_canonical(vec![DimensionExponent::new_unchecked(dimension, 1)])
    }

    /// Wrap entries already known to be canonical
    fn from_canonical(entries: Vec<DimensionExponent>) -> Self {
        debug_assert!(
            seq::first_unordered_by(&entries, |a, b| a.dimension().cmp(b.dimension())).is_none(),
            "non-canonical signature entries"
        );
        Self {
            entries: entries.into(),
        }
    }

    /// Build a signature from entries that must already be canonical
    ///
    /// Rejects unsorted input, repeated dimensions and zero exponents.
    /// [`UnitSignature::normalize`] is the forgiving counterpart.
    pub fn from_entries(entries: Vec<DimensionExponent>) -> Result<Self> {
        if let Some(zero) = entries.iter().find(|e| e.exponent() == 0) {
            return Err(UnitError::ZeroExponent {
                dimension: zero.dimension().clone(),
            });
        }

        if let Some(i) =
            seq::first_unordered_by(&entries, |a, b| a.dimension().cmp(b.dimension()))
        {
            let previous = entries[i].dimension().clone();
            let next = entries[i + 1].dimension().clone();
            return Err(if previous == next {
                UnitError::DuplicateDimension {
                    dimension: previous,
                }
            } else {
                UnitError::UnsortedEntries { previous, next }
            });
        }

        Ok(Self::from_canonical(entries))
    }

    /// Canonicalize an arbitrary collection of (dimension, exponent) pairs
    ///
    /// Entries are sorted by dimension name, repeated dimensions have their
    /// exponents summed, and zero results are dropped.
    pub fn normalize<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Dimension, i32)>,
    {
        let raw: Vec<(Dimension, i32)> = entries.into_iter().collect();
        let merged = seq::sort_and_coalesce_by(
            raw,
            |a, b| a.0.cmp(&b.0),
            |a, b| {
                let sum = a.1 + b.1;
                (sum != 0).then_some((a.0, sum))
            },
        );
        Self::from_canonical(
            merged
                .into_iter()
                .filter(|(_, exponent)| *exponent != 0)
                .map(|(dimension, exponent)| DimensionExponent::new_unchecked(dimension, exponent))
                .collect(),
        )
    }

    /// The canonical entries, sorted by dimension name
    pub fn entries(&self) -> &[DimensionExponent] {
        &self.entries
    }

    /// Number of distinct dimensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True for the dimensionless unit
    pub fn is_scalar(&self) -> bool {
        self.is_empty()
    }

    /// Exponent of `dimension`, zero when absent
    pub fn exponent_of(&self, dimension: &Dimension) -> i32 {
        self.entries
            .binary_search_by(|e| e.dimension().cmp(dimension))
            .map(|i| self.entries[i].exponent())
            .unwrap_or(0)
    }

    /// Entries with positive exponent, in canonical order
    pub fn numerator(&self) -> Vec<DimensionExponent> {
        seq::filter(&self.entries, |e| e.exponent() > 0)
    }

    /// Entries with negative exponent, in canonical order
    pub fn denominator(&self) -> Vec<DimensionExponent> {
        seq::filter(&self.entries, |e| e.exponent() < 0)
    }

    /// Product of two signatures by sorted merge
    pub fn multiply(&self, other: &Self) -> Self {
        if other.is_scalar() {
            return self.clone();
        }
        if self.is_scalar() {
            return other.clone();
        }

        let merged = seq::merge_sorted_by(
            &self.entries,
            &other.entries,
            |l, r| l.dimension().cmp(r.dimension()),
            |l, r| {
                let sum = l.exponent() + r.exponent();
                (sum != 0).then(|| DimensionExponent::new_unchecked(l.dimension().clone(), sum))
            },
        );
        Self::from_canonical(merged)
    }

    /// Every exponent negated
    pub fn invert(&self) -> Self {
        Self::from_canonical(self.entries.iter().map(DimensionExponent::negate).collect())
    }

    /// `self * other⁻¹`
    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.invert())
    }

    /// Every exponent multiplied by `power`; `pow(0)` is the scalar unit
    pub fn pow(&self, power: i32) -> Self {
        match power {
            1 => self.clone(),
            -1 => self.invert(),
            _ => Self::from_canonical(seq::filter_map(&self.entries, |e| e.pow(power))),
        }
    }
}

impl Default for UnitSignature {
    fn default() -> Self {
        Self::scalar()
    }
}

impl PartialEq for UnitSignature {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl Eq for UnitSignature {}

impl Hash for UnitSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl PartialOrd for UnitSignature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic over `(dimension-name, exponent)` entries; only meant to
/// give tests and debug output a deterministic order
impl Ord for UnitSignature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entries.iter().cmp(other.entries.iter())
    }
}

impl fmt::Display for UnitSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        printer::write_signature(f, self)
    }
}

impl fmt::Debug for UnitSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|e| (e.dimension().name().as_str(), e.exponent())),
            )
            .finish()
    }
}

// =============================================================================
// Operators
// =============================================================================

macro_rules! signature_binop {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<&UnitSignature> for &UnitSignature {
            type Output = UnitSignature;

            fn $method(self, rhs: &UnitSignature) -> UnitSignature {
                self.$op(rhs)
            }
        }

        impl $trait<UnitSignature> for UnitSignature {
            type Output = UnitSignature;

            fn $method(self, rhs: UnitSignature) -> UnitSignature {
                self.$op(&rhs)
            }
        }

        impl $trait<&UnitSignature> for UnitSignature {
            type Output = UnitSignature;

            fn $method(self, rhs: &UnitSignature) -> UnitSignature {
                self.$op(rhs)
            }
        }

        impl $trait<UnitSignature> for &UnitSignature {
            type Output = UnitSignature;

            fn $method(self, rhs: UnitSignature) -> UnitSignature {
                self.$op(&rhs)
            }
        }
    };
}

signature_binop!(Mul, mul, multiply);
signature_binop!(Div, div, divide);
