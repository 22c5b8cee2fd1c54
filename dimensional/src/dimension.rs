//! Atomic dimensions and their registration
//!
//! A [`Dimension`] is identified by its name alone. The base-unit symbol is
//! display metadata: it is what the printer writes, but it never takes part
//! in equality, ordering or hashing.
//!
//! New dimensions enter the system only through a [`DimensionRegistry`]
//! (or the process-wide [`define_dimension`]), which hands back the
//! dimension together with its one-entry [`UnitSignature`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{LazyLock, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::error::{Result, UnitError};
use crate::signature::UnitSignature;
use crate::symbol::Symbol;

/// A physical dimension such as length, mass or time
#[derive(Clone)]
pub struct Dimension {
    name: Symbol,
    base_unit: Symbol,
}

impl Dimension {
    /// The identifying name
    pub fn name(&self) -> &Symbol {
        &self.name
    }

    /// The display name of the unit that measures one of this dimension
    pub fn base_unit(&self) -> &Symbol {
        &self.base_unit
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Dimension {}

impl PartialOrd for Dimension {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dimension {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Dim {}]", self.name)
    }
}

impl fmt::Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dimension")
            .field("name", &self.name)
            .field("base_unit", &self.base_unit)
            .finish()
    }
}

// =============================================================================
// Dimension Exponent
// =============================================================================

/// A dimension raised to a nonzero integer power
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionExponent {
    dimension: Dimension,
    exponent: i32,
}

impl DimensionExponent {
    /// Pair a dimension with an exponent, rejecting zero
    pub fn new(dimension: Dimension, exponent: i32) -> Result<Self> {
        if exponent == 0 {
            return Err(UnitError::ZeroExponent { dimension });
        }
        Ok(Self {
            dimension,
            exponent,
        })
    }

    /// Caller guarantees `exponent != 0`
    pub(crate) fn new_unchecked(dimension: Dimension, exponent: i32) -> Self {
        debug_assert_ne!(exponent, 0, "zero exponent for {}", dimension);
        Self {
            dimension,
            exponent,
        }
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Same dimension, exponent negated
    pub fn negate(&self) -> Self {
        Self::new_unchecked(self.dimension.clone(), -self.exponent)
    }

    /// Exponent multiplied by `power`; `None` when the product is zero
    pub fn pow(&self, power: i32) -> Option<Self> {
        let exponent = self.exponent * power;
        (exponent != 0).then(|| Self::new_unchecked(self.dimension.clone(), exponent))
    }
}

impl PartialOrd for DimensionExponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `(dimension-name, exponent)` tuple order
impl Ord for DimensionExponent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dimension
            .cmp(&other.dimension)
            .then(self.exponent.cmp(&other.exponent))
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Write-once-per-name table of declared dimensions
///
/// Declaring a name a second time with the same base unit returns the
/// existing dimension; declaring it with a different base unit is an error.
/// Entries are never removed or changed after insertion, so readers never
/// observe a dimension change identity.
#[derive(Debug, Default)]
pub struct DimensionRegistry {
    dimensions: RwLock<FxHashMap<Symbol, Dimension>>,
}

impl DimensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a dimension and get back its single-exponent unit
    pub fn define(
        &self,
        name: impl AsRef<str>,
        base_unit: impl AsRef<str>,
    ) -> Result<(Dimension, UnitSignature)> {
        let name = Symbol::non_empty(name)?;
        let base_unit = Symbol::non_empty(base_unit)?;

        let mut dimensions = self
            .dimensions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let dimension = match dimensions.get(&name) {
            Some(existing) if existing.base_unit == base_unit => {
                tracing::trace!(%name, %base_unit, "dimension already declared");
                existing.clone()
            }
            Some(existing) => {
                tracing::warn!(
                    %name,
                    existing = %existing.base_unit,
                    requested = %base_unit,
                    "conflicting dimension declaration rejected"
                );
                return Err(UnitError::ConflictingDimension {
                    name,
                    existing: existing.base_unit.clone(),
                    requested: base_unit,
                });
            }
            None => {
                tracing::debug!(%name, %base_unit, "dimension declared");
                let dimension = Dimension {
                    name: name.clone(),
                    base_unit,
                };
                dimensions.insert(name, dimension.clone());
                dimension
            }
        };

        let unit = UnitSignature::base(dimension.clone());
        Ok((dimension, unit))
    }

    /// Number of declared dimensions
    pub fn len(&self) -> usize {
        self.dimensions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a dimension of this name has been declared
    pub fn contains(&self, name: &str) -> bool {
        self.dimensions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&Symbol::new(name))
    }
}

static GLOBAL_REGISTRY: LazyLock<DimensionRegistry> = LazyLock::new(DimensionRegistry::new);

/// The process-wide registry behind [`define_dimension`]
pub fn global_registry() -> &'static DimensionRegistry {
    &GLOBAL_REGISTRY
}

/// Declare an atomic dimension in the process-wide registry
///
/// Returns the dimension and the unit holding exactly that dimension to the
/// first power, e.g. `define_dimension("time", "second")` yields the
/// `second` unit.
pub fn define_dimension(
    name: impl AsRef<str>,
    base_unit: impl AsRef<str>,
) -> Result<(Dimension, UnitSignature)> {
    global_registry().define(name, base_unit)
}
