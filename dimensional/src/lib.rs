//! Dimensional Analysis with Canonical Unit Signatures
//!
//! Values carry a physical unit, and the unit is checked on every
//! operation. Adding metres to seconds is reported as an error instead of
//! silently producing a number.
//!
//! # Key Features
//!
//! - **Open set of dimensions**: declared at runtime through a
//!   [`DimensionRegistry`], never hard-coded
//! - **Canonical signatures**: every derived unit normalizes to exactly one
//!   representation, so `meter*second/meter` *is* `second`
//! - **Exact scaling**: prefixes such as kilo- or hour are [`Ratio`]s folded
//!   into the value when a [`Quantity`] is built
//! - **Stable printing**: `(kilogram*meter)/second^2`, `1/second`, `[scalar]`
//!
//! # Example
//!
//! ```
//! use dimensional::prelude::*;
//!
//! let registry = DimensionRegistry::new();
//! let (_, meter) = registry.define("Distance", "meter")?;
//! let (_, second) = registry.define("time", "second")?;
//! let mps2 = &meter / &second.pow(2);
//!
//! let velocity = (9.8_f64 * &mps2) * (10.0_f64 * &second);
//! assert_eq!(velocity.value(), 98.0);
//! assert_eq!(velocity.unit().to_string(), "meter/second");
//!
//! // Cannot add different units
//! assert!((velocity + (1.0_f64 * &second)).is_err());
//! # Ok::<(), dimensional::UnitError>(())
//! ```

pub mod dimension;
pub mod error;
pub mod measure;
pub mod number;
pub mod printer;
pub mod quantity;
pub mod ratio;
pub mod scaled;
pub mod signature;
pub mod symbol;

mod seq;

// Re-exports
pub use dimension::{define_dimension, global_registry, Dimension, DimensionExponent, DimensionRegistry};
pub use error::{Result, UnitError};
pub use measure::{Measure, UnitMarker};
pub use number::Numeric;
pub use printer::format_signature;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use scaled::ScaledUnit;
pub use signature::UnitSignature;
pub use symbol::Symbol;

/// Prelude for common imports
pub mod prelude {
    pub use super::dimension::{define_dimension, Dimension, DimensionRegistry};
    pub use super::error::UnitError;
    pub use super::measure::{Measure, UnitMarker};
    pub use super::quantity::Quantity;
    pub use super::ratio::Ratio;
    pub use super::scaled::ScaledUnit;
    pub use super::signature::UnitSignature;
}
