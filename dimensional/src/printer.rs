//! Canonical display strings for unit signatures
//!
//! The rendering is a compatibility surface: log lines and display code may
//! match on it verbatim.
//!
//! - the empty signature prints as `[scalar]`
//! - positive exponents form the numerator, negative ones the denominator,
//!   each side keeping canonical order and joining factors with `*`
//! - a factor prints its base-unit name, followed by `^n` unless the
//!   magnitude of its exponent is one (denominator exponents print negated)
//! - an empty numerator prints as `1` when there is a denominator
//! - a side is parenthesised only when a denominator exists and that side
//!   has more than one factor

use std::fmt::{self, Write};

use crate::dimension::DimensionExponent;
use crate::signature::UnitSignature;

/// Render a signature to its canonical string
pub fn format_signature(signature: &UnitSignature) -> String {
    signature.to_string()
}

/// Write a signature's canonical string to any formatter
pub fn write_signature<W: Write>(out: &mut W, signature: &UnitSignature) -> fmt::Result {
    let numerator = signature.numerator();
    let denominator = signature.denominator();

    if numerator.is_empty() && denominator.is_empty() {
        return out.write_str("[scalar]");
    }

    if denominator.is_empty() {
        return write_factors(out, &numerator, 1);
    }

    if numerator.is_empty() {
        out.write_str("1")?;
    } else {
        write_group(out, &numerator, 1)?;
    }
    out.write_char('/')?;
    write_group(out, &denominator, -1)
}

/// Factors, parenthesised when there is more than one
fn write_group<W: Write>(out: &mut W, factors: &[DimensionExponent], sign: i32) -> fmt::Result {
    if factors.len() > 1 {
        out.write_char('(')?;
        write_factors(out, factors, sign)?;
        out.write_char(')')
    } else {
        write_factors(out, factors, sign)
    }
}

fn write_factors<W: Write>(out: &mut W, factors: &[DimensionExponent], sign: i32) -> fmt::Result {
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 {
            out.write_char('*')?;
        }
        out.write_str(factor.dimension().base_unit().as_str())?;
        let shown = sign * factor.exponent();
        if shown != 1 {
            write!(out, "^{}", shown)?;
        }
    }
    Ok(())
}
