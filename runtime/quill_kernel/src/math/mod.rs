//! Floor, ceiling, rounding, and exponentiation.
//!
//! These follow the scalar-number convention: a scalar operand coerces
//! through the numeric table, while a compound operand (array, object,
//! resource) is not a number at all. Floor's failure path yields 0;
//! ceiling's and round's yield boolean false.

use quill_variant::{round_to_places, RoundMode, Variant};

use crate::coerce::{get_doubleval, get_intval, get_numberval, Number};

/// Numeric view of a scalar operand; compounds are not coercible here.
fn scalar_number(v: &Variant) -> Option<Number> {
    use quill_variant::Tag;
    match v.tag() {
        Tag::Array | Tag::Object | Tag::Resource => None,
        _ => Some(get_numberval(v)),
    }
}

/// Largest integral value not greater than the operand, as a double.
/// Non-coercible operands yield 0.
pub fn floor(op1: &Variant) -> f64 {
    match scalar_number(op1) {
        Some(Number::Double(d)) => d.floor(),
        Some(Number::Long(n)) => n as f64,
        None => 0.0,
    }
}

/// Smallest integral value not less than the operand, as a double variant.
/// Non-coercible operands yield boolean false.
pub fn ceil(op1: &Variant) -> Variant {
    match scalar_number(op1) {
        Some(Number::Double(d)) => Variant::double(d.ceil()),
        Some(Number::Long(n)) => Variant::double(n as f64),
        None => Variant::bool_val(false),
    }
}

/// Round to a number of decimal places under a tie-break mode.
///
/// `places` and `mode` are optional operand variants: places defaults to 0
/// and mode decodes through [`RoundMode::from_long`] (defaulting to
/// half-up). An integer operand with non-negative places is already exact
/// and widens unchanged. Non-coercible operands yield boolean false.
pub fn round(op1: &Variant, places: Option<&Variant>, mode: Option<&Variant>) -> Variant {
    let places = places.map_or(0, get_intval);
    let mode = mode.map_or(RoundMode::HalfUp, |m| RoundMode::from_long(get_intval(m)));
    match scalar_number(op1) {
        Some(Number::Long(n)) if places >= 0 => Variant::double(n as f64),
        Some(number) => {
            let clamped = places.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            Variant::double(round_to_places(number.as_double(), clamped, mode))
        }
        None => Variant::bool_val(false),
    }
}

/// Exponentiation.
///
/// An int base with a non-negative int exponent uses exact binary
/// exponentiation; on overflow the computation promotes to double and
/// continues. Everything else goes through `f64::powf`.
pub fn pow_function(base: &Variant, exponent: &Variant) -> Variant {
    if let (Some(Number::Long(b)), Some(Number::Long(e))) =
        (scalar_number(base), scalar_number(exponent))
    {
        if e >= 0 {
            return ipow(b, e);
        }
    }
    Variant::double(get_doubleval(base).powf(get_doubleval(exponent)))
}

/// Binary exponentiation over i64 with promotion to double on overflow.
fn ipow(base: i64, exponent: i64) -> Variant {
    if exponent == 0 {
        return Variant::long(1);
    }
    if base == 0 {
        return Variant::long(0);
    }
    let mut result: i64 = 1;
    let mut factor = base;
    let mut remaining = exponent;
    loop {
        if remaining % 2 == 1 {
            remaining -= 1;
            match result.checked_mul(factor) {
                Some(product) => result = product,
                None => {
                    tracing::debug!(base, exponent, "integer power overflow, promoting to double");
                    return Variant::double(
                        (result as f64 * factor as f64) * (factor as f64).powf(remaining as f64),
                    );
                }
            }
        } else {
            remaining /= 2;
            match factor.checked_mul(factor) {
                Some(square) => factor = square,
                None => {
                    tracing::debug!(base, exponent, "integer power overflow, promoting to double");
                    return Variant::double(
                        result as f64 * (factor as f64 * factor as f64).powf(remaining as f64),
                    );
                }
            }
        }
        if remaining == 0 {
            return Variant::long(result);
        }
    }
}

#[cfg(test)]
mod tests;
