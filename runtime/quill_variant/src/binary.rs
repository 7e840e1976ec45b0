//! Generic binary arithmetic and bitwise primitives.
//!
//! Tag-driven implementations of the operators the kernel wraps. Each
//! primitive either produces a fresh result variant or rejects the operand
//! tag combination with [`OpError::UnsupportedOperands`]; it never touches
//! the caller's destination, so the kernel wrapper decides what to do with
//! aliasing metadata.
//!
//! Integer addition that overflows promotes to a double result rather than
//! wrapping, matching the language's numeric tower.

use thiserror::Error;

use crate::numeric::{classify_numeric, NumericClass};
use crate::variant::{Payload, Variant};

/// Failure of a generic binary primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum OpError {
    /// The operand tag combination is not defined for this operator.
    #[error("unsupported operand types")]
    UnsupportedOperands,
}

/// Numeric view of a scalar operand, preserving the int/double split.
#[derive(Copy, Clone, Debug)]
enum Number {
    Long(i64),
    Double(f64),
}

impl Number {
    fn as_double(self) -> f64 {
        match self {
            Number::Long(n) => n as f64,
            Number::Double(d) => d,
        }
    }
}

fn number_of(v: &Variant) -> Number {
    match v.payload() {
        Payload::Null => Number::Long(0),
        Payload::Bool(b) => Number::Long(i64::from(*b)),
        Payload::Int(n) => Number::Long(*n),
        Payload::Double(d) => Number::Double(*d),
        Payload::Str(s) => match classify_numeric(s.as_bytes()) {
            NumericClass::NotNumeric => Number::Long(0),
            NumericClass::Integer(n) => Number::Long(n),
            NumericClass::Float(d) => Number::Double(d),
        },
        Payload::Array(items) => Number::Long(i64::from(!items.is_empty())),
        Payload::Object(_) | Payload::Resource(_) => Number::Long(1),
    }
}

fn long_of(v: &Variant) -> i64 {
    match number_of(v) {
        Number::Long(n) => n,
        Number::Double(d) => d as i64,
    }
}

fn is_compound(v: &Variant) -> bool {
    matches!(
        v.payload(),
        Payload::Array(_) | Payload::Object(_) | Payload::Resource(_)
    )
}

/// Generic addition.
///
/// Array + array is positional union (left entries win, the right array's
/// tail beyond the left's length is appended). Any other compound operand is
/// rejected. Scalars add numerically; an int + int overflow promotes the
/// result to double.
pub fn add(a: &Variant, b: &Variant) -> Result<Variant, OpError> {
    if let (Payload::Array(x), Payload::Array(y)) = (a.payload(), b.payload()) {
        let mut merged: Vec<Variant> = x.iter().map(Variant::duplicate).collect();
        merged.extend(y.iter().skip(x.len()).map(Variant::duplicate));
        return Ok(Variant::array(merged));
    }
    if is_compound(a) || is_compound(b) {
        return Err(OpError::UnsupportedOperands);
    }
    Ok(match (number_of(a), number_of(b)) {
        (Number::Long(x), Number::Long(y)) => match x.checked_add(y) {
            Some(sum) => Variant::long(sum),
            None => Variant::double(x as f64 + y as f64),
        },
        (x, y) => Variant::double(x.as_double() + y.as_double()),
    })
}

/// Generic bitwise AND over long-coerced operands.
pub fn bit_and(a: &Variant, b: &Variant) -> Result<Variant, OpError> {
    bitwise(a, b, |x, y| x & y)
}

/// Generic bitwise OR over long-coerced operands.
pub fn bit_or(a: &Variant, b: &Variant) -> Result<Variant, OpError> {
    bitwise(a, b, |x, y| x | y)
}

/// Generic bitwise XOR over long-coerced operands.
pub fn bit_xor(a: &Variant, b: &Variant) -> Result<Variant, OpError> {
    bitwise(a, b, |x, y| x ^ y)
}

/// Generic left shift. Shift amounts outside `0..64` yield 0.
pub fn shift_left(a: &Variant, b: &Variant) -> Result<Variant, OpError> {
    bitwise(a, b, |value, amount| {
        u32::try_from(amount)
            .ok()
            .and_then(|s| value.checked_shl(s))
            .unwrap_or(0)
    })
}

/// Generic arithmetic right shift. Shift amounts outside `0..64` saturate
/// to the sign (0 for non-negative values, -1 for negative).
pub fn shift_right(a: &Variant, b: &Variant) -> Result<Variant, OpError> {
    bitwise(a, b, |value, amount| {
        match u32::try_from(amount).ok().and_then(|s| value.checked_shr(s)) {
            Some(shifted) => shifted,
            None => {
                if value < 0 {
                    -1
                } else {
                    0
                }
            }
        }
    })
}

fn bitwise(a: &Variant, b: &Variant, op: impl Fn(i64, i64) -> i64) -> Result<Variant, OpError> {
    if is_compound(a) || is_compound(b) {
        return Err(OpError::UnsupportedOperands);
    }
    Ok(Variant::long(op(long_of(a), long_of(b))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_ints() {
        assert_eq!(
            add(&Variant::long(2), &Variant::long(3)),
            Ok(Variant::long(5))
        );
    }

    #[test]
    fn add_overflow_promotes_to_double() {
        let result = add(&Variant::long(i64::MAX), &Variant::long(1));
        assert_eq!(result, Ok(Variant::double(i64::MAX as f64 + 1.0)));
    }

    #[test]
    fn add_coerces_numeric_strings() {
        assert_eq!(
            add(&Variant::string("10"), &Variant::long(5)),
            Ok(Variant::long(15))
        );
        assert_eq!(
            add(&Variant::string("1.5"), &Variant::long(1)),
            Ok(Variant::double(2.5))
        );
    }

    #[test]
    fn add_arrays_is_positional_union() {
        let left = Variant::array(vec![Variant::long(1)]);
        let right = Variant::array(vec![Variant::long(9), Variant::long(2)]);
        let Ok(merged) = add(&left, &right) else {
            panic!("array + array must merge");
        };
        let Some(items) = merged.array_items() else {
            panic!("merge result must be an array");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Variant::long(1));
        assert_eq!(items[1], Variant::long(2));
    }

    #[test]
    fn add_rejects_mixed_compounds() {
        assert_eq!(
            add(&Variant::array(vec![]), &Variant::long(1)),
            Err(OpError::UnsupportedOperands)
        );
        assert_eq!(
            add(&Variant::object(1), &Variant::long(1)),
            Err(OpError::UnsupportedOperands)
        );
    }

    #[test]
    fn bitwise_coerces_to_long() {
        assert_eq!(
            bit_and(&Variant::string("12"), &Variant::long(10)),
            Ok(Variant::long(8))
        );
        assert_eq!(
            bit_or(&Variant::bool_val(true), &Variant::long(4)),
            Ok(Variant::long(5))
        );
        assert_eq!(
            bit_xor(&Variant::long(0b1100), &Variant::long(0b1010)),
            Ok(Variant::long(0b0110))
        );
    }

    #[test]
    fn bitwise_rejects_compounds() {
        assert_eq!(
            bit_and(&Variant::array(vec![]), &Variant::long(1)),
            Err(OpError::UnsupportedOperands)
        );
        assert_eq!(
            shift_left(&Variant::long(1), &Variant::resource(1)),
            Err(OpError::UnsupportedOperands)
        );
    }

    #[test]
    fn shifts() {
        assert_eq!(
            shift_left(&Variant::long(1), &Variant::long(4)),
            Ok(Variant::long(16))
        );
        assert_eq!(
            shift_right(&Variant::long(-8), &Variant::long(1)),
            Ok(Variant::long(-4))
        );
        // Out-of-range amounts are defined, not UB.
        assert_eq!(
            shift_left(&Variant::long(1), &Variant::long(64)),
            Ok(Variant::long(0))
        );
        assert_eq!(
            shift_right(&Variant::long(-1), &Variant::long(200)),
            Ok(Variant::long(-1))
        );
        assert_eq!(
            shift_right(&Variant::long(5), &Variant::long(-3)),
            Ok(Variant::long(0))
        );
    }
}
