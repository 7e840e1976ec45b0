//! Comparison operators and strict literal comparisons.
//!
//! The loose relational family delegates to the host ordering in
//! `quill_variant::compare`. The `greater` side is derived by negation
//! (`greater = !less_equal`, `greater_equal = !less`), which is sound
//! because the host ordering is total.
//!
//! The `compare_strict_*` functions compare a variant against a raw scalar
//! literal without building the literal variant, the fast path emitted for
//! comparisons against constants.

use std::cmp::Ordering;

use quill_variant::{compare as host, Payload, Variant};

/// Loose equality with cross-tag coercion.
pub fn is_equal(op1: &Variant, op2: &Variant) -> bool {
    host::is_equal(op1, op2)
}

/// Identity: same tag, same value, no coercion.
pub fn is_identical(op1: &Variant, op2: &Variant) -> bool {
    host::is_identical(op1, op2)
}

pub fn less(op1: &Variant, op2: &Variant) -> bool {
    host::compare(op1, op2) == Ordering::Less
}

pub fn less_equal(op1: &Variant, op2: &Variant) -> bool {
    host::compare(op1, op2) != Ordering::Greater
}

pub fn greater(op1: &Variant, op2: &Variant) -> bool {
    !less_equal(op1, op2)
}

pub fn greater_equal(op1: &Variant, op2: &Variant) -> bool {
    !less(op1, op2)
}

pub fn less_long(op1: &Variant, op2: i64) -> bool {
    less(op1, &Variant::long(op2))
}

pub fn less_double(op1: &Variant, op2: f64) -> bool {
    less(op1, &Variant::double(op2))
}

pub fn less_equal_long(op1: &Variant, op2: i64) -> bool {
    less_equal(op1, &Variant::long(op2))
}

pub fn greater_long(op1: &Variant, op2: i64) -> bool {
    !less_equal(op1, &Variant::long(op2))
}

pub fn greater_double(op1: &Variant, op2: f64) -> bool {
    !less_equal(op1, &Variant::double(op2))
}

pub fn greater_equal_long(op1: &Variant, op2: i64) -> bool {
    !less(op1, &Variant::long(op2))
}

/// Logical AND of two truthiness tests, written into `result` with its
/// aliasing metadata preserved.
pub fn and_function(result: &mut Variant, left: &Variant, right: &Variant) {
    let truth = host::is_true(left) && host::is_true(right);
    result.replace_payload(Payload::Bool(truth));
}

/// Strict comparison against a string literal: content equality for string
/// payloads, with narrow null and bool bridges (`null` matches the empty
/// string, `true`/`false` match `"1"`/`"0"`). Every other tag is unequal.
pub fn compare_strict_string(op1: &Variant, op2: &[u8]) -> bool {
    match op1.payload() {
        Payload::Str(s) => s.as_bytes() == op2,
        Payload::Null => op2.is_empty(),
        Payload::Bool(b) => {
            if *b {
                op2 == b"1"
            } else {
                op2 == b"0"
            }
        }
        _ => false,
    }
}

/// Strict comparison against an int literal.
///
/// Double payloads compare by value (`1.0` matches `1`); null matches 0 and
/// bools match 0/1. Strings and compounds fall back to loose equality
/// against the wrapped literal.
pub fn compare_strict_long(op1: &Variant, op2: i64) -> bool {
    match op1.payload() {
        Payload::Int(n) => *n == op2,
        Payload::Double(d) => *d == op2 as f64,
        Payload::Null => op2 == 0,
        Payload::Bool(b) => i64::from(*b) == op2,
        _ => is_equal(op1, &Variant::long(op2)),
    }
}

/// Strict comparison against a double literal. An int payload compares
/// against the literal truncated toward zero.
pub fn compare_strict_double(op1: &Variant, op2: f64) -> bool {
    match op1.payload() {
        Payload::Int(n) => *n == op2 as i64,
        Payload::Double(d) => *d == op2,
        Payload::Null => op2 == 0.0,
        Payload::Bool(b) => f64::from(*b) == op2,
        _ => is_equal(op1, &Variant::double(op2)),
    }
}

/// Strict comparison against a bool literal: numeric payloads compare their
/// zero-ness, null matches `false`.
pub fn compare_strict_bool(op1: &Variant, op2: bool) -> bool {
    match op1.payload() {
        Payload::Null => !op2,
        Payload::Bool(b) => *b == op2,
        Payload::Int(n) => (*n != 0) == op2,
        Payload::Double(d) => (*d != 0.0) == op2,
        _ => is_equal(op1, &Variant::bool_val(op2)),
    }
}
