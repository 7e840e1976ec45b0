//! Generic tag-driven comparison primitives.
//!
//! These are the deep comparison algorithms the operator kernel delegates
//! to: loose equality, a total ordering, identity, and truthiness. The type
//! set is fixed, so dispatch is exhaustive pattern matching on tag pairs.
//!
//! # Totality
//!
//! [`compare`] defines an ordering for *every* tag pair, including pairs the
//! language treats as incomparable (object vs. int, resource vs. array).
//! Incomparable pairs fall back to a fixed rank: scalars and strings below
//! arrays, arrays below objects, objects below resources. The kernel derives
//! `greater` by negating `less_equal`, and that negation law only holds if
//! this ordering never reports a third "incomparable" state — the fallback
//! rank is a compatibility convention, not a claim that the pairs are
//! meaningfully ordered.

use std::cmp::Ordering;

use crate::numeric::{classify_numeric, NumericClass};
use crate::variant::{Payload, Variant};

/// Truthiness of a variant.
///
/// Numeric-looking strings are truthy by their numeric value; other strings
/// are truthy when non-empty. Arrays are truthy when non-empty; objects and
/// resources are always truthy.
pub fn is_true(v: &Variant) -> bool {
    match v.payload() {
        Payload::Null => false,
        Payload::Bool(b) => *b,
        Payload::Int(n) => *n != 0,
        Payload::Double(d) => *d != 0.0,
        Payload::Str(s) => match classify_numeric(s.as_bytes()) {
            NumericClass::Integer(n) => n != 0,
            NumericClass::Float(d) => d != 0.0,
            NumericClass::NotNumeric => !s.is_empty(),
        },
        Payload::Array(items) => !items.is_empty(),
        Payload::Object(_) | Payload::Resource(_) => true,
    }
}

/// Loose equality: `compare(a, b) == Equal`.
pub fn is_equal(a: &Variant, b: &Variant) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Identity: same tag and same value, no coercion.
///
/// Strings compare content, arrays compare element-wise identity, objects
/// and resources compare handles.
pub fn is_identical(a: &Variant, b: &Variant) -> bool {
    a == b
}

/// Total, tag-driven ordering over all variant pairs.
pub fn compare(a: &Variant, b: &Variant) -> Ordering {
    match (a.payload(), b.payload()) {
        (Payload::Array(x), Payload::Array(y)) => compare_arrays(x.as_slice(), y.as_slice()),
        (Payload::Object(x), Payload::Object(y)) => x.id().cmp(&y.id()),
        (Payload::Resource(x), Payload::Resource(y)) => x.id().cmp(&y.id()),
        _ => match (compound_rank(a), compound_rank(b)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => compare_scalars(a, b),
        },
    }
}

/// Fallback rank for compound tags in cross-tag comparisons.
fn compound_rank(v: &Variant) -> Option<u8> {
    match v.payload() {
        Payload::Array(_) => Some(1),
        Payload::Object(_) => Some(2),
        Payload::Resource(_) => Some(3),
        _ => None,
    }
}

fn compare_scalars(a: &Variant, b: &Variant) -> Ordering {
    match (a.payload(), b.payload()) {
        // String vs. string: numeric when both sides look numeric, byte-wise
        // otherwise. Two integer-classified sides compare as i64, since a
        // double would round wide integers together.
        (Payload::Str(x), Payload::Str(y)) => {
            match (classify_numeric(x.as_bytes()), classify_numeric(y.as_bytes())) {
                (NumericClass::Integer(nx), NumericClass::Integer(ny)) => nx.cmp(&ny),
                (cx, cy) if cx.is_numeric() && cy.is_numeric() => {
                    cx.as_double().total_cmp(&cy.as_double())
                }
                _ => x.as_bytes().cmp(y.as_bytes()),
            }
        }
        // Null against a string compares as the empty string.
        (Payload::Null, Payload::Str(y)) => b"".as_slice().cmp(y.as_bytes()),
        (Payload::Str(x), Payload::Null) => x.as_bytes().cmp(b"".as_slice()),
        // A bool or null on either side compares by truthiness.
        (Payload::Bool(_) | Payload::Null, _) | (_, Payload::Bool(_) | Payload::Null) => {
            is_true(a).cmp(&is_true(b))
        }
        // Exact path for int pairs (no precision loss on wide values).
        (Payload::Int(x), Payload::Int(y)) => x.cmp(y),
        // Everything else compares numerically. total_cmp keeps the order
        // total when a NaN double slips in.
        _ => numeric_value(a).total_cmp(&numeric_value(b)),
    }
}

fn numeric_value(v: &Variant) -> f64 {
    match v.payload() {
        Payload::Null => 0.0,
        Payload::Bool(b) => f64::from(*b),
        Payload::Int(n) => *n as f64,
        Payload::Double(d) => *d,
        Payload::Str(s) => classify_numeric(s.as_bytes()).as_double(),
        Payload::Array(items) => f64::from(!items.is_empty()),
        Payload::Object(_) | Payload::Resource(_) => 1.0,
    }
}

fn compare_arrays(x: &[Variant], y: &[Variant]) -> Ordering {
    match x.len().cmp(&y.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for (xe, ye) in x.iter().zip(y.iter()) {
        match compare(xe, ye) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_cross_tag_equality() {
        assert!(is_equal(&Variant::long(1), &Variant::double(1.0)));
        assert!(is_equal(&Variant::string("10"), &Variant::long(10)));
        assert!(is_equal(&Variant::bool_val(true), &Variant::long(1)));
        assert!(is_equal(&Variant::null(), &Variant::bool_val(false)));
    }

    #[test]
    fn numeric_strings_compare_numerically() {
        assert_eq!(
            compare(&Variant::string("10"), &Variant::string("9")),
            Ordering::Greater
        );
        assert!(is_equal(&Variant::string("1e2"), &Variant::string("100")));
    }

    #[test]
    fn wide_integer_strings_compare_exactly() {
        // Adjacent 19-digit integers round to the same double; the integer
        // path must keep them apart.
        assert_eq!(
            compare(
                &Variant::string("9223372036854775807"),
                &Variant::string("9223372036854775806")
            ),
            Ordering::Greater
        );
        assert!(!is_equal(
            &Variant::string("9223372036854775807"),
            &Variant::string("9223372036854775806")
        ));
        assert_eq!(
            compare(&Variant::string("-10"), &Variant::string("9")),
            Ordering::Less
        );
    }

    #[test]
    fn non_numeric_strings_compare_bytewise() {
        assert_eq!(
            compare(&Variant::string("abc"), &Variant::string("abd")),
            Ordering::Less
        );
        assert!(!is_equal(&Variant::string("abc"), &Variant::string("ABC")));
    }

    #[test]
    fn null_compares_as_empty_string() {
        assert!(is_equal(&Variant::null(), &Variant::string("")));
        assert_eq!(
            compare(&Variant::null(), &Variant::string("a")),
            Ordering::Less
        );
    }

    #[test]
    fn arrays_compare_by_length_then_elements() {
        let short = Variant::array(vec![Variant::long(9)]);
        let long = Variant::array(vec![Variant::long(1), Variant::long(2)]);
        assert_eq!(compare(&short, &long), Ordering::Less);

        let a = Variant::array(vec![Variant::long(1), Variant::long(2)]);
        let b = Variant::array(vec![Variant::long(1), Variant::long(3)]);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert!(is_equal(
            &Variant::array(vec![Variant::long(1)]),
            &Variant::array(vec![Variant::string("1")])
        ));
    }

    #[test]
    fn compound_ranks_above_scalars() {
        assert_eq!(
            compare(&Variant::array(vec![]), &Variant::long(1_000_000)),
            Ordering::Greater
        );
        assert_eq!(
            compare(&Variant::object(1), &Variant::array(vec![])),
            Ordering::Greater
        );
        assert_eq!(
            compare(&Variant::resource(1), &Variant::object(u64::MAX)),
            Ordering::Greater
        );
    }

    #[test]
    fn objects_compare_by_handle() {
        assert!(is_equal(&Variant::object(7), &Variant::object(7)));
        assert_eq!(
            compare(&Variant::object(3), &Variant::object(8)),
            Ordering::Less
        );
    }

    #[test]
    fn identity_requires_same_tag() {
        assert!(is_identical(&Variant::long(1), &Variant::long(1)));
        assert!(!is_identical(&Variant::long(1), &Variant::double(1.0)));
        assert!(!is_identical(&Variant::string("1"), &Variant::long(1)));
        assert!(is_identical(&Variant::string("x"), &Variant::string("x")));
    }

    #[test]
    fn truthiness_table() {
        assert!(!is_true(&Variant::null()));
        assert!(!is_true(&Variant::long(0)));
        assert!(!is_true(&Variant::double(0.0)));
        assert!(!is_true(&Variant::string("")));
        assert!(!is_true(&Variant::string("0")));
        assert!(!is_true(&Variant::string("0.0")));
        assert!(is_true(&Variant::string("abc")));
        assert!(!is_true(&Variant::array(vec![])));
        assert!(is_true(&Variant::array(vec![Variant::null()])));
        assert!(is_true(&Variant::object(0)));
    }

    #[test]
    fn nan_still_orders_totally() {
        let nan = Variant::double(f64::NAN);
        let one = Variant::double(1.0);
        let ab = compare(&nan, &one);
        let ba = compare(&one, &nan);
        assert_eq!(ab, ba.reverse());
    }
}
