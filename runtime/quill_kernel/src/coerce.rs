//! Total coercions from a variant to the scalar domains.
//!
//! Every conversion here is total: any tag maps to *some* int, double, or
//! bool. Strings go through [`classify_numeric`], which reads the longest
//! numeric prefix, so `"12abc"` coerces to 12 and `"3.5kg"` to 3.5.

use quill_variant::{classify_numeric, make_printable, NumericClass, Payload, Tag, Variant};

/// Numeric view of a variant, preserving the int/double split.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Long(i64),
    Double(f64),
}

impl Number {
    pub fn as_double(self) -> f64 {
        match self {
            Number::Long(n) => n as f64,
            Number::Double(d) => d,
        }
    }
}

/// Coerce to an integer. Doubles and float-classified strings truncate
/// toward zero; arrays map to 0 or 1 by emptiness; objects and resources
/// map to 1.
pub fn get_intval(v: &Variant) -> i64 {
    match v.payload() {
        Payload::Null => 0,
        Payload::Bool(b) => i64::from(*b),
        Payload::Int(n) => *n,
        Payload::Double(d) => *d as i64,
        Payload::Str(s) => classify_numeric(s.as_bytes()).as_long(),
        Payload::Array(items) => i64::from(!items.is_empty()),
        Payload::Object(_) | Payload::Resource(_) => 1,
    }
}

/// Coerce to a double. Same table as [`get_intval`] without the truncation.
pub fn get_doubleval(v: &Variant) -> f64 {
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

/// Coerce to a boolean.
///
/// Numeric-looking strings are truthy by their numeric value; any other
/// string is truthy when non-empty. Arrays are truthy when non-empty;
/// objects and resources are always truthy.
pub fn get_boolval(v: &Variant) -> bool {
    quill_variant::compare::is_true(v)
}

/// Whether the variant holds a number: int, double, or a string whose
/// leading characters parse as one. Booleans are deliberately not numeric.
pub fn is_numeric(v: &Variant) -> bool {
    match v.payload() {
        Payload::Int(_) | Payload::Double(_) => true,
        Payload::Str(s) => classify_numeric(s.as_bytes()).is_numeric(),
        _ => false,
    }
}

/// Numeric view preserving the int/double split, the shared front end of
/// [`negate`] and the math operators.
pub fn get_numberval(v: &Variant) -> Number {
    match v.payload() {
        Payload::Double(d) => Number::Double(*d),
        Payload::Str(s) => match classify_numeric(s.as_bytes()) {
            NumericClass::Integer(n) => Number::Long(n),
            NumericClass::Float(d) => Number::Double(d),
            NumericClass::NotNumeric => Number::Long(0),
        },
        _ => Number::Long(get_intval(v)),
    }
}

/// Arithmetic negation in place, preserving aliasing metadata.
///
/// An int whose negation overflows (`i64::MIN`) promotes to a double, the
/// same escape hatch integer addition uses.
pub fn negate(v: &mut Variant) {
    let payload = match get_numberval(v) {
        Number::Long(n) => match n.checked_neg() {
            Some(negated) => Payload::Int(negated),
            None => Payload::Double(-(n as f64)),
        },
        Number::Double(d) => Payload::Double(-d),
    };
    v.replace_payload(payload);
}

/// Convert `var` to the target tag, writing the converted payload into
/// `result` while preserving `result`'s aliasing metadata.
///
/// Casting to array wraps a non-array scalar in a one-element array (null
/// becomes the empty array); casting to null, bool, object, or resource is
/// owned by other subsystems and copies the value unchanged.
pub fn cast(result: &mut Variant, var: &Variant, target: Tag) {
    let converted = match target {
        Tag::Int => Variant::long(get_intval(var)),
        Tag::Double => Variant::double(get_doubleval(var)),
        Tag::Str => Variant::string(make_printable(var)),
        Tag::Array => match var.tag() {
            Tag::Array => var.duplicate(),
            Tag::Null => Variant::array(vec![]),
            _ => Variant::array(vec![var.duplicate()]),
        },
        _ => var.duplicate(),
    };
    result.replace_payload(converted.into_payload());
}
