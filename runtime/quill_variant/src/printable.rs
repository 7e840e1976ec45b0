//! Printable conversion for non-string variants.

use std::borrow::Cow;

use crate::variant::{Payload, Variant};

/// Render a variant as printable bytes.
///
/// String variants borrow their buffer; everything else produces an owned
/// temporary that the caller disposes of after copying (a `Cow::Owned`).
/// Numeric formatting is locale-independent decimal text; compound values
/// render as their fixed placeholder words, matching what the language's
/// string cast has always printed.
pub fn make_printable(v: &Variant) -> Cow<'_, [u8]> {
    match v.payload() {
        Payload::Null | Payload::Bool(false) => Cow::Borrowed(&b""[..]),
        Payload::Bool(true) => Cow::Borrowed(&b"1"[..]),
        Payload::Int(n) => Cow::Owned(n.to_string().into_bytes()),
        Payload::Double(d) => Cow::Owned(format_double(*d).into_bytes()),
        Payload::Str(s) => Cow::Borrowed(s.as_bytes()),
        Payload::Array(_) => Cow::Borrowed(&b"Array"[..]),
        Payload::Object(_) => Cow::Borrowed(&b"Object"[..]),
        Payload::Resource(_) => Cow::Borrowed(&b"Resource"[..]),
    }
}

fn format_double(d: f64) -> String {
    if d.is_nan() {
        return "NAN".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    format!("{d}")
}
