//! In-place string concatenation, the `.=` operator family.
//!
//! All entry points mutate the left operand in place, preserving its
//! aliasing metadata. A null destination becomes a fresh string sized to
//! the appended content; any other non-string destination is first
//! converted through the printable form, then appended to.

use quill_variant::{make_printable, Payload, StrBuf, Tag, Variant};

/// Append the printable form of `right` to `left`.
pub fn concat_self(left: &mut Variant, right: &Variant) {
    let content = make_printable(right).into_owned();
    append_bytes(left, &content);
}

/// Append raw bytes to `left`.
pub fn concat_self_str(left: &mut Variant, right: &[u8]) {
    append_bytes(left, right);
}

/// Append the decimal rendering of an integer to `left`.
pub fn concat_self_long(left: &mut Variant, right: i64) {
    let text = right.to_string();
    append_bytes(left, text.as_bytes());
}

/// Append a single byte to `left`.
pub fn concat_self_char(left: &mut Variant, right: u8) {
    append_bytes(left, &[right]);
}

fn append_bytes(left: &mut Variant, content: &[u8]) {
    if left.tag() == Tag::Null {
        left.replace_payload(Payload::Str(StrBuf::from_bytes(content)));
        return;
    }
    if left.tag() != Tag::Str {
        let printable = make_printable(left).into_owned();
        left.replace_payload(Payload::Str(StrBuf::from_bytes(&printable)));
    }
    if let Some(buf) = left.str_buf_mut() {
        buf.push_bytes(content);
    }
}
