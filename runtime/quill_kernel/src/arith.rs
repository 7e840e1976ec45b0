//! Arithmetic and bitwise operator wrappers.
//!
//! Each wrapper snapshots the destination's aliasing metadata, delegates to
//! the generic primitive in `quill_variant::binary`, then restores the
//! snapshot over the freshly written result. On failure the destination is
//! left untouched and the status is forwarded to the caller.

use quill_variant::{binary, OpError, Variant};

/// `result = op1 + op2`, preserving `result`'s aliasing metadata.
pub fn add_function_ex(result: &mut Variant, op1: &Variant, op2: &Variant) -> Result<(), OpError> {
    write_preserving_meta(result, binary::add(op1, op2))
}

/// `result = op1 & op2` over long-coerced operands.
pub fn bitwise_and_function(
    result: &mut Variant,
    op1: &Variant,
    op2: &Variant,
) -> Result<(), OpError> {
    write_preserving_meta(result, binary::bit_and(op1, op2))
}

/// `result = op1 | op2` over long-coerced operands.
pub fn bitwise_or_function(
    result: &mut Variant,
    op1: &Variant,
    op2: &Variant,
) -> Result<(), OpError> {
    write_preserving_meta(result, binary::bit_or(op1, op2))
}

/// `result = op1 ^ op2` over long-coerced operands.
pub fn bitwise_xor_function(
    result: &mut Variant,
    op1: &Variant,
    op2: &Variant,
) -> Result<(), OpError> {
    write_preserving_meta(result, binary::bit_xor(op1, op2))
}

/// `result = op1 << op2`. Out-of-range shift amounts yield 0.
pub fn shift_left_function(
    result: &mut Variant,
    op1: &Variant,
    op2: &Variant,
) -> Result<(), OpError> {
    write_preserving_meta(result, binary::shift_left(op1, op2))
}

/// `result = op1 >> op2` (arithmetic). Out-of-range shift amounts saturate
/// to the operand's sign.
pub fn shift_right_function(
    result: &mut Variant,
    op1: &Variant,
    op2: &Variant,
) -> Result<(), OpError> {
    write_preserving_meta(result, binary::shift_right(op1, op2))
}

fn write_preserving_meta(
    result: &mut Variant,
    outcome: Result<Variant, OpError>,
) -> Result<(), OpError> {
    match outcome {
        Ok(value) => {
            let ref_count = result.ref_count();
            let is_ref = result.is_ref();
            *result = value;
            result.set_ref_count(ref_count);
            result.set_is_ref(is_ref);
            Ok(())
        }
        Err(err) => {
            tracing::debug!(%err, "binary operator rejected operand tags");
            Err(err)
        }
    }
}
