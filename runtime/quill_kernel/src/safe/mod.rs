//! Zero-guarded division and modulo.
//!
//! The language never traps on a zero divisor: every entry point checks the
//! divisor first, and on zero reports [`WarningCode::W1001`] through the
//! diagnostic queue and returns 0. Division always produces a double;
//! modulo always produces an integer, truncating double operands toward
//! zero before taking the remainder (a fractional divisor below 1 therefore
//! counts as zero).
//!
//! The `_zval` variants additionally report [`WarningCode::W1002`] when a
//! compound operand (array, object, resource) is coerced, then proceed with
//! the coerced value.

use quill_diagnostic::{DiagnosticQueue, WarningCode};
use quill_variant::{Tag, Variant};

use crate::coerce::{get_doubleval, get_intval};

const DIVISION_BY_ZERO: &str = "Division by zero";
const UNSUPPORTED_OPERANDS: &str = "Unsupported operand types";

fn zero_divisor(diag: &mut DiagnosticQueue) {
    diag.warn(WarningCode::W1001, DIVISION_BY_ZERO);
}

fn check_operand(diag: &mut DiagnosticQueue, op: &Variant) {
    if matches!(op.tag(), Tag::Array | Tag::Object | Tag::Resource) {
        diag.warn(WarningCode::W1002, UNSUPPORTED_OPERANDS);
    }
}

pub fn safe_div_long_long(diag: &mut DiagnosticQueue, op1: i64, op2: i64) -> f64 {
    if op2 == 0 {
        zero_divisor(diag);
        return 0.0;
    }
    op1 as f64 / op2 as f64
}

pub fn safe_div_long_double(diag: &mut DiagnosticQueue, op1: i64, op2: f64) -> f64 {
    if op2 == 0.0 {
        zero_divisor(diag);
        return 0.0;
    }
    op1 as f64 / op2
}

pub fn safe_div_double_long(diag: &mut DiagnosticQueue, op1: f64, op2: i64) -> f64 {
    if op2 == 0 {
        zero_divisor(diag);
        return 0.0;
    }
    op1 / op2 as f64
}

pub fn safe_div_double_double(diag: &mut DiagnosticQueue, op1: f64, op2: f64) -> f64 {
    if op2 == 0.0 {
        zero_divisor(diag);
        return 0.0;
    }
    op1 / op2
}

pub fn safe_div_zval_long(diag: &mut DiagnosticQueue, op1: &Variant, op2: i64) -> f64 {
    if op2 == 0 {
        zero_divisor(diag);
        return 0.0;
    }
    check_operand(diag, op1);
    get_doubleval(op1) / op2 as f64
}

pub fn safe_div_zval_double(diag: &mut DiagnosticQueue, op1: &Variant, op2: f64) -> f64 {
    if op2 == 0.0 {
        zero_divisor(diag);
        return 0.0;
    }
    check_operand(diag, op1);
    get_doubleval(op1) / op2
}

pub fn safe_div_long_zval(diag: &mut DiagnosticQueue, op1: i64, op2: &Variant) -> f64 {
    let divisor = get_doubleval(op2);
    if divisor == 0.0 {
        zero_divisor(diag);
        return 0.0;
    }
    check_operand(diag, op2);
    op1 as f64 / divisor
}

pub fn safe_div_double_zval(diag: &mut DiagnosticQueue, op1: f64, op2: &Variant) -> f64 {
    let divisor = get_doubleval(op2);
    if divisor == 0.0 {
        zero_divisor(diag);
        return 0.0;
    }
    check_operand(diag, op2);
    op1 / divisor
}

pub fn safe_mod_long_long(diag: &mut DiagnosticQueue, op1: i64, op2: i64) -> i64 {
    if op2 == 0 {
        zero_divisor(diag);
        return 0;
    }
    // wrapping_rem: i64::MIN % -1 is 0, not a trap.
    op1.wrapping_rem(op2)
}

pub fn safe_mod_long_double(diag: &mut DiagnosticQueue, op1: i64, op2: f64) -> i64 {
    let divisor = op2 as i64;
    if divisor == 0 {
        zero_divisor(diag);
        return 0;
    }
    op1.wrapping_rem(divisor)
}

pub fn safe_mod_double_long(diag: &mut DiagnosticQueue, op1: f64, op2: i64) -> i64 {
    if op2 == 0 {
        zero_divisor(diag);
        return 0;
    }
    (op1 as i64).wrapping_rem(op2)
}

pub fn safe_mod_double_double(diag: &mut DiagnosticQueue, op1: f64, op2: f64) -> i64 {
    let divisor = op2 as i64;
    if divisor == 0 {
        zero_divisor(diag);
        return 0;
    }
    (op1 as i64).wrapping_rem(divisor)
}

pub fn safe_mod_zval_long(diag: &mut DiagnosticQueue, op1: &Variant, op2: i64) -> i64 {
    if op2 == 0 {
        zero_divisor(diag);
        return 0;
    }
    check_operand(diag, op1);
    get_intval(op1).wrapping_rem(op2)
}

pub fn safe_mod_zval_double(diag: &mut DiagnosticQueue, op1: &Variant, op2: f64) -> i64 {
    let divisor = op2 as i64;
    if divisor == 0 {
        zero_divisor(diag);
        return 0;
    }
    check_operand(diag, op1);
    get_intval(op1).wrapping_rem(divisor)
}

pub fn safe_mod_long_zval(diag: &mut DiagnosticQueue, op1: i64, op2: &Variant) -> i64 {
    let divisor = get_intval(op2);
    if divisor == 0 {
        zero_divisor(diag);
        return 0;
    }
    check_operand(diag, op2);
    op1.wrapping_rem(divisor)
}

pub fn safe_mod_double_zval(diag: &mut DiagnosticQueue, op1: f64, op2: &Variant) -> i64 {
    let divisor = get_intval(op2);
    if divisor == 0 {
        zero_divisor(diag);
        return 0;
    }
    check_operand(diag, op2);
    (op1 as i64).wrapping_rem(divisor)
}
