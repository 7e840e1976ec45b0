//! Numeric-string classification.
//!
//! Every string-to-number coercion in the runtime goes through
//! [`classify_numeric`]; nothing else re-implements numeric lexing. The
//! classifier scans the longest valid numeric prefix after optional leading
//! ASCII whitespace and reports what it parsed as.

/// Verdict of [`classify_numeric`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumericClass {
    /// No numeric prefix at all.
    NotNumeric,
    /// An integer literal that fits `i64`.
    Integer(i64),
    /// A floating literal, or an integer literal too large for `i64`.
    Float(f64),
}

impl NumericClass {
    pub fn is_numeric(self) -> bool {
        !matches!(self, NumericClass::NotNumeric)
    }

    /// Integer view: floats truncate toward zero, non-numeric is 0.
    pub fn as_long(self) -> i64 {
        match self {
            NumericClass::NotNumeric => 0,
            NumericClass::Integer(n) => n,
            NumericClass::Float(d) => d as i64,
        }
    }

    /// Double view: non-numeric is 0.0.
    pub fn as_double(self) -> f64 {
        match self {
            NumericClass::NotNumeric => 0.0,
            NumericClass::Integer(n) => n as f64,
            NumericClass::Float(d) => d,
        }
    }
}

fn is_ascii_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Classify a byte sequence as an integer literal, a floating literal, or
/// not numeric.
///
/// Grammar, applied to the longest matching prefix after optional leading
/// whitespace: `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?`, where at
/// least one digit must appear in the mantissa and the exponent marker is
/// consumed only when digits follow it. A fraction or exponent makes the
/// literal a float; so does an integer literal that overflows `i64`.
pub fn classify_numeric(bytes: &[u8]) -> NumericClass {
    let mut pos = 0;
    while pos < bytes.len() && is_ascii_space(bytes[pos]) {
        pos += 1;
    }
    let start = pos;

    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    let mut is_float = false;
    if pos < bytes.len() && bytes[pos] == b'.' {
        frac_digits = count_digits(&bytes[pos + 1..]);
        // A bare '.' with no digits on either side is not numeric.
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
            is_float = true;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return NumericClass::NotNumeric;
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < bytes.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
            is_float = true;
        }
    }

    let Ok(text) = std::str::from_utf8(&bytes[start..pos]) else {
        return NumericClass::NotNumeric;
    };

    if is_float {
        return match text.parse::<f64>() {
            Ok(d) => NumericClass::Float(d),
            Err(_) => NumericClass::NotNumeric,
        };
    }

    match text.parse::<i64>() {
        Ok(n) => NumericClass::Integer(n),
        // Integer literal wider than i64: reclassify as float.
        Err(_) => match text.parse::<f64>() {
            Ok(d) => NumericClass::Float(d),
            Err(_) => NumericClass::NotNumeric,
        },
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
