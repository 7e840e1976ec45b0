//! Decimal rounding primitive.

/// Tie-breaking policy for [`round_to_places`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoundMode {
    /// Halfway cases round away from zero.
    HalfUp,
    /// Halfway cases round toward zero.
    HalfDown,
    /// Halfway cases round to the nearest even integer.
    HalfEven,
    /// Halfway cases round to the nearest odd integer.
    HalfOdd,
}

impl RoundMode {
    /// Decode the script-level mode constant; unknown values mean half-up.
    pub fn from_long(mode: i64) -> Self {
        match mode {
            2 => RoundMode::HalfDown,
            3 => RoundMode::HalfEven,
            4 => RoundMode::HalfOdd,
            _ => RoundMode::HalfUp,
        }
    }
}

/// Round `value` to `places` decimal places under the given tie-break mode.
///
/// Negative `places` round to tens, hundreds, and so on. Non-finite values
/// pass through unchanged, as does any value whose scaled form leaves the
/// finite range (at that magnitude the decimal places are not representable
/// anyway).
pub fn round_to_places(value: f64, places: i32, mode: RoundMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    round_helper(scaled, mode) / factor
}

/// Round to an integer under the given tie-break mode.
fn round_helper(value: f64, mode: RoundMode) -> f64 {
    let truncated = value.trunc();
    let is_halfway = (value - truncated).abs() == 0.5;
    if !is_halfway {
        // `f64::round` rounds halfway away from zero, which is exactly
        // half-up for non-halfway inputs too.
        return value.round();
    }
    let away = truncated + value.signum();
    match mode {
        RoundMode::HalfUp => away,
        RoundMode::HalfDown => truncated,
        RoundMode::HalfEven => {
            if truncated % 2.0 == 0.0 {
                truncated
            } else {
                away
            }
        }
        RoundMode::HalfOdd => {
            if truncated % 2.0 == 0.0 {
                away
            } else {
                truncated
            }
        }
    }
}
