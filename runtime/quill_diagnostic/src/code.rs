use std::fmt;

/// Warning codes for all runtime diagnostics.
///
/// Format: W#### where the first digit indicates the subsystem:
/// - W1xxx: arithmetic and operators
/// - W2xxx: string and conversion
/// - W9xxx: internal runtime conditions
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WarningCode {
    // Arithmetic (W1xxx)
    /// Division or modulo by zero
    W1001,
    /// Unsupported operand types for an arithmetic operation
    W1002,

    // Conversion (W2xxx)
    /// Lossy conversion of a compound value to a scalar
    W2001,
}

impl WarningCode {
    /// Check if this code belongs to the arithmetic range.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, WarningCode::W1001 | WarningCode::W1002)
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_code_name() {
        assert_eq!(WarningCode::W1001.to_string(), "W1001");
        assert_eq!(WarningCode::W2001.to_string(), "W2001");
    }

    #[test]
    fn arithmetic_range() {
        assert!(WarningCode::W1001.is_arithmetic());
        assert!(WarningCode::W1002.is_arithmetic());
        assert!(!WarningCode::W2001.is_arithmetic());
    }
}
