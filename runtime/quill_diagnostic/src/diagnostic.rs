use std::fmt;

use crate::WarningCode;

/// Severity level for runtime diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Recoverable condition the script author should fix.
    Warning,
    /// Informational notice; execution semantics are unaffected.
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Notice => write!(f, "notice"),
        }
    }
}

/// A single runtime diagnostic.
///
/// Diagnostics at this layer carry no source span: they are raised from
/// inside value operations, where only the executing opcode knows the
/// script location. The embedding interpreter attaches position context
/// when it drains the queue.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: WarningCode,
    pub message: String,
}

impl Diagnostic {
    /// Create a warning diagnostic with an empty message.
    pub fn warning(code: WarningCode) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            code,
            message: String::new(),
        }
    }

    /// Create a notice diagnostic with an empty message.
    pub fn notice(code: WarningCode) -> Self {
        Diagnostic {
            severity: Severity::Notice,
            code,
            message: String::new(),
        }
    }

    /// Set the primary message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Check if this diagnostic is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn warning_builder() {
        let diag = Diagnostic::warning(WarningCode::W1001).with_message("Division by zero");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.code, WarningCode::W1001);
        assert_eq!(diag.message, "Division by zero");
        assert!(diag.is_warning());
    }

    #[test]
    fn notice_is_not_warning() {
        let diag = Diagnostic::notice(WarningCode::W2001);
        assert!(!diag.is_warning());
    }

    #[test]
    fn display_format() {
        let diag = Diagnostic::warning(WarningCode::W1002).with_message("Unsupported operand types");
        assert_eq!(diag.to_string(), "warning[W1002]: Unsupported operand types");
    }
}
