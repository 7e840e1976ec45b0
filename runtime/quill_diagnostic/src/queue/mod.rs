//! Diagnostic queue for collecting runtime warnings.
//!
//! One queue lives per execution context. Value operations push into it and
//! continue; nothing in this module can abort script execution. The
//! embedding host drains the queue with [`DiagnosticQueue::flush`] at
//! whatever granularity it reports (per statement, per request, per test).

use crate::{Diagnostic, Severity, WarningCode};

/// Queue for collecting runtime diagnostics in emission order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiagnosticQueue {
    /// Collected diagnostics, in emission order.
    diagnostics: Vec<Diagnostic>,
    /// Count of warnings (not notices).
    warning_count: usize,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic to the queue.
    pub fn emit(&mut self, diag: Diagnostic) {
        if diag.severity == Severity::Warning {
            self.warning_count += 1;
        }
        self.diagnostics.push(diag);
    }

    /// Convenience: emit a warning with the given code and message.
    pub fn warn(&mut self, code: WarningCode, message: impl Into<String>) {
        self.emit(Diagnostic::warning(code).with_message(message));
    }

    /// Number of warnings emitted since the last flush.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Check if the queue holds no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate the queued diagnostics without draining them.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Drain the queue, returning diagnostics in emission order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.warning_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
