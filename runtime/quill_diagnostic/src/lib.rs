//! Diagnostic system for the Quill runtime.
//!
//! Script execution never aborts on a recoverable condition: operations that
//! hit a divide-by-zero or an unsupported operand combination emit a
//! warning-class diagnostic through a [`DiagnosticQueue`] and substitute a
//! defined fallback value. The queue is owned by the execution context and
//! drained by the embedding host (CLI, server worker, test harness).
//!
//! Warning codes are searchable (`W####`), with the first digit indicating
//! the subsystem that raised them.

mod code;
mod diagnostic;
pub mod queue;

pub use code::WarningCode;
pub use diagnostic::{Diagnostic, Severity};
pub use queue::DiagnosticQueue;
