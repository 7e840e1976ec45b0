//! Variant coercion and operator kernel for the Quill runtime.
//!
//! The generated opcode handlers don't talk to the host primitives directly;
//! they call into this kernel, which owns the language's loose-typing rules:
//!
//! - [`coerce`]: total conversions from any variant to int, double, bool,
//!   and the is-numeric verdict
//! - [`compare`]: equality, identity, ordering, and strict scalar
//!   comparisons against raw literals
//! - [`arith`]: arithmetic/bitwise wrappers that preserve the destination's
//!   aliasing metadata across the host primitive call
//! - [`safe`]: division and modulo guarded against zero divisors, reporting
//!   through the diagnostic queue instead of trapping
//! - [`concat`]: in-place string append, the `.=` operator
//! - [`math`]: floor, ceiling, rounding, and integer exponentiation with
//!   overflow promotion
//!
//! Nothing here allocates or frees a variant header; the kernel only grows
//! string payload buffers and builds transient literal variants on the stack
//! to reuse the generic host algorithms.

pub mod arith;
pub mod coerce;
pub mod compare;
pub mod concat;
pub mod math;
pub mod safe;
