//! Variant value model and host container primitives for the Quill runtime.
//!
//! A [`Variant`] is the single polymorphic value type of the language: a
//! tagged union over null, boolean, integer, double, string, array, object,
//! and resource. Every variant additionally carries aliasing metadata (a
//! reference count and an is-reference flag) that the operator kernel must
//! preserve across in-place mutation — see [`Variant::replace_payload`].
//!
//! Besides the data model, this crate provides the host primitives the
//! operator kernel delegates to rather than reimplements:
//!
//! - [`classify_numeric`]: the numeric-string classifier used by every
//!   string-to-number coercion
//! - [`make_printable`]: printable conversion for concatenation
//! - [`compare`]: generic tag-driven equality/ordering/identity
//! - [`binary`]: generic arithmetic and bitwise binary operators
//! - [`round_to_places`]: the decimal rounding primitive
//!
//! # Thread safety
//!
//! Each execution context owns a disjoint variant graph; nothing here locks.
//! Array payloads use [`Heap`] (an `Arc` newtype) so duplicating a variant
//! stays cheap, but the aliasing metadata — not the `Arc` count — is what the
//! language-level reference semantics are built on.

pub mod binary;
pub mod compare;
mod numeric;
mod printable;
mod round;
mod variant;

pub use binary::OpError;
pub use numeric::{classify_numeric, NumericClass};
pub use printable::make_printable;
pub use round::{round_to_places, RoundMode};
pub use variant::{Heap, ObjectHandle, Payload, ResourceHandle, StrBuf, Tag, Variant};
