//! The `Variant` tagged union and its container primitives.
//!
//! Construction goes through factory methods (`Variant::long`,
//! `Variant::string`, ...) which produce fresh aliasing metadata
//! (`ref_count = 1`, `is_ref = false`). Mutating an existing variant's
//! payload without disturbing that metadata goes through
//! [`Variant::replace_payload`] — the contract every in-place operator in
//! the kernel is built on.

mod heap;
mod string_buf;

pub use heap::Heap;
pub use string_buf::StrBuf;

/// Discriminant of a [`Variant`] payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Tag {
    Null,
    Bool,
    Int,
    Double,
    Str,
    Array,
    Object,
    Resource,
}

/// Opaque handle to an object owned by the external object system.
///
/// Identity comparison compares the handle; value-equality hooks live in the
/// object system, not here.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ObjectHandle(u64);

impl ObjectHandle {
    pub fn new(id: u64) -> Self {
        ObjectHandle(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Opaque handle to a resource (file, stream, callable) owned externally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResourceHandle(u64);

impl ResourceHandle {
    pub fn new(id: u64) -> Self {
        ResourceHandle(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Tag-dependent payload of a [`Variant`].
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(StrBuf),
    Array(Heap<Vec<Variant>>),
    Object(ObjectHandle),
    Resource(ResourceHandle),
}

/// The polymorphic runtime value.
///
/// The reference count and is-reference flag are aliasing metadata owned by
/// the binding layer: they describe how many language-level bindings share
/// this storage and whether it is the authoritative target of a reference
/// alias. They are independent of the payload, and any in-place payload
/// mutation must leave them untouched.
#[derive(Debug)]
pub struct Variant {
    payload: Payload,
    ref_count: u32,
    is_ref: bool,
}

impl Variant {
    // Factories. Each produces fresh aliasing metadata.

    pub fn null() -> Self {
        Self::fresh(Payload::Null)
    }

    pub fn bool_val(b: bool) -> Self {
        Self::fresh(Payload::Bool(b))
    }

    pub fn long(n: i64) -> Self {
        Self::fresh(Payload::Int(n))
    }

    pub fn double(d: f64) -> Self {
        Self::fresh(Payload::Double(d))
    }

    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Self::fresh(Payload::Str(StrBuf::from_bytes(bytes.as_ref())))
    }

    pub fn array(items: Vec<Variant>) -> Self {
        Self::fresh(Payload::Array(Heap::new(items)))
    }

    pub fn object(id: u64) -> Self {
        Self::fresh(Payload::Object(ObjectHandle::new(id)))
    }

    pub fn resource(id: u64) -> Self {
        Self::fresh(Payload::Resource(ResourceHandle::new(id)))
    }

    fn fresh(payload: Payload) -> Self {
        Variant {
            payload,
            ref_count: 1,
            is_ref: false,
        }
    }

    // Tag and payload access.

    pub fn tag(&self) -> Tag {
        match self.payload {
            Payload::Null => Tag::Null,
            Payload::Bool(_) => Tag::Bool,
            Payload::Int(_) => Tag::Int,
            Payload::Double(_) => Tag::Double,
            Payload::Str(_) => Tag::Str,
            Payload::Array(_) => Tag::Array,
            Payload::Object(_) => Tag::Object,
            Payload::Resource(_) => Tag::Resource,
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Consume the variant, yielding its payload. Aliasing metadata is
    /// discarded; pair with [`Variant::replace_payload`] to move a computed
    /// value into an existing destination.
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Human-readable tag name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.tag() {
            Tag::Null => "null",
            Tag::Bool => "bool",
            Tag::Int => "int",
            Tag::Double => "double",
            Tag::Str => "string",
            Tag::Array => "array",
            Tag::Object => "object",
            Tag::Resource => "resource",
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self.payload {
            Payload::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self.payload {
            Payload::Double(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn str_buf(&self) -> Option<&StrBuf> {
        match &self.payload {
            Payload::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn str_buf_mut(&mut self) -> Option<&mut StrBuf> {
        match &mut self.payload {
            Payload::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn array_items(&self) -> Option<&Heap<Vec<Variant>>> {
        match &self.payload {
            Payload::Array(items) => Some(items),
            _ => None,
        }
    }

    // Aliasing metadata.

    pub fn ref_count(&self) -> u32 {
        self.ref_count
    }

    pub fn set_ref_count(&mut self, count: u32) {
        self.ref_count = count;
    }

    pub fn is_ref(&self) -> bool {
        self.is_ref
    }

    pub fn set_is_ref(&mut self, is_ref: bool) {
        self.is_ref = is_ref;
    }

    /// Swap in a new payload, preserving the reference count and
    /// is-reference flag.
    ///
    /// This is the mutation primitive for every in-place operator: a shared
    /// variant's kind and payload may change, but the bindings aliasing it
    /// must keep seeing the same storage descriptor.
    pub fn replace_payload(&mut self, payload: Payload) {
        self.payload = payload;
    }

    /// Copy this variant's payload into a fresh, unshared variant.
    ///
    /// The duplicate gets fresh aliasing metadata; array payloads share the
    /// underlying allocation (handle semantics).
    pub fn duplicate(&self) -> Variant {
        Self::fresh(self.payload.clone())
    }
}

/// Payload equality, ignoring aliasing metadata. This is identity-style
/// equality (same tag, same value) — loose equality lives in
/// [`crate::compare`].
impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

#[cfg(test)]
mod tests;
