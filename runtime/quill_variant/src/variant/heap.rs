//! Shared allocation wrapper for compound payloads.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable allocation for compound payloads.
///
/// Cloning a `Heap` clones the `Arc`, so duplicating a variant whose payload
/// is an array stays O(1). The wrapper keeps its constructor crate-private:
/// compound payloads are built through `Variant` factories only.
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Check whether two handles share one allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}
