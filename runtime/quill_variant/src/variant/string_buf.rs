//! Owned string payload buffer.

use std::fmt;

/// Owned, mutable, length-prefixed byte buffer backing a string variant.
///
/// The logical length is independent of any terminator, but the buffer
/// always keeps one trailing NUL byte for interop with terminator-based
/// consumers. Growth is exact-fit: callers that append in a loop get
/// amortization from batching at the call site, not from over-allocation
/// here.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StrBuf {
    /// Invariant: non-empty, last byte is NUL, logical content precedes it.
    bytes: Vec<u8>,
}

impl StrBuf {
    /// Create an empty buffer (just the trailing NUL).
    pub fn new() -> Self {
        StrBuf { bytes: vec![0] }
    }

    /// Create a buffer sized exactly to the given content.
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(content.len() + 1);
        bytes.extend_from_slice(content);
        bytes.push(0);
        StrBuf { bytes }
    }

    /// Logical length in bytes, excluding the trailing NUL.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content without the trailing NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Content including the trailing NUL, for terminator-based interop.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Append bytes at the tail, reallocating exact-fit and restoring the
    /// trailing NUL.
    pub fn push_bytes(&mut self, content: &[u8]) {
        self.bytes.reserve_exact(content.len());
        self.bytes.pop();
        self.bytes.extend_from_slice(content);
        self.bytes.push(0);
    }

    /// Append a single byte at the tail.
    pub fn push_byte(&mut self, byte: u8) {
        self.push_bytes(&[byte]);
    }
}

impl Default for StrBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StrBuf({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Display for StrBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
