//! Traits for byte serialization of group elements.

use crate::Result;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A trait for public types that can be serialized to and from bytes.
///
/// `from_bytes` expects exactly one encoded value; trailing bytes are an
/// error. Streaming decoders that need the unread remainder should use the
/// type's own `unmarshal`.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
