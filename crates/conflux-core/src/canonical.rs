//! # Canonical Serialization
//!
//! Defines [`CanonicalBytes`], the sole construction path for bytes used in
//! checksum computation.
//!
//! ## Invariant
//!
//! The inner field is private: the only way to obtain canonical bytes is
//! [`CanonicalBytes::new()`], which serializes through RFC 8785 (JSON
//! Canonicalization Scheme). Any function computing a content checksum must
//! accept `&CanonicalBytes`, so no code path can hash a non-canonical
//! serialization. Sorted keys and compact separators make the byte sequence
//! a pure function of the value, independent of struct field declaration
//! order or serializer defaults.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by RFC 8785 canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::SerializationFailed`] when the value
    /// cannot be represented as JSON. That indicates a bug in the payload
    /// type, not an expected runtime condition.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let text = serde_jcs::to_string(&value)?;
        Ok(Self(text.into_bytes()))
    }

    /// Access the canonical bytes for checksum computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
