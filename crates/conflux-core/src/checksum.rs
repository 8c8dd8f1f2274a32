//! # Content Checksums
//!
//! A content checksum is the engine's change detector: the caller compares a
//! freshly computed checksum of the mapped registry payload against the one
//! stored after the last successful sync to decide whether the project has
//! drifted. It is not a security boundary; it only needs to be stable and
//! collision-resistant enough for change detection.
//!
//! Checksums are computed exclusively from [`CanonicalBytes`], enforced by
//! the signature of [`content_checksum()`].

use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// Compute a SHA-256 checksum over canonical bytes as lowercase hex.
pub fn content_checksum(data: &CanonicalBytes) -> String {
    let hash = Sha256::digest(data.as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
