//! # Payload Drift Detection
//!
//! After a successful sync, the checksum of the update payload is stored in
//! the project's [`RaidInfo`]. Recomputing it later and comparing against
//! the stored value tells whether the local project has drifted from the
//! registry state, without another registry round trip.
//!
//! The identifier block is cleared before hashing: its `version` advances
//! on every registry write regardless of content, and must not make an
//! otherwise unchanged payload look dirty.

use conflux_core::{content_checksum, CanonicalBytes, CanonicalizationError, RaidInfo};

use crate::wire::RaidUpdateRequest;

/// Compute the content checksum of an update payload.
///
/// Works on a clone with the identifier block cleared; the argument is
/// never mutated. The result is a lowercase hex digest that is equal for
/// field-for-field equal payloads (collection order included) and differs,
/// with overwhelming probability, for any content difference.
///
/// # Errors
///
/// Propagates [`CanonicalizationError`] when the payload cannot be
/// serialized, which indicates a mapping bug upstream rather than a state
/// this function should paper over.
pub fn update_checksum(request: &RaidUpdateRequest) -> Result<String, CanonicalizationError> {
    let mut content = request.clone();
    content.identifier = None;
    let bytes = CanonicalBytes::new(&content)?;
    Ok(content_checksum(&bytes))
}

/// Recompute the payload checksum and compare it against the linkage
/// record, returning the record with its drift flag set accordingly.
pub fn refresh_drift(
    info: &RaidInfo,
    request: &RaidUpdateRequest,
) -> Result<RaidInfo, CanonicalizationError> {
    let checksum = update_checksum(request)?;
    Ok(info.with_drift(&checksum))
}
