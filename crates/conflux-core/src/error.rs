//! # Error Types
//!
//! Errors raised by the foundational types. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Business-rule violations are NOT errors in this workspace: the
//! compatibility checker returns them as ordinary data. The types here cover
//! programmer and data-integrity faults only, which stop the operation.

use thiserror::Error;

/// Error constructing a validated external identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The value does not look like an ORCID iD (four dash-separated groups
    /// of four digits, final character may be `X`).
    #[error("invalid ORCID identifier: {value:?}")]
    InvalidOrcid {
        /// The rejected input.
        value: String,
    },

    /// The value does not look like a ROR identifier (nine lowercase
    /// alphanumeric characters starting with `0`).
    #[error("invalid ROR identifier: {value:?}")]
    InvalidRor {
        /// The rejected input.
        value: String,
    },

    /// The value is not a handle URI of the form `scheme://host/prefix/suffix`.
    #[error("malformed RAiD handle, expected scheme://host/prefix/suffix: {value:?}")]
    MalformedRaidHandle {
        /// The rejected input.
        value: String,
    },
}

/// Error during canonical serialization.
///
/// A failure here indicates a bug upstream (a payload that cannot be
/// represented as JSON), never an expected runtime condition. It must
/// propagate instead of producing a degraded checksum.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("canonical serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
