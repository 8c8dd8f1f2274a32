//! # Engine Error Types
//!
//! Mapping faults represent invalid precondition states in the stored
//! project (a missing ROR id, a missing linkage record). They fail the
//! operation immediately and name the offending entity; they are never
//! silently defaulted. Compatibility violations are NOT here: those are
//! ordinary data (see [`crate::compatibility`]).

use thiserror::Error;

use conflux_core::{CanonicalizationError, OrganisationId, ProjectId};

use crate::compatibility::Incompatibility;

/// Fault while mapping a project snapshot to the registry wire format.
#[derive(Error, Debug)]
pub enum MappingError {
    /// The registry mandates a ROR identifier for every organisation.
    #[error("organisation {organisation} has no ROR identifier, which the registry requires")]
    MissingRorId {
        /// The organisation missing its ROR id.
        organisation: OrganisationId,
    },

    /// An update payload needs the project's registry linkage record.
    #[error("project {project} has no registry linkage record to build an update from")]
    MissingRaidInfo {
        /// The project without a linkage record.
        project: ProjectId,
    },

    /// An enum member without a vocabulary table entry. Indicates a table
    /// that was not extended together with its enum.
    #[error("no controlled-vocabulary entry for {family} value {value:?}")]
    UnmappedVocabulary {
        /// The vocabulary family (e.g. "title type").
        family: &'static str,
        /// Debug rendering of the unmapped member.
        value: String,
    },
}

/// Failure to produce a mint or sync plan.
#[derive(Error, Debug)]
pub enum MintError {
    /// The project fails structural compatibility checks. Carries the full
    /// ordered list so the caller can report every violation at once.
    #[error("project fails {} compatibility check(s)", .0.len())]
    Incompatible(Vec<Incompatibility>),

    /// Mapping fault; see [`MappingError`].
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Checksum serialization fault; indicates a payload-type bug.
    #[error(transparent)]
    Checksum(#[from] CanonicalizationError),
}
