//! # Mint & Sync Planning
//!
//! Composes the checker, the mapper, and the drift detector into the two
//! operations the registry client needs: a creation payload for a first
//! mint, and an update payload (plus handle parts and content checksum) for
//! a sync. The compatibility battery runs first in both; a project that
//! fails any check never reaches the mapper.

use chrono::NaiveDate;
use conflux_lang::LanguageRegistry;

use conflux_core::ProjectSnapshot;

use crate::compatibility::check_compatibility;
use crate::drift::update_checksum;
use crate::error::{MappingError, MintError};
use crate::mapper::RequestMapper;
use crate::wire::{RaidCreationRequest, RaidUpdateRequest};

/// Everything the registry client needs to mint a new raid.
#[derive(Debug, Clone, PartialEq)]
pub struct MintPlan {
    /// The creation payload.
    pub request: RaidCreationRequest,
}

/// Everything the registry client needs to sync an existing raid.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPlan {
    /// The update payload, identifier block included.
    pub request: RaidUpdateRequest,
    /// Content checksum of the payload (identifier excluded); stored in the
    /// linkage record after the registry confirms the write.
    pub checksum: String,
    /// Handle prefix, as registry endpoints address it.
    pub handle_prefix: String,
    /// Handle suffix.
    pub handle_suffix: String,
}

/// Plan a first mint: gate on compatibility, then map.
///
/// # Errors
///
/// [`MintError::Incompatible`] with the full ordered violation list when
/// the project fails any check; [`MintError::Mapping`] on mapping faults.
pub fn plan_mint(
    project: &ProjectSnapshot,
    now: NaiveDate,
    languages: &LanguageRegistry,
) -> Result<MintPlan, MintError> {
    let found = check_compatibility(project, now);
    if !found.is_empty() {
        return Err(MintError::Incompatible(found));
    }
    let request = RequestMapper::new(languages).creation_request(project)?;
    Ok(MintPlan { request })
}

/// Plan a sync of an already minted project: gate on compatibility, map,
/// compute the payload checksum, and split the stored handle.
///
/// # Errors
///
/// As [`plan_mint`], plus [`MintError::Mapping`] when the project has no
/// linkage record and [`MintError::Checksum`] on serialization faults.
pub fn plan_sync(
    project: &ProjectSnapshot,
    now: NaiveDate,
    languages: &LanguageRegistry,
) -> Result<SyncPlan, MintError> {
    let found = check_compatibility(project, now);
    if !found.is_empty() {
        return Err(MintError::Incompatible(found));
    }

    let info = project
        .raid_info
        .as_ref()
        .ok_or(MappingError::MissingRaidInfo {
            project: project.id,
        })?;
    let request = RequestMapper::new(languages).update_request(project)?;
    let checksum = update_checksum(&request)?;

    Ok(SyncPlan {
        checksum,
        handle_prefix: info.raid_id.prefix().to_string(),
        handle_suffix: info.raid_id.suffix().to_string(),
        request,
    })
}
