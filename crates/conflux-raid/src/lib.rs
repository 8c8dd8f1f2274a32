//! # conflux-raid: The RAiD Compatibility & Mapping Engine
//!
//! Everything needed to take a [`ProjectSnapshot`](conflux_core::ProjectSnapshot)
//! to the external RAiD registry and back:
//!
//! - [`vocabulary`]: controlled-vocabulary lookup tables mapping internal
//!   enums to registry URI pairs.
//! - [`wire`]: the registry's JSON wire format as serde value types.
//! - [`mapper`]: builds creation/update payloads from a snapshot.
//! - [`compatibility`]: the fixed battery of structural-invariant checks
//!   that gates minting and syncing.
//! - [`drift`]: the content checksum over the update payload that detects
//!   drift between the registry and the local project.
//! - [`minting`]: composes the above into mint/sync plans for the caller
//!   that talks to the registry.
//!
//! ## Design
//!
//! The engine is synchronous and side-effect free. Faults (inconsistent
//! stored data, unmapped vocabulary members) are errors; business-rule
//! violations are data, returned as an ordered
//! [`Incompatibility`](compatibility::Incompatibility) list so callers can
//! display "why can't I mint" without catching anything.

pub mod compatibility;
pub mod drift;
pub mod error;
pub mod mapper;
pub mod minting;
pub mod vocabulary;
pub mod wire;

pub use compatibility::{check_compatibility, is_compatible, Incompatibility, IncompatibilityKind};
pub use drift::update_checksum;
pub use error::{MappingError, MintError};
pub use mapper::RequestMapper;
pub use minting::{plan_mint, plan_sync, MintPlan, SyncPlan};
pub use wire::{RaidCreationRequest, RaidUpdateRequest};
