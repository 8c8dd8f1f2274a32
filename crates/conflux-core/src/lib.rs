//! # conflux-core: Foundational Types for the Conflux RAiD Engine
//!
//! This crate is the bedrock of the Conflux RAiD engine. It defines the
//! project snapshot model and the type-system primitives that the mapper
//! and compatibility checker operate on. Every other crate in the workspace
//! depends on `conflux-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `ProjectId`, `TitleId`,
//!    `OrcidId`, `RorId`, `RaidId` and friends are newtypes with validated
//!    constructors. No bare strings for identifiers.
//!
//! 2. **Immutable snapshot model.** The engine never mutates its input. A
//!    `ProjectSnapshot` is a fully materialized, read-only view of a project
//!    as loaded by the (external) persistence layer.
//!
//! 3. **`CanonicalBytes` newtype.** All checksum computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for checksums,
//!    which keeps change detection deterministic across calls and releases.
//!
//! 4. **Dates, not instants.** The registry wire format speaks in calendar
//!    dates (`YYYY-MM-DD`). `TemporalSpan` wraps `chrono::NaiveDate` with an
//!    optional open end; "now" is always an explicit parameter, never a
//!    hidden clock read.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `conflux-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod checksum;
pub mod error;
pub mod identity;
pub mod project;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use checksum::content_checksum;
pub use error::{CanonicalizationError, IdentityError};
pub use identity::{
    ContributorId, DescriptionId, OrcidId, OrganisationId, PersonId, ProductId, ProjectId, RaidId,
    RorId, TitleId,
};
pub use project::{
    Contributor, ContributorPosition, ContributorRole, Description, DescriptionType, Organisation,
    OrganisationRole, OrganisationRoleType, Person, PositionType, Product, ProductCategory,
    ProductIdScheme, ProductType, ProjectOrganisation, ProjectSnapshot, RaidInfo, Title, TitleType,
};
pub use temporal::TemporalSpan;
