//! # Project Snapshot Model
//!
//! The immutable, fully materialized view of a project that the mapper and
//! compatibility checker operate on. The persistence layer (outside this
//! workspace) owns these records; the engine only reads them and returns
//! fresh values, so every type here is a plain value type.
//!
//! ## Data Model
//!
//! - [`ProjectSnapshot`]: aggregate root with titles, descriptions,
//!   contributors, organisations, and products in their stored order.
//! - [`Title`] / [`Description`]: typed, optionally language-tagged text.
//! - [`Contributor`]: a person's involvement, with role taxonomy tags and
//!   dated positions.
//! - [`ProjectOrganisation`]: an organisation's involvement, with dated roles.
//! - [`Product`]: a related research output.
//! - [`RaidInfo`]: the linkage record to the external registry, including
//!   the drift-detection checksum.
//!
//! Collection order is significant: the mapper preserves it in the wire
//! payload, and the payload checksum depends on it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{
    ContributorId, DescriptionId, OrganisationId, PersonId, ProductId, ProjectId, RaidId, TitleId,
};
use crate::identity::{OrcidId, RorId};
use crate::temporal::TemporalSpan;

// ---------------------------------------------------------------------------
// Aggregate root
// ---------------------------------------------------------------------------

/// A fully loaded project, as handed to the engine by the data-access layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Unique project identifier.
    pub id: ProjectId,
    /// First day of the project.
    pub start_date: NaiveDate,
    /// Last day of the project; `None` while the project is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Titles in stored order.
    #[serde(default)]
    pub titles: Vec<Title>,
    /// Descriptions in stored order.
    #[serde(default)]
    pub descriptions: Vec<Description>,
    /// Contributors in stored order.
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    /// Involved organisations in stored order.
    #[serde(default)]
    pub organisations: Vec<ProjectOrganisation>,
    /// Related products in stored order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Registry linkage record; `None` until the project is first minted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raid_info: Option<RaidInfo>,
}

// ---------------------------------------------------------------------------
// Titles & descriptions
// ---------------------------------------------------------------------------

/// The registry's title type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleType {
    /// The main title; exactly one must be active at any time.
    Primary,
    /// A shortened form.
    Short,
    /// An acronym.
    Acronym,
    /// Any other alternative title.
    Alternative,
}

/// A project title with a validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Unique title identifier.
    pub id: TitleId,
    /// The title text.
    pub text: String,
    /// Title type.
    pub title_type: TitleType,
    /// ISO 639-3 language code of the text, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// When this title is (was) in use.
    pub span: TemporalSpan,
}

/// The registry's description type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionType {
    /// The main description; at most one per project.
    Primary,
    /// An alternative description.
    Alternative,
    /// A brief summary.
    Brief,
    /// Significance statement.
    Significance,
    /// Methods used.
    Methods,
    /// Project objectives.
    Objectives,
    /// Acknowledgements.
    Acknowledgements,
    /// Anything else.
    Other,
}

/// A project description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    /// Unique description identifier.
    pub id: DescriptionId,
    /// The description text.
    pub text: String,
    /// Description type.
    pub description_type: DescriptionType,
    /// ISO 639-3 language code of the text, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

// ---------------------------------------------------------------------------
// Contributors
// ---------------------------------------------------------------------------

/// A person referenced by a contributor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: PersonId,
    /// Full name.
    pub name: String,
    /// ORCID iD; the registry requires one for every contributor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<OrcidId>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// CRediT contributor role taxonomy tags. Roles carry no temporal extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributorRole {
    Conceptualization,
    DataCuration,
    FormalAnalysis,
    FundingAcquisition,
    Investigation,
    Methodology,
    ProjectAdministration,
    Resources,
    Software,
    Supervision,
    Validation,
    Visualization,
    WritingOriginalDraft,
    WritingReviewEditing,
}

/// The registry's contributor position vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    PrincipalInvestigator,
    CoInvestigator,
    PartnerInvestigator,
    Consultant,
    OtherParticipant,
}

/// A dated position a contributor holds on the project.
///
/// Positions of one contributor must not overlap in time; the compatibility
/// checker flags violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorPosition {
    /// The position held.
    pub position: PositionType,
    /// When the position is (was) held.
    pub span: TemporalSpan,
}

/// A person's involvement in the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    /// Unique contributor record identifier.
    pub id: ContributorId,
    /// The person involved.
    pub person: Person,
    /// Whether this contributor leads the project.
    #[serde(default)]
    pub leader: bool,
    /// Whether this contributor is the project contact.
    #[serde(default)]
    pub contact: bool,
    /// Role taxonomy tags in stored order.
    #[serde(default)]
    pub roles: Vec<ContributorRole>,
    /// Dated positions in stored order.
    #[serde(default)]
    pub positions: Vec<ContributorPosition>,
}

// ---------------------------------------------------------------------------
// Organisations
// ---------------------------------------------------------------------------

/// An organisation referenced by the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    /// Unique organisation identifier.
    pub id: OrganisationId,
    /// Organisation name.
    pub name: String,
    /// ROR identifier; the registry requires one for every organisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ror: Option<RorId>,
}

/// The registry's organisation role vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganisationRoleType {
    /// The organisation leading the research. The project timeline must be
    /// continuously covered by roles of this type.
    LeadResearchOrganization,
    OtherResearchOrganization,
    PartnerOrganization,
    Contractor,
    Funder,
    Facility,
    OtherOrganization,
}

/// A dated role an organisation holds on the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganisationRole {
    /// The role held.
    pub role: OrganisationRoleType,
    /// When the role is (was) held.
    pub span: TemporalSpan,
}

/// An organisation's involvement in the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOrganisation {
    /// The organisation involved.
    pub organisation: Organisation,
    /// Dated roles in stored order.
    #[serde(default)]
    pub roles: Vec<OrganisationRole>,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// Identifier scheme of a product's identifier value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductIdScheme {
    Doi,
    Handle,
    Archive,
    Url,
}

/// The registry's related-object work type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Audiovisual,
    Book,
    BookChapter,
    ComputationalNotebook,
    ConferencePaper,
    ConferencePoster,
    ConferenceProceeding,
    DataPaper,
    Dataset,
    Dissertation,
    EducationalMaterial,
    Event,
    Funding,
    Image,
    Instrument,
    JournalArticle,
    Model,
    OutputManagementPlan,
    PhysicalObject,
    Preprint,
    Prize,
    Report,
    Service,
    Software,
    Sound,
    Standard,
    Text,
    Workflow,
}

/// How a product relates to the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Consumed by the project.
    Input,
    /// Produced and used within the project.
    Internal,
    /// Produced for the outside world.
    Output,
}

/// A research output or other related object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Identifier value (DOI, handle, URL, ...).
    pub url: String,
    /// Scheme of the identifier value.
    pub scheme: ProductIdScheme,
    /// Work type.
    pub product_type: ProductType,
    /// Relation categories; at least one is required for a mintable project.
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
}

// ---------------------------------------------------------------------------
// Registry linkage
// ---------------------------------------------------------------------------

/// The project's linkage record to the external registry.
///
/// Created on a successful mint and updated on every successful sync. The
/// `version` is owned by the registry and increases monotonically; the
/// `checksum` is the engine's drift detector (see `conflux-raid`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaidInfo {
    /// The minted handle.
    pub raid_id: RaidId,
    /// URI of the agency that registered the handle.
    pub registration_agency_id: String,
    /// URI of the owning organisation.
    pub owner_id: String,
    /// Service point number at the owning organisation.
    pub owner_service_point: i64,
    /// Registry-owned revision number.
    pub version: i32,
    /// Checksum of the payload confirmed at the last sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Whether the local project has drifted from the registry state.
    #[serde(default)]
    pub dirty: bool,
    /// When the last successful sync happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_sync: Option<DateTime<Utc>>,
}

impl RaidInfo {
    /// Whether a freshly computed payload checksum differs from the one
    /// confirmed at the last sync. A record that never synced is drifted
    /// by definition.
    pub fn is_drifted(&self, checksum: &str) -> bool {
        self.checksum.as_deref() != Some(checksum)
    }

    /// The record after a successful sync: new registry version, confirmed
    /// checksum, cleared drift flag, and a fresh sync timestamp.
    pub fn mark_synced(
        &self,
        version: i32,
        checksum: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            version,
            checksum: Some(checksum.into()),
            dirty: false,
            latest_sync: Some(now),
            ..self.clone()
        }
    }

    /// The record with the drift flag set from a freshly computed checksum.
    pub fn with_drift(&self, checksum: &str) -> Self {
        Self {
            dirty: self.is_drifted(checksum),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn info() -> RaidInfo {
        RaidInfo {
            raid_id: RaidId::new("https://raid.org/10.25.10.1234/a1b2c").unwrap(),
            registration_agency_id: "https://ror.org/04pp8hn57".into(),
            owner_id: "https://ror.org/04pp8hn57".into(),
            owner_service_point: 20_000_003,
            version: 4,
            checksum: Some("abc123".into()),
            dirty: false,
            latest_sync: None,
        }
    }

    #[test]
    fn drift_compares_against_stored_checksum() {
        let info = info();
        assert!(!info.is_drifted("abc123"));
        assert!(info.is_drifted("def456"));
    }

    #[test]
    fn never_synced_record_is_drifted() {
        let info = RaidInfo {
            checksum: None,
            ..info()
        };
        assert!(info.is_drifted("abc123"));
    }

    #[test]
    fn mark_synced_updates_lifecycle_fields() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let synced = info().with_drift("def456").mark_synced(5, "def456", now);
        assert_eq!(synced.version, 5);
        assert_eq!(synced.checksum.as_deref(), Some("def456"));
        assert!(!synced.dirty);
        assert_eq!(synced.latest_sync, Some(now));
    }

    #[test]
    fn with_drift_sets_flag_only() {
        let marked = info().with_drift("something-else");
        assert!(marked.dirty);
        assert_eq!(marked.version, 4);
        assert_eq!(marked.checksum.as_deref(), Some("abc123"));
    }
}
