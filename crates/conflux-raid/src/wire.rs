//! # Registry Wire Format
//!
//! The registry's JSON payload shapes as plain serde value types. Field
//! names follow the registry's camelCase convention; optional blocks are
//! omitted entirely when absent (never serialized as placeholders), because
//! the payload checksum is computed over this serialization.
//!
//! Collection fields use the registry's singular names (`title`,
//! `contributor`, `relatedObject`), each holding a list in the order the
//! mapper produced it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A vocabulary term reference: id URI plus owning schema URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidTerm {
    /// Term id URI.
    pub id: String,
    /// Schema URI of the owning vocabulary.
    pub schema_uri: String,
}

/// A language tag on a title or description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidLanguage {
    /// ISO 639-3 code.
    pub id: String,
    /// Schema URI (the ISO 639-3 standard).
    pub schema_uri: String,
}

/// A title entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidTitle {
    /// Title text.
    pub text: String,
    /// Title type term.
    #[serde(rename = "type")]
    pub title_type: RaidTerm,
    /// First day the title applies.
    pub start_date: NaiveDate,
    /// Last day the title applies; omitted while the title is current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Language of the text; omitted when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<RaidLanguage>,
}

/// A description entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidDescription {
    /// Description text.
    pub text: String,
    /// Description type term.
    #[serde(rename = "type")]
    pub description_type: RaidTerm,
    /// Language of the text; omitted when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<RaidLanguage>,
}

/// The project date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidDateRange {
    /// Project start.
    pub start_date: NaiveDate,
    /// Project end; omitted while the project runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// A dated contributor position entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidContributorPosition {
    /// Position term id URI.
    pub id: String,
    /// Schema URI of the position vocabulary.
    pub schema_uri: String,
    /// First day the position is held.
    pub start_date: NaiveDate,
    /// Last day the position is held; omitted while current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// A contributor role entry (no temporal extent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidContributorRole {
    /// Role term id URI.
    pub id: String,
    /// Schema URI of the role taxonomy.
    pub schema_uri: String,
}

/// A contributor entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidContributor {
    /// ORCID URI; `null` when the person has none recorded yet. The
    /// compatibility checker blocks minting in that state, but the mapped
    /// payload still represents it faithfully.
    pub id: Option<String>,
    /// Schema URI of the contributor identifier scheme.
    pub schema_uri: String,
    /// Whether this contributor leads the project.
    pub leader: bool,
    /// Whether this contributor is the project contact.
    pub contact: bool,
    /// Dated positions in snapshot order.
    pub position: Vec<RaidContributorPosition>,
    /// Taxonomy roles in snapshot order.
    pub role: Vec<RaidContributorRole>,
}

/// A dated organisation role entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidOrganisationRole {
    /// Role term id URI.
    pub id: String,
    /// Schema URI of the organisation role vocabulary.
    pub schema_uri: String,
    /// First day the role is held.
    pub start_date: NaiveDate,
    /// Last day the role is held; omitted while current.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// An organisation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidOrganisation {
    /// ROR URI.
    pub id: String,
    /// Schema URI of the organisation identifier scheme.
    pub schema_uri: String,
    /// Dated roles in snapshot order.
    pub role: Vec<RaidOrganisationRole>,
}

/// A related object (product) entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidRelatedObject {
    /// Identifier value (DOI, handle, URL, ...).
    pub id: String,
    /// Schema URI of the identifier scheme.
    pub schema_uri: String,
    /// Work type term.
    #[serde(rename = "type")]
    pub object_type: RaidTerm,
    /// Relation categories in snapshot order.
    pub category: Vec<RaidTerm>,
}

/// The registering agency block of an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidRegistrationAgency {
    /// Agency URI.
    pub id: String,
    /// Schema URI of the agency identifier scheme.
    pub schema_uri: String,
}

/// The owner block of an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidOwner {
    /// Owner URI.
    pub id: String,
    /// Schema URI of the owner identifier scheme.
    pub schema_uri: String,
    /// Service point number at the owner.
    pub service_point: i64,
}

/// The identifier block of an update payload.
///
/// Excluded from the payload checksum: its `version` advances on every
/// registry write regardless of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidIdentifier {
    /// The full handle URI.
    pub id: String,
    /// Schema URI of the handle scheme.
    pub schema_uri: String,
    /// Agency that registered the handle.
    pub registration_agency: RaidRegistrationAgency,
    /// Owning organisation.
    pub owner: RaidOwner,
    /// Registry-owned revision number.
    pub version: i32,
}

/// The payload minting a new raid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidCreationRequest {
    /// Titles in snapshot order.
    pub title: Vec<RaidTitle>,
    /// Descriptions in snapshot order.
    pub description: Vec<RaidDescription>,
    /// Project date range.
    pub date: RaidDateRange,
    /// Contributors in snapshot order.
    pub contributor: Vec<RaidContributor>,
    /// Organisations in snapshot order.
    pub organisation: Vec<RaidOrganisation>,
    /// Related objects in snapshot order.
    pub related_object: Vec<RaidRelatedObject>,
}

/// The payload updating a minted raid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidUpdateRequest {
    /// Identifier block; `None` only in the checksum computation, where it
    /// is cleared on purpose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<RaidIdentifier>,
    /// Titles in snapshot order.
    pub title: Vec<RaidTitle>,
    /// Descriptions in snapshot order.
    pub description: Vec<RaidDescription>,
    /// Project date range.
    pub date: RaidDateRange,
    /// Contributors in snapshot order.
    pub contributor: Vec<RaidContributor>,
    /// Organisations in snapshot order.
    pub organisation: Vec<RaidOrganisation>,
    /// Related objects in snapshot order.
    pub related_object: Vec<RaidRelatedObject>,
}
