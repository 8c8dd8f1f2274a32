//! # Domain Identity Newtypes
//!
//! Newtype wrappers for every identifier the engine handles. Record
//! identifiers (`ProjectId`, `TitleId`, ...) are UUID-backed and always valid
//! by construction. External registry identifiers (`OrcidId`, `RorId`,
//! `RaidId`) carry format validation in their constructors, so a value of
//! one of these types is well-formed wherever it appears.
//!
//! ## Validation
//!
//! `OrcidId` and `RorId` accept either the bare identifier or the full
//! `https://` URI form and normalize to the bare form; `to_uri()` produces
//! the canonical URI the registry wire format requires. `RaidId` keeps the
//! full handle URI and exposes the `prefix`/`suffix` path segments that
//! registry endpoints address individually.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::IdentityError;

// ---------------------------------------------------------------------------
// Record identifiers
// ---------------------------------------------------------------------------

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

/// Unique identifier for a project title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleId(pub Uuid);

/// Unique identifier for a project description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescriptionId(pub Uuid);

/// Unique identifier for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

/// Unique identifier for a contributor record (a person's involvement in
/// one project).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContributorId(pub Uuid);

/// Unique identifier for an organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganisationId(pub Uuid);

/// Unique identifier for a product (research output, dataset, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

macro_rules! record_id_impls {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            impl $name {
                /// Generate a new random identifier.
                pub fn new() -> Self {
                    Self(Uuid::new_v4())
                }

                /// Wrap an existing UUID.
                pub fn from_uuid(id: Uuid) -> Self {
                    Self(id)
                }

                /// Access the underlying UUID.
                pub fn as_uuid(&self) -> Uuid {
                    self.0
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!($tag, ":{}"), self.0)
                }
            }
        )*
    };
}

record_id_impls! {
    ProjectId => "project",
    TitleId => "title",
    DescriptionId => "description",
    PersonId => "person",
    ContributorId => "contributor",
    OrganisationId => "organisation",
    ProductId => "product",
}

// ---------------------------------------------------------------------------
// ORCID
// ---------------------------------------------------------------------------

/// An ORCID iD: the researcher identifier the registry requires for every
/// contributor it records.
///
/// Stored in bare form (`0000-0002-1825-0097`). The final character is a
/// checksum position and may be `X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrcidId(String);

impl OrcidId {
    /// Create an ORCID iD, accepting the bare form or the full
    /// `https://orcid.org/` URI and normalizing to the bare form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidOrcid`] when the value is not four
    /// dash-separated groups of four digits (final character may be `X`).
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let bare = trimmed
            .strip_prefix("https://orcid.org/")
            .or_else(|| trimmed.strip_prefix("http://orcid.org/"))
            .unwrap_or(trimmed)
            .to_string();
        if !is_valid_orcid(&bare) {
            return Err(IdentityError::InvalidOrcid { value: raw });
        }
        Ok(Self(bare))
    }

    /// Access the bare identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the canonical URI form the registry wire format uses.
    pub fn to_uri(&self) -> String {
        format!("https://orcid.org/{}", self.0)
    }
}

impl std::fmt::Display for OrcidId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrcidId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

fn is_valid_orcid(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    if groups.len() != 4 {
        return false;
    }
    groups.iter().enumerate().all(|(g, group)| {
        group.len() == 4
            && group.chars().enumerate().all(|(i, c)| {
                // The checksum position (last char of the last group) may be X.
                c.is_ascii_digit() || (g == 3 && i == 3 && c == 'X')
            })
    })
}

// ---------------------------------------------------------------------------
// ROR
// ---------------------------------------------------------------------------

/// A Research Organization Registry identifier.
///
/// Stored in bare form (`04pp8hn57`): nine lowercase alphanumeric
/// characters, always starting with `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RorId(String);

impl RorId {
    /// Create a ROR identifier, accepting the bare form or the full
    /// `https://ror.org/` URI and normalizing to the bare form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidRor`] when the value does not match
    /// the nine-character ROR format.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let bare = trimmed
            .strip_prefix("https://ror.org/")
            .or_else(|| trimmed.strip_prefix("http://ror.org/"))
            .unwrap_or(trimmed)
            .to_string();
        let well_formed = bare.len() == 9
            && bare.starts_with('0')
            && bare
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase());
        if !well_formed {
            return Err(IdentityError::InvalidRor { value: raw });
        }
        Ok(Self(bare))
    }

    /// Access the bare identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the canonical URI form the registry wire format uses.
    pub fn to_uri(&self) -> String {
        format!("https://ror.org/{}", self.0)
    }
}

impl std::fmt::Display for RorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// RAiD handle
// ---------------------------------------------------------------------------

/// A minted RAiD handle: a slash-delimited URI of the form
/// `scheme://host/prefix/suffix`.
///
/// The registry addresses a raid by its `prefix` and `suffix` path segments;
/// this type keeps the full URI and splits on demand. A trailing slash is
/// tolerated on input and stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RaidId(String);

impl RaidId {
    /// Create a handle from its URI form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::MalformedRaidHandle`] when the value is not
    /// an absolute URI with at least two path segments.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityError> {
        let raw = value.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();
        let malformed = || IdentityError::MalformedRaidHandle { value: raw.clone() };

        let url = Url::parse(&trimmed).map_err(|_| malformed())?;
        let segments = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).count())
            .unwrap_or(0);
        if segments < 2 {
            return Err(malformed());
        }
        Ok(Self(trimmed))
    }

    /// Access the full handle URI.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The registry prefix (second-to-last path segment).
    pub fn prefix(&self) -> &str {
        // Construction guarantees at least two path segments.
        self.0.rsplitn(3, '/').nth(1).unwrap_or_default()
    }

    /// The handle suffix (last path segment).
    pub fn suffix(&self) -> &str {
        self.0.rsplitn(3, '/').next().unwrap_or_default()
    }
}

impl std::fmt::Display for RaidId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RaidId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_unique() {
        assert_ne!(ProjectId::new(), ProjectId::new());
        assert_ne!(ContributorId::new(), ContributorId::new());
    }

    #[test]
    fn record_id_display_carries_tag() {
        let id = TitleId::new();
        assert!(id.to_string().starts_with("title:"));
    }

    // ---- ORCID ----

    #[test]
    fn orcid_bare_form_accepted() {
        let orcid = OrcidId::new("0000-0002-1825-0097").unwrap();
        assert_eq!(orcid.as_str(), "0000-0002-1825-0097");
        assert_eq!(orcid.to_uri(), "https://orcid.org/0000-0002-1825-0097");
    }

    #[test]
    fn orcid_uri_form_normalized() {
        let orcid = OrcidId::new("https://orcid.org/0000-0002-1825-0097").unwrap();
        assert_eq!(orcid.as_str(), "0000-0002-1825-0097");
    }

    #[test]
    fn orcid_checksum_x_accepted() {
        assert!(OrcidId::new("0000-0002-1694-233X").is_ok());
    }

    #[test]
    fn orcid_x_elsewhere_rejected() {
        assert!(OrcidId::new("0000-000X-1694-2330").is_err());
    }

    #[test]
    fn orcid_rejects_malformed() {
        assert!(OrcidId::new("").is_err());
        assert!(OrcidId::new("0000-0002-1825").is_err());
        assert!(OrcidId::new("0000-0002-1825-00970").is_err());
        assert!(OrcidId::new("abcd-0002-1825-0097").is_err());
    }

    // ---- ROR ----

    #[test]
    fn ror_bare_form_accepted() {
        let ror = RorId::new("04pp8hn57").unwrap();
        assert_eq!(ror.to_uri(), "https://ror.org/04pp8hn57");
    }

    #[test]
    fn ror_uri_form_normalized() {
        let ror = RorId::new("https://ror.org/04pp8hn57").unwrap();
        assert_eq!(ror.as_str(), "04pp8hn57");
    }

    #[test]
    fn ror_rejects_malformed() {
        assert!(RorId::new("").is_err());
        assert!(RorId::new("14pp8hn57").is_err()); // must start with 0
        assert!(RorId::new("04PP8HN57").is_err()); // lowercase only
        assert!(RorId::new("04pp8hn5").is_err()); // nine characters
    }

    // ---- RAiD handle ----

    #[test]
    fn raid_handle_splits_prefix_and_suffix() {
        let raid = RaidId::new("https://raid.org/10.25.10.1234/a1b2c").unwrap();
        assert_eq!(raid.prefix(), "10.25.10.1234");
        assert_eq!(raid.suffix(), "a1b2c");
    }

    #[test]
    fn raid_handle_tolerates_trailing_slash() {
        let raid = RaidId::new("https://raid.org/10.25.10.1234/a1b2c/").unwrap();
        assert_eq!(raid.prefix(), "10.25.10.1234");
        assert_eq!(raid.suffix(), "a1b2c");
        assert_eq!(raid.as_str(), "https://raid.org/10.25.10.1234/a1b2c");
    }

    #[test]
    fn raid_handle_rejects_short_paths() {
        assert!(RaidId::new("https://raid.org/only-prefix").is_err());
        assert!(RaidId::new("https://raid.org/").is_err());
        assert!(RaidId::new("not a url").is_err());
    }

    #[test]
    fn raid_handle_serde_roundtrip() {
        let raid = RaidId::new("https://raid.org/10.25.10.1234/a1b2c").unwrap();
        let json = serde_json::to_string(&raid).unwrap();
        assert_eq!(json, "\"https://raid.org/10.25.10.1234/a1b2c\"");
        let parsed: RaidId = serde_json::from_str(&json).unwrap();
        assert_eq!(raid, parsed);
    }
}
