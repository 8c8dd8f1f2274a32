//! # Controlled Vocabulary
//!
//! The registry identifies every typed field by a pair of URIs: the term id
//! (with a numeric code in its final path segment) and the schema URI of
//! the vocabulary it belongs to. This module holds one lookup table per
//! enum family, built once on first use.
//!
//! A member absent from its table is a programming error (the table was not
//! extended together with the enum) and surfaces as
//! [`MappingError::UnmappedVocabulary`], never as a silent default.
//!
//! The lookups are pure and total over the tables: no project state is
//! consulted beyond the single enum value.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::OnceLock;

use conflux_core::{
    ContributorRole, DescriptionType, OrganisationRoleType, PositionType, ProductCategory,
    ProductIdScheme, ProductType, TitleType,
};

use crate::error::MappingError;

/// Schema URI for RAiD handles.
pub const RAID_SCHEMA_URI: &str = "https://raid.org/";
/// Schema URI for contributor identifiers.
pub const ORCID_SCHEMA_URI: &str = "https://orcid.org/";
/// Schema URI for organisation identifiers.
pub const ROR_SCHEMA_URI: &str = "https://ror.org/";
/// Schema URI for language tags (the ISO 639-3 standard).
pub const LANGUAGE_SCHEMA_URI: &str = "https://www.iso.org/standard/39534.html";

const TITLE_TYPE_SCHEMA: &str = "https://vocabulary.raid.org/title.type.schema/376";
const DESCRIPTION_TYPE_SCHEMA: &str = "https://vocabulary.raid.org/description.type.schema/320";
const POSITION_SCHEMA: &str = "https://vocabulary.raid.org/contributor.position.schema/305";
const ROLE_SCHEMA: &str = "https://credit.niso.org/";
const ORGANISATION_ROLE_SCHEMA: &str = "https://vocabulary.raid.org/organisation.role.schema/359";
const RELATED_OBJECT_TYPE_SCHEMA: &str =
    "https://vocabulary.raid.org/relatedObject.type.schema/329";
const RELATED_OBJECT_CATEGORY_SCHEMA: &str =
    "https://vocabulary.raid.org/relatedObject.category.schemaUri/385";

/// A controlled-vocabulary term: the id URI and the schema URI it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyTerm {
    /// Term id URI.
    pub id: &'static str,
    /// Schema URI of the owning vocabulary.
    pub schema_uri: &'static str,
}

fn lookup<K: Eq + Hash + std::fmt::Debug + Copy>(
    table: &'static HashMap<K, VocabularyTerm>,
    family: &'static str,
    value: K,
) -> Result<VocabularyTerm, MappingError> {
    table
        .get(&value)
        .copied()
        .ok_or_else(|| MappingError::UnmappedVocabulary {
            family,
            value: format!("{value:?}"),
        })
}

/// Registry term for a title type.
pub fn title_type_term(value: TitleType) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<TitleType, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let term = |id| VocabularyTerm {
            id,
            schema_uri: TITLE_TYPE_SCHEMA,
        };
        HashMap::from([
            (
                TitleType::Primary,
                term("https://vocabulary.raid.org/title.type.schema/5"),
            ),
            (
                TitleType::Alternative,
                term("https://vocabulary.raid.org/title.type.schema/4"),
            ),
            (
                TitleType::Short,
                term("https://vocabulary.raid.org/title.type.schema/157"),
            ),
            (
                TitleType::Acronym,
                term("https://vocabulary.raid.org/title.type.schema/156"),
            ),
        ])
    });
    lookup(table, "title type", value)
}

/// Registry term for a description type.
pub fn description_type_term(value: DescriptionType) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<DescriptionType, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let term = |id| VocabularyTerm {
            id,
            schema_uri: DESCRIPTION_TYPE_SCHEMA,
        };
        HashMap::from([
            (
                DescriptionType::Primary,
                term("https://vocabulary.raid.org/description.type.schema/318"),
            ),
            (
                DescriptionType::Alternative,
                term("https://vocabulary.raid.org/description.type.schema/319"),
            ),
            (
                DescriptionType::Brief,
                term("https://vocabulary.raid.org/description.type.schema/3"),
            ),
            (
                DescriptionType::Significance,
                term("https://vocabulary.raid.org/description.type.schema/9"),
            ),
            (
                DescriptionType::Methods,
                term("https://vocabulary.raid.org/description.type.schema/8"),
            ),
            (
                DescriptionType::Objectives,
                term("https://vocabulary.raid.org/description.type.schema/7"),
            ),
            (
                DescriptionType::Acknowledgements,
                term("https://vocabulary.raid.org/description.type.schema/10"),
            ),
            (
                DescriptionType::Other,
                term("https://vocabulary.raid.org/description.type.schema/6"),
            ),
        ])
    });
    lookup(table, "description type", value)
}

/// Registry term for a contributor position.
pub fn contributor_position_term(value: PositionType) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<PositionType, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let term = |id| VocabularyTerm {
            id,
            schema_uri: POSITION_SCHEMA,
        };
        HashMap::from([
            (
                PositionType::PrincipalInvestigator,
                term("https://vocabulary.raid.org/contributor.position.schema/307"),
            ),
            (
                PositionType::CoInvestigator,
                term("https://vocabulary.raid.org/contributor.position.schema/308"),
            ),
            (
                PositionType::PartnerInvestigator,
                term("https://vocabulary.raid.org/contributor.position.schema/309"),
            ),
            (
                PositionType::Consultant,
                term("https://vocabulary.raid.org/contributor.position.schema/310"),
            ),
            (
                PositionType::OtherParticipant,
                term("https://vocabulary.raid.org/contributor.position.schema/311"),
            ),
        ])
    });
    lookup(table, "contributor position", value)
}

/// CRediT taxonomy term for a contributor role.
pub fn contributor_role_term(value: ContributorRole) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<ContributorRole, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let term = |id| VocabularyTerm {
            id,
            schema_uri: ROLE_SCHEMA,
        };
        HashMap::from([
            (
                ContributorRole::Conceptualization,
                term("https://credit.niso.org/contributor-roles/conceptualization/"),
            ),
            (
                ContributorRole::DataCuration,
                term("https://credit.niso.org/contributor-roles/data-curation/"),
            ),
            (
                ContributorRole::FormalAnalysis,
                term("https://credit.niso.org/contributor-roles/formal-analysis/"),
            ),
            (
                ContributorRole::FundingAcquisition,
                term("https://credit.niso.org/contributor-roles/funding-acquisition/"),
            ),
            (
                ContributorRole::Investigation,
                term("https://credit.niso.org/contributor-roles/investigation/"),
            ),
            (
                ContributorRole::Methodology,
                term("https://credit.niso.org/contributor-roles/methodology/"),
            ),
            (
                ContributorRole::ProjectAdministration,
                term("https://credit.niso.org/contributor-roles/project-administration/"),
            ),
            (
                ContributorRole::Resources,
                term("https://credit.niso.org/contributor-roles/resources/"),
            ),
            (
                ContributorRole::Software,
                term("https://credit.niso.org/contributor-roles/software/"),
            ),
            (
                ContributorRole::Supervision,
                term("https://credit.niso.org/contributor-roles/supervision/"),
            ),
            (
                ContributorRole::Validation,
                term("https://credit.niso.org/contributor-roles/validation/"),
            ),
            (
                ContributorRole::Visualization,
                term("https://credit.niso.org/contributor-roles/visualization/"),
            ),
            (
                ContributorRole::WritingOriginalDraft,
                term("https://credit.niso.org/contributor-roles/writing-original-draft/"),
            ),
            (
                ContributorRole::WritingReviewEditing,
                term("https://credit.niso.org/contributor-roles/writing-review-editing/"),
            ),
        ])
    });
    lookup(table, "contributor role", value)
}

/// Registry term for an organisation role.
pub fn organisation_role_term(value: OrganisationRoleType) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<OrganisationRoleType, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let term = |id| VocabularyTerm {
            id,
            schema_uri: ORGANISATION_ROLE_SCHEMA,
        };
        HashMap::from([
            (
                OrganisationRoleType::LeadResearchOrganization,
                term("https://vocabulary.raid.org/organisation.role.schema/182"),
            ),
            (
                OrganisationRoleType::OtherResearchOrganization,
                term("https://vocabulary.raid.org/organisation.role.schema/183"),
            ),
            (
                OrganisationRoleType::PartnerOrganization,
                term("https://vocabulary.raid.org/organisation.role.schema/184"),
            ),
            (
                OrganisationRoleType::Contractor,
                term("https://vocabulary.raid.org/organisation.role.schema/185"),
            ),
            (
                OrganisationRoleType::Funder,
                term("https://vocabulary.raid.org/organisation.role.schema/186"),
            ),
            (
                OrganisationRoleType::Facility,
                term("https://vocabulary.raid.org/organisation.role.schema/187"),
            ),
            (
                OrganisationRoleType::OtherOrganization,
                term("https://vocabulary.raid.org/organisation.role.schema/188"),
            ),
        ])
    });
    lookup(table, "organisation role", value)
}

/// Registry term for a product's work type.
pub fn product_type_term(value: ProductType) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<ProductType, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let entries: [(ProductType, &'static str); 28] = [
            (
                ProductType::OutputManagementPlan,
                "https://vocabulary.raid.org/relatedObject.type.schema/247",
            ),
            (
                ProductType::ConferencePoster,
                "https://vocabulary.raid.org/relatedObject.type.schema/248",
            ),
            (
                ProductType::Standard,
                "https://vocabulary.raid.org/relatedObject.type.schema/249",
            ),
            (
                ProductType::JournalArticle,
                "https://vocabulary.raid.org/relatedObject.type.schema/250",
            ),
            (
                ProductType::Workflow,
                "https://vocabulary.raid.org/relatedObject.type.schema/251",
            ),
            (
                ProductType::Report,
                "https://vocabulary.raid.org/relatedObject.type.schema/252",
            ),
            (
                ProductType::Dissertation,
                "https://vocabulary.raid.org/relatedObject.type.schema/253",
            ),
            (
                ProductType::Funding,
                "https://vocabulary.raid.org/relatedObject.type.schema/254",
            ),
            (
                ProductType::DataPaper,
                "https://vocabulary.raid.org/relatedObject.type.schema/255",
            ),
            (
                ProductType::ComputationalNotebook,
                "https://vocabulary.raid.org/relatedObject.type.schema/256",
            ),
            (
                ProductType::Image,
                "https://vocabulary.raid.org/relatedObject.type.schema/257",
            ),
            (
                ProductType::Book,
                "https://vocabulary.raid.org/relatedObject.type.schema/258",
            ),
            (
                ProductType::Software,
                "https://vocabulary.raid.org/relatedObject.type.schema/259",
            ),
            (
                ProductType::Event,
                "https://vocabulary.raid.org/relatedObject.type.schema/260",
            ),
            (
                ProductType::Sound,
                "https://vocabulary.raid.org/relatedObject.type.schema/261",
            ),
            (
                ProductType::ConferenceProceeding,
                "https://vocabulary.raid.org/relatedObject.type.schema/262",
            ),
            (
                ProductType::Model,
                "https://vocabulary.raid.org/relatedObject.type.schema/263",
            ),
            (
                ProductType::ConferencePaper,
                "https://vocabulary.raid.org/relatedObject.type.schema/264",
            ),
            (
                ProductType::Text,
                "https://vocabulary.raid.org/relatedObject.type.schema/265",
            ),
            (
                ProductType::Instrument,
                "https://vocabulary.raid.org/relatedObject.type.schema/266",
            ),
            (
                ProductType::EducationalMaterial,
                "https://vocabulary.raid.org/relatedObject.type.schema/267",
            ),
            (
                ProductType::Prize,
                "https://vocabulary.raid.org/relatedObject.type.schema/268",
            ),
            (
                ProductType::Dataset,
                "https://vocabulary.raid.org/relatedObject.type.schema/269",
            ),
            (
                ProductType::PhysicalObject,
                "https://vocabulary.raid.org/relatedObject.type.schema/270",
            ),
            (
                ProductType::BookChapter,
                "https://vocabulary.raid.org/relatedObject.type.schema/271",
            ),
            (
                ProductType::Preprint,
                "https://vocabulary.raid.org/relatedObject.type.schema/272",
            ),
            (
                ProductType::Audiovisual,
                "https://vocabulary.raid.org/relatedObject.type.schema/273",
            ),
            (
                ProductType::Service,
                "https://vocabulary.raid.org/relatedObject.type.schema/274",
            ),
        ];
        entries
            .into_iter()
            .map(|(ty, id)| {
                (
                    ty,
                    VocabularyTerm {
                        id,
                        schema_uri: RELATED_OBJECT_TYPE_SCHEMA,
                    },
                )
            })
            .collect()
    });
    lookup(table, "product type", value)
}

/// Registry term for a product category.
pub fn product_category_term(value: ProductCategory) -> Result<VocabularyTerm, MappingError> {
    static TABLE: OnceLock<HashMap<ProductCategory, VocabularyTerm>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let term = |id| VocabularyTerm {
            id,
            schema_uri: RELATED_OBJECT_CATEGORY_SCHEMA,
        };
        HashMap::from([
            (
                ProductCategory::Output,
                term("https://vocabulary.raid.org/relatedObject.category.id/190"),
            ),
            (
                ProductCategory::Input,
                term("https://vocabulary.raid.org/relatedObject.category.id/191"),
            ),
            (
                ProductCategory::Internal,
                term("https://vocabulary.raid.org/relatedObject.category.id/192"),
            ),
        ])
    });
    lookup(table, "product category", value)
}

/// Schema URI for a product's identifier scheme.
pub fn product_scheme_uri(value: ProductIdScheme) -> Result<&'static str, MappingError> {
    static TABLE: OnceLock<HashMap<ProductIdScheme, &'static str>> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        HashMap::from([
            (ProductIdScheme::Doi, "https://doi.org/"),
            (ProductIdScheme::Handle, "https://hdl.handle.net/"),
            (ProductIdScheme::Archive, "https://web.archive.org/"),
            (ProductIdScheme::Url, "https://www.rfc-editor.org/rfc/rfc3986"),
        ])
    });
    table
        .get(&value)
        .copied()
        .ok_or_else(|| MappingError::UnmappedVocabulary {
            family: "product identifier scheme",
            value: format!("{value:?}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_title_type_is_mapped() {
        for ty in [
            TitleType::Primary,
            TitleType::Short,
            TitleType::Acronym,
            TitleType::Alternative,
        ] {
            assert!(title_type_term(ty).is_ok(), "unmapped: {ty:?}");
        }
    }

    #[test]
    fn primary_title_term_carries_numeric_code() {
        let term = title_type_term(TitleType::Primary).unwrap();
        assert!(term.id.ends_with("/5"));
        assert_eq!(term.schema_uri, TITLE_TYPE_SCHEMA);
    }

    #[test]
    fn every_description_type_is_mapped() {
        for ty in [
            DescriptionType::Primary,
            DescriptionType::Alternative,
            DescriptionType::Brief,
            DescriptionType::Significance,
            DescriptionType::Methods,
            DescriptionType::Objectives,
            DescriptionType::Acknowledgements,
            DescriptionType::Other,
        ] {
            assert!(description_type_term(ty).is_ok(), "unmapped: {ty:?}");
        }
    }

    #[test]
    fn every_position_is_mapped() {
        for ty in [
            PositionType::PrincipalInvestigator,
            PositionType::CoInvestigator,
            PositionType::PartnerInvestigator,
            PositionType::Consultant,
            PositionType::OtherParticipant,
        ] {
            assert!(contributor_position_term(ty).is_ok(), "unmapped: {ty:?}");
        }
    }

    #[test]
    fn every_contributor_role_is_mapped() {
        for role in [
            ContributorRole::Conceptualization,
            ContributorRole::DataCuration,
            ContributorRole::FormalAnalysis,
            ContributorRole::FundingAcquisition,
            ContributorRole::Investigation,
            ContributorRole::Methodology,
            ContributorRole::ProjectAdministration,
            ContributorRole::Resources,
            ContributorRole::Software,
            ContributorRole::Supervision,
            ContributorRole::Validation,
            ContributorRole::Visualization,
            ContributorRole::WritingOriginalDraft,
            ContributorRole::WritingReviewEditing,
        ] {
            let term = contributor_role_term(role).unwrap();
            assert!(term.id.starts_with("https://credit.niso.org/contributor-roles/"));
        }
    }

    #[test]
    fn every_organisation_role_is_mapped() {
        for role in [
            OrganisationRoleType::LeadResearchOrganization,
            OrganisationRoleType::OtherResearchOrganization,
            OrganisationRoleType::PartnerOrganization,
            OrganisationRoleType::Contractor,
            OrganisationRoleType::Funder,
            OrganisationRoleType::Facility,
            OrganisationRoleType::OtherOrganization,
        ] {
            assert!(organisation_role_term(role).is_ok(), "unmapped: {role:?}");
        }
    }

    #[test]
    fn every_product_type_is_mapped() {
        for ty in [
            ProductType::Audiovisual,
            ProductType::Book,
            ProductType::BookChapter,
            ProductType::ComputationalNotebook,
            ProductType::ConferencePaper,
            ProductType::ConferencePoster,
            ProductType::ConferenceProceeding,
            ProductType::DataPaper,
            ProductType::Dataset,
            ProductType::Dissertation,
            ProductType::EducationalMaterial,
            ProductType::Event,
            ProductType::Funding,
            ProductType::Image,
            ProductType::Instrument,
            ProductType::JournalArticle,
            ProductType::Model,
            ProductType::OutputManagementPlan,
            ProductType::PhysicalObject,
            ProductType::Preprint,
            ProductType::Prize,
            ProductType::Report,
            ProductType::Service,
            ProductType::Software,
            ProductType::Sound,
            ProductType::Standard,
            ProductType::Text,
            ProductType::Workflow,
        ] {
            assert!(product_type_term(ty).is_ok(), "unmapped: {ty:?}");
        }
    }

    #[test]
    fn every_category_and_scheme_is_mapped() {
        for cat in [
            ProductCategory::Input,
            ProductCategory::Internal,
            ProductCategory::Output,
        ] {
            assert!(product_category_term(cat).is_ok(), "unmapped: {cat:?}");
        }
        for scheme in [
            ProductIdScheme::Doi,
            ProductIdScheme::Handle,
            ProductIdScheme::Archive,
            ProductIdScheme::Url,
        ] {
            assert!(product_scheme_uri(scheme).is_ok(), "unmapped: {scheme:?}");
        }
    }

    #[test]
    fn terms_are_stable_across_calls() {
        let a = organisation_role_term(OrganisationRoleType::Funder).unwrap();
        let b = organisation_role_term(OrganisationRoleType::Funder).unwrap();
        assert_eq!(a, b);
    }
}
