//! # Request Mapper
//!
//! Builds the registry's creation and update payloads from a project
//! snapshot. The mapper is a pure function of the snapshot plus the
//! language registry it consults for tag validity; it never mutates its
//! input and preserves snapshot collection order in every output list,
//! which the payload checksum depends on.
//!
//! ## Faults
//!
//! An organisation without a ROR id and an update without a linkage record
//! are data-integrity faults: the registry cannot represent either, so the
//! mapping call fails with the offending entity id instead of guessing.

use conflux_lang::LanguageRegistry;

use conflux_core::{
    Contributor, Description, Product, ProjectOrganisation, ProjectSnapshot, RaidInfo, Title,
};

use crate::error::MappingError;
use crate::vocabulary::{self, ORCID_SCHEMA_URI, RAID_SCHEMA_URI, ROR_SCHEMA_URI};
use crate::wire::{
    RaidContributor, RaidContributorPosition, RaidContributorRole, RaidCreationRequest,
    RaidDateRange, RaidDescription, RaidIdentifier, RaidLanguage, RaidOrganisation,
    RaidOrganisationRole, RaidOwner, RaidRegistrationAgency, RaidRelatedObject, RaidTerm,
    RaidTitle, RaidUpdateRequest,
};

/// Maps project snapshots to registry payloads.
#[derive(Debug, Clone, Copy)]
pub struct RequestMapper<'a> {
    languages: &'a LanguageRegistry,
}

impl<'a> RequestMapper<'a> {
    /// Create a mapper consulting the given language registry.
    pub fn new(languages: &'a LanguageRegistry) -> Self {
        Self { languages }
    }

    /// Build the payload that mints a new raid for the project.
    pub fn creation_request(
        &self,
        project: &ProjectSnapshot,
    ) -> Result<RaidCreationRequest, MappingError> {
        Ok(RaidCreationRequest {
            title: project
                .titles
                .iter()
                .map(|t| self.map_title(t))
                .collect::<Result<_, _>>()?,
            description: project
                .descriptions
                .iter()
                .map(|d| self.map_description(d))
                .collect::<Result<_, _>>()?,
            date: RaidDateRange {
                start_date: project.start_date,
                end_date: project.end_date,
            },
            contributor: project
                .contributors
                .iter()
                .map(map_contributor)
                .collect::<Result<_, _>>()?,
            organisation: project
                .organisations
                .iter()
                .map(map_organisation)
                .collect::<Result<_, _>>()?,
            related_object: project
                .products
                .iter()
                .map(map_product)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Build the payload that updates the project's minted raid.
    ///
    /// # Errors
    ///
    /// Fails with [`MappingError::MissingRaidInfo`] when the project has no
    /// linkage record, in addition to the creation-mapping faults.
    pub fn update_request(
        &self,
        project: &ProjectSnapshot,
    ) -> Result<RaidUpdateRequest, MappingError> {
        let info = project
            .raid_info
            .as_ref()
            .ok_or(MappingError::MissingRaidInfo {
                project: project.id,
            })?;
        let base = self.creation_request(project)?;
        Ok(RaidUpdateRequest {
            identifier: Some(map_identifier(info)),
            title: base.title,
            description: base.description,
            date: base.date,
            contributor: base.contributor,
            organisation: base.organisation,
            related_object: base.related_object,
        })
    }

    fn map_title(&self, title: &Title) -> Result<RaidTitle, MappingError> {
        let term = vocabulary::title_type_term(title.title_type)?;
        Ok(RaidTitle {
            text: title.text.clone(),
            title_type: term_ref(term),
            start_date: title.span.start,
            end_date: title.span.end,
            language: self.map_language(title.language.as_deref()),
        })
    }

    fn map_description(&self, description: &Description) -> Result<RaidDescription, MappingError> {
        let term = vocabulary::description_type_term(description.description_type)?;
        Ok(RaidDescription {
            text: description.text.clone(),
            description_type: term_ref(term),
            language: self.map_language(description.language.as_deref()),
        })
    }

    /// A language sub-object is attached only for a present, known code.
    /// An absent code omits the block entirely; an unknown code is treated
    /// the same, since the registry rejects tags outside the standard.
    fn map_language(&self, code: Option<&str>) -> Option<RaidLanguage> {
        let code = code?;
        if !self.languages.is_valid_code(code) {
            tracing::debug!(code, "omitting unknown language tag from payload");
            return None;
        }
        Some(RaidLanguage {
            id: code.to_string(),
            schema_uri: vocabulary::LANGUAGE_SCHEMA_URI.to_string(),
        })
    }
}

fn term_ref(term: vocabulary::VocabularyTerm) -> RaidTerm {
    RaidTerm {
        id: term.id.to_string(),
        schema_uri: term.schema_uri.to_string(),
    }
}

fn map_contributor(contributor: &Contributor) -> Result<RaidContributor, MappingError> {
    Ok(RaidContributor {
        id: contributor.person.orcid.as_ref().map(|orcid| orcid.to_uri()),
        schema_uri: ORCID_SCHEMA_URI.to_string(),
        leader: contributor.leader,
        contact: contributor.contact,
        position: contributor
            .positions
            .iter()
            .map(|p| {
                let term = vocabulary::contributor_position_term(p.position)?;
                Ok(RaidContributorPosition {
                    id: term.id.to_string(),
                    schema_uri: term.schema_uri.to_string(),
                    start_date: p.span.start,
                    end_date: p.span.end,
                })
            })
            .collect::<Result<_, MappingError>>()?,
        role: contributor
            .roles
            .iter()
            .map(|&role| {
                let term = vocabulary::contributor_role_term(role)?;
                Ok(RaidContributorRole {
                    id: term.id.to_string(),
                    schema_uri: term.schema_uri.to_string(),
                })
            })
            .collect::<Result<_, MappingError>>()?,
    })
}

fn map_organisation(involvement: &ProjectOrganisation) -> Result<RaidOrganisation, MappingError> {
    let ror = involvement
        .organisation
        .ror
        .as_ref()
        .ok_or(MappingError::MissingRorId {
            organisation: involvement.organisation.id,
        })?;
    Ok(RaidOrganisation {
        id: ror.to_uri(),
        schema_uri: ROR_SCHEMA_URI.to_string(),
        role: involvement
            .roles
            .iter()
            .map(|r| {
                let term = vocabulary::organisation_role_term(r.role)?;
                Ok(RaidOrganisationRole {
                    id: term.id.to_string(),
                    schema_uri: term.schema_uri.to_string(),
                    start_date: r.span.start,
                    end_date: r.span.end,
                })
            })
            .collect::<Result<_, MappingError>>()?,
    })
}

fn map_product(product: &Product) -> Result<RaidRelatedObject, MappingError> {
    Ok(RaidRelatedObject {
        id: product.url.clone(),
        schema_uri: vocabulary::product_scheme_uri(product.scheme)?.to_string(),
        object_type: term_ref(vocabulary::product_type_term(product.product_type)?),
        category: product
            .categories
            .iter()
            .map(|&c| Ok(term_ref(vocabulary::product_category_term(c)?)))
            .collect::<Result<_, MappingError>>()?,
    })
}

fn map_identifier(info: &RaidInfo) -> RaidIdentifier {
    RaidIdentifier {
        id: info.raid_id.as_str().to_string(),
        schema_uri: RAID_SCHEMA_URI.to_string(),
        registration_agency: RaidRegistrationAgency {
            id: info.registration_agency_id.clone(),
            schema_uri: ROR_SCHEMA_URI.to_string(),
        },
        owner: RaidOwner {
            id: info.owner_id.clone(),
            schema_uri: ROR_SCHEMA_URI.to_string(),
            service_point: info.owner_service_point,
        },
        version: info.version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use conflux_core::{
        ContributorId, ContributorPosition, ContributorRole, DescriptionId, DescriptionType,
        OrcidId, Organisation, OrganisationId, OrganisationRole, OrganisationRoleType, Person,
        PersonId,
        PositionType, ProductCategory, ProductId, ProductIdScheme, ProductType, ProjectId, RaidId,
        RorId, TemporalSpan, TitleId, TitleType,
    };

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(n as u64)
    }

    fn registry() -> LanguageRegistry {
        LanguageRegistry::from_tsv("nld\tDutch\neng\tEnglish\n").unwrap()
    }

    fn snapshot() -> ProjectSnapshot {
        ProjectSnapshot {
            id: ProjectId::new(),
            start_date: day(0),
            end_date: Some(day(365)),
            titles: vec![Title {
                id: TitleId::new(),
                text: "Groundwater Recharge Atlas".into(),
                title_type: TitleType::Primary,
                language: Some("eng".into()),
                span: TemporalSpan::open(day(0)),
            }],
            descriptions: vec![Description {
                id: DescriptionId::new(),
                text: "Maps aquifer recharge across the delta.".into(),
                description_type: DescriptionType::Primary,
                language: Some("eng".into()),
            }],
            contributors: vec![Contributor {
                id: ContributorId::new(),
                person: Person {
                    id: PersonId::new(),
                    name: "A. Researcher".into(),
                    orcid: Some(OrcidId::new("0000-0002-1825-0097").unwrap()),
                    email: None,
                },
                leader: true,
                contact: true,
                roles: vec![ContributorRole::Conceptualization],
                positions: vec![ContributorPosition {
                    position: PositionType::PrincipalInvestigator,
                    span: TemporalSpan::open(day(0)),
                }],
            }],
            organisations: vec![ProjectOrganisation {
                organisation: Organisation {
                    id: OrganisationId::new(),
                    name: "Delta Institute".into(),
                    ror: Some(RorId::new("04pp8hn57").unwrap()),
                },
                roles: vec![OrganisationRole {
                    role: OrganisationRoleType::LeadResearchOrganization,
                    span: TemporalSpan::open(day(0)),
                }],
            }],
            products: vec![Product {
                id: ProductId::new(),
                title: "Recharge dataset".into(),
                url: "https://doi.org/10.5555/demo".into(),
                scheme: ProductIdScheme::Doi,
                product_type: ProductType::Dataset,
                categories: vec![ProductCategory::Output],
            }],
            raid_info: None,
        }
    }

    #[test]
    fn creation_request_maps_identifier_uris() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let request = mapper.creation_request(&snapshot()).unwrap();

        assert_eq!(
            request.contributor[0].id.as_deref(),
            Some("https://orcid.org/0000-0002-1825-0097")
        );
        assert_eq!(request.organisation[0].id, "https://ror.org/04pp8hn57");
        assert_eq!(request.organisation[0].schema_uri, ROR_SCHEMA_URI);
    }

    #[test]
    fn creation_request_preserves_collection_order() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let mut project = snapshot();
        project.titles.push(Title {
            id: TitleId::new(),
            text: "GRA".into(),
            title_type: TitleType::Acronym,
            language: None,
            span: TemporalSpan::open(day(0)),
        });

        let request = mapper.creation_request(&project).unwrap();
        assert_eq!(request.title.len(), 2);
        assert_eq!(request.title[0].text, "Groundwater Recharge Atlas");
        assert_eq!(request.title[1].text, "GRA");
    }

    #[test]
    fn valid_language_is_attached() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let request = mapper.creation_request(&snapshot()).unwrap();
        let language = request.title[0].language.as_ref().unwrap();
        assert_eq!(language.id, "eng");
        assert_eq!(language.schema_uri, vocabulary::LANGUAGE_SCHEMA_URI);
    }

    #[test]
    fn absent_language_omits_block() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let mut project = snapshot();
        project.titles[0].language = None;
        let request = mapper.creation_request(&project).unwrap();
        assert!(request.title[0].language.is_none());
    }

    #[test]
    fn unknown_language_omits_block() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let mut project = snapshot();
        project.descriptions[0].language = Some("zzz".into());
        let request = mapper.creation_request(&project).unwrap();
        assert!(request.description[0].language.is_none());
    }

    #[test]
    fn contributor_without_orcid_maps_to_null_id() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let mut project = snapshot();
        project.contributors[0].person.orcid = None;
        let request = mapper.creation_request(&project).unwrap();
        assert!(request.contributor[0].id.is_none());
    }

    #[test]
    fn organisation_without_ror_is_a_fault() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let mut project = snapshot();
        let org_id = project.organisations[0].organisation.id;
        project.organisations[0].organisation.ror = None;

        let err = mapper.creation_request(&project).unwrap_err();
        match err {
            MappingError::MissingRorId { organisation } => assert_eq!(organisation, org_id),
            other => panic!("expected MissingRorId, got {other:?}"),
        }
    }

    #[test]
    fn update_without_linkage_record_is_a_fault() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let err = mapper.update_request(&snapshot()).unwrap_err();
        assert!(matches!(err, MappingError::MissingRaidInfo { .. }));
    }

    #[test]
    fn update_request_carries_identifier_block() {
        let registry = registry();
        let mapper = RequestMapper::new(&registry);
        let mut project = snapshot();
        project.raid_info = Some(conflux_core::RaidInfo {
            raid_id: RaidId::new("https://raid.org/10.25.10.1234/a1b2c").unwrap(),
            registration_agency_id: "https://ror.org/04pp8hn57".into(),
            owner_id: "https://ror.org/04pp8hn57".into(),
            owner_service_point: 20_000_003,
            version: 7,
            checksum: None,
            dirty: false,
            latest_sync: None,
        });

        let request = mapper.update_request(&project).unwrap();
        let identifier = request.identifier.unwrap();
        assert_eq!(identifier.id, "https://raid.org/10.25.10.1234/a1b2c");
        assert_eq!(identifier.version, 7);
        assert_eq!(identifier.owner.service_point, 20_000_003);
    }
}
