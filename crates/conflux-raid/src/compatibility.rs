//! # Compatibility Checker
//!
//! The fixed battery of structural-invariant checks a project must pass
//! before its metadata can be minted or synced to the registry. Violations
//! are data, not errors: the checker always runs every check and returns an
//! ordered list, so a caller can show every reason a mint is blocked
//! without catching anything.
//!
//! ## Ordering
//!
//! The output order is a deterministic function of the snapshot's stored
//! order and the fixed check sequence below. Tests and UI rely on that
//! stability, so checks never short-circuit and never re-sort the result.
//!
//! ## Time
//!
//! Only the active-primary-title check depends on "now", and it takes the
//! reference date as a parameter. The checker never reads a clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use conflux_core::{
    DescriptionType, OrganisationId, OrganisationRoleType, ProjectSnapshot, TemporalSpan,
    TitleType,
};

/// Longest title text the registry accepts.
pub const MAX_TITLE_LENGTH: usize = 100;
/// Longest description text the registry accepts.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// The ways a project can violate the registry's structural invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompatibilityKind {
    /// No primary title is active at the reference date.
    NoActivePrimaryTitle,
    /// More than one primary title is active at the reference date.
    MultipleActivePrimaryTitle,
    /// A title text exceeds [`MAX_TITLE_LENGTH`].
    ProjectTitleTooLong,
    /// A description text exceeds [`MAX_DESCRIPTION_LENGTH`].
    ProjectDescriptionTooLong,
    /// Descriptions exist but none is primary.
    NoPrimaryDescription,
    /// More than one primary description.
    MultiplePrimaryDescriptions,
    /// The project has no contributors at all.
    NoContributors,
    /// A contributor's person has no ORCID iD.
    ContributorWithoutOrcid,
    /// A contributor's positions overlap in time.
    OverlappingContributorPositions,
    /// No contributor is marked as project leader.
    NoProjectLeader,
    /// No contributor is marked as project contact.
    NoProjectContact,
    /// An organisation's roles overlap in time.
    OverlappingOrganisationRoles,
    /// Lead-research-organisation coverage is missing or has a gap.
    NoLeadResearchOrganisation,
    /// Lead-research-organisation roles overlap.
    MultipleLeadResearchOrganisation,
    /// A product has no relation category.
    NoProductCategory,
}

impl std::fmt::Display for IncompatibilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoActivePrimaryTitle => "no active primary title",
            Self::MultipleActivePrimaryTitle => "multiple active primary titles",
            Self::ProjectTitleTooLong => "title too long",
            Self::ProjectDescriptionTooLong => "description too long",
            Self::NoPrimaryDescription => "no primary description",
            Self::MultiplePrimaryDescriptions => "multiple primary descriptions",
            Self::NoContributors => "no contributors",
            Self::ContributorWithoutOrcid => "contributor without ORCID",
            Self::OverlappingContributorPositions => "overlapping contributor positions",
            Self::NoProjectLeader => "no project leader",
            Self::NoProjectContact => "no project contact",
            Self::OverlappingOrganisationRoles => "overlapping organisation roles",
            Self::NoLeadResearchOrganisation => "no lead research organisation coverage",
            Self::MultipleLeadResearchOrganisation => "overlapping lead research organisations",
            Self::NoProductCategory => "product without category",
        };
        f.write_str(s)
    }
}

/// One violation, pointing at the entity that triggered it.
///
/// Ephemeral: produced fresh on every check call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incompatibility {
    /// What is violated.
    pub kind: IncompatibilityKind,
    /// The entity instance that triggered the violation.
    pub object_id: Uuid,
}

impl Incompatibility {
    fn new(kind: IncompatibilityKind, object_id: Uuid) -> Self {
        Self { kind, object_id }
    }
}

impl std::fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.object_id)
    }
}

/// Run the full check battery against a snapshot.
///
/// `now` is the reference date for title activity; callers inject it so
/// results are reproducible. All checks run unconditionally and report in
/// the fixed battery order.
pub fn check_compatibility(project: &ProjectSnapshot, now: NaiveDate) -> Vec<Incompatibility> {
    let mut found = Vec::new();
    check_active_primary_title(project, now, &mut found);
    check_title_lengths(project, &mut found);
    check_description_lengths(project, &mut found);
    check_primary_description(project, &mut found);
    check_contributor_presence(project, &mut found);
    check_contributor_orcids(project, &mut found);
    check_contributor_positions(project, &mut found);
    check_leader_presence(project, &mut found);
    check_contact_presence(project, &mut found);
    check_organisation_roles(project, &mut found);
    check_lead_organisation_coverage(project, &mut found);
    check_product_categories(project, &mut found);
    found
}

/// Whether the snapshot passes every check.
pub fn is_compatible(project: &ProjectSnapshot, now: NaiveDate) -> bool {
    check_compatibility(project, now).is_empty()
}

// ---------------------------------------------------------------------------
// Individual checks, in battery order
// ---------------------------------------------------------------------------

fn check_active_primary_title(
    project: &ProjectSnapshot,
    now: NaiveDate,
    found: &mut Vec<Incompatibility>,
) {
    let active = project
        .titles
        .iter()
        .filter(|t| t.title_type == TitleType::Primary && t.span.is_active_at(now))
        .count();
    match active {
        0 => found.push(Incompatibility::new(
            IncompatibilityKind::NoActivePrimaryTitle,
            project.id.as_uuid(),
        )),
        1 => {}
        _ => found.push(Incompatibility::new(
            IncompatibilityKind::MultipleActivePrimaryTitle,
            project.id.as_uuid(),
        )),
    }
}

fn check_title_lengths(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    for title in &project.titles {
        if title.text.chars().count() > MAX_TITLE_LENGTH {
            found.push(Incompatibility::new(
                IncompatibilityKind::ProjectTitleTooLong,
                title.id.as_uuid(),
            ));
        }
    }
}

fn check_description_lengths(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    for description in &project.descriptions {
        if description.text.chars().count() > MAX_DESCRIPTION_LENGTH {
            found.push(Incompatibility::new(
                IncompatibilityKind::ProjectDescriptionTooLong,
                description.id.as_uuid(),
            ));
        }
    }
}

/// Primary-description cardinality is only meaningful once any description
/// exists; a project without descriptions is acceptable to the registry.
fn check_primary_description(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    if project.descriptions.is_empty() {
        return;
    }
    let primaries = project
        .descriptions
        .iter()
        .filter(|d| d.description_type == DescriptionType::Primary)
        .count();
    match primaries {
        0 => found.push(Incompatibility::new(
            IncompatibilityKind::NoPrimaryDescription,
            project.id.as_uuid(),
        )),
        1 => {}
        _ => found.push(Incompatibility::new(
            IncompatibilityKind::MultiplePrimaryDescriptions,
            project.id.as_uuid(),
        )),
    }
}

fn check_contributor_presence(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    if project.contributors.is_empty() {
        found.push(Incompatibility::new(
            IncompatibilityKind::NoContributors,
            project.id.as_uuid(),
        ));
    }
}

fn check_contributor_orcids(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    for contributor in &project.contributors {
        if contributor.person.orcid.is_none() {
            found.push(Incompatibility::new(
                IncompatibilityKind::ContributorWithoutOrcid,
                contributor.id.as_uuid(),
            ));
        }
    }
}

fn check_contributor_positions(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    for contributor in &project.contributors {
        let spans: Vec<TemporalSpan> = contributor.positions.iter().map(|p| p.span).collect();
        if spans_overlap(&spans) {
            found.push(Incompatibility::new(
                IncompatibilityKind::OverlappingContributorPositions,
                contributor.id.as_uuid(),
            ));
        }
    }
}

fn check_leader_presence(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    if !project.contributors.iter().any(|c| c.leader) {
        found.push(Incompatibility::new(
            IncompatibilityKind::NoProjectLeader,
            project.id.as_uuid(),
        ));
    }
}

fn check_contact_presence(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    if !project.contributors.iter().any(|c| c.contact) {
        found.push(Incompatibility::new(
            IncompatibilityKind::NoProjectContact,
            project.id.as_uuid(),
        ));
    }
}

fn check_organisation_roles(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    for involvement in &project.organisations {
        let spans: Vec<TemporalSpan> = involvement.roles.iter().map(|r| r.span).collect();
        if spans_overlap(&spans) {
            found.push(Incompatibility::new(
                IncompatibilityKind::OverlappingOrganisationRoles,
                involvement.organisation.id.as_uuid(),
            ));
        }
    }
}

/// Lead-research-organisation roles must cover the whole project timeline,
/// without overlapping each other.
///
/// The scan walks the roles sorted by start date, remembering the previous
/// span. An event is emitted at each defect: a gap before the first role, a
/// role starting before the previous one's end closes (overlap), a role
/// following an open-ended one (overlap), a gap between consecutive roles,
/// and coverage ending before the project does. The walk deliberately keeps
/// accumulating from an overlapping entry, so one scan can report both an
/// overlap and a later gap.
fn check_lead_organisation_coverage(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    let mut roles: Vec<(OrganisationId, TemporalSpan)> = project
        .organisations
        .iter()
        .flat_map(|involvement| {
            involvement
                .roles
                .iter()
                .filter(|r| r.role == OrganisationRoleType::LeadResearchOrganization)
                .map(|r| (involvement.organisation.id, r.span))
        })
        .collect();

    if roles.is_empty() {
        found.push(Incompatibility::new(
            IncompatibilityKind::NoLeadResearchOrganisation,
            project.id.as_uuid(),
        ));
        return;
    }

    roles.sort_by_key(|(_, span)| span.start);

    let mut last: Option<TemporalSpan> = None;
    for (organisation, span) in &roles {
        match last {
            None => {
                if span.start > project.start_date {
                    // Uncovered stretch at the beginning of the project.
                    found.push(Incompatibility::new(
                        IncompatibilityKind::NoLeadResearchOrganisation,
                        organisation.as_uuid(),
                    ));
                }
            }
            Some(previous) => match previous.end {
                None => {
                    // An open-ended role followed by another one.
                    found.push(Incompatibility::new(
                        IncompatibilityKind::MultipleLeadResearchOrganisation,
                        organisation.as_uuid(),
                    ));
                }
                Some(previous_end) => {
                    if span.start < previous_end {
                        found.push(Incompatibility::new(
                            IncompatibilityKind::MultipleLeadResearchOrganisation,
                            organisation.as_uuid(),
                        ));
                    } else if span.start > previous_end {
                        found.push(Incompatibility::new(
                            IncompatibilityKind::NoLeadResearchOrganisation,
                            organisation.as_uuid(),
                        ));
                    }
                }
            },
        }
        last = Some(*span);
    }

    // The final role must carry coverage to the project end, or stay open
    // while the project is open.
    if let Some(previous) = last {
        let covered = match (previous.end, project.end_date) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(end), Some(project_end)) => end >= project_end,
        };
        if !covered {
            found.push(Incompatibility::new(
                IncompatibilityKind::NoLeadResearchOrganisation,
                project.id.as_uuid(),
            ));
        }
    }
}

fn check_product_categories(project: &ProjectSnapshot, found: &mut Vec<Incompatibility>) {
    for product in &project.products {
        if product.categories.is_empty() {
            found.push(Incompatibility::new(
                IncompatibilityKind::NoProductCategory,
                product.id.as_uuid(),
            ));
        }
    }
}

/// Interval-overlap scan over a contributor's or organisation's spans.
///
/// The spans are sorted by start date (stable, so equal starts keep stored
/// order) and walked while tracking the previous span. A violation exists
/// when the previous span was open-ended but not the last one examined,
/// when the previous end falls after the current start, or when the
/// previous end falls after the current end. Touching spans (one ends the
/// day the next starts) are not an overlap.
fn spans_overlap(spans: &[TemporalSpan]) -> bool {
    let mut sorted: Vec<&TemporalSpan> = spans.iter().collect();
    sorted.sort_by_key(|span| span.start);

    let mut previous: Option<&TemporalSpan> = None;
    for span in sorted {
        if let Some(prev) = previous {
            match prev.end {
                None => return true,
                Some(prev_end) => {
                    if prev_end > span.start {
                        return true;
                    }
                    if let Some(end) = span.end {
                        if prev_end > end {
                            return true;
                        }
                    }
                }
            }
        }
        previous = Some(span);
    }
    false
}
