//! Relationship normalization.
//!
//! A raw relationship can describe several navigable properties at once:
//! one per named role, one per direction of its overall name, and the
//! connectors of an association class. [`normalize`] expands it into
//! directional [`NormalizedRelationship`]s, each with exactly one source, one
//! destination and one cardinality.
//!
//! Two association class schemes exist. The legacy scheme prefixes the
//! relationship's own tags with `source-`, `source-rev-`, `target-` or
//! `target-rev-` and always yields four connectors. The current scheme yields
//! two connectors from the association class to the ends. A relationship
//! carrying any legacy prefix is handled by the legacy scheme only.

use std::fmt;

use log::{debug, trace};
use sha2::{Digest, Sha256};

use glossa_core::{
    identifier::{ElementId, NormalizedId, RelationshipId},
    model::{Direction, Element, EntityKind, ModelElement, Relationship, RelationshipKind},
    tag::{TagName, TagStore},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Subject},
    index::ElementIndex,
};

/// Cardinality of the connectors leaving an association class.
const ASSOCIATION_CLASS_CARDINALITY: &str = "1";

/// Kind of a [`NormalizedRelationship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// Connects the two ends of the original relationship.
    RegularConnector,
    /// Connects an end of the original relationship with its association
    /// class.
    AssociationClassConnector,
}

impl ConnectorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegularConnector => "RegularConnector",
            Self::AssociationClassConnector => "AssociationClassConnector",
        }
    }
}

/// Which part of the raw relationship a normalized relationship stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionPart {
    /// The structural link of a generalization.
    Generalization,
    /// The source role, navigated from destination to source.
    SourceRole,
    /// The destination role, navigated from source to destination.
    DestinationRole,
    /// The overall name, navigated from destination to source.
    NameToSource,
    /// The overall name, navigated from source to destination.
    NameToDestination,
    SourceToAssociation,
    AssociationToSource,
    AssociationToDestination,
    DestinationToAssociation,
}

impl ConnectionPart {
    /// Positional parts of the legacy scheme, paired with
    /// [`TagName::LEGACY_ASSOCIATION_PREFIXES`].
    const LEGACY: [ConnectionPart; 4] = [
        ConnectionPart::SourceToAssociation,
        ConnectionPart::AssociationToSource,
        ConnectionPart::AssociationToDestination,
        ConnectionPart::DestinationToAssociation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generalization => "generalization",
            Self::SourceRole => "source-role",
            Self::DestinationRole => "destination-role",
            Self::NameToSource => "name-to-source",
            Self::NameToDestination => "name-to-destination",
            Self::SourceToAssociation => "source-to-association",
            Self::AssociationToSource => "association-to-source",
            Self::AssociationToDestination => "association-to-destination",
            Self::DestinationToAssociation => "destination-to-association",
        }
    }
}

impl fmt::Display for ConnectionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directional property derived from a raw [`Relationship`].
#[derive(Debug, Clone)]
pub struct NormalizedRelationship {
    id: NormalizedId,
    origin_id: RelationshipId,
    origin_guid: String,
    origin_kind: RelationshipKind,
    source_id: ElementId,
    destination_id: ElementId,
    cardinality: Option<String>,
    connector_kind: ConnectorKind,
    part: ConnectionPart,
    tags: TagStore,
}

impl NormalizedRelationship {
    /// Creates a normalized relationship.
    ///
    /// The id is a digest of the origin id, the part and `name`. When a
    /// `name` is given and `tags` has no `name` tag yet, one is added.
    #[allow(clippy::too_many_arguments)]
    fn new(
        origin: &Relationship,
        part: ConnectionPart,
        connector_kind: ConnectorKind,
        source_id: ElementId,
        destination_id: ElementId,
        cardinality: Option<&str>,
        tags: TagStore,
        name: Option<&str>,
    ) -> Self {
        let mut normalized = Self {
            id: content_id(origin.id(), part, name),
            origin_id: origin.id(),
            origin_guid: origin.guid().to_string(),
            origin_kind: origin.relationship_kind(),
            source_id,
            destination_id,
            cardinality: cardinality.map(str::to_string),
            connector_kind,
            part,
            tags,
        };

        if let Some(name) = name {
            normalized.add_name_tag(name);
        }

        normalized
    }

    /// Returns the raw relationship this one was derived from.
    pub fn origin_id(&self) -> RelationshipId {
        self.origin_id
    }

    pub fn origin_kind(&self) -> RelationshipKind {
        self.origin_kind
    }

    pub fn source_id(&self) -> ElementId {
        self.source_id
    }

    pub fn destination_id(&self) -> ElementId {
        self.destination_id
    }

    /// Returns the cardinality at the destination end, as written.
    pub fn cardinality(&self) -> Option<&str> {
        self.cardinality.as_deref()
    }

    pub fn connector_kind(&self) -> ConnectorKind {
        self.connector_kind
    }

    pub fn part(&self) -> ConnectionPart {
        self.part
    }

    /// Adds a `name` tag unless one exists already.
    pub fn add_name_tag(&mut self, name: &str) {
        if !self.tags.contains(TagName::LocalName) {
            self.tags.push(TagName::LocalName.as_str(), name);
        }
    }
}

impl ModelElement for NormalizedRelationship {
    type Id = NormalizedId;

    fn id(&self) -> NormalizedId {
        self.id
    }

    fn guid(&self) -> &str {
        &self.origin_guid
    }

    fn name(&self) -> Option<&str> {
        self.tags
            .get(TagName::LocalName)
            .filter(|name| !name.is_empty())
    }

    fn tags(&self) -> &TagStore {
        &self.tags
    }

    fn kind(&self) -> EntityKind {
        EntityKind::NormalizedRelationship
    }
}

fn content_id(origin: RelationshipId, part: ConnectionPart, name: Option<&str>) -> NormalizedId {
    let mut hasher = Sha256::new();
    hasher.update(origin.value().to_be_bytes());
    hasher.update(part.as_str().as_bytes());
    hasher.update([0]);
    if let Some(name) = name {
        hasher.update(name.as_bytes());
    }

    let digest = hasher.finalize();
    let mut prefix = [0; 8];
    prefix.copy_from_slice(&digest[..8]);
    NormalizedId::from_digest(prefix)
}

fn display_name(element: &Element) -> &str {
    element.name().unwrap_or(element.guid())
}

/// Returns whether the relationship uses the legacy association class
/// tagging scheme.
pub fn uses_legacy_scheme(relationship: &Relationship) -> bool {
    relationship.association_class_id().is_some()
        && TagName::LEGACY_ASSOCIATION_PREFIXES
            .iter()
            .any(|prefix| relationship.tags().has_prefix(*prefix))
}

/// Expands a raw relationship into normalized relationships.
///
/// The result only depends on `relationship` and `elements`; running it
/// twice yields the same ids. A relationship whose ends are unknown yields
/// nothing and an error diagnostic. A relationship that yields nothing
/// otherwise is reported with a warning.
pub fn normalize(
    relationship: &Relationship,
    elements: &ElementIndex<'_>,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<NormalizedRelationship> {
    let mut unknown = [relationship.source_id(), relationship.destination_id()]
        .into_iter()
        .chain(relationship.association_class_id())
        .filter(|id| !elements.contains(*id))
        .peekable();

    if unknown.peek().is_some() {
        let ids: Vec<String> = unknown.map(|id| id.to_string()).collect();
        diagnostics.emit(
            Diagnostic::error(format!(
                "relationship refers to unknown element(s) {}",
                ids.join(", ")
            ))
            .with_code(ErrorCode::E401)
            .with_subject(Subject::of(relationship)),
        );
        return Vec::new();
    }

    let normalized = match relationship.relationship_kind() {
        RelationshipKind::Generalization => vec![NormalizedRelationship::new(
            relationship,
            ConnectionPart::Generalization,
            ConnectorKind::RegularConnector,
            relationship.source_id(),
            relationship.destination_id(),
            None,
            relationship.tags().clone(),
            None,
        )],
        _ if uses_legacy_scheme(relationship) => {
            debug!(relationship:% = relationship.id(); "Using legacy association class tags");
            normalize_legacy(relationship)
        }
        _ => normalize_regular(relationship, elements),
    };

    if normalized.is_empty() {
        diagnostics.emit(
            Diagnostic::warning("relationship has no role, name or association class")
                .with_code(ErrorCode::E400)
                .with_subject(Subject::of(relationship))
                .with_help("name a role or the relationship itself to publish it"),
        );
    }

    trace!(relationship:% = relationship.id(), count = normalized.len(); "Relationship normalized");
    normalized
}

fn normalize_legacy(relationship: &Relationship) -> Vec<NormalizedRelationship> {
    let Some(association_id) = relationship.association_class_id() else {
        return Vec::new();
    };

    let mut parts = ConnectionPart::LEGACY;
    if relationship.direction() == Direction::DestinationToSource {
        parts.reverse();
    }

    let source = relationship.source_id();
    let destination = relationship.destination_id();

    parts
        .into_iter()
        .zip(TagName::LEGACY_ASSOCIATION_PREFIXES)
        .map(|(part, prefix)| {
            let (from, to, cardinality) = match part {
                ConnectionPart::SourceToAssociation => (
                    source,
                    association_id,
                    relationship.destination_cardinality(),
                ),
                ConnectionPart::DestinationToAssociation => {
                    (destination, association_id, relationship.source_cardinality())
                }
                ConnectionPart::AssociationToDestination => (
                    association_id,
                    destination,
                    Some(ASSOCIATION_CLASS_CARDINALITY),
                ),
                _ => (
                    association_id,
                    source,
                    Some(ASSOCIATION_CLASS_CARDINALITY),
                ),
            };

            NormalizedRelationship::new(
                relationship,
                part,
                ConnectorKind::AssociationClassConnector,
                from,
                to,
                cardinality,
                relationship.tags().strip_prefix(prefix),
                None,
            )
        })
        .collect()
}

fn normalize_regular(
    relationship: &Relationship,
    elements: &ElementIndex<'_>,
) -> Vec<NormalizedRelationship> {
    let source = relationship.source_id();
    let destination = relationship.destination_id();
    let mut normalized = Vec::new();

    if let Some(role) = relationship.source_role() {
        normalized.push(NormalizedRelationship::new(
            relationship,
            ConnectionPart::SourceRole,
            ConnectorKind::RegularConnector,
            destination,
            source,
            relationship.source_cardinality(),
            relationship.source_role_tags().clone(),
            Some(role),
        ));
    }

    if let Some(role) = relationship.destination_role() {
        normalized.push(NormalizedRelationship::new(
            relationship,
            ConnectionPart::DestinationRole,
            ConnectorKind::RegularConnector,
            source,
            destination,
            relationship.destination_cardinality(),
            relationship.destination_role_tags().clone(),
            Some(role),
        ));
    }

    if let Some(name) = relationship.name() {
        if let Some(cardinality) = relationship.source_cardinality() {
            normalized.push(NormalizedRelationship::new(
                relationship,
                ConnectionPart::NameToSource,
                ConnectorKind::RegularConnector,
                destination,
                source,
                Some(cardinality),
                relationship.tags().clone(),
                Some(name),
            ));
        }

        if let Some(cardinality) = relationship.destination_cardinality() {
            normalized.push(NormalizedRelationship::new(
                relationship,
                ConnectionPart::NameToDestination,
                ConnectorKind::RegularConnector,
                source,
                destination,
                Some(cardinality),
                relationship.tags().clone(),
                Some(name),
            ));
        }
    }

    if let Some(association_id) = relationship.association_class_id() {
        let (source_name, destination_name) = if relationship.is_self_association() {
            let name = elements.get(source).map(display_name).unwrap_or_default();
            (
                Some(format!("{name}.source")),
                Some(format!("{name}.target")),
            )
        } else {
            (None, None)
        };

        normalized.push(NormalizedRelationship::new(
            relationship,
            ConnectionPart::AssociationToSource,
            ConnectorKind::AssociationClassConnector,
            association_id,
            source,
            Some(ASSOCIATION_CLASS_CARDINALITY),
            TagStore::new(),
            source_name.as_deref(),
        ));
        normalized.push(NormalizedRelationship::new(
            relationship,
            ConnectionPart::AssociationToDestination,
            ConnectorKind::AssociationClassConnector,
            association_id,
            destination,
            Some(ASSOCIATION_CLASS_CARDINALITY),
            TagStore::new(),
            destination_name.as_deref(),
        ));
    }

    normalized
}

/// Names every unnamed association class connector after its destination
/// element.
pub fn name_association_connectors(
    normalized: &mut [NormalizedRelationship],
    elements: &ElementIndex<'_>,
    diagnostics: &mut DiagnosticCollector,
) {
    for connector in normalized
        .iter_mut()
        .filter(|connector| connector.connector_kind == ConnectorKind::AssociationClassConnector)
    {
        if connector.name().is_some() {
            continue;
        }

        match elements.get(connector.destination_id) {
            Some(element) => connector.add_name_tag(display_name(element)),
            None => diagnostics.emit(
                Diagnostic::warning(format!(
                    "cannot name association class connector, element {} is unknown",
                    connector.destination_id
                ))
                .with_code(ErrorCode::E401)
                .with_subject(Subject::of(&*connector)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::{
        identifier::PackageId,
        model::{ElementKind, Relationship},
    };

    use super::*;

    fn elements() -> Vec<Element> {
        vec![
            Element::new(
                ElementId::new(1),
                "{E1}",
                "Person",
                PackageId::new(1),
                ElementKind::Class,
            ),
            Element::new(
                ElementId::new(2),
                "{E2}",
                "Dog",
                PackageId::new(1),
                ElementKind::Class,
            ),
            Element::new(
                ElementId::new(3),
                "{E3}",
                "Ownership",
                PackageId::new(1),
                ElementKind::Class,
            ),
        ]
    }

    fn association(source: u32, destination: u32) -> Relationship {
        Relationship::new(
            RelationshipId::new(10),
            "{R10}",
            RelationshipKind::Association,
            ElementId::new(source),
            ElementId::new(destination),
        )
    }

    fn run(relationship: &Relationship) -> (Vec<NormalizedRelationship>, DiagnosticCollector) {
        let mut diagnostics = DiagnosticCollector::new();
        let normalized = normalize(
            relationship,
            &ElementIndex::new(&elements()),
            &mut diagnostics,
        );
        (normalized, diagnostics)
    }

    #[test]
    fn test_two_roles_in_opposite_directions() {
        let relationship = association(1, 2)
            .with_source_role("owner", "1")
            .with_destination_role("pet", "0..*")
            .with_source_role_tag("label-en", "owner")
            .with_destination_role_tag("label-en", "pet");

        let (normalized, diagnostics) = run(&relationship);

        assert_eq!(normalized.len(), 2);
        assert!(diagnostics.finish().is_empty());

        let owner = &normalized[0];
        assert_eq!(owner.name(), Some("owner"));
        assert_eq!(owner.source_id(), ElementId::new(2));
        assert_eq!(owner.destination_id(), ElementId::new(1));
        assert_eq!(owner.cardinality(), Some("1"));
        assert_eq!(owner.tags().get_all(TagName::LocalName).count(), 1);

        let pet = &normalized[1];
        assert_eq!(pet.name(), Some("pet"));
        assert_eq!(pet.source_id(), ElementId::new(1));
        assert_eq!(pet.destination_id(), ElementId::new(2));
        assert_eq!(pet.cardinality(), Some("0..*"));
        assert_eq!(pet.connector_kind(), ConnectorKind::RegularConnector);
    }

    #[test]
    fn test_role_name_tag_is_not_overridden() {
        let relationship = association(1, 2)
            .with_destination_role("pet", "0..*")
            .with_destination_role_tag("name", "companion");

        let (normalized, _) = run(&relationship);

        assert_eq!(normalized[0].name(), Some("companion"));
        assert_eq!(normalized[0].tags().len(), 1);
    }

    #[test]
    fn test_overall_name_in_both_directions() {
        let relationship = association(1, 2)
            .with_name("knows")
            .with_cardinalities("0..*", "1");

        let (normalized, _) = run(&relationship);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].part(), ConnectionPart::NameToSource);
        assert_eq!(normalized[0].source_id(), ElementId::new(2));
        assert_eq!(normalized[0].cardinality(), Some("0..*"));
        assert_eq!(normalized[1].part(), ConnectionPart::NameToDestination);
        assert_eq!(normalized[1].source_id(), ElementId::new(1));
        assert_eq!(normalized[1].cardinality(), Some("1"));
        assert_eq!(normalized[1].name(), Some("knows"));
        assert_ne!(normalized[0].id(), normalized[1].id());
    }

    #[test]
    fn test_up_to_four_from_roles_and_name() {
        let relationship = association(1, 2)
            .with_name("owns")
            .with_source_role("owner", "1")
            .with_destination_role("pet", "0..*");

        let (normalized, _) = run(&relationship);

        assert_eq!(normalized.len(), 4);
    }

    #[test]
    fn test_association_class_connectors() {
        let relationship = association(1, 2)
            .with_destination_role("pet", "0..*")
            .with_association_class(ElementId::new(3));

        let (mut normalized, mut diagnostics) = run(&relationship);
        name_association_connectors(
            &mut normalized,
            &ElementIndex::new(&elements()),
            &mut diagnostics,
        );

        assert_eq!(normalized.len(), 3);
        let connectors: Vec<_> = normalized
            .iter()
            .filter(|n| n.connector_kind() == ConnectorKind::AssociationClassConnector)
            .collect();
        assert_eq!(connectors.len(), 2);
        assert!(connectors.iter().all(|c| c.source_id() == ElementId::new(3)));
        assert!(connectors.iter().all(|c| c.cardinality() == Some("1")));
        assert_eq!(connectors[0].name(), Some("Person"));
        assert_eq!(connectors[1].name(), Some("Dog"));
    }

    #[test]
    fn test_regular_connectors_avoid_association_class() {
        let relationship = association(1, 2)
            .with_name("owns")
            .with_cardinalities("1", "0..*")
            .with_source_role("owner", "1")
            .with_destination_role("pet", "0..*")
            .with_association_class(ElementId::new(3));

        let (normalized, _) = run(&relationship);

        for connector in normalized
            .iter()
            .filter(|n| n.connector_kind() == ConnectorKind::RegularConnector)
        {
            assert_ne!(connector.source_id(), ElementId::new(3));
            assert_ne!(connector.destination_id(), ElementId::new(3));
        }
    }

    #[test]
    fn test_self_association_class_names() {
        let relationship = association(1, 1).with_association_class(ElementId::new(3));

        let (mut normalized, mut diagnostics) = run(&relationship);
        name_association_connectors(
            &mut normalized,
            &ElementIndex::new(&elements()),
            &mut diagnostics,
        );

        let names: Vec<_> = normalized.iter().filter_map(|n| n.name()).collect();
        assert_eq!(names, vec!["Person.source", "Person.target"]);
    }

    #[test]
    fn test_legacy_scheme_yields_four_connectors() {
        let relationship = association(1, 2)
            .with_cardinalities("1", "0..*")
            .with_association_class(ElementId::new(3))
            .with_destination_role("pet", "0..*")
            .with_tag("source-label-nl", "heeft eigendom")
            .with_tag("source-rev-label-nl", "eigendom van")
            .with_tag("target-name", "betreft")
            .with_tag("target-rev-label-nl", "is eigendom");

        let (normalized, _) = run(&relationship);

        assert_eq!(normalized.len(), 4);
        assert!(
            normalized
                .iter()
                .all(|n| n.connector_kind() == ConnectorKind::AssociationClassConnector)
        );

        let parts: Vec<_> = normalized.iter().map(|n| n.part()).collect();
        assert_eq!(parts, ConnectionPart::LEGACY.to_vec());

        assert_eq!(normalized[0].source_id(), ElementId::new(1));
        assert_eq!(normalized[0].destination_id(), ElementId::new(3));
        assert_eq!(normalized[0].cardinality(), Some("0..*"));
        assert_eq!(normalized[0].tags().len(), 1);
        assert_eq!(
            normalized[0].tags().language_values(TagName::Label).next(),
            Some(("nl", "heeft eigendom"))
        );

        assert_eq!(normalized[1].tags().len(), 1);
        assert_eq!(normalized[1].cardinality(), Some("1"));
        assert_eq!(normalized[2].name(), Some("betreft"));
        assert_eq!(normalized[3].source_id(), ElementId::new(2));
        assert_eq!(normalized[3].cardinality(), Some("1"));
    }

    #[test]
    fn test_legacy_scheme_reversed() {
        let relationship = association(1, 2)
            .with_direction(Direction::DestinationToSource)
            .with_association_class(ElementId::new(3))
            .with_tag("source-name", "first");

        let (normalized, _) = run(&relationship);

        assert_eq!(normalized[0].part(), ConnectionPart::DestinationToAssociation);
        assert_eq!(normalized[0].name(), Some("first"));
        assert_eq!(normalized[3].part(), ConnectionPart::SourceToAssociation);
    }

    #[test]
    fn test_legacy_prefix_without_association_class_is_regular() {
        let relationship = association(1, 2).with_tag("source-label-nl", "heeft");

        assert!(!uses_legacy_scheme(&relationship));
    }

    #[test]
    fn test_generalization_is_structural() {
        let relationship = Relationship::new(
            RelationshipId::new(11),
            "{R11}",
            RelationshipKind::Generalization,
            ElementId::new(2),
            ElementId::new(1),
        );

        let (normalized, diagnostics) = run(&relationship);

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].part(), ConnectionPart::Generalization);
        assert_eq!(normalized[0].name(), None);
        assert!(diagnostics.finish().is_empty());
    }

    #[test]
    fn test_unnamed_relationship_warns() {
        let relationship = association(1, 2);

        let (normalized, diagnostics) = run(&relationship);

        assert!(normalized.is_empty());
        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E400));
        assert!(diagnostics[0].severity().is_warning());
    }

    #[test]
    fn test_unknown_endpoint_is_error() {
        let relationship = association(1, 42).with_destination_role("pet", "1");

        let (normalized, diagnostics) = run(&relationship);

        assert!(normalized.is_empty());
        assert!(diagnostics.has_errors());
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let relationship = association(1, 2)
            .with_source_role("owner", "1")
            .with_destination_role("pet", "0..*");

        let (first, _) = run(&relationship);
        let (second, _) = run(&relationship);

        let first_ids: Vec<_> = first.iter().map(|n| n.id()).collect();
        let second_ids: Vec<_> = second.iter().map(|n| n.id()).collect();
        assert_eq!(first_ids, second_ids);
    }
}
