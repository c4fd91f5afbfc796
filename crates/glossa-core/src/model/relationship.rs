//! Raw relationships between elements.
//!
//! A raw relationship is the connector drawn in the source model. It may be
//! bidirectional, carry a role at each end, or be reified as an association
//! class. The resolver expands it into directional properties.

use std::fmt;

use serde::Deserialize;

use crate::{
    identifier::{ElementId, RelationshipId},
    model::{EntityKind, ModelElement, non_empty},
    tag::TagStore,
};

/// The kind of a raw [`Relationship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RelationshipKind {
    Association,
    Aggregation,
    Generalization,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Association => write!(f, "association"),
            Self::Aggregation => write!(f, "aggregation"),
            Self::Generalization => write!(f, "generalization"),
        }
    }
}

/// The structural direction of a relationship as drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Direction {
    #[default]
    Unspecified,
    SourceToDestination,
    Bidirectional,
    DestinationToSource,
}

/// A relationship between two elements of the model.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationship {
    id: RelationshipId,
    guid: String,
    #[serde(default)]
    name: Option<String>,
    kind: RelationshipKind,
    source_id: ElementId,
    destination_id: ElementId,
    #[serde(default)]
    direction: Direction,
    #[serde(default)]
    source_role: Option<String>,
    #[serde(default)]
    destination_role: Option<String>,
    #[serde(default)]
    source_cardinality: Option<String>,
    #[serde(default)]
    destination_cardinality: Option<String>,
    #[serde(default)]
    association_class_id: Option<ElementId>,
    #[serde(default)]
    tags: TagStore,
    #[serde(default)]
    source_role_tags: TagStore,
    #[serde(default)]
    destination_role_tags: TagStore,
}

impl Relationship {
    /// Creates an unnamed relationship without roles, cardinalities or tags.
    pub fn new(
        id: RelationshipId,
        guid: impl Into<String>,
        kind: RelationshipKind,
        source_id: ElementId,
        destination_id: ElementId,
    ) -> Self {
        Self {
            id,
            guid: guid.into(),
            name: None,
            kind,
            source_id,
            destination_id,
            direction: Direction::default(),
            source_role: None,
            destination_role: None,
            source_cardinality: None,
            destination_cardinality: None,
            association_class_id: None,
            tags: TagStore::new(),
            source_role_tags: TagStore::new(),
            destination_role_tags: TagStore::new(),
        }
    }

    /// Sets the overall name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the role name and cardinality at the source end.
    pub fn with_source_role(
        mut self,
        role: impl Into<String>,
        cardinality: impl Into<String>,
    ) -> Self {
        self.source_role = Some(role.into());
        self.source_cardinality = Some(cardinality.into());
        self
    }

    /// Sets the role name and cardinality at the destination end.
    pub fn with_destination_role(
        mut self,
        role: impl Into<String>,
        cardinality: impl Into<String>,
    ) -> Self {
        self.destination_role = Some(role.into());
        self.destination_cardinality = Some(cardinality.into());
        self
    }

    /// Sets the cardinalities without naming the roles.
    pub fn with_cardinalities(
        mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.source_cardinality = Some(source.into());
        self.destination_cardinality = Some(destination.into());
        self
    }

    /// Reifies the relationship as the given association class.
    pub fn with_association_class(mut self, element_id: ElementId) -> Self {
        self.association_class_id = Some(element_id);
        self
    }

    /// Appends a tag to the relationship itself.
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(name, value);
        self
    }

    /// Appends a tag to the source role.
    pub fn with_source_role_tag(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.source_role_tags.push(name, value);
        self
    }

    /// Appends a tag to the destination role.
    pub fn with_destination_role_tag(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.destination_role_tags.push(name, value);
        self
    }

    pub fn relationship_kind(&self) -> RelationshipKind {
        self.kind
    }

    pub fn source_id(&self) -> ElementId {
        self.source_id
    }

    pub fn destination_id(&self) -> ElementId {
        self.destination_id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn source_role(&self) -> Option<&str> {
        non_empty(&self.source_role)
    }

    pub fn destination_role(&self) -> Option<&str> {
        non_empty(&self.destination_role)
    }

    pub fn source_cardinality(&self) -> Option<&str> {
        non_empty(&self.source_cardinality)
    }

    pub fn destination_cardinality(&self) -> Option<&str> {
        non_empty(&self.destination_cardinality)
    }

    /// Returns the association class element, if the relationship is reified.
    pub fn association_class_id(&self) -> Option<ElementId> {
        self.association_class_id
    }

    pub fn source_role_tags(&self) -> &TagStore {
        &self.source_role_tags
    }

    pub fn destination_role_tags(&self) -> &TagStore {
        &self.destination_role_tags
    }

    /// Returns whether both ends point at the same element.
    pub fn is_self_association(&self) -> bool {
        self.source_id == self.destination_id
    }
}

impl ModelElement for Relationship {
    type Id = RelationshipId;

    fn id(&self) -> RelationshipId {
        self.id
    }

    fn guid(&self) -> &str {
        &self.guid
    }

    fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    fn tags(&self) -> &TagStore {
        &self.tags
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Relationship
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roles_count_as_absent() {
        let relationship = Relationship::new(
            RelationshipId::new(1),
            "{R1}",
            RelationshipKind::Association,
            ElementId::new(1),
            ElementId::new(2),
        )
        .with_source_role("", "1")
        .with_name("");

        assert_eq!(relationship.source_role(), None);
        assert_eq!(relationship.source_cardinality(), Some("1"));
        assert_eq!(relationship.name(), None);
    }

    #[test]
    fn test_self_association() {
        let relationship = Relationship::new(
            RelationshipId::new(1),
            "{R1}",
            RelationshipKind::Association,
            ElementId::new(4),
            ElementId::new(4),
        );

        assert!(relationship.is_self_association());
        assert_eq!(relationship.kind(), EntityKind::Relationship);
        assert_eq!(
            relationship.relationship_kind(),
            RelationshipKind::Association
        );
    }
}
