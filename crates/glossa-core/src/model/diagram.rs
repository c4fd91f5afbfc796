//! Diagrams select which part of the model gets published.

use serde::Deserialize;

use crate::identifier::{DiagramId, ElementId, PackageId, RelationshipId};

/// A diagram of the source model.
///
/// The resolver always works on the whole model; a diagram only decides
/// which resolved entities end up in the output.
#[derive(Debug, Clone, Deserialize)]
pub struct Diagram {
    id: DiagramId,
    #[serde(default)]
    name: Option<String>,
    package_id: PackageId,
    #[serde(default)]
    element_ids: Vec<ElementId>,
    #[serde(default)]
    relationship_ids: Vec<RelationshipId>,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new(id: DiagramId, name: impl Into<String>, package_id: PackageId) -> Self {
        Self {
            id,
            name: Some(name.into()),
            package_id,
            element_ids: Vec::new(),
            relationship_ids: Vec::new(),
        }
    }

    /// Adds elements to the diagram.
    pub fn with_elements(mut self, ids: impl IntoIterator<Item = ElementId>) -> Self {
        self.element_ids.extend(ids);
        self
    }

    /// Adds relationships to the diagram.
    pub fn with_relationships(mut self, ids: impl IntoIterator<Item = RelationshipId>) -> Self {
        self.relationship_ids.extend(ids);
        self
    }

    pub fn id(&self) -> DiagramId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the package the diagram belongs to.
    pub fn package_id(&self) -> PackageId {
        self.package_id
    }

    pub fn element_ids(&self) -> &[ElementId] {
        &self.element_ids
    }

    pub fn relationship_ids(&self) -> &[RelationshipId] {
        &self.relationship_ids
    }

    pub fn contains_element(&self, id: ElementId) -> bool {
        self.element_ids.contains(&id)
    }

    pub fn contains_relationship(&self, id: RelationshipId) -> bool {
        self.relationship_ids.contains(&id)
    }
}
