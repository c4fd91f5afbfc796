//! Attributes of classes and members of enumerations.

use serde::Deserialize;

use crate::{
    identifier::{AttributeId, ElementId},
    model::{EntityKind, ModelElement, non_empty},
    tag::TagStore,
};

/// An attribute owned by an element.
///
/// The declared type is a name only: it may refer to a built-in datatype,
/// to another element, or to nothing the model knows about.
#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    id: AttributeId,
    guid: String,
    #[serde(default)]
    name: Option<String>,
    class_id: ElementId,
    #[serde(default)]
    type_name: Option<String>,
    #[serde(default)]
    lower_bound: Option<String>,
    #[serde(default)]
    upper_bound: Option<String>,
    #[serde(default)]
    tags: TagStore,
}

impl Attribute {
    /// Creates an attribute without type, bounds or tags.
    pub fn new(
        id: AttributeId,
        guid: impl Into<String>,
        name: impl Into<String>,
        class_id: ElementId,
    ) -> Self {
        Self {
            id,
            guid: guid.into(),
            name: Some(name.into()),
            class_id,
            type_name: None,
            lower_bound: None,
            upper_bound: None,
            tags: TagStore::new(),
        }
    }

    /// Sets the declared type name.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the lower and upper cardinality bounds.
    pub fn with_bounds(mut self, lower: impl Into<String>, upper: impl Into<String>) -> Self {
        self.lower_bound = Some(lower.into());
        self.upper_bound = Some(upper.into());
        self
    }

    /// Appends a tag.
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(name, value);
        self
    }

    /// Returns the id of the owning class.
    pub fn class_id(&self) -> ElementId {
        self.class_id
    }

    pub fn type_name(&self) -> Option<&str> {
        non_empty(&self.type_name)
    }

    pub fn lower_bound(&self) -> Option<&str> {
        non_empty(&self.lower_bound)
    }

    pub fn upper_bound(&self) -> Option<&str> {
        non_empty(&self.upper_bound)
    }
}

impl ModelElement for Attribute {
    type Id = AttributeId;

    fn id(&self) -> AttributeId {
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
        EntityKind::Attribute
    }
}
