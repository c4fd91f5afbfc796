//! Classes, data types and enumerations.

use std::fmt;

use serde::Deserialize;

use crate::{
    identifier::{ElementId, PackageId},
    model::{EntityKind, ModelElement, non_empty},
    tag::TagStore,
};

/// The kind of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ElementKind {
    Class,
    DataType,
    Enumeration,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::DataType => write!(f, "datatype"),
            Self::Enumeration => write!(f, "enumeration"),
        }
    }
}

/// A class, data type or enumeration owned by a package.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    id: ElementId,
    guid: String,
    #[serde(default)]
    name: Option<String>,
    package_id: PackageId,
    kind: ElementKind,
    #[serde(default)]
    tags: TagStore,
}

impl Element {
    /// Creates an element without tags.
    pub fn new(
        id: ElementId,
        guid: impl Into<String>,
        name: impl Into<String>,
        package_id: PackageId,
        kind: ElementKind,
    ) -> Self {
        Self {
            id,
            guid: guid.into(),
            name: Some(name.into()),
            package_id,
            kind,
            tags: TagStore::new(),
        }
    }

    /// Appends a tag.
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(name, value);
        self
    }

    /// Returns the owning package id.
    pub fn package_id(&self) -> PackageId {
        self.package_id
    }

    /// Returns whether this is a class, data type or enumeration.
    pub fn element_kind(&self) -> ElementKind {
        self.kind
    }
}

impl ModelElement for Element {
    type Id = ElementId;

    fn id(&self) -> ElementId {
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
        EntityKind::Element
    }
}
