//! Packages group elements and carry the base URI of their namespace.

use serde::Deserialize;

use crate::{
    identifier::PackageId,
    model::{EntityKind, ModelElement, non_empty},
    tag::TagStore,
};

/// A package of the conceptual model.
///
/// Packages form a forest through [`Package::parent_id`].
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    id: PackageId,
    guid: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    parent_id: Option<PackageId>,
    #[serde(default)]
    tags: TagStore,
}

impl Package {
    /// Creates a root package without tags.
    pub fn new(id: PackageId, guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            guid: guid.into(),
            name: Some(name.into()),
            parent_id: None,
            tags: TagStore::new(),
        }
    }

    /// Sets the parent package.
    pub fn with_parent(mut self, parent_id: PackageId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Appends a tag.
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(name, value);
        self
    }

    /// Returns the parent package id, if any.
    pub fn parent_id(&self) -> Option<PackageId> {
        self.parent_id
    }
}

impl ModelElement for Package {
    type Id = PackageId;

    fn id(&self) -> PackageId {
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
        EntityKind::Package
    }
}
