//! Conceptual model types.
//!
//! These types hold the model exactly as the extraction layer produced it:
//! packages, elements (classes, data types, enumerations), attributes, raw
//! relationships and diagrams. Nothing here is resolved yet; the resolver
//! derives URIs and normalized relationships from them.
//!
//! # Organization
//!
//! - [`package`] - [`Package`]
//! - [`element`] - [`Element`] and [`ElementKind`]
//! - [`attribute`] - [`Attribute`]
//! - [`relationship`] - [`Relationship`], [`RelationshipKind`], [`Direction`]
//! - [`diagram`] - [`Diagram`]
//!
//! All of them implement [`ModelElement`], the capability the resolver works
//! against.

pub mod attribute;
pub mod diagram;
pub mod element;
pub mod package;
pub mod relationship;

pub use attribute::*;
pub use diagram::*;
pub use element::*;
pub use package::*;
pub use relationship::*;

use std::{collections::HashSet, fmt, hash::Hash};

use log::warn;
use serde::Deserialize;

use crate::{identifier::PackageId, tag::TagStore};

/// The kind of entity a [`ModelElement`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Package,
    Element,
    Attribute,
    Relationship,
    NormalizedRelationship,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package => write!(f, "package"),
            Self::Element => write!(f, "element"),
            Self::Attribute => write!(f, "attribute"),
            Self::Relationship => write!(f, "relationship"),
            Self::NormalizedRelationship => write!(f, "normalized relationship"),
        }
    }
}

/// Capability shared by every entity taken from, or derived from, the model.
pub trait ModelElement {
    /// Identifier type, unique within one kind of entity only.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// Returns the identifier.
    fn id(&self) -> Self::Id;

    /// Returns the stable GUID from the source model.
    fn guid(&self) -> &str;

    /// Returns the human name, if any. Empty names count as absent.
    fn name(&self) -> Option<&str>;

    /// Returns the tags in source order.
    fn tags(&self) -> &TagStore;

    /// Returns the kind of entity.
    fn kind(&self) -> EntityKind;
}

/// Returns the string when it is present and not empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// A complete conceptual model as loaded by the extraction layer.
///
/// # Examples
///
/// ```
/// use glossa_core::{
///     identifier::{ElementId, PackageId},
///     model::{Element, ElementKind, Model, Package},
/// };
///
/// let mut model = Model::new();
/// model.packages.push(Package::new(PackageId::new(1), "{P1}", "Pets"));
/// model.elements.push(Element::new(
///     ElementId::new(1),
///     "{E1}",
///     "Dog",
///     PackageId::new(1),
///     ElementKind::Class,
/// ));
///
/// assert_eq!(model.package_path(PackageId::new(1)).as_deref(), Some("Pets"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Model {
    pub packages: Vec<Package>,
    pub elements: Vec<Element>,
    pub attributes: Vec<Attribute>,
    pub relationships: Vec<Relationship>,
    pub diagrams: Vec<Diagram>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a package by id.
    pub fn package(&self, id: PackageId) -> Option<&Package> {
        self.packages.iter().find(|package| package.id() == id)
    }

    /// Finds a diagram by its name.
    pub fn diagram_named(&self, name: &str) -> Option<&Diagram> {
        self.diagrams
            .iter()
            .find(|diagram| diagram.name() == Some(name))
    }

    /// Returns the `Root:Child:Leaf` path of a package.
    ///
    /// Unknown parents end the walk. A parent cycle is reported and the walk
    /// stops at the first repeated package.
    pub fn package_path(&self, id: PackageId) -> Option<String> {
        let mut segments = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.package(id);

        while let Some(package) = current {
            if !visited.insert(package.id()) {
                warn!(package_id:% = package.id(); "Package parent chain contains a cycle");
                break;
            }

            segments.push(package.name().unwrap_or(package.guid()));
            current = package.parent_id().and_then(|parent| self.package(parent));
        }

        if segments.is_empty() {
            return None;
        }

        segments.reverse();
        Some(segments.join(":"))
    }
}
