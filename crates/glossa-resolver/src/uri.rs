//! URI assignment.
//!
//! [`UriAssigner`] gives every package, element, attribute and normalized
//! relationship its canonical URI in four passes. Each pass reads the tables
//! the previous ones wrote, so the passes must run in order: packages,
//! elements, attributes, relationships. Running them in any other order is a
//! [`ResolveError`].
//!
//! The results live in [`IdentifierTables`], which are written once during
//! assignment and read-only afterwards.

use indexmap::IndexMap;
use log::{debug, info};

use glossa_core::{
    identifier::{AttributeId, ElementId, NormalizedId, PackageId},
    model::{ElementKind, Model, ModelElement, RelationshipKind},
    tag::TagName,
};

use crate::{
    case::{IdentifierCase, to_identifier_fragment},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Pass, ResolveError, Result, Subject},
    index::ElementIndex,
    normalize::NormalizedRelationship,
    tags::TagResolver,
};

/// Base URI of packages without a `baseURI` tag.
pub const FALLBACK_BASE_URI: &str = "https://fixme.com#";

/// Removes one trailing `/` or `#`.
///
/// # Examples
///
/// ```
/// use glossa_resolver::uri::namespace_of;
///
/// assert_eq!(namespace_of("https://ex.org/model#"), "https://ex.org/model");
/// assert_eq!(namespace_of("https://ex.org/model/"), "https://ex.org/model");
/// assert_eq!(namespace_of("https://ex.org/model"), "https://ex.org/model");
/// ```
pub fn namespace_of(base_uri: &str) -> &str {
    base_uri
        .strip_suffix('/')
        .or_else(|| base_uri.strip_suffix('#'))
        .unwrap_or(base_uri)
}

/// The identifiers computed by a [`UriAssigner`].
#[derive(Debug, Clone, Default)]
pub struct IdentifierTables {
    package_base_uris: IndexMap<PackageId, String>,
    package_ontology_uris: IndexMap<PackageId, String>,
    element_uris: IndexMap<ElementId, String>,
    attribute_uris: IndexMap<AttributeId, String>,
    relationship_uris: IndexMap<NormalizedId, String>,
    package_names: IndexMap<String, Vec<PackageId>>,
    element_names: IndexMap<String, Vec<ElementId>>,
}

impl IdentifierTables {
    pub fn package_base_uri(&self, id: PackageId) -> Option<&str> {
        self.package_base_uris.get(&id).map(String::as_str)
    }

    pub fn package_ontology_uri(&self, id: PackageId) -> Option<&str> {
        self.package_ontology_uris.get(&id).map(String::as_str)
    }

    pub fn element_uri(&self, id: ElementId) -> Option<&str> {
        self.element_uris.get(&id).map(String::as_str)
    }

    pub fn attribute_uri(&self, id: AttributeId) -> Option<&str> {
        self.attribute_uris.get(&id).map(String::as_str)
    }

    pub fn relationship_uri(&self, id: NormalizedId) -> Option<&str> {
        self.relationship_uris.get(&id).map(String::as_str)
    }

    /// Returns the packages with the given name, in model order.
    pub fn packages_named(&self, name: &str) -> &[PackageId] {
        self.package_names.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the elements with the given name, in model order.
    pub fn elements_named(&self, name: &str) -> &[ElementId] {
        self.element_names.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over element URIs in assignment order.
    pub fn element_uris(&self) -> impl Iterator<Item = (ElementId, &str)> {
        self.element_uris
            .iter()
            .map(|(id, uri)| (*id, uri.as_str()))
    }

    /// Iterates over attribute URIs in assignment order.
    pub fn attribute_uris(&self) -> impl Iterator<Item = (AttributeId, &str)> {
        self.attribute_uris
            .iter()
            .map(|(id, uri)| (*id, uri.as_str()))
    }

    /// Iterates over relationship URIs in assignment order.
    pub fn relationship_uris(&self) -> impl Iterator<Item = (NormalizedId, &str)> {
        self.relationship_uris
            .iter()
            .map(|(id, uri)| (*id, uri.as_str()))
    }
}

/// Assigns URIs to the entities of one model.
///
/// # Examples
///
/// ```
/// use glossa_core::{identifier::PackageId, model::{Model, Package}};
/// use glossa_resolver::{error::DiagnosticCollector, tags::TagResolver, uri::UriAssigner};
///
/// let mut model = Model::new();
/// model.packages.push(
///     Package::new(PackageId::new(1), "{P1}", "Pets").with_tag("baseURI", "https://ex.org/pets#"),
/// );
///
/// let mut diagnostics = DiagnosticCollector::new();
/// let mut assigner = UriAssigner::new(&model, TagResolver::default());
/// assigner.assign_all(&[], &mut diagnostics).unwrap();
///
/// let tables = assigner.into_tables();
/// assert_eq!(tables.package_ontology_uri(PackageId::new(1)), Some("https://ex.org/pets"));
/// ```
#[derive(Debug)]
pub struct UriAssigner<'m> {
    model: &'m Model,
    elements: ElementIndex<'m>,
    tag_resolver: TagResolver,
    tables: IdentifierTables,
    completed: Option<Pass>,
}

impl<'m> UriAssigner<'m> {
    pub fn new(model: &'m Model, tag_resolver: TagResolver) -> Self {
        Self {
            model,
            elements: ElementIndex::new(&model.elements),
            tag_resolver,
            tables: IdentifierTables::default(),
            completed: None,
        }
    }

    /// Returns the tables written so far.
    pub fn tables(&self) -> &IdentifierTables {
        &self.tables
    }

    pub fn into_tables(self) -> IdentifierTables {
        self.tables
    }

    /// Runs the four passes in order.
    pub fn assign_all(
        &mut self,
        normalized: &[NormalizedRelationship],
        diagnostics: &mut DiagnosticCollector,
    ) -> Result<()> {
        self.assign_packages(diagnostics)?;
        self.assign_elements(diagnostics)?;
        self.assign_attributes(diagnostics)?;
        self.assign_relationships(normalized, diagnostics)
    }

    /// Pass 1: records the base URI and ontology URI of every package.
    pub fn assign_packages(&mut self, diagnostics: &mut DiagnosticCollector) -> Result<()> {
        self.begin(Pass::Packages)?;
        let model = self.model;

        for package in &model.packages {
            if let Some(name) = package.name() {
                self.tables
                    .package_names
                    .entry(name.to_string())
                    .or_default()
                    .push(package.id());
            }
        }

        for package in &model.packages {
            let base_uri = self.tag_resolver.resolve(
                package,
                TagName::BaseUri,
                FALLBACK_BASE_URI,
                None,
                diagnostics,
            );
            let ontology_uri = self
                .tag_resolver
                .lookup(package, TagName::OntologyUri, diagnostics)
                .unwrap_or_else(|| namespace_of(&base_uri))
                .to_string();

            debug!(package:% = package.id(), base_uri:% = base_uri; "Package URI assigned");
            self.tables
                .package_ontology_uris
                .insert(package.id(), ontology_uri);
            self.tables.package_base_uris.insert(package.id(), base_uri);
        }

        self.complete(Pass::Packages);
        Ok(())
    }

    /// Pass 2: assigns URIs to classes, data types and enumerations.
    pub fn assign_elements(&mut self, diagnostics: &mut DiagnosticCollector) -> Result<()> {
        self.begin(Pass::Elements)?;
        let model = self.model;

        for element in &model.elements {
            if let Some(name) = element.name() {
                self.tables
                    .element_names
                    .entry(name.to_string())
                    .or_default()
                    .push(element.id());
            }

            let Some(package_uri) = self.tables.package_base_uri(element.package_id()) else {
                diagnostics.emit(
                    Diagnostic::error(format!(
                        "package {} of this element has no base URI",
                        element.package_id()
                    ))
                    .with_code(ErrorCode::E300)
                    .with_subject(Subject::of(element)),
                );
                continue;
            };
            let package_uri = self.defining_package_uri(element, package_uri, diagnostics);

            if let Some(uri) = self.entity_uri(element, &package_uri, IdentifierCase::Pascal, diagnostics)
            {
                debug!(element:% = element.id(), uri:% = uri; "Element URI assigned");
                self.tables.element_uris.insert(element.id(), uri);
            }
        }

        self.complete(Pass::Elements);
        Ok(())
    }

    /// Pass 3: assigns URIs to attributes and enumeration members.
    pub fn assign_attributes(&mut self, diagnostics: &mut DiagnosticCollector) -> Result<()> {
        self.begin(Pass::Attributes)?;
        let model = self.model;

        for attribute in &model.attributes {
            let Some(class) = self.elements.get(attribute.class_id()) else {
                diagnostics.emit(
                    Diagnostic::error(format!(
                        "owning class {} does not exist",
                        attribute.class_id()
                    ))
                    .with_code(ErrorCode::E303)
                    .with_subject(Subject::of(attribute)),
                );
                continue;
            };

            let Some(package_uri) = self.tables.package_base_uri(class.package_id()) else {
                diagnostics.emit(
                    Diagnostic::error(format!(
                        "package {} of the owning class has no base URI",
                        class.package_id()
                    ))
                    .with_code(ErrorCode::E300)
                    .with_subject(Subject::of(attribute)),
                );
                continue;
            };
            let package_uri = self.defining_package_uri(attribute, package_uri, diagnostics);

            let uri = if class.element_kind() == ElementKind::Enumeration {
                let Some(class_name) = self.local_name(class, diagnostics) else {
                    self.report_unnamed(class, diagnostics);
                    continue;
                };
                let class_fragment =
                    to_identifier_fragment(class, class_name, IdentifierCase::Pascal, diagnostics);
                let instance_namespace =
                    format!("{}/{}/", namespace_of(&package_uri), class_fragment);

                self.entity_uri(
                    attribute,
                    &instance_namespace,
                    IdentifierCase::Pascal,
                    diagnostics,
                )
            } else {
                self.entity_uri(attribute, &package_uri, IdentifierCase::Camel, diagnostics)
            };

            if let Some(uri) = uri {
                debug!(attribute:% = attribute.id(), uri:% = uri; "Attribute URI assigned");
                self.tables.attribute_uris.insert(attribute.id(), uri);
            }
        }

        self.complete(Pass::Attributes);
        Ok(())
    }

    /// Pass 4: assigns URIs to normalized relationships.
    ///
    /// Generalizations are structural and get no URI.
    pub fn assign_relationships(
        &mut self,
        normalized: &[NormalizedRelationship],
        diagnostics: &mut DiagnosticCollector,
    ) -> Result<()> {
        self.begin(Pass::Relationships)?;

        for relationship in normalized
            .iter()
            .filter(|relationship| relationship.origin_kind() != RelationshipKind::Generalization)
        {
            let external_uri =
                self.tag_resolver
                    .lookup(relationship, TagName::ExternalUri, diagnostics);
            let defining_package = self.relationship_package(relationship, diagnostics);

            let uri = match (external_uri, defining_package) {
                (Some(uri), _) => uri.to_string(),
                (None, None) => {
                    diagnostics.emit(
                        Diagnostic::warning("relationship has no defining package and is ignored")
                            .with_code(ErrorCode::E305)
                            .with_subject(Subject::of(relationship))
                            .with_help(
                                "add a `package` tag or connect elements of the same package",
                            ),
                    );
                    continue;
                }
                (None, Some(package_id)) => {
                    let Some(name) = self
                        .tag_resolver
                        .lookup(relationship, TagName::LocalName, diagnostics)
                        .filter(|name| !name.trim().is_empty())
                    else {
                        diagnostics.emit(
                            Diagnostic::warning("relationship has no name and is ignored")
                                .with_code(ErrorCode::E306)
                                .with_subject(Subject::of(relationship)),
                        );
                        continue;
                    };

                    let Some(package_uri) = self.tables.package_base_uri(package_id) else {
                        diagnostics.emit(
                            Diagnostic::warning(format!(
                                "defining package {package_id} has no base URI, relationship is ignored"
                            ))
                            .with_code(ErrorCode::E300)
                            .with_subject(Subject::of(relationship)),
                        );
                        continue;
                    };
                    let fragment = to_identifier_fragment(
                        relationship,
                        name,
                        IdentifierCase::Camel,
                        diagnostics,
                    );
                    format!("{package_uri}{fragment}")
                }
            };

            debug!(relationship:% = relationship.id(), uri:% = uri; "Relationship URI assigned");
            self.tables.relationship_uris.insert(relationship.id(), uri);
        }

        self.complete(Pass::Relationships);
        Ok(())
    }

    fn begin(&self, pass: Pass) -> Result<()> {
        if self.completed.is_some_and(|completed| completed >= pass) {
            return Err(ResolveError::PassRepeated(pass));
        }

        match pass.predecessor() {
            Some(required) if self.completed != Some(required) => {
                Err(ResolveError::PassOrder { pass, required })
            }
            _ => Ok(()),
        }
    }

    fn complete(&mut self, pass: Pass) {
        info!(pass:% = pass; "URI pass completed");
        self.completed = Some(pass);
    }

    /// Applies a `package` tag on `entity`, returning the base URI to use.
    fn defining_package_uri<E>(
        &self,
        entity: &E,
        current: &str,
        diagnostics: &mut DiagnosticCollector,
    ) -> String
    where
        E: ModelElement + ?Sized,
    {
        let Some(name) = self
            .tag_resolver
            .lookup(entity, TagName::DefiningPackage, diagnostics)
        else {
            return current.to_string();
        };

        match self.package_named(entity, name, diagnostics) {
            Some(package_id) => self
                .tables
                .package_base_uri(package_id)
                .unwrap_or(current)
                .to_string(),
            None => current.to_string(),
        }
    }

    /// Finds the package a `package` tag refers to.
    ///
    /// An unknown name yields `None`; an ambiguous one yields the first
    /// package. Both are reported.
    fn package_named<E>(
        &self,
        entity: &E,
        name: &str,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<PackageId>
    where
        E: ModelElement + ?Sized,
    {
        match self.tables.packages_named(name) {
            [] => {
                diagnostics.emit(
                    Diagnostic::warning(format!("package `{name}` does not exist"))
                        .with_code(ErrorCode::E301)
                        .with_subject(Subject::of(entity)),
                );
                None
            }
            [package_id] => Some(*package_id),
            [first, ..] => {
                diagnostics.emit(
                    Diagnostic::warning(format!(
                        "package name `{name}` is ambiguous, using package {first}"
                    ))
                    .with_code(ErrorCode::E302)
                    .with_subject(Subject::of(entity))
                    .with_help("rename one of the packages"),
                );
                Some(*first)
            }
        }
    }

    /// Determines the package a relationship is defined in.
    fn relationship_package(
        &self,
        relationship: &NormalizedRelationship,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<PackageId> {
        let tagged = self
            .tag_resolver
            .lookup(relationship, TagName::DefiningPackage, diagnostics)
            .and_then(|name| self.package_named(relationship, name, diagnostics));
        if tagged.is_some() {
            return tagged;
        }

        let source = self.elements.get(relationship.source_id())?;
        let destination = self.elements.get(relationship.destination_id())?;
        if source.package_id() != destination.package_id() {
            return None;
        }

        diagnostics.emit(
            Diagnostic::info(format!(
                "relationship assumed to belong to package {} of both of its ends",
                source.package_id()
            ))
            .with_code(ErrorCode::E304)
            .with_subject(Subject::of(relationship)),
        );
        Some(source.package_id())
    }

    /// Returns the `name` tag, or else the entity name.
    fn local_name<'e, E>(
        &self,
        entity: &'e E,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<&'e str>
    where
        E: ModelElement + ?Sized,
    {
        self.tag_resolver
            .lookup(entity, TagName::LocalName, diagnostics)
            .or_else(|| entity.name())
    }

    /// Computes `uri` tag, or namespace + local name in the given case.
    fn entity_uri<E>(
        &self,
        entity: &E,
        namespace: &str,
        case: IdentifierCase,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<String>
    where
        E: ModelElement + ?Sized,
    {
        if let Some(uri) = self
            .tag_resolver
            .lookup(entity, TagName::ExternalUri, diagnostics)
        {
            return Some(uri.to_string());
        }

        let Some(local_name) = self.local_name(entity, diagnostics) else {
            self.report_unnamed(entity, diagnostics);
            return None;
        };

        let fragment = to_identifier_fragment(entity, local_name, case, diagnostics);
        if fragment.is_empty() {
            return None;
        }

        Some(format!("{namespace}{fragment}"))
    }

    fn report_unnamed<E>(&self, entity: &E, diagnostics: &mut DiagnosticCollector)
    where
        E: ModelElement + ?Sized,
    {
        diagnostics.emit(
            Diagnostic::warning(format!("{} has no name and gets no URI", entity.kind()))
                .with_code(ErrorCode::E307)
                .with_subject(Subject::of(entity))
                .with_help("name the entity or add a `uri` tag"),
        );
    }
}
