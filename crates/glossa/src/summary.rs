//! Vocabulary summary of one diagram.
//!
//! Resolution gives every entity of the model a URI. A conversion publishes
//! only what the target diagram shows, so [`Summary::build`] walks the
//! diagram and collects, per entity, what a vocabulary document states about
//! it: labels, definitions, scope, and for properties their domain, range and
//! cardinality.
//!
//! Entities without a URI are left out; the resolver already reported why.

use log::{debug, info, warn};
use serde::Serialize;

use glossa_core::{
    model::{Attribute, Diagram, Element, ElementKind, Model, ModelElement, RelationshipKind},
    scope::Scope,
    specification::SpecificationKind,
    tag::TagName,
};
use glossa_resolver::{
    Resolution, ResolveConfig,
    cardinality::{Cardinality, CardinalityError},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, Subject},
    index::ElementIndex,
    normalize::ConnectionPart,
    scope::ScopeClassifier,
    tags::{LanguageMap, TagResolver},
    uri::FALLBACK_BASE_URI,
};

use crate::{GlossaError, datatypes::builtin_datatype};

/// How a property relates its domain to its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    /// The range is unknown.
    Property,
    /// The range is a literal datatype.
    DatatypeProperty,
    /// The range is a class.
    ObjectProperty,
}

/// Everything published about the target diagram.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    diagram: String,
    specification: SpecificationKind,
    package: PackageSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<ClassSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    datatypes: Vec<ClassSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    enumerations: Vec<EnumerationSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<AttributeSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    relationships: Vec<RelationshipSummary>,
}

/// The package that owns the target diagram.
#[derive(Debug, Clone, Serialize)]
pub struct PackageSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    base_uri: String,
    ontology_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
}

/// A class or a data type.
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    uri: String,
    scope: Scope,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parents: Vec<String>,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    label: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    definition: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    usage_note: LanguageMap,
}

/// An enumeration and the URIs of its members.
#[derive(Debug, Clone, Serialize)]
pub struct EnumerationSummary {
    guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    uri: String,
    scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    codelist: Option<String>,
    members: Vec<String>,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    label: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    definition: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    usage_note: LanguageMap,
}

/// A property derived from an attribute.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeSummary {
    guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    uri: String,
    kind: PropertyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_count: Option<String>,
    scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_uri: Option<String>,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    label: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    definition: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    usage_note: LanguageMap,
}

/// An object property derived from a normalized relationship.
#[derive(Debug, Clone, Serialize)]
pub struct RelationshipSummary {
    id: String,
    guid: String,
    connector: &'static str,
    part: &'static str,
    uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_count: Option<String>,
    scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_uri: Option<String>,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    label: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    definition: LanguageMap,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    usage_note: LanguageMap,
}

impl Summary {
    /// Summarizes the diagram named `target_diagram`, or the first diagram of
    /// the model when no name is given.
    ///
    /// # Errors
    ///
    /// Returns [`GlossaError`] when the diagram cannot be found. A diagram
    /// whose package has no base URI, for instance because the package is
    /// ignored, is reported and summarized against the fallback base URI.
    pub fn build(
        resolution: &Resolution,
        config: &ResolveConfig,
        target_diagram: Option<&str>,
        diagnostics: &mut DiagnosticCollector,
    ) -> Result<Self, GlossaError> {
        let model = resolution.model();
        let diagram = select_diagram(model, target_diagram)?;
        let package_uri = match resolution.tables().package_base_uri(diagram.package_id()) {
            Some(uri) => uri,
            None => {
                diagnostics.emit(
                    Diagnostic::error(format!(
                        "package {} of diagram `{}` has no base URI",
                        diagram.package_id(),
                        diagram.name().unwrap_or_default()
                    ))
                    .with_code(ErrorCode::E300)
                    .with_help("check the `package_id` of the diagram and its `ignore` tag"),
                );
                FALLBACK_BASE_URI
            }
        };

        let builder = SummaryBuilder {
            resolution,
            diagram,
            package_uri,
            elements: ElementIndex::new(&resolution.model().elements),
            tag_resolver: config.tag_resolver(),
            scope_classifier: config.scope_classifier(),
        };

        let summary = Self {
            diagram: diagram
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| diagram.id().to_string()),
            specification: config.specification,
            package: builder.package(),
            classes: builder.classes(ElementKind::Class, diagnostics),
            datatypes: builder.classes(ElementKind::DataType, diagnostics),
            enumerations: builder.enumerations(diagnostics),
            attributes: builder.attributes(diagnostics),
            relationships: builder.relationships(diagnostics),
        };

        info!(
            diagram = summary.diagram,
            classes = summary.classes.len(),
            datatypes = summary.datatypes.len(),
            enumerations = summary.enumerations.len(),
            attributes = summary.attributes.len(),
            relationships = summary.relationships.len();
            "Summary built"
        );

        Ok(summary)
    }

    pub fn diagram(&self) -> &str {
        &self.diagram
    }

    pub fn package(&self) -> &PackageSummary {
        &self.package
    }

    pub fn classes(&self) -> &[ClassSummary] {
        &self.classes
    }

    pub fn datatypes(&self) -> &[ClassSummary] {
        &self.datatypes
    }

    pub fn enumerations(&self) -> &[EnumerationSummary] {
        &self.enumerations
    }

    pub fn attributes(&self) -> &[AttributeSummary] {
        &self.attributes
    }

    pub fn relationships(&self) -> &[RelationshipSummary] {
        &self.relationships
    }

    /// Serializes the summary as a TOML document.
    pub fn to_toml(&self) -> Result<String, GlossaError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl PackageSummary {
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn ontology_uri(&self) -> &str {
        &self.ontology_uri
    }
}

impl ClassSummary {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Returns the URIs of the generalized classes.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn label(&self) -> &LanguageMap {
        &self.label
    }
}

impl EnumerationSummary {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn codelist(&self) -> Option<&str> {
        self.codelist.as_deref()
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }
}

impl AttributeSummary {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    pub fn min_count(&self) -> Option<u32> {
        self.min_count
    }

    pub fn max_count(&self) -> Option<&str> {
        self.max_count.as_deref()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl RelationshipSummary {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    pub fn min_count(&self) -> Option<u32> {
        self.min_count
    }

    pub fn max_count(&self) -> Option<&str> {
        self.max_count.as_deref()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}

fn select_diagram<'m>(model: &'m Model, name: Option<&str>) -> Result<&'m Diagram, GlossaError> {
    match name {
        Some(name) => model
            .diagram_named(name)
            .ok_or_else(|| GlossaError::DiagramNotFound(name.to_string())),
        None => {
            let diagram = model.diagrams.first().ok_or(GlossaError::NoDiagram)?;
            if model.diagrams.len() > 1 {
                warn!(
                    diagram:% = diagram.id(),
                    diagrams = model.diagrams.len();
                    "No target diagram configured, using the first one"
                );
            }
            Ok(diagram)
        }
    }
}

/// Range of an attribute, with the kind of property it makes.
struct AttributeRange {
    kind: PropertyKind,
    uri: Option<String>,
    label: Option<String>,
}

/// Lower and upper count of a property.
#[derive(Default)]
struct Counts {
    min: Option<u32>,
    max: Option<String>,
}

struct SummaryBuilder<'r> {
    resolution: &'r Resolution,
    diagram: &'r Diagram,
    package_uri: &'r str,
    elements: ElementIndex<'r>,
    tag_resolver: TagResolver,
    scope_classifier: ScopeClassifier,
}

impl SummaryBuilder<'_> {
    fn model(&self) -> &Model {
        self.resolution.model()
    }

    fn package(&self) -> PackageSummary {
        let tables = self.resolution.tables();
        let package_id = self.diagram.package_id();
        let package = self.model().package(package_id);

        PackageSummary {
            name: package.and_then(|p| p.name()).map(str::to_string),
            base_uri: self.package_uri.to_string(),
            ontology_uri: tables
                .package_ontology_uri(package_id)
                .unwrap_or(self.package_uri)
                .to_string(),
            prefix: package
                .and_then(|p| p.tags().get(TagName::BaseUriAbbreviation))
                .map(str::to_string),
        }
    }

    /// Diagram elements of `kind` that received a URI, in model order.
    fn diagram_elements(&self, kind: ElementKind) -> impl Iterator<Item = (&Element, &str)> {
        let tables = self.resolution.tables();
        self.model()
            .elements
            .iter()
            .filter(move |element| {
                element.element_kind() == kind && self.diagram.contains_element(element.id())
            })
            .filter_map(move |element| {
                let uri = tables.element_uri(element.id());
                if uri.is_none() {
                    debug!(element:% = element.id(); "Element without URI left out of the summary");
                }
                uri.map(|uri| (element, uri))
            })
    }

    fn classes(&self, kind: ElementKind, diagnostics: &mut DiagnosticCollector) -> Vec<ClassSummary> {
        self.diagram_elements(kind)
            .map(|(element, uri)| ClassSummary {
                guid: element.guid().to_string(),
                name: element.name().map(str::to_string),
                uri: uri.to_string(),
                scope: self.scope_classifier.classify(
                    element,
                    self.package_uri,
                    Some(uri),
                    diagnostics,
                ),
                parents: self.parents(element),
                label: self.tag_resolver.label(element, diagnostics),
                definition: self.tag_resolver.definition(element, diagnostics),
                usage_note: self.tag_resolver.usage_note(element, diagnostics),
            })
            .collect()
    }

    /// URIs of the classes `element` generalizes to.
    fn parents(&self, element: &Element) -> Vec<String> {
        let tables = self.resolution.tables();
        self.resolution
            .normalized()
            .iter()
            .filter(|n| n.part() == ConnectionPart::Generalization && n.source_id() == element.id())
            .filter_map(|n| tables.element_uri(n.destination_id()))
            .map(str::to_string)
            .collect()
    }

    /// Enumerations are code lists published elsewhere, so they are
    /// always external.
    fn enumerations(&self, diagnostics: &mut DiagnosticCollector) -> Vec<EnumerationSummary> {
        let tables = self.resolution.tables();

        self.diagram_elements(ElementKind::Enumeration)
            .map(|(element, uri)| {
                let mut label = self.tag_resolver.label(element, diagnostics);
                if label.is_empty() {
                    if let Some(name) = element.name() {
                        label.insert(String::new(), name.to_string());
                    }
                }

                EnumerationSummary {
                    guid: element.guid().to_string(),
                    name: element.name().map(str::to_string),
                    uri: uri.to_string(),
                    scope: Scope::External,
                    codelist: self
                        .tag_resolver
                        .lookup(element, TagName::ApCodelist, diagnostics)
                        .map(str::to_string),
                    members: self
                        .model()
                        .attributes
                        .iter()
                        .filter(|attribute| attribute.class_id() == element.id())
                        .filter_map(|attribute| tables.attribute_uri(attribute.id()))
                        .map(str::to_string)
                        .collect(),
                    label,
                    definition: self.tag_resolver.definition(element, diagnostics),
                    usage_note: self.tag_resolver.usage_note(element, diagnostics),
                }
            })
            .collect()
    }

    fn attributes(&self, diagnostics: &mut DiagnosticCollector) -> Vec<AttributeSummary> {
        let model = self.model();
        let tables = self.resolution.tables();
        let mut summaries = Vec::new();

        for attribute in &model.attributes {
            if !self.diagram.contains_element(attribute.class_id()) {
                continue;
            }
            let Some(class) = self.elements.get(attribute.class_id()) else {
                continue;
            };
            if class.element_kind() == ElementKind::Enumeration {
                continue;
            }
            let Some(uri) = tables.attribute_uri(attribute.id()) else {
                debug!(attribute:% = attribute.id(); "Attribute without URI left out of the summary");
                continue;
            };

            let range = self.attribute_range(attribute, diagnostics);
            let counts = attribute_bounds(attribute)
                .map(|text| parse_counts(attribute, &text, diagnostics))
                .unwrap_or_default();

            summaries.push(AttributeSummary {
                guid: attribute.guid().to_string(),
                name: attribute.name().map(str::to_string),
                uri: uri.to_string(),
                kind: range.kind,
                domain: tables.element_uri(class.id()).map(str::to_string),
                range: range.uri,
                range_label: range.label,
                min_count: counts.min,
                max_count: counts.max,
                scope: self.scope_classifier.classify(
                    attribute,
                    self.package_uri,
                    Some(uri),
                    diagnostics,
                ),
                parent_uri: self
                    .tag_resolver
                    .lookup(attribute, TagName::ParentUri, diagnostics)
                    .map(str::to_string),
                label: self.tag_resolver.label(attribute, diagnostics),
                definition: self.tag_resolver.definition(attribute, diagnostics),
                usage_note: self.tag_resolver.usage_note(attribute, diagnostics),
            });
        }

        summaries
    }

    /// Determines the range of an attribute.
    ///
    /// A `range` tag wins, with its `literal` tag choosing the property
    /// kind. Otherwise the declared type is looked up among the built-in
    /// datatypes, then among the model elements by name.
    fn attribute_range(
        &self,
        attribute: &Attribute,
        diagnostics: &mut DiagnosticCollector,
    ) -> AttributeRange {
        if let Some(range) = self
            .tag_resolver
            .lookup(attribute, TagName::Range, diagnostics)
        {
            return AttributeRange {
                kind: self.literal_kind(attribute, diagnostics),
                uri: Some(range.to_string()),
                label: None,
            };
        }

        let Some(type_name) = attribute.type_name() else {
            return AttributeRange {
                kind: PropertyKind::Property,
                uri: None,
                label: None,
            };
        };

        if let Some(datatype) = builtin_datatype(type_name) {
            return AttributeRange {
                kind: PropertyKind::DatatypeProperty,
                uri: Some(datatype),
                label: Some(type_name.to_string()),
            };
        }

        let tables = self.resolution.tables();
        let element_id = match tables.elements_named(type_name) {
            [] => {
                return AttributeRange {
                    kind: PropertyKind::Property,
                    uri: None,
                    label: None,
                };
            }
            [element_id] => *element_id,
            [first, ..] => {
                diagnostics.emit(
                    Diagnostic::warning(format!(
                        "type `{type_name}` names several elements, using element {first}"
                    ))
                    .with_code(ErrorCode::E308)
                    .with_subject(Subject::of(attribute))
                    .with_help("add a `range` tag to the attribute"),
                );
                *first
            }
        };

        let kind = match self.elements.get(element_id) {
            Some(element) => self.literal_kind(element, diagnostics),
            None => PropertyKind::ObjectProperty,
        };

        AttributeRange {
            kind,
            uri: tables.element_uri(element_id).map(str::to_string),
            label: Some(type_name.to_string()),
        }
    }

    /// `DatatypeProperty` when the entity carries `literal = true`.
    fn literal_kind<E>(&self, entity: &E, diagnostics: &mut DiagnosticCollector) -> PropertyKind
    where
        E: ModelElement + ?Sized,
    {
        let literal = self
            .tag_resolver
            .lookup(entity, TagName::IsLiteral, diagnostics)
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"));

        if literal {
            PropertyKind::DatatypeProperty
        } else {
            PropertyKind::ObjectProperty
        }
    }

    fn relationships(&self, diagnostics: &mut DiagnosticCollector) -> Vec<RelationshipSummary> {
        let tables = self.resolution.tables();

        self.resolution
            .normalized()
            .iter()
            .filter(|n| {
                n.origin_kind() != RelationshipKind::Generalization
                    && self.diagram.contains_relationship(n.origin_id())
            })
            .filter_map(|n| tables.relationship_uri(n.id()).map(|uri| (n, uri)))
            .map(|(relationship, uri)| {
                let counts = relationship
                    .cardinality()
                    .map(|text| parse_counts(relationship, text, diagnostics))
                    .unwrap_or_default();

                RelationshipSummary {
                    id: relationship.id().to_string(),
                    guid: relationship.guid().to_string(),
                    connector: relationship.connector_kind().as_str(),
                    part: relationship.part().as_str(),
                    uri: uri.to_string(),
                    domain: tables
                        .element_uri(relationship.source_id())
                        .map(str::to_string),
                    range: tables
                        .element_uri(relationship.destination_id())
                        .map(str::to_string),
                    min_count: counts.min,
                    max_count: counts.max,
                    scope: self.scope_classifier.classify(
                        relationship,
                        self.package_uri,
                        Some(uri),
                        diagnostics,
                    ),
                    parent_uri: self
                        .tag_resolver
                        .lookup(relationship, TagName::ParentUri, diagnostics)
                        .map(str::to_string),
                    label: self.tag_resolver.label(relationship, diagnostics),
                    definition: self.tag_resolver.definition(relationship, diagnostics),
                    usage_note: self.tag_resolver.usage_note(relationship, diagnostics),
                }
            })
            .collect()
    }
}

/// Joins the attribute bounds into a cardinality string.
fn attribute_bounds(attribute: &Attribute) -> Option<String> {
    match (attribute.lower_bound(), attribute.upper_bound()) {
        (Some(lower), Some(upper)) => Some(format!("{lower}..{upper}")),
        (Some(bound), None) | (None, Some(bound)) => Some(bound.to_string()),
        (None, None) => None,
    }
}

fn parse_counts<E>(entity: &E, text: &str, diagnostics: &mut DiagnosticCollector) -> Counts
where
    E: ModelElement + ?Sized,
{
    match text.parse::<Cardinality>() {
        Ok(cardinality) => Counts {
            min: Some(cardinality.lower()),
            max: Some(cardinality.upper().to_string()),
        },
        Err(err) => {
            let help = match err {
                CardinalityError::Syntax(_) => "use `n`, `n..m` or `n..*`",
                CardinalityError::Inverted { .. } => "swap the bounds",
            };
            diagnostics.emit(
                Diagnostic::warning(format!("invalid cardinality: {err}"))
                    .with_code(ErrorCode::E402)
                    .with_subject(Subject::of(entity))
                    .with_help(help),
            );
            Counts::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::{
        identifier::{AttributeId, DiagramId, ElementId, PackageId, RelationshipId},
        model::{Package, Relationship},
    };
    use glossa_resolver::resolve;

    use super::*;

    const PETS: &str = "https://ex.org/pets#";

    fn class(id: u32, name: &str) -> Element {
        Element::new(
            ElementId::new(id),
            format!("{{E{id}}}"),
            name,
            PackageId::new(1),
            ElementKind::Class,
        )
    }

    fn pets_model() -> Model {
        let mut model = Model::new();
        model.packages.push(
            Package::new(PackageId::new(1), "{P1}", "Pets")
                .with_tag("baseURI", PETS)
                .with_tag("baseURIabbrev", "pets"),
        );

        model.elements.push(
            class(1, "Person")
                .with_tag("label-en", "Person")
                .with_tag("label-nl", "Persoon"),
        );
        model.elements.push(class(2, "Dog"));
        model.elements.push(class(3, "Animal"));
        model.elements.push(
            Element::new(
                ElementId::new(4),
                "{E4}",
                "Breed",
                PackageId::new(1),
                ElementKind::Enumeration,
            )
            .with_tag("ap-codelist", "https://ex.org/codelists/breed"),
        );
        model.elements.push(
            Element::new(
                ElementId::new(5),
                "{E5}",
                "Identifier",
                PackageId::new(1),
                ElementKind::DataType,
            )
            .with_tag("literal", "true"),
        );
        model.elements.push(class(6, "Hidden"));

        model.attributes.push(
            Attribute::new(AttributeId::new(1), "{A1}", "birth date", ElementId::new(1))
                .with_type("Date")
                .with_bounds("0", "1"),
        );
        model.attributes.push(
            Attribute::new(AttributeId::new(2), "{A2}", "breed", ElementId::new(2))
                .with_type("Breed")
                .with_bounds("1", "*"),
        );
        model.attributes.push(
            Attribute::new(AttributeId::new(3), "{A3}", "chip", ElementId::new(2))
                .with_type("Identifier"),
        );
        model.attributes.push(
            Attribute::new(AttributeId::new(4), "{A4}", "homepage", ElementId::new(1))
                .with_tag("range", "http://xmlns.com/foaf/0.1/Document")
                .with_tag("parentURI", "http://xmlns.com/foaf/0.1/page"),
        );
        model.attributes.push(
            Attribute::new(AttributeId::new(5), "{A5}", "weight", ElementId::new(2))
                .with_type("Mass")
                .with_bounds("2", "1"),
        );
        model.attributes.push(Attribute::new(
            AttributeId::new(6),
            "{A6}",
            "poodle",
            ElementId::new(4),
        ));

        model.relationships.push(
            Relationship::new(
                RelationshipId::new(1),
                "{R1}",
                RelationshipKind::Association,
                ElementId::new(1),
                ElementId::new(2),
            )
            .with_source_role("owner", "1")
            .with_destination_role("pet", "0..*"),
        );
        model.relationships.push(Relationship::new(
            RelationshipId::new(2),
            "{R2}",
            RelationshipKind::Generalization,
            ElementId::new(2),
            ElementId::new(3),
        ));

        model.diagrams.push(
            Diagram::new(DiagramId::new(1), "Pets", PackageId::new(1))
                .with_elements([1, 2, 3, 4, 5].map(ElementId::new))
                .with_relationships([1, 2].map(RelationshipId::new)),
        );
        model
            .diagrams
            .push(Diagram::new(DiagramId::new(2), "Empty", PackageId::new(1)));
        model
    }

    fn summarize(model: &Model, diagram: Option<&str>) -> (Summary, Vec<Diagnostic>) {
        let config = ResolveConfig::default();
        let resolution = resolve(model, &config).expect("passes run in order");
        let mut diagnostics = DiagnosticCollector::new();
        let summary = Summary::build(&resolution, &config, diagram, &mut diagnostics)
            .expect("diagram exists");
        (summary, diagnostics.finish())
    }

    #[test]
    fn test_package_summary() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        assert_eq!(summary.diagram(), "Pets");
        assert_eq!(summary.package().base_uri(), PETS);
        assert_eq!(summary.package().ontology_uri(), "https://ex.org/pets");
        assert_eq!(summary.package.prefix.as_deref(), Some("pets"));
    }

    #[test]
    fn test_only_diagram_elements_are_summarized() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        let uris: Vec<_> = summary.classes().iter().map(|c| c.uri()).collect();
        assert_eq!(
            uris,
            vec![
                "https://ex.org/pets#Person",
                "https://ex.org/pets#Dog",
                "https://ex.org/pets#Animal",
            ]
        );
        assert_eq!(summary.datatypes().len(), 1);
        assert_eq!(summary.enumerations().len(), 1);
    }

    #[test]
    fn test_class_details() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        let person = &summary.classes()[0];
        assert_eq!(person.scope(), Scope::InPackage);
        assert_eq!(person.label().get("en").map(String::as_str), Some("Person"));
        assert_eq!(person.label().get("nl").map(String::as_str), Some("Persoon"));

        let dog = &summary.classes()[1];
        assert_eq!(dog.parents(), &["https://ex.org/pets#Animal".to_string()]);
    }

    #[test]
    fn test_enumeration_details() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        let breed = &summary.enumerations()[0];
        assert_eq!(breed.uri(), "https://ex.org/pets#Breed");
        assert_eq!(breed.scope, Scope::External);
        assert_eq!(breed.codelist(), Some("https://ex.org/codelists/breed"));
        assert_eq!(breed.members(), &["https://ex.org/pets/Breed/Poodle".to_string()]);
        assert_eq!(breed.label.get("").map(String::as_str), Some("Breed"));
    }

    #[test]
    fn test_attribute_ranges() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));
        let attribute = |uri: &str| {
            summary
                .attributes()
                .iter()
                .find(|a| a.uri() == uri)
                .expect("attribute is summarized")
        };

        let birth_date = attribute("https://ex.org/pets#birthDate");
        assert_eq!(birth_date.kind(), PropertyKind::DatatypeProperty);
        assert_eq!(
            birth_date.range(),
            Some("http://www.w3.org/2001/XMLSchema#date")
        );
        assert_eq!(birth_date.domain(), Some("https://ex.org/pets#Person"));
        assert_eq!(birth_date.min_count(), Some(0));
        assert_eq!(birth_date.max_count(), Some("1"));

        let breed = attribute("https://ex.org/pets#breed");
        assert_eq!(breed.kind(), PropertyKind::ObjectProperty);
        assert_eq!(breed.range(), Some("https://ex.org/pets#Breed"));
        assert_eq!(breed.max_count(), Some("*"));

        let chip = attribute("https://ex.org/pets#chip");
        assert_eq!(chip.kind(), PropertyKind::DatatypeProperty);
        assert_eq!(chip.range(), Some("https://ex.org/pets#Identifier"));

        let homepage = attribute("https://ex.org/pets#homepage");
        assert_eq!(homepage.kind(), PropertyKind::ObjectProperty);
        assert_eq!(homepage.range(), Some("http://xmlns.com/foaf/0.1/Document"));
        assert_eq!(
            homepage.parent_uri.as_deref(),
            Some("http://xmlns.com/foaf/0.1/page")
        );

        let weight = attribute("https://ex.org/pets#weight");
        assert_eq!(weight.kind(), PropertyKind::Property);
        assert_eq!(weight.range(), None);
    }

    #[test]
    fn test_invalid_bounds_are_reported() {
        let (summary, diagnostics) = summarize(&pets_model(), Some("Pets"));

        let weight = summary
            .attributes()
            .iter()
            .find(|a| a.uri() == "https://ex.org/pets#weight")
            .expect("attribute is summarized");
        assert_eq!(weight.min_count(), None);
        assert!(diagnostics.iter().any(|d| d.code() == Some(ErrorCode::E402)));
    }

    #[test]
    fn test_enumeration_members_are_not_attributes() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        assert!(
            summary
                .attributes()
                .iter()
                .all(|a| !a.uri().contains("/Breed/"))
        );
    }

    #[test]
    fn test_relationship_properties() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        let relationships = summary.relationships();
        assert_eq!(relationships.len(), 2);

        let owner = &relationships[0];
        assert_eq!(owner.uri(), "https://ex.org/pets#owner");
        assert_eq!(owner.domain(), Some("https://ex.org/pets#Dog"));
        assert_eq!(owner.range(), Some("https://ex.org/pets#Person"));
        assert_eq!(owner.min_count(), Some(1));
        assert_eq!(owner.max_count(), Some("1"));
        assert_eq!(owner.scope(), Scope::InPackage);

        let pet = &relationships[1];
        assert_eq!(pet.uri(), "https://ex.org/pets#pet");
        assert_eq!(pet.min_count(), Some(0));
        assert_eq!(pet.max_count(), Some("*"));
    }

    #[test]
    fn test_ambiguous_type_name() {
        let mut model = pets_model();
        model.elements.push(
            Element::new(
                ElementId::new(7),
                "{E7}",
                "Breed",
                PackageId::new(1),
                ElementKind::Class,
            ),
        );

        let (summary, diagnostics) = summarize(&model, Some("Pets"));

        let breed = summary
            .attributes()
            .iter()
            .find(|a| a.uri() == "https://ex.org/pets#breed")
            .expect("attribute is summarized");
        assert_eq!(breed.range(), Some("https://ex.org/pets#Breed"));
        assert!(diagnostics.iter().any(|d| d.code() == Some(ErrorCode::E308)));
    }

    #[test]
    fn test_first_diagram_is_default() {
        let (summary, _) = summarize(&pets_model(), None);

        assert_eq!(summary.diagram(), "Pets");
    }

    #[test]
    fn test_unknown_diagram() {
        let model = pets_model();
        let config = ResolveConfig::default();
        let resolution = resolve(&model, &config).expect("passes run in order");
        let mut diagnostics = DiagnosticCollector::new();

        let result = Summary::build(&resolution, &config, Some("Cats"), &mut diagnostics);

        assert!(matches!(result, Err(GlossaError::DiagramNotFound(name)) if name == "Cats"));
    }

    #[test]
    fn test_model_without_diagram() {
        let model = Model::new();
        let config = ResolveConfig::default();
        let resolution = resolve(&model, &config).expect("passes run in order");
        let mut diagnostics = DiagnosticCollector::new();

        let result = Summary::build(&resolution, &config, None, &mut diagnostics);

        assert!(matches!(result, Err(GlossaError::NoDiagram)));
    }

    #[test]
    fn test_diagram_in_ignored_package_is_reported() {
        let mut model = pets_model();
        model.packages[0] = Package::new(PackageId::new(1), "{P1}", "Pets")
            .with_tag("baseURI", PETS)
            .with_tag("ignore", "true");

        let (summary, diagnostics) = summarize(&model, Some("Pets"));

        assert_eq!(summary.package().base_uri(), FALLBACK_BASE_URI);
        assert!(summary.classes().is_empty());
        assert!(
            diagnostics
                .iter()
                .any(|d| d.code() == Some(ErrorCode::E300) && d.severity().is_error())
        );
    }

    #[test]
    fn test_summary_to_toml() {
        let (summary, _) = summarize(&pets_model(), Some("Pets"));

        let document = summary.to_toml().expect("summary serializes");

        assert!(document.contains("diagram = \"Pets\""));
        assert!(document.contains("[[classes]]"));
        assert!(document.contains("uri = \"https://ex.org/pets#Person\""));
        assert!(document.contains("scope = \"InPackage\""));
    }
}
