//! # Glossa Resolver
//!
//! Resolution engine for Glossa conceptual models. This crate turns a
//! [`Model`] into canonical identifiers: every package, element, attribute
//! and relationship gets a URI, every raw relationship is expanded into
//! directional properties, and every data-quality problem found on the way
//! is reported as a [`Diagnostic`](error::Diagnostic).
//!
//! ## Usage
//!
//! ```
//! # use glossa_core::{identifier::PackageId, model::{Model, Package}};
//! # use glossa_resolver::{resolve, ResolveConfig, error::ResolveError};
//!
//! fn main() -> Result<(), ResolveError> {
//!     let mut model = Model::new();
//!     model.packages.push(
//!         Package::new(PackageId::new(1), "{P1}", "Pets")
//!             .with_tag("baseURI", "https://ex.org/pets#"),
//!     );
//!
//!     let resolution = resolve(&model, &ResolveConfig::default())?;
//!     assert_eq!(
//!         resolution.tables().package_base_uri(PackageId::new(1)),
//!         Some("https://ex.org/pets#")
//!     );
//!     Ok(())
//! }
//! ```

pub mod cardinality;
pub mod case;
pub mod error;
pub mod ignore;
pub mod index;
pub mod normalize;
pub mod scope;
pub mod tags;
pub mod uri;

use log::info;

use glossa_core::{model::Model, specification::SpecificationKind};

use error::{Diagnostic, DiagnosticCollector, ResolveError};
use index::ElementIndex;
use normalize::NormalizedRelationship;
use scope::ScopeClassifier;
use tags::TagResolver;
use uri::{IdentifierTables, UriAssigner};

/// Settings that change how a model resolves.
#[derive(Debug, Clone, Default)]
pub struct ResolveConfig {
    /// Which tag variants to read.
    pub specification: SpecificationKind,
    /// URI prefix of the publication environment, used for scopes.
    pub target_domain: Option<String>,
}

impl ResolveConfig {
    pub fn new(specification: SpecificationKind, target_domain: Option<String>) -> Self {
        Self {
            specification,
            target_domain,
        }
    }

    /// Returns the tag resolver for this configuration.
    pub fn tag_resolver(&self) -> TagResolver {
        TagResolver::new(self.specification)
    }

    /// Returns the scope classifier for this configuration.
    pub fn scope_classifier(&self) -> ScopeClassifier {
        ScopeClassifier::new(self.target_domain.as_deref())
    }
}

/// The outcome of resolving a model.
#[derive(Debug)]
pub struct Resolution {
    model: Model,
    normalized: Vec<NormalizedRelationship>,
    tables: IdentifierTables,
    diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Returns the model without its ignored entities.
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn normalized(&self) -> &[NormalizedRelationship] {
        &self.normalized
    }

    pub fn tables(&self) -> &IdentifierTables {
        &self.tables
    }

    /// Returns every diagnostic emitted during resolution.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Resolve a model into identifiers.
///
/// The pipeline:
///
/// 1. **Filter** - Remove entities tagged `ignore`
/// 2. **Normalize** - Expand relationships into directional properties
/// 3. **Name** - Name association class connectors
/// 4. **Assign** - Run the four URI passes
///
/// Bad model data never fails resolution; it shows up in
/// [`Resolution::diagnostics`]. An `Err` means an internal invariant was
/// broken.
pub fn resolve(model: &Model, config: &ResolveConfig) -> Result<Resolution, ResolveError> {
    let mut diagnostics = DiagnosticCollector::new();
    let tag_resolver = config.tag_resolver();

    // Step 1: Filter
    let model = ignore::remove_ignored(model, &tag_resolver, &mut diagnostics);

    // Step 2: Normalize
    let elements = ElementIndex::new(&model.elements);
    let mut normalized: Vec<_> = model
        .relationships
        .iter()
        .flat_map(|relationship| {
            normalize::normalize(relationship, &elements, &mut diagnostics)
        })
        .collect();

    // Step 3: Name
    normalize::name_association_connectors(&mut normalized, &elements, &mut diagnostics);

    // Step 4: Assign
    let mut assigner = UriAssigner::new(&model, tag_resolver);
    assigner.assign_all(&normalized, &mut diagnostics)?;
    let tables = assigner.into_tables();

    info!(
        specification:% = config.specification,
        relationships = normalized.len(),
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count();
        "Model resolved"
    );

    Ok(Resolution {
        model,
        normalized,
        tables,
        diagnostics: diagnostics.finish(),
    })
}
