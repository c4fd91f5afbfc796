//! Glossa - canonical vocabulary identifiers for conceptual models.
//!
//! Loading, resolution and summarizing of UML-style conceptual models. A
//! model document is resolved into URIs for every package, element,
//! attribute and relationship, and the target diagram is summarized as the
//! vocabulary it publishes.

pub mod config;
pub mod datatypes;
pub mod summary;

mod error;

pub use glossa_core::{identifier, model, scope, specification, tag};
pub use glossa_resolver::error::{Diagnostic, ErrorCode, Severity};

pub use error::GlossaError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use glossa_core::model::Model;
use glossa_resolver::{Resolution, ResolveConfig, error::DiagnosticCollector};

use config::AppConfig;
use summary::Summary;

/// The outcome of converting a model.
#[derive(Debug)]
pub struct Conversion {
    resolution: Resolution,
    summary: Summary,
    diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Returns the diagnostics of resolution followed by those of
    /// summarizing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::is_error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::is_warning)
    }

    fn count(&self, predicate: impl Fn(&Severity) -> bool) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| predicate(&diagnostic.severity()))
            .count()
    }
}

/// Builder for loading, resolving and summarizing Glossa models.
///
/// # Examples
///
/// ```rust,no_run
/// use glossa::{Converter, config::AppConfig};
///
/// let converter = Converter::new(AppConfig::default());
///
/// // Load a model document
/// let model = converter.load_model_file("models/pets.toml")
///     .expect("Failed to load");
///
/// // Resolve and summarize it
/// let conversion = converter.convert(&model)
///     .expect("Failed to convert");
///
/// println!("{}", conversion.summary().to_toml().expect("Failed to serialize"));
/// ```
#[derive(Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including resolution and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML model document.
    ///
    /// # Errors
    ///
    /// Returns `GlossaError::Model` when the document is not a valid model.
    ///
    /// # Examples
    ///
    /// ```
    /// use glossa::Converter;
    ///
    /// let source = r#"
    ///     [[packages]]
    ///     id = 1
    ///     guid = "{P1}"
    ///     name = "Pets"
    /// "#;
    ///
    /// let model = Converter::default().load_model(source).expect("Failed to parse");
    /// assert_eq!(model.packages.len(), 1);
    /// ```
    pub fn load_model(&self, source: &str) -> Result<Model, GlossaError> {
        info!("Loading model");

        let model: Model = toml::from_str(source)?;

        debug!(
            packages = model.packages.len(),
            elements = model.elements.len(),
            attributes = model.attributes.len(),
            relationships = model.relationships.len(),
            diagrams = model.diagrams.len();
            "Model loaded"
        );

        Ok(model)
    }

    /// Read and parse a TOML model document from disk.
    ///
    /// # Errors
    ///
    /// Returns `GlossaError` for I/O errors or invalid model documents.
    pub fn load_model_file(&self, path: impl AsRef<Path>) -> Result<Model, GlossaError> {
        let path = path.as_ref();
        debug!(path = path.display().to_string(); "Reading model file");

        let source = fs::read_to_string(path)?;
        self.load_model(&source)
    }

    /// Resolve a model and summarize its target diagram.
    ///
    /// Data-quality problems do not fail the conversion; they are collected
    /// in [`Conversion::diagnostics`].
    ///
    /// # Errors
    ///
    /// Returns `GlossaError` when resolution breaks an internal invariant or
    /// the target diagram cannot be summarized.
    pub fn convert(&self, model: &Model) -> Result<Conversion, GlossaError> {
        let resolve_config = ResolveConfig::from(self.config.resolution());

        info!(specification:% = resolve_config.specification; "Resolving model");
        let resolution = glossa_resolver::resolve(model, &resolve_config)?;
        trace!(tables:? = resolution.tables(); "Identifier tables");

        let mut diagnostics = DiagnosticCollector::new();
        let summary = Summary::build(
            &resolution,
            &resolve_config,
            self.config.output().target_diagram(),
            &mut diagnostics,
        )?;

        let diagnostics = resolution
            .diagnostics()
            .iter()
            .cloned()
            .chain(diagnostics.finish())
            .collect();

        Ok(Conversion {
            resolution,
            summary,
            diagnostics,
        })
    }

    /// Write the summary of a conversion to `path` as TOML.
    ///
    /// # Errors
    ///
    /// Returns `GlossaError` for serialization or I/O errors.
    pub fn write_summary(
        &self,
        conversion: &Conversion,
        path: impl AsRef<Path>,
    ) -> Result<(), GlossaError> {
        let path = path.as_ref();
        let document = conversion.summary().to_toml()?;
        fs::write(path, document)?;

        info!(path = path.display().to_string(); "Summary written");
        Ok(())
    }
}
