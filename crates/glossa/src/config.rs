//! Configuration types for Glossa conversions.
//!
//! This module provides configuration structures that control how a model is
//! resolved and which part of it is summarized. All types implement
//! [`serde::Deserialize`] for loading from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining resolution and output settings.
//! - [`ResolutionConfig`] - Controls the [`SpecificationKind`] and the publication domain.
//! - [`OutputConfig`] - Controls which diagram is summarized.
//!
//! # Example
//!
//! ```
//! # use glossa::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [resolution]
//!     specification = "ApplicationProfile"
//!     target_domain = "https://data.ex.org/"
//!
//!     [output]
//!     target_diagram = "Pets"
//! "#).unwrap();
//!
//! assert_eq!(config.output().target_diagram(), Some("Pets"));
//! ```

use serde::Deserialize;

use glossa_core::specification::SpecificationKind;
use glossa_resolver::ResolveConfig;

/// Top-level application configuration combining resolution and output
/// settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Resolution configuration section.
    #[serde(default)]
    resolution: ResolutionConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `resolution` - Settings that change how the model resolves.
    /// * `output` - Settings that select what gets summarized.
    pub fn new(resolution: ResolutionConfig, output: OutputConfig) -> Self {
        Self { resolution, output }
    }

    /// Returns the resolution configuration.
    pub fn resolution(&self) -> &ResolutionConfig {
        &self.resolution
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Overrides the specification kind.
    pub fn with_specification(mut self, specification: SpecificationKind) -> Self {
        self.resolution.specification = specification;
        self
    }

    /// Overrides the target diagram.
    pub fn with_target_diagram(mut self, name: impl Into<String>) -> Self {
        self.output.target_diagram = Some(name.into());
        self
    }
}

/// Settings passed on to the resolver.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ResolutionConfig {
    /// Which tag variants to read.
    #[serde(default)]
    specification: SpecificationKind,

    /// URI prefix of the publication environment.
    #[serde(default)]
    target_domain: Option<String>,
}

impl ResolutionConfig {
    /// Creates a new [`ResolutionConfig`].
    ///
    /// # Arguments
    ///
    /// * `specification` - Vocabulary or application profile.
    /// * `target_domain` - URI prefix used to detect the publication environment scope.
    pub fn new(specification: SpecificationKind, target_domain: Option<String>) -> Self {
        Self {
            specification,
            target_domain,
        }
    }

    pub fn specification(&self) -> SpecificationKind {
        self.specification
    }

    pub fn target_domain(&self) -> Option<&str> {
        self.target_domain.as_deref()
    }
}

impl From<&ResolutionConfig> for ResolveConfig {
    fn from(config: &ResolutionConfig) -> Self {
        ResolveConfig::new(config.specification, config.target_domain.clone())
    }
}

/// Settings that select the summarized part of the model.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of the diagram to summarize. Without one, the first diagram of
    /// the model is used.
    #[serde(default)]
    target_diagram: Option<String>,
}

impl OutputConfig {
    pub fn new(target_diagram: Option<String>) -> Self {
        Self { target_diagram }
    }

    pub fn target_diagram(&self) -> Option<&str> {
        self.target_diagram.as_deref()
    }
}
