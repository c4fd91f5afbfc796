//! Error types for Glossa operations.
//!
//! This module provides the main error type [`GlossaError`] which wraps the
//! conditions that stop a conversion. Data-quality findings never end up
//! here; they are [`Diagnostic`](glossa_resolver::error::Diagnostic)s on the
//! [`Conversion`](crate::Conversion).

use std::io;

use thiserror::Error;

use glossa_resolver::error::ResolveError;

/// The main error type for Glossa operations.
#[derive(Debug, Error)]
pub enum GlossaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid model document: {0}")]
    Model(#[from] toml::de::Error),

    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Diagram `{0}` does not exist in the model")]
    DiagramNotFound(String),

    #[error("The model has no diagram to summarize")]
    NoDiagram,

    #[error("Summary serialization failed: {0}")]
    Summary(#[from] toml::ser::Error),
}
