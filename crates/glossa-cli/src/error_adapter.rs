//! Error adapter for converting Glossa errors and diagnostics to miette
//! reports.
//!
//! This module provides the bridge between the library's error and
//! diagnostic types and miette's rich formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A conversion can finish with many error diagnostics. Each one is rendered
//! independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, Severity as MietteSeverity};

use glossa::{Diagnostic, GlossaError, Severity};

/// Adapter for a single resolver diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] and implements
/// [`MietteDiagnostic`] to enable rich formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic) -> Self {
        Self { diag }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diag.subject() {
            Some(subject) => write!(f, "{}: {}", subject, self.diag.message()),
            None => write!(f, "{}", self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
            Severity::Info => MietteSeverity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Adapter for [`GlossaError`] values.
///
/// These errors stop a conversion and carry no entity information.
pub struct ErrorAdapter<'a>(pub &'a GlossaError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GlossaError::Io(_) => "glossa::io",
            GlossaError::Model(_) => "glossa::model",
            GlossaError::Resolve(_) => "glossa::resolve",
            GlossaError::DiagramNotFound(_) | GlossaError::NoDiagram => "glossa::diagram",
            GlossaError::Summary(_) => "glossa::summary",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            GlossaError::DiagramNotFound(_) => "pass `--diagram` with a diagram name of the model",
            GlossaError::NoDiagram => "add a diagram to the model document",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or an error, providing a
/// uniform interface for rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A data-quality diagnostic about one model entity.
    Diagnostic(DiagnosticAdapter<'a>),
    /// An error that stopped the conversion.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`GlossaError`] into a list of reportable errors.
pub fn to_reportables(err: &GlossaError) -> Vec<Reportable<'_>> {
    vec![Reportable::Error(ErrorAdapter(err))]
}

/// Select the error diagnostics of a conversion for rendering.
///
/// Warnings and infos were logged when they were emitted; only errors get a
/// full report.
pub fn error_reportables(diagnostics: &[Diagnostic]) -> Vec<Reportable<'_>> {
    diagnostics
        .iter()
        .filter(|d| d.severity().is_error())
        .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d)))
        .collect()
}
