//! The core diagnostic type for the Glossa error system.
//!
//! A [`Diagnostic`] represents a single data-quality finding with an
//! optional error code, the entity it concerns, and help text.

use std::fmt;

use crate::error::{Severity, Subject, error_code::ErrorCode};

/// A data-quality message about one model entity.
///
/// Diagnostics provide:
/// - A severity level
/// - An optional error code for documentation and searchability
/// - A primary message describing the issue
/// - The entity the message is about
/// - Optional help text with suggestions
///
/// # Example
///
/// ```text
/// warning[E101]: tag `uri` occurs 2 times, using `https://ex.org/a`
///   --> element `Person` ({E1})
///    = help: remove the duplicate tags
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    subject: Option<Subject>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use glossa_resolver::error::{Diagnostic, ErrorCode};
    ///
    /// let diag = Diagnostic::error("package has no base URI")
    ///     .with_code(ErrorCode::E300)
    ///     .with_help("add a `baseURI` tag to the package");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an info diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the entity this diagnostic is about, if any.
    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the entity this diagnostic is about.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            subject: None,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "warning[E101]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
