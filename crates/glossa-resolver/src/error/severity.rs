//! Severity levels for diagnostics.
//!
//! Resolution never aborts on bad data, so every severity here is a
//! data-quality signal. The level decides how loudly it is reported.

use std::fmt;

use log::Level;

/// The severity level of a diagnostic.
///
/// - [`Severity::Error`] marks an entity that could not be resolved
/// - [`Severity::Warning`] marks a fallback or a discarded value
/// - [`Severity::Info`] records a decision the resolver made on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// An entity was skipped or left without an identifier.
    Error,

    /// A value was defaulted, discarded or guessed.
    ///
    /// The output is complete but may not be what the modeler intended.
    Warning,

    /// An inference the modeler may want to know about.
    Info,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Returns `true` if this is an info severity.
    pub fn is_info(&self) -> bool {
        matches!(self, Severity::Info)
    }

    /// Returns the `log` level diagnostics of this severity are logged at.
    pub fn log_level(&self) -> Level {
        match self {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warn,
            Severity::Info => Level::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
