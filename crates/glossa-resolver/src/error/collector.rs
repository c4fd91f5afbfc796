//! Collector for accumulating diagnostics during resolution.
//!
//! The [`DiagnosticCollector`] is passed to every component so that bad data
//! is reported and resolution carries on. Each emitted diagnostic is also
//! written to the `log` facade at the matching level.

use log::log;

use crate::error::{Diagnostic, Severity};

/// A collector for accumulating diagnostics during resolution.
///
/// # Example
///
/// ```
/// # use glossa_resolver::error::{Diagnostic, DiagnosticCollector, ErrorCode};
///
/// let mut collector = DiagnosticCollector::new();
///
/// collector.emit(
///     Diagnostic::warning("tag `baseURI` is missing")
///         .with_code(ErrorCode::E100)
/// );
///
/// assert_eq!(collector.warning_count(), 1);
/// let diagnostics = collector.finish();
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector and log it.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        let level = diagnostic.severity().log_level();
        match diagnostic.subject() {
            Some(subject) => log!(level, subject:% = subject; "{diagnostic}"),
            None => log!(level, "{diagnostic}"),
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns the diagnostics emitted so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Finish collection and return every diagnostic in emission order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity() == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_collector_new_is_empty() {
        let collector = DiagnosticCollector::new();

        assert!(!collector.has_errors());
        assert!(collector.finish().is_empty());
    }

    #[test]
    fn test_collector_counts_by_severity() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::error("error 1"));
        collector.emit(Diagnostic::warning("warning 1"));
        collector.emit(Diagnostic::info("info 1"));
        collector.emit(Diagnostic::error("error 2"));

        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 2);
        assert_eq!(collector.warning_count(), 1);
    }

    #[test]
    fn test_collector_finish_keeps_order() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::warning("first").with_code(ErrorCode::E100));
        collector.emit(Diagnostic::error("second").with_code(ErrorCode::E300));

        let diagnostics = collector.finish();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message(), "first");
        assert_eq!(diagnostics[1].code(), Some(ErrorCode::E300));
    }
}
