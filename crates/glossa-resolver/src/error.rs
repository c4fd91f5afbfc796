//! Error and diagnostic system for the Glossa resolver.
//!
//! Two channels exist side by side:
//! - [`Diagnostic`]s are data-quality findings about the model. They are
//!   collected in a [`DiagnosticCollector`] and never stop resolution.
//! - [`ResolveError`] reports misuse of the resolver itself, such as
//!   running the URI passes out of order. It is returned immediately.
//!
//! # Example
//!
//! ```
//! # use glossa_resolver::error::{Diagnostic, ErrorCode};
//!
//! let diag = Diagnostic::warning("tag `package` matches 2 packages named `Adres`")
//!     .with_code(ErrorCode::E302)
//!     .with_help("rename one of the packages");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod resolve_error;
mod severity;
mod subject;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use resolve_error::{Pass, ResolveError, Result};
pub use severity::Severity;
pub use subject::Subject;
