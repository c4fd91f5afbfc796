//! Errors that abort resolution.
//!
//! Bad model data never ends up here; it is reported through
//! [`Diagnostic`](super::Diagnostic)s. A [`ResolveError`] means the resolver
//! itself was driven incorrectly.

use std::fmt;

use thiserror::Error;

/// A type alias for `Result<T, ResolveError>`.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// The ordered passes of URI assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    Packages,
    Elements,
    Attributes,
    Relationships,
}

impl Pass {
    /// Returns the pass that must have completed before this one runs.
    pub fn predecessor(self) -> Option<Pass> {
        match self {
            Pass::Packages => None,
            Pass::Elements => Some(Pass::Packages),
            Pass::Attributes => Some(Pass::Elements),
            Pass::Relationships => Some(Pass::Attributes),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Packages => write!(f, "packages"),
            Pass::Elements => write!(f, "elements"),
            Pass::Attributes => write!(f, "attributes"),
            Pass::Relationships => write!(f, "relationships"),
        }
    }
}

/// Invariant violations raised by the resolver.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Pass `{pass}` requires pass `{required}` to complete first")]
    PassOrder { pass: Pass, required: Pass },

    #[error("Pass `{0}` has already run")]
    PassRepeated(Pass),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_predecessor() {
        assert_eq!(Pass::Packages.predecessor(), None);
        assert_eq!(Pass::Relationships.predecessor(), Some(Pass::Attributes));
    }

    #[test]
    fn test_pass_order_display() {
        let err = ResolveError::PassOrder {
            pass: Pass::Attributes,
            required: Pass::Elements,
        };

        assert_eq!(
            err.to_string(),
            "Pass `attributes` requires pass `elements` to complete first"
        );
    }
}
