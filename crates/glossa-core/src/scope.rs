//! Visibility scope of resolved entities.

use std::fmt;

use serde::Serialize;

/// Where the URI of an entity lives relative to the package being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    /// The URI starts with the package base URI.
    InPackage,
    /// The URI starts with the configured publication domain.
    InPublicationEnvironment,
    /// The URI points outside both.
    External,
    /// No URI could be resolved.
    Undefined,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InPackage => write!(f, "in package"),
            Self::InPublicationEnvironment => write!(f, "in publication environment"),
            Self::External => write!(f, "external"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
