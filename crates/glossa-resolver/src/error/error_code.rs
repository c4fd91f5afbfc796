//! Error codes for the Glossa diagnostic system.
//!
//! Error codes are organized by component:
//! - `E1xx` - Tag resolution
//! - `E2xx` - Case normalization
//! - `E3xx` - URI assignment
//! - `E4xx` - Relationship normalization
//! - `E5xx` - Scope classification
//! - `E6xx` - Model filtering

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Tag Resolution (E1xx)
    // =========================================================================
    /// Missing tag.
    ///
    /// A tag the resolver reads was not present and no fallback applied.
    /// The documented default value was used instead.
    E100,

    /// Duplicate tag.
    ///
    /// A tag that should occur once occurs several times. The first
    /// occurrence wins.
    E101,

    /// Empty language value.
    ///
    /// A language-dependent tag holds only whitespace and was dropped.
    E102,

    /// Duplicate language.
    ///
    /// Two language-dependent tags map to the same language code. The first
    /// value is kept.
    E103,

    // =========================================================================
    // Case Normalization (E2xx)
    // =========================================================================
    /// Missing name.
    ///
    /// An identifier fragment was requested for an empty name.
    E200,

    // =========================================================================
    // URI Assignment (E3xx)
    // =========================================================================
    /// Missing package URI.
    ///
    /// The package an entity belongs to has no recorded base URI.
    E300,

    /// Unknown package name.
    ///
    /// A `package` tag names a package that does not exist.
    E301,

    /// Ambiguous package name.
    ///
    /// A `package` tag names several packages. The first one is used.
    E302,

    /// Missing owner.
    ///
    /// An attribute refers to a class that does not exist.
    E303,

    /// Inferred defining package.
    ///
    /// A relationship without a `package` tag connects two elements of the
    /// same package, which becomes its defining package.
    E304,

    /// No defining package.
    ///
    /// A relationship has neither a usable `package` tag nor endpoints in the
    /// same package.
    E305,

    /// Unnamed relationship.
    ///
    /// A normalized relationship has no `name` tag to derive a URI from.
    E306,

    /// Unnamed element.
    ///
    /// An element or attribute has no name to derive a URI from.
    E307,

    /// Ambiguous type name.
    ///
    /// An attribute type names several model elements. The first one is
    /// used as the range.
    E308,

    // =========================================================================
    // Relationship Normalization (E4xx)
    // =========================================================================
    /// No properties.
    ///
    /// A relationship produced no normalized relationship at all.
    E400,

    /// Unknown endpoint.
    ///
    /// A relationship refers to an element that does not exist.
    E401,

    /// Invalid cardinality.
    ///
    /// A cardinality string could not be parsed.
    E402,

    // =========================================================================
    // Scope Classification (E5xx)
    // =========================================================================
    /// Undefined scope.
    ///
    /// An entity has no resolved URI, so its scope is undefined.
    E500,

    // =========================================================================
    // Model Filtering (E6xx)
    // =========================================================================
    /// Ignored entity.
    ///
    /// An entity carries a truthy `ignore` tag and was removed.
    E600,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Tag resolution
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Case normalization
            ErrorCode::E200 => "E200",
            // URI assignment
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
            ErrorCode::E305 => "E305",
            ErrorCode::E306 => "E306",
            ErrorCode::E307 => "E307",
            ErrorCode::E308 => "E308",
            // Relationship normalization
            ErrorCode::E400 => "E400",
            ErrorCode::E401 => "E401",
            ErrorCode::E402 => "E402",
            // Scope classification
            ErrorCode::E500 => "E500",
            // Model filtering
            ErrorCode::E600 => "E600",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Tag resolution
            ErrorCode::E100 => "missing tag",
            ErrorCode::E101 => "duplicate tag",
            ErrorCode::E102 => "empty language value",
            ErrorCode::E103 => "duplicate language",
            // Case normalization
            ErrorCode::E200 => "missing name",
            // URI assignment
            ErrorCode::E300 => "missing package URI",
            ErrorCode::E301 => "unknown package name",
            ErrorCode::E302 => "ambiguous package name",
            ErrorCode::E303 => "missing owner",
            ErrorCode::E304 => "inferred defining package",
            ErrorCode::E305 => "no defining package",
            ErrorCode::E306 => "unnamed relationship",
            ErrorCode::E307 => "unnamed element",
            ErrorCode::E308 => "ambiguous type name",
            // Relationship normalization
            ErrorCode::E400 => "no properties",
            ErrorCode::E401 => "unknown endpoint",
            ErrorCode::E402 => "invalid cardinality",
            // Scope classification
            ErrorCode::E500 => "undefined scope",
            // Model filtering
            ErrorCode::E600 => "ignored entity",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E307.to_string(), "E307");
        assert_eq!(ErrorCode::E600.to_string(), "E600");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "duplicate tag");
        assert_eq!(ErrorCode::E302.description(), "ambiguous package name");
        assert_eq!(ErrorCode::E500.description(), "undefined scope");
    }
}
