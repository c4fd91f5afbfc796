//! Typed identifiers for model entities.
//!
//! The source model numbers every kind of entity independently, so a package
//! and an element may share the same numeric id. Each kind therefore gets its
//! own newtype ([`PackageId`], [`ElementId`], [`AttributeId`],
//! [`RelationshipId`]) and the compiler keeps the tables apart.
//!
//! [`NormalizedId`] identifies a derived normalized relationship. It is a
//! content hash computed by the resolver, never a counter or a random number,
//! so two runs over the same model produce the same ids.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from its raw numeric value.
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value.
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Package`](crate::model::Package).
    PackageId
);

entity_id!(
    /// Identifier of an [`Element`](crate::model::Element).
    ElementId
);

entity_id!(
    /// Identifier of an [`Attribute`](crate::model::Attribute).
    AttributeId
);

entity_id!(
    /// Identifier of a raw [`Relationship`](crate::model::Relationship).
    RelationshipId
);

entity_id!(
    /// Identifier of a [`Diagram`](crate::model::Diagram).
    DiagramId
);

/// Content-addressed identifier of a normalized relationship.
///
/// # Examples
///
/// ```
/// use glossa_core::identifier::NormalizedId;
///
/// let id = NormalizedId::from_digest([0xab; 8]);
/// assert_eq!(id.to_string(), "abababababababab");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedId(u64);

impl NormalizedId {
    /// Builds an identifier from the leading bytes of a digest.
    pub fn from_digest(bytes: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }

    /// Returns the raw numeric value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NormalizedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_same_value_different_kinds() {
        let package = PackageId::new(7);
        let element = ElementId::new(7);

        assert_eq!(package.value(), element.value());
        assert_eq!(package.to_string(), "7");
        assert_eq!(element.to_string(), "7");
    }

    #[test]
    fn test_from_u32() {
        let id: AttributeId = 42.into();
        assert_eq!(id, AttributeId::new(42));
    }

    #[test]
    fn test_hash_and_eq() {
        let mut map = HashMap::new();
        map.insert(ElementId::new(1), "Person");
        map.insert(ElementId::new(2), "Address");

        assert_eq!(map.get(&ElementId::new(1)), Some(&"Person"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_normalized_id_display_is_zero_padded() {
        let id = NormalizedId::from_digest([0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(id.to_string(), "0000000000000001");
        assert_eq!(id.value(), 1);
    }

    #[test]
    fn test_ordering() {
        assert!(RelationshipId::new(1) < RelationshipId::new(2));
        assert!(DiagramId::new(3) > DiagramId::new(2));
    }
}
