//! The kind of document being produced.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Selects which tag variants the resolver reads.
///
/// A vocabulary reads the plain tags (`label`, `definition`, `usageNote`).
/// An application profile prefers their `ap-` variants and falls back to
/// the plain tags.
///
/// # Examples
///
/// ```
/// use glossa_core::specification::SpecificationKind;
///
/// let kind: SpecificationKind = "ApplicationProfile".parse().unwrap();
/// assert_eq!(kind, SpecificationKind::ApplicationProfile);
/// assert_eq!(SpecificationKind::default(), SpecificationKind::Vocabulary);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecificationKind {
    #[default]
    Vocabulary,
    ApplicationProfile,
}

impl FromStr for SpecificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Vocabulary" | "vocabulary" => Ok(Self::Vocabulary),
            "ApplicationProfile" | "application-profile" => Ok(Self::ApplicationProfile),
            other => Err(format!("Unknown specification kind: {other}")),
        }
    }
}

impl fmt::Display for SpecificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vocabulary => write!(f, "Vocabulary"),
            Self::ApplicationProfile => write!(f, "ApplicationProfile"),
        }
    }
}
