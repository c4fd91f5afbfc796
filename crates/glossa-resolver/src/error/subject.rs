//! The model entity a diagnostic is about.
//!
//! Model entities have no source text, so a [`Subject`] takes the place of a
//! source span: it names the entity by kind, GUID and (when known) name and
//! package path.

use std::fmt;

use glossa_core::model::{EntityKind, ModelElement};

/// Identifies the entity a [`Diagnostic`](super::Diagnostic) refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    kind: EntityKind,
    guid: String,
    name: Option<String>,
    package: Option<String>,
}

impl Subject {
    /// Creates a subject describing `entity`.
    pub fn of<E>(entity: &E) -> Self
    where
        E: ModelElement + ?Sized,
    {
        Self {
            kind: entity.kind(),
            guid: entity.guid().to_string(),
            name: entity.name().map(str::to_string),
            package: None,
        }
    }

    /// Places the subject in a package, given as a `Root:Child` path.
    pub fn in_package(mut self, path: Option<String>) -> Self {
        self.package = path;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} `{}` ({})", self.kind, name, self.guid)?,
            None => write!(f, "{} {}", self.kind, self.guid)?,
        }
        if let Some(package) = &self.package {
            write!(f, " in {package}")?;
        }
        Ok(())
    }
}
