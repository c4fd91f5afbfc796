//! Scope classification.

use glossa_core::{model::ModelElement, scope::Scope, tag::TagName};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, Subject};

/// Classifies resolved URIs relative to a package and a publication domain.
///
/// # Examples
///
/// ```
/// use glossa_core::{identifier::PackageId, model::Package, scope::Scope};
/// use glossa_resolver::{error::DiagnosticCollector, scope::ScopeClassifier};
///
/// let classifier = ScopeClassifier::new(Some("https://data.ex.org/"));
/// let package = Package::new(PackageId::new(1), "{P1}", "Pets");
/// let mut diagnostics = DiagnosticCollector::new();
///
/// let scope = classifier.classify(
///     &package,
///     "https://data.ex.org/pets#",
///     Some("https://data.ex.org/people#Person"),
///     &mut diagnostics,
/// );
/// assert_eq!(scope, Scope::InPublicationEnvironment);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScopeClassifier {
    target_domain: Option<String>,
}

impl ScopeClassifier {
    /// Creates a classifier. An empty target domain counts as none.
    pub fn new(target_domain: Option<&str>) -> Self {
        Self {
            target_domain: target_domain
                .filter(|domain| !domain.is_empty())
                .map(str::to_string),
        }
    }

    pub fn target_domain(&self) -> Option<&str> {
        self.target_domain.as_deref()
    }

    /// Classifies `entity` given its resolved URI.
    ///
    /// An entity with a `uri` tag is external whatever its URI looks like.
    /// Without a resolved URI the scope is undefined and a warning is
    /// emitted.
    pub fn classify<E>(
        &self,
        entity: &E,
        package_base_uri: &str,
        resolved_uri: Option<&str>,
        diagnostics: &mut DiagnosticCollector,
    ) -> Scope
    where
        E: ModelElement + ?Sized,
    {
        if entity.tags().contains(TagName::ExternalUri) {
            return Scope::External;
        }

        let Some(uri) = resolved_uri else {
            diagnostics.emit(
                Diagnostic::warning("no URI was resolved, scope is undefined")
                    .with_code(ErrorCode::E500)
                    .with_subject(Subject::of(entity)),
            );
            return Scope::Undefined;
        };

        if uri.starts_with(package_base_uri) {
            return Scope::InPackage;
        }

        match &self.target_domain {
            Some(domain) if uri.starts_with(domain.as_str()) => Scope::InPublicationEnvironment,
            _ => Scope::External,
        }
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::{
        identifier::{ElementId, PackageId},
        model::{Element, ElementKind},
    };

    use super::*;

    const PACKAGE: &str = "https://data.ex.org/ns/pets#";
    const DOMAIN: &str = "https://data.ex.org/";

    fn element() -> Element {
        Element::new(
            ElementId::new(1),
            "{E1}",
            "Dog",
            PackageId::new(1),
            ElementKind::Class,
        )
    }

    fn classify(element: &Element, uri: Option<&str>, domain: Option<&str>) -> Scope {
        let mut diagnostics = DiagnosticCollector::new();
        ScopeClassifier::new(domain).classify(element, PACKAGE, uri, &mut diagnostics)
    }

    #[test]
    fn test_in_package() {
        let scope = classify(&element(), Some("https://data.ex.org/ns/pets#Dog"), Some(DOMAIN));
        assert_eq!(scope, Scope::InPackage);
    }

    #[test]
    fn test_in_publication_environment() {
        let scope = classify(&element(), Some("https://data.ex.org/ns/people#Person"), Some(DOMAIN));
        assert_eq!(scope, Scope::InPublicationEnvironment);
    }

    #[test]
    fn test_external() {
        let scope = classify(&element(), Some("http://schema.org/Person"), Some(DOMAIN));
        assert_eq!(scope, Scope::External);
    }

    #[test]
    fn test_uri_tag_is_external() {
        let element = element().with_tag("uri", "https://data.ex.org/ns/pets#Dog");
        let scope = classify(&element, Some("https://data.ex.org/ns/pets#Dog"), Some(DOMAIN));
        assert_eq!(scope, Scope::External);
    }

    #[test]
    fn test_without_domain_skips_publication_check() {
        let scope = classify(&element(), Some("https://data.ex.org/ns/people#Person"), None);
        assert_eq!(scope, Scope::External);

        let scope = classify(&element(), Some("https://data.ex.org/ns/people#Person"), Some(""));
        assert_eq!(scope, Scope::External);
    }

    #[test]
    fn test_undefined_warns() {
        let mut diagnostics = DiagnosticCollector::new();

        let scope = ScopeClassifier::default().classify(&element(), PACKAGE, None, &mut diagnostics);

        assert_eq!(scope, Scope::Undefined);
        assert_eq!(diagnostics.finish()[0].code(), Some(ErrorCode::E500));
    }
}
