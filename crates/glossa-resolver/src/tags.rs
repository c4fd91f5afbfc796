//! Tag resolution with fallback chains.
//!
//! [`TagResolver`] answers "what is the value of tag X on this entity"
//! the way every other component expects: first occurrence wins, duplicates
//! and absences are reported, and language-dependent tags are grouped by
//! language code. Application profiles read the `ap-` variants first.

use indexmap::IndexMap;
use log::debug;

use glossa_core::{model::ModelElement, specification::SpecificationKind, tag::TagName};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, Subject};

/// Language code to value, in tag order.
///
/// The language-neutral value (a tag without a language suffix) uses the
/// empty code `""`.
pub type LanguageMap = IndexMap<String, String>;

/// Resolves tag values on model entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagResolver {
    specification: SpecificationKind,
}

impl TagResolver {
    pub fn new(specification: SpecificationKind) -> Self {
        Self { specification }
    }

    pub fn specification(&self) -> SpecificationKind {
        self.specification
    }

    /// Returns the value of `tag`, trying `fallback` when it is absent.
    ///
    /// When neither tag is present, `default` is returned and a warning is
    /// emitted. A repeated tag resolves to its first occurrence.
    pub fn resolve<E>(
        &self,
        entity: &E,
        tag: TagName,
        default: &str,
        fallback: Option<TagName>,
        diagnostics: &mut DiagnosticCollector,
    ) -> String
    where
        E: ModelElement + ?Sized,
    {
        if let Some(value) = self.lookup(entity, tag, diagnostics) {
            return value.to_string();
        }

        match fallback {
            Some(fallback) => {
                debug!(tag:% = tag, fallback:% = fallback; "Tag missing, trying fallback");
                self.resolve(entity, fallback, default, None, diagnostics)
            }
            None => {
                diagnostics.emit(
                    Diagnostic::warning(format!(
                        "tag `{tag}` is missing, using default `{default}`"
                    ))
                    .with_code(ErrorCode::E100)
                    .with_subject(Subject::of(entity)),
                );
                default.to_string()
            }
        }
    }

    /// Returns the value of an optional tag.
    ///
    /// Absence is not reported. A repeated tag resolves to its first
    /// occurrence with a warning.
    pub fn lookup<'e, E>(
        &self,
        entity: &'e E,
        tag: TagName,
        diagnostics: &mut DiagnosticCollector,
    ) -> Option<&'e str>
    where
        E: ModelElement + ?Sized,
    {
        let mut values = entity.tags().get_all(tag);
        let first = values.next()?;

        let discarded = values.count();
        if discarded > 0 {
            diagnostics.emit(
                Diagnostic::warning(format!(
                    "tag `{tag}` occurs {} times, using `{first}`",
                    discarded + 1
                ))
                .with_code(ErrorCode::E101)
                .with_subject(Subject::of(entity))
                .with_help("remove the duplicate tags"),
            );
        }

        Some(first)
    }

    /// Collects the values of a language-dependent tag per language.
    ///
    /// Whitespace-only values are dropped. A second value for a language
    /// already seen is discarded. When no tag matches, `fallback` is tried;
    /// without a fallback the map stays empty and a warning is emitted.
    pub fn language_map<E>(
        &self,
        entity: &E,
        tag: TagName,
        fallback: Option<TagName>,
        diagnostics: &mut DiagnosticCollector,
    ) -> LanguageMap
    where
        E: ModelElement + ?Sized,
    {
        let mut values = entity.tags().language_values(tag).peekable();

        if values.peek().is_none() {
            return match fallback {
                Some(fallback) => {
                    debug!(tag:% = tag, fallback:% = fallback; "Language tag missing, trying fallback");
                    self.language_map(entity, fallback, None, diagnostics)
                }
                None => {
                    diagnostics.emit(
                        Diagnostic::warning(format!("tag `{tag}` is missing for every language"))
                            .with_code(ErrorCode::E100)
                            .with_subject(Subject::of(entity)),
                    );
                    LanguageMap::new()
                }
            };
        }

        let mut map = LanguageMap::new();
        for (language, value) in values {
            let value = value.trim();
            if value.is_empty() {
                diagnostics.emit(
                    Diagnostic::warning(format!(
                        "tag `{tag}` for language `{language}` is empty and was dropped"
                    ))
                    .with_code(ErrorCode::E102)
                    .with_subject(Subject::of(entity)),
                );
                continue;
            }

            if map.contains_key(language) {
                diagnostics.emit(
                    Diagnostic::warning(format!(
                        "tag `{tag}` has several values for language `{language}`, keeping the first"
                    ))
                    .with_code(ErrorCode::E103)
                    .with_subject(Subject::of(entity)),
                );
                continue;
            }

            map.insert(language.to_string(), value.to_string());
        }

        map
    }

    /// Labels per language for the configured specification kind.
    pub fn label<E>(&self, entity: &E, diagnostics: &mut DiagnosticCollector) -> LanguageMap
    where
        E: ModelElement + ?Sized,
    {
        self.language_dependent(entity, TagName::Label, diagnostics)
    }

    /// Definitions per language for the configured specification kind.
    pub fn definition<E>(&self, entity: &E, diagnostics: &mut DiagnosticCollector) -> LanguageMap
    where
        E: ModelElement + ?Sized,
    {
        self.language_dependent(entity, TagName::Definition, diagnostics)
    }

    /// Usage notes per language for the configured specification kind.
    pub fn usage_note<E>(&self, entity: &E, diagnostics: &mut DiagnosticCollector) -> LanguageMap
    where
        E: ModelElement + ?Sized,
    {
        self.language_dependent(entity, TagName::UsageNote, diagnostics)
    }

    /// Returns whether the entity carries a truthy `ignore` tag.
    ///
    /// `true`, `yes` and `1` are truthy, in any letter case. Every other
    /// value, and the absence of the tag, means the entity is kept.
    pub fn is_ignored<E>(&self, entity: &E, diagnostics: &mut DiagnosticCollector) -> bool
    where
        E: ModelElement + ?Sized,
    {
        self.lookup(entity, TagName::Ignore, diagnostics)
            .map(|value| {
                let value = value.trim();
                ["true", "yes", "1"]
                    .iter()
                    .any(|truthy| value.eq_ignore_ascii_case(truthy))
            })
            .unwrap_or(false)
    }

    fn language_dependent<E>(
        &self,
        entity: &E,
        tag: TagName,
        diagnostics: &mut DiagnosticCollector,
    ) -> LanguageMap
    where
        E: ModelElement + ?Sized,
    {
        match (self.specification, tag.application_profile_variant()) {
            (SpecificationKind::ApplicationProfile, Some(variant)) => {
                self.language_map(entity, variant, Some(tag), diagnostics)
            }
            _ => self.language_map(entity, tag, None, diagnostics),
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
    use crate::error::Severity;

    fn element() -> Element {
        Element::new(
            ElementId::new(1),
            "{E1}",
            "Person",
            PackageId::new(1),
            ElementKind::Class,
        )
    }

    #[test]
    fn test_resolve_present() {
        let element = element().with_tag("baseURI", "https://ex.org/a#");
        let mut diagnostics = DiagnosticCollector::new();

        let value = TagResolver::default().resolve(
            &element,
            TagName::BaseUri,
            "https://fixme.com#",
            None,
            &mut diagnostics,
        );

        assert_eq!(value, "https://ex.org/a#");
        assert!(diagnostics.finish().is_empty());
    }

    #[test]
    fn test_resolve_missing_uses_default_and_warns() {
        let mut diagnostics = DiagnosticCollector::new();

        let value = TagResolver::default().resolve(
            &element(),
            TagName::BaseUri,
            "https://fixme.com#",
            None,
            &mut diagnostics,
        );

        assert_eq!(value, "https://fixme.com#");
        let diagnostics = diagnostics.finish();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code(), Some(ErrorCode::E100));
        assert_eq!(diagnostics[0].severity(), Severity::Warning);
    }

    #[test]
    fn test_resolve_uses_fallback() {
        let element = element().with_tag("label", "Persoon");
        let mut diagnostics = DiagnosticCollector::new();

        let value = TagResolver::default().resolve(
            &element,
            TagName::ApLabel,
            "",
            Some(TagName::Label),
            &mut diagnostics,
        );

        assert_eq!(value, "Persoon");
        assert!(diagnostics.finish().is_empty());
    }

    #[test]
    fn test_lookup_duplicate_returns_first() {
        let element = element()
            .with_tag("uri", "https://a.org/Person")
            .with_tag("uri", "https://b.org/Person");
        let mut diagnostics = DiagnosticCollector::new();

        let value = TagResolver::default().lookup(&element, TagName::ExternalUri, &mut diagnostics);

        assert_eq!(value, Some("https://a.org/Person"));
        assert_eq!(diagnostics.finish()[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_lookup_missing_is_silent() {
        let element = element();
        let mut diagnostics = DiagnosticCollector::new();

        let value = TagResolver::default().lookup(&element, TagName::ParentUri, &mut diagnostics);

        assert_eq!(value, None);
        assert!(diagnostics.finish().is_empty());
    }

    #[test]
    fn test_language_map_groups_by_last_segment() {
        let element = element()
            .with_tag("label-nl", "Persoon")
            .with_tag("label-en", "Person")
            .with_tag("label", "Neutral");
        let mut diagnostics = DiagnosticCollector::new();

        let labels = TagResolver::default().label(&element, &mut diagnostics);

        assert_eq!(labels.get("nl").map(String::as_str), Some("Persoon"));
        assert_eq!(labels.get("en").map(String::as_str), Some("Person"));
        assert_eq!(labels.get("").map(String::as_str), Some("Neutral"));
        assert!(diagnostics.finish().is_empty());
    }

    #[test]
    fn test_language_map_drops_empty_and_keeps_first() {
        let element = element()
            .with_tag("definition-nl", "   ")
            .with_tag("definition-en", "A human being.")
            .with_tag("definition-en", "Someone.");
        let mut diagnostics = DiagnosticCollector::new();

        let definitions = TagResolver::default().definition(&element, &mut diagnostics);

        assert_eq!(definitions.len(), 1);
        assert_eq!(
            definitions.get("en").map(String::as_str),
            Some("A human being.")
        );

        let codes: Vec<_> = diagnostics
            .finish()
            .iter()
            .filter_map(Diagnostic::code)
            .collect();
        assert_eq!(codes, vec![ErrorCode::E102, ErrorCode::E103]);
    }

    #[test]
    fn test_language_map_missing_warns() {
        let mut diagnostics = DiagnosticCollector::new();

        let notes = TagResolver::default().usage_note(&element(), &mut diagnostics);

        assert!(notes.is_empty());
        assert_eq!(diagnostics.warning_count(), 1);
    }

    #[test]
    fn test_application_profile_prefers_ap_tags() {
        let element = element()
            .with_tag("label-nl", "Persoon")
            .with_tag("ap-label-nl", "Persoon (AP)");
        let resolver = TagResolver::new(SpecificationKind::ApplicationProfile);
        let mut diagnostics = DiagnosticCollector::new();

        let labels = resolver.label(&element, &mut diagnostics);

        assert_eq!(labels.get("nl").map(String::as_str), Some("Persoon (AP)"));
    }

    #[test]
    fn test_application_profile_falls_back_to_plain_tags() {
        let element = element().with_tag("label-nl", "Persoon");
        let resolver = TagResolver::new(SpecificationKind::ApplicationProfile);
        let mut diagnostics = DiagnosticCollector::new();

        let labels = resolver.label(&element, &mut diagnostics);

        assert_eq!(labels.get("nl").map(String::as_str), Some("Persoon"));
        assert!(diagnostics.finish().is_empty());
    }

    #[test]
    fn test_vocabulary_ignores_ap_tags() {
        let element = element().with_tag("ap-label-nl", "Persoon (AP)");
        let mut diagnostics = DiagnosticCollector::new();

        let labels = TagResolver::new(SpecificationKind::Vocabulary).label(&element, &mut diagnostics);

        assert!(labels.is_empty());
    }

    #[test]
    fn test_is_ignored_truthy_values() {
        let resolver = TagResolver::default();
        let mut diagnostics = DiagnosticCollector::new();

        for value in ["true", "TRUE", "Yes", "1"] {
            let element = element().with_tag("ignore", value);
            assert!(resolver.is_ignored(&element, &mut diagnostics), "{value}");
        }

        for value in ["false", "no", "0", ""] {
            let element = element().with_tag("ignore", value);
            assert!(!resolver.is_ignored(&element, &mut diagnostics), "{value}");
        }

        assert!(!resolver.is_ignored(&element(), &mut diagnostics));
    }
}
