//! Conversion of human names into identifier fragments.
//!
//! Modelers name things the way they speak ("Postal Code"); URIs need
//! `postalCode` for properties and `PostalCode` for classes. The conversion
//! upper-cases the first letter of every word, and every letter that already
//! was upper case, then removes the whitespace.

use std::sync::LazyLock;

use regex::Regex;

use glossa_core::model::ModelElement;

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, Subject};

static WORD_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^\w|[A-Z]|\b\w)").expect("word start pattern is a valid regex")
});

/// Letter case of the first character of an identifier fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCase {
    /// `postalCode`, used for attributes and relationships.
    Camel,
    /// `PostalCode`, used for classes, data types and enumerations.
    Pascal,
}

/// Converts `text` into an identifier fragment.
///
/// # Examples
///
/// ```
/// use glossa_resolver::case::{IdentifierCase, convert_case};
///
/// assert_eq!(convert_case("Postal Code", IdentifierCase::Camel), "postalCode");
/// assert_eq!(convert_case("Postal Code", IdentifierCase::Pascal), "PostalCode");
/// ```
pub fn convert_case(text: &str, case: IdentifierCase) -> String {
    let mut converted = String::with_capacity(text.len());
    let mut last = 0;

    for word_start in WORD_START.find_iter(text) {
        converted.push_str(&text[last..word_start.start()]);
        if case == IdentifierCase::Camel && word_start.start() == 0 {
            converted.extend(word_start.as_str().chars().flat_map(char::to_lowercase));
        } else {
            converted.extend(word_start.as_str().chars().flat_map(char::to_uppercase));
        }
        last = word_start.end();
    }
    converted.push_str(&text[last..]);

    converted.retain(|c| !c.is_whitespace());
    converted
}

/// Converts the name of `entity` into an identifier fragment.
///
/// An empty or whitespace-only `text` yields `""` and an error diagnostic.
pub fn to_identifier_fragment<E>(
    entity: &E,
    text: &str,
    case: IdentifierCase,
    diagnostics: &mut DiagnosticCollector,
) -> String
where
    E: ModelElement + ?Sized,
{
    if text.trim().is_empty() {
        diagnostics.emit(
            Diagnostic::error("cannot derive an identifier from an empty name")
                .with_code(ErrorCode::E200)
                .with_subject(Subject::of(entity))
                .with_help("give the entity a name or add a `name` tag"),
        );
        return String::new();
    }

    convert_case(text, case)
}

#[cfg(test)]
mod tests {
    use glossa_core::{
        identifier::{AttributeId, ElementId},
        model::Attribute,
    };

    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(convert_case("Postal Code", IdentifierCase::Camel), "postalCode");
        assert_eq!(convert_case("birth date", IdentifierCase::Camel), "birthDate");
        assert_eq!(convert_case("HasPart", IdentifierCase::Camel), "hasPart");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(convert_case("postal code", IdentifierCase::Pascal), "PostalCode");
        assert_eq!(convert_case("Address", IdentifierCase::Pascal), "Address");
    }

    #[test]
    fn test_existing_capitals_are_kept() {
        assert_eq!(convert_case("URI reference", IdentifierCase::Camel), "uRIReference");
        assert_eq!(convert_case("isPartOf", IdentifierCase::Pascal), "IsPartOf");
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(convert_case("straat naam", IdentifierCase::Pascal), "StraatNaam");
        assert_eq!(convert_case("één keer", IdentifierCase::Camel), "éénKeer");
    }

    #[test]
    fn test_leading_whitespace_in_camel_case() {
        assert_eq!(convert_case(" postal code", IdentifierCase::Camel), "PostalCode");
    }

    #[test]
    fn test_empty_name_reports_error() {
        let attribute = Attribute::new(AttributeId::new(1), "{A1}", "", ElementId::new(1));
        let mut diagnostics = DiagnosticCollector::new();

        let fragment =
            to_identifier_fragment(&attribute, "  ", IdentifierCase::Camel, &mut diagnostics);

        assert_eq!(fragment, "");
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.finish()[0].code(), Some(ErrorCode::E200));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn fragment_has_no_whitespace(text in "[a-zA-Z ]{0,24}") {
            let camel = convert_case(&text, IdentifierCase::Camel);
            let pascal = convert_case(&text, IdentifierCase::Pascal);

            prop_assert!(!camel.contains(' '));
            prop_assert!(!pascal.contains(' '));
        }

        #[test]
        fn cases_differ_only_in_first_letter(text in "[a-z][a-z ]{0,16}") {
            let camel = convert_case(&text, IdentifierCase::Camel);
            let pascal = convert_case(&text, IdentifierCase::Pascal);

            prop_assert_eq!(camel.len(), pascal.len());
            prop_assert_eq!(&camel[1..], &pascal[1..]);
            prop_assert_eq!(camel[..1].to_uppercase(), pascal[..1].to_string());
        }

        #[test]
        fn conversion_is_deterministic(text in "\\PC{0,24}") {
            prop_assert_eq!(
                convert_case(&text, IdentifierCase::Pascal),
                convert_case(&text, IdentifierCase::Pascal)
            );
        }
    }
}
