//! Tags attached to model entities.
//!
//! Editors annotate packages, elements, attributes and relationships with
//! free-form `(name, value)` pairs. A name may repeat, for instance to carry
//! one label per language (`label-nl`, `label-en`). [`TagStore`] keeps the
//! pairs in source order; lookups go through the closed [`TagName`]
//! enumeration so the recognized vocabulary lives in one place.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The tag names the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    /// `baseURI`: base URI of a package, ending in `/` or `#`.
    BaseUri,
    /// `baseURIabbrev`: preferred prefix for the package base URI.
    BaseUriAbbreviation,
    /// `ontologyURI`: URI of the ontology document a package publishes.
    OntologyUri,
    /// `package`: name of the package that defines an entity.
    DefiningPackage,
    /// `uri`: externally curated URI, used verbatim.
    ExternalUri,
    /// `name`: local name overriding the entity name.
    LocalName,
    /// `ignore`: removes the entity from the conversion.
    Ignore,
    Label,
    ApLabel,
    Definition,
    ApDefinition,
    UsageNote,
    ApUsageNote,
    /// `parentURI`: URI of the property this one specializes.
    ParentUri,
    /// `range`: explicit range URI of an attribute.
    Range,
    /// `literal`: marks a range as a literal (datatype) range.
    IsLiteral,
    /// `ap-codelist`: code list backing an enumeration.
    ApCodelist,
    /// `source-` prefix of the legacy association class scheme.
    AssociationSourcePrefix,
    /// `source-rev-` prefix of the legacy association class scheme.
    AssociationSourceRevPrefix,
    /// `target-` prefix of the legacy association class scheme.
    AssociationDestinationPrefix,
    /// `target-rev-` prefix of the legacy association class scheme.
    AssociationDestinationRevPrefix,
}

impl TagName {
    /// Prefixes of the deprecated association class tagging scheme, in
    /// positional order: source, source reverse, destination, destination
    /// reverse.
    pub const LEGACY_ASSOCIATION_PREFIXES: [TagName; 4] = [
        TagName::AssociationSourcePrefix,
        TagName::AssociationSourceRevPrefix,
        TagName::AssociationDestinationPrefix,
        TagName::AssociationDestinationRevPrefix,
    ];

    /// Returns the literal tag name as written in the model.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BaseUri => "baseURI",
            Self::BaseUriAbbreviation => "baseURIabbrev",
            Self::OntologyUri => "ontologyURI",
            Self::DefiningPackage => "package",
            Self::ExternalUri => "uri",
            Self::LocalName => "name",
            Self::Ignore => "ignore",
            Self::Label => "label",
            Self::ApLabel => "ap-label",
            Self::Definition => "definition",
            Self::ApDefinition => "ap-definition",
            Self::UsageNote => "usageNote",
            Self::ApUsageNote => "ap-usageNote",
            Self::ParentUri => "parentURI",
            Self::Range => "range",
            Self::IsLiteral => "literal",
            Self::ApCodelist => "ap-codelist",
            Self::AssociationSourcePrefix => "source-",
            Self::AssociationSourceRevPrefix => "source-rev-",
            Self::AssociationDestinationPrefix => "target-",
            Self::AssociationDestinationRevPrefix => "target-rev-",
        }
    }

    /// Returns the `ap-` prefixed variant used by application profiles.
    ///
    /// Only the language-dependent tags have one.
    pub fn application_profile_variant(self) -> Option<TagName> {
        match self {
            Self::Label => Some(Self::ApLabel),
            Self::Definition => Some(Self::ApDefinition),
            Self::UsageNote => Some(Self::ApUsageNote),
            _ => None,
        }
    }

    /// Returns the prefixes that are longer versions of this prefix.
    ///
    /// `source-rev-label` starts with `source-` as well, so the `source-`
    /// subset must skip it.
    pub fn shadowing_prefixes(self) -> &'static [TagName] {
        match self {
            Self::AssociationSourcePrefix => &[Self::AssociationSourceRevPrefix],
            Self::AssociationDestinationPrefix => &[Self::AssociationDestinationRevPrefix],
            _ => &[],
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(name, value)` annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of tags belonging to one entity.
///
/// # Examples
///
/// ```
/// use glossa_core::tag::{TagName, TagStore};
///
/// let tags = TagStore::from_pairs([("label-nl", "Persoon"), ("label-en", "Person")]);
/// let labels: Vec<_> = tags.language_values(TagName::Label).collect();
/// assert_eq!(labels, vec![("nl", "Persoon"), ("en", "Person")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagStore(Vec<Tag>);

impl TagStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `(name, value)` pairs, keeping their order.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| Tag::new(name, value))
                .collect(),
        )
    }

    /// Appends a tag.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push(Tag::new(name, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value of the first tag named `name`.
    pub fn get(&self, name: TagName) -> Option<&str> {
        self.get_all(name).next()
    }

    /// Returns the values of every tag named `name`, in order.
    pub fn get_all(&self, name: TagName) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(move |tag| tag.name == name.as_str())
            .map(|tag| tag.value.as_str())
    }

    /// Returns whether at least one tag named `name` exists.
    pub fn contains(&self, name: TagName) -> bool {
        self.get(name).is_some()
    }

    /// Returns whether any tag name starts with the given prefix.
    pub fn has_prefix(&self, prefix: TagName) -> bool {
        self.0.iter().any(|tag| tag.name.starts_with(prefix.as_str()))
    }

    /// Returns the tags whose name starts with `prefix`, with the prefix
    /// removed from the name.
    ///
    /// Tags claimed by a longer prefix (see [`TagName::shadowing_prefixes`])
    /// are left out.
    pub fn strip_prefix(&self, prefix: TagName) -> TagStore {
        let shadowing = prefix.shadowing_prefixes();

        Self(
            self.0
                .iter()
                .filter(|tag| {
                    !shadowing
                        .iter()
                        .any(|longer| tag.name.starts_with(longer.as_str()))
                })
                .filter_map(|tag| {
                    tag.name
                        .strip_prefix(prefix.as_str())
                        .map(|name| Tag::new(name, tag.value.clone()))
                })
                .collect(),
        )
    }

    /// Iterates over `(language, value)` pairs of a language-dependent tag.
    ///
    /// A tag matches when its name equals `name` or continues with a `-`
    /// suffix. The language code is the text after the last hyphen; an exact
    /// match yields the language-neutral code `""`.
    pub fn language_values(&self, name: TagName) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(move |tag| {
            language_code(&tag.name, name.as_str()).map(|code| (code, tag.value.as_str()))
        })
    }
}

impl<'a> IntoIterator for &'a TagStore {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extracts the language code of `tag_name` relative to the base name.
fn language_code<'a>(tag_name: &'a str, base: &str) -> Option<&'a str> {
    let rest = tag_name.strip_prefix(base)?;
    if rest.is_empty() {
        return Some("");
    }

    let suffix = rest.strip_prefix('-')?;
    Some(suffix.rsplit('-').next().unwrap_or(suffix))
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_language_code_is_last_segment(
        base: &str,
        segments: &[String],
    ) -> Result<(), TestCaseError> {
        let tag_name = format!("{base}-{}", segments.join("-"));
        let code = language_code(&tag_name, base);

        prop_assert_eq!(code, segments.last().map(String::as_str));
        Ok(())
    }

    proptest! {
        #[test]
        fn language_code_is_last_segment(
            segments in prop::collection::vec("[a-zA-Z]{1,4}", 1..4),
        ) {
            check_language_code_is_last_segment("label", &segments)?;
        }
    }
}
