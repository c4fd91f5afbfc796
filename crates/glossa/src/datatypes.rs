//! Built-in datatypes.
//!
//! Attribute types that name one of these datatypes get the matching XML
//! Schema or RDF datatype as range, without a model element behind them.

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// Type name to `(namespace, local name)`.
const BUILTIN: &[(&str, &str, &str)] = &[
    ("Boolean", XSD, "boolean"),
    ("Date", XSD, "date"),
    ("DateTime", XSD, "dateTime"),
    ("Decimal", XSD, "decimal"),
    ("Double", XSD, "double"),
    ("Duration", XSD, "duration"),
    ("HTML", RDF, "HTML"),
    ("Integer", XSD, "integer"),
    ("LangString", RDF, "langString"),
    ("Literal", RDFS, "Literal"),
    ("Month", XSD, "gMonth"),
    ("MonthDay", XSD, "gMonthDay"),
    ("String", XSD, "string"),
    ("Time", XSD, "time"),
    ("URI", XSD, "anyURI"),
    ("Year", XSD, "gYear"),
    ("YearMonth", XSD, "gYearMonth"),
];

/// Returns the datatype URI for a built-in type name.
///
/// Type names are matched exactly.
///
/// # Examples
///
/// ```
/// use glossa::datatypes::builtin_datatype;
///
/// assert_eq!(
///     builtin_datatype("String").as_deref(),
///     Some("http://www.w3.org/2001/XMLSchema#string")
/// );
/// assert_eq!(builtin_datatype("Person"), None);
/// ```
pub fn builtin_datatype(type_name: &str) -> Option<String> {
    BUILTIN
        .iter()
        .find(|(name, _, _)| *name == type_name)
        .map(|(_, namespace, local)| format!("{namespace}{local}"))
}
