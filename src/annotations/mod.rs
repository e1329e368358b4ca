//! Annotation lookup and parameter resolution.
//!
//! Every function here is a pure read. Absence of the annotation, absence of
//! the parameter, a typeless parameter and a parameter of the wrong type all
//! produce the same neutral default. Use [`strict`] to tell them apart.

pub mod names;
pub mod strict;

use crate::concepts::{Annotated, Annotation, Value};

pub use names::{
    GO, HTTP, JSON, go_name, http_name, json_context, json_default, json_name, json_read_only,
    json_required, target_name,
};

/// The annotation with the given name attached to `concept`, if any.
pub fn get_annotation<'a, C>(concept: &'a C, name: &str) -> Option<&'a Annotation>
where
    C: Annotated + ?Sized,
{
    concept.get_annotation(name)
}

/// The typed value of `param` inside `annotation`.
pub fn find_parameter<'a>(annotation: &'a Annotation, param: &str) -> Option<&'a Value> {
    annotation.find_parameter(param)
}

/// Annotation lookup followed by parameter lookup.
pub fn parameter<'a, C>(concept: &'a C, annotation: &str, param: &str) -> Option<&'a Value>
where
    C: Annotated + ?Sized,
{
    get_annotation(concept, annotation).and_then(|a| find_parameter(a, param))
}

/// String value of the parameter, or `""` when it is absent or not a string.
pub fn string_parameter<C>(concept: &C, annotation: &str, param: &str) -> String
where
    C: Annotated + ?Sized,
{
    parameter(concept, annotation, param)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Any typed value of the parameter rendered as text, or `""` when absent.
///
/// Strings come back verbatim and booleans as `true` / `false`.
pub fn formatted_parameter<C>(concept: &C, annotation: &str, param: &str) -> String
where
    C: Annotated + ?Sized,
{
    parameter(concept, annotation, param)
        .map(Value::to_string)
        .unwrap_or_default()
}

/// Boolean value of the parameter, or `false` when it is absent or not a bool.
pub fn bool_parameter<C>(concept: &C, annotation: &str, param: &str) -> bool
where
    C: Annotated + ?Sized,
{
    parameter(concept, annotation, param)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Comma separated string parameter as a list of trimmed tokens.
pub fn context_parameter<C>(concept: &C, annotation: &str, param: &str) -> Vec<String>
where
    C: Annotated + ?Sized,
{
    parameter(concept, annotation, param)
        .and_then(Value::as_str)
        .map(split_context)
        .unwrap_or_default()
}

/// Split a context list as written in an annotation.
///
/// A value that is blank after trimming is an empty list. Otherwise the value
/// is split on every comma and each token is trimmed, keeping written order,
/// duplicates and empty tokens (`" , "` gives two empty tokens).
pub fn split_context(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{Attribute, Type, TypeKind};
    use pretty_assertions::assert_eq;

    fn field() -> Attribute {
        Attribute::new("address", "String").annotate(
            Annotation::new("json")
                .with("name", "addr")
                .with("required", true)
                .with("context", " list , get,list")
                .with_untyped("readOnly"),
        )
    }

    #[test]
    fn test_get_annotation() {
        let f = field();
        assert_eq!(get_annotation(&f, "json").map(|a| a.name()), Some("json"));
        assert!(get_annotation(&f, "http").is_none());
    }

    #[test]
    fn test_string_parameter() {
        let f = field();
        assert_eq!(string_parameter(&f, "json", "name"), "addr");
        assert_eq!(string_parameter(&f, "json", "required"), "");
        assert_eq!(string_parameter(&f, "json", "readOnly"), "");
        assert_eq!(string_parameter(&f, "json", "missing"), "");
        assert_eq!(string_parameter(&f, "http", "name"), "");
    }

    #[test]
    fn test_formatted_parameter() {
        let f = field();
        assert_eq!(formatted_parameter(&f, "json", "name"), "addr");
        assert_eq!(formatted_parameter(&f, "json", "required"), "true");
        assert_eq!(formatted_parameter(&f, "json", "readOnly"), "");
        assert_eq!(formatted_parameter(&f, "go", "name"), "");
    }

    #[test]
    fn test_bool_parameter() {
        let f = field();
        assert!(bool_parameter(&f, "json", "required"));
        assert!(!bool_parameter(&f, "json", "name"));
        assert!(!bool_parameter(&f, "json", "readOnly"));
        assert!(!bool_parameter(&f, "http", "required"));
    }

    #[test]
    fn test_context_parameter_preserves_order_and_duplicates() {
        let f = field();
        assert_eq!(
            context_parameter(&f, "json", "context"),
            vec!["list", "get", "list"]
        );
        assert!(context_parameter(&f, "json", "required").is_empty());
        assert!(context_parameter(&f, "json", "missing").is_empty());
    }

    #[test]
    fn test_split_context() {
        assert_eq!(split_context("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_context("a"), vec!["a"]);
        assert_eq!(split_context("a,,b"), vec!["a", "", "b"]);
        assert!(split_context("").is_empty());
        assert!(split_context("   ").is_empty());
        assert_eq!(split_context(" , "), vec!["", ""]);
    }

    #[test]
    fn test_resolves_through_plain_annotation_list() {
        let t = Type::new("Cluster", TypeKind::Class)
            .annotate(Annotation::new("http").with("name", "clusters"));
        assert_eq!(string_parameter(&t.annotations, "http", "name"), "clusters");
        assert_eq!(string_parameter(&t, "http", "name"), "clusters");
    }
}
