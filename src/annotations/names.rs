//! Naming and serialization directives read by the generator.
//!
//! An empty string, `false` or an empty list means the author asked for no
//! override and the generator should use the name or behavior it derives
//! from the model.

use super::{bool_parameter, context_parameter, formatted_parameter, string_parameter};
use crate::concepts::Annotated;

pub const HTTP: &str = "http";
pub const JSON: &str = "json";
pub const GO: &str = "go";

/// Name used on the wire by the HTTP layer (`@http(name = ...)`).
pub fn http_name<C: Annotated + ?Sized>(concept: &C) -> String {
    formatted_parameter(concept, HTTP, "name")
}

/// Name of the serialized JSON field (`@json(name = ...)`).
pub fn json_name<C: Annotated + ?Sized>(concept: &C) -> String {
    string_parameter(concept, JSON, "name")
}

pub fn json_read_only<C: Annotated + ?Sized>(concept: &C) -> bool {
    bool_parameter(concept, JSON, "readOnly")
}

/// Default value literal for the JSON field.
pub fn json_default<C: Annotated + ?Sized>(concept: &C) -> String {
    string_parameter(concept, JSON, "default")
}

pub fn json_required<C: Annotated + ?Sized>(concept: &C) -> bool {
    bool_parameter(concept, JSON, "required")
}

/// Generation contexts the JSON field applies to (`@json(context = "a,b")`).
pub fn json_context<C: Annotated + ?Sized>(concept: &C) -> Vec<String> {
    context_parameter(concept, JSON, "context")
}

/// Identifier override for the Go target (`@go(name = ...)`).
pub fn go_name<C: Annotated + ?Sized>(concept: &C) -> String {
    target_name(concept, GO)
}

/// Identifier override for an arbitrary target language namespace.
pub fn target_name<C: Annotated + ?Sized>(concept: &C, language: &str) -> String {
    formatted_parameter(concept, language, "name")
}
