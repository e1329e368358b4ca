//! Strict lookups that keep the reason a parameter could not be read.
//!
//! The lenient resolver collapses every failure into a default. These
//! variants return a [`LookupError`] instead so tooling can report authoring
//! mistakes such as `@json(readOnly = "true")`.

use super::names::JSON;
use super::split_context;
use crate::concepts::{Annotated, Parameter, Value, ValueKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("annotation `{annotation}` is not present")]
    MissingAnnotation { annotation: String },

    #[error("annotation `{annotation}` has no parameter `{parameter}`")]
    MissingParameter {
        annotation: String,
        parameter: String,
    },

    #[error("parameter `{parameter}` of annotation `{annotation}` has no value")]
    Untyped {
        annotation: String,
        parameter: String,
    },

    #[error(
        "parameter `{parameter}` of annotation `{annotation}` is a {found}, expected {expected}"
    )]
    TypeMismatch {
        annotation: String,
        parameter: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl LookupError {
    /// True for the outcomes lenient lookups treat as "not used".
    pub fn is_absence(&self) -> bool {
        !matches!(self, LookupError::TypeMismatch { .. })
    }
}

/// The raw parameter, distinguishing a missing annotation from a missing
/// parameter.
pub fn parameter<'a, C>(
    concept: &'a C,
    annotation: &str,
    param: &str,
) -> Result<&'a Parameter, LookupError>
where
    C: Annotated + ?Sized,
{
    let found = concept
        .get_annotation(annotation)
        .ok_or_else(|| LookupError::MissingAnnotation {
            annotation: annotation.to_string(),
        })?;
    found
        .parameter(param)
        .ok_or_else(|| LookupError::MissingParameter {
            annotation: annotation.to_string(),
            parameter: param.to_string(),
        })
}

fn value<'a, C>(concept: &'a C, annotation: &str, param: &str) -> Result<&'a Value, LookupError>
where
    C: Annotated + ?Sized,
{
    parameter(concept, annotation, param)?
        .value
        .as_ref()
        .ok_or_else(|| LookupError::Untyped {
            annotation: annotation.to_string(),
            parameter: param.to_string(),
        })
}

fn mismatch(annotation: &str, param: &str, expected: ValueKind, found: &Value) -> LookupError {
    LookupError::TypeMismatch {
        annotation: annotation.to_string(),
        parameter: param.to_string(),
        expected,
        found: found.kind(),
    }
}

pub fn string<'a, C>(concept: &'a C, annotation: &str, param: &str) -> Result<&'a str, LookupError>
where
    C: Annotated + ?Sized,
{
    let v = value(concept, annotation, param)?;
    v.as_str()
        .ok_or_else(|| mismatch(annotation, param, ValueKind::String, v))
}

pub fn bool<C>(concept: &C, annotation: &str, param: &str) -> Result<bool, LookupError>
where
    C: Annotated + ?Sized,
{
    let v = value(concept, annotation, param)?;
    v.as_bool()
        .ok_or_else(|| mismatch(annotation, param, ValueKind::Bool, v))
}

pub fn context<C>(concept: &C, annotation: &str, param: &str) -> Result<Vec<String>, LookupError>
where
    C: Annotated + ?Sized,
{
    string(concept, annotation, param).map(split_context)
}

/// Value type a directive requires. Name directives such as `@http(name)`
/// render any value and cannot mismatch, so they are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    String,
    Bool,
}

const DIRECTIVES: &[(&str, &str, Expect)] = &[
    (JSON, "name", Expect::String),
    (JSON, "readOnly", Expect::Bool),
    (JSON, "default", Expect::String),
    (JSON, "required", Expect::Bool),
    (JSON, "context", Expect::String),
];

/// Every known directive on `concept` whose parameter holds a value of the
/// wrong type. Missing annotations, missing parameters and typeless
/// parameters mean "not used" and are not reported.
pub fn check_directives<C>(concept: &C) -> Vec<LookupError>
where
    C: Annotated + ?Sized,
{
    DIRECTIVES
        .iter()
        .filter_map(|&(annotation, param, expect)| {
            let result = match expect {
                Expect::String => string(concept, annotation, param).map(drop),
                Expect::Bool => bool(concept, annotation, param).map(drop),
            };
            result.err().filter(|e| !e.is_absence())
        })
        .collect()
}
