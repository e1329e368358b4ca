//! Annotation resolution for a model-driven code generator.
//!
//! Generator code asks a concept (type, attribute, method, enum value) for a
//! named annotation and reads typed parameters from it, falling back to a
//! neutral default when the annotation or parameter is missing or mistyped.
//!
//! ## Module Structure
//!
//! - `concepts`: the `Annotated` capability, annotations and concrete concepts
//! - `annotations`: lookups, typed parameter resolution and naming directives
//! - `schema`: model file loading and validation
//! - `report`: every directive resolved for every concept of a model
//! - `render`: JSON and text output of a report

pub mod annotations;
pub mod concepts;
pub mod render;
pub mod report;
pub mod schema;

pub type Result<T> = anyhow::Result<T>;
