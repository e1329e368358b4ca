//! Schema layer: model file schema + validated in-memory concepts.
//!
//! This module stands in for the upstream model parser. It owns:
//! - identifier rules
//! - the JSON model shape and its conversion into `concepts::Model`

pub mod ident;
pub mod model;

pub use model::{ModelSpec, load_model_file};
