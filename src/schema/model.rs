//! Model file (model.json): types, their members and annotations.
//!
//! JSON shape:
//! {
//!   "types": [
//!     {
//!       "name": "Address",
//!       "kind": "struct",                       // class | struct | enum | list | scalar
//!       "annotations": [
//!         { "name": "http", "parameters": { "name": "addr" } },
//!         { "name": "json", "parameters": { "name": "address", "required": true } }
//!       ],
//!       "attributes": [ { "name": "street", "type": "String", "annotations": [] } ],
//!       "methods":    [ { "name": "get", "annotations": [] } ],
//!       "values":     [ { "name": "home", "annotations": [] } ]
//!     }
//!   ]
//! }
//!
//! Parameter values are strings, booleans or `null` (written without a value).
//! Parameter order is kept as written. Annotation lists may repeat a name;
//! lookups take the first one.

use crate::concepts::{
    Annotation, Attribute, EnumValue, Method, Model, Parameter, Type, TypeKind, Value,
};
use crate::schema::ident::Identifiers;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    #[serde(default)]
    pub types: Vec<RawType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawType {
    pub name: String,

    #[serde(default = "default_kind")]
    pub kind: TypeKind,

    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,

    #[serde(default)]
    pub attributes: Vec<RawAttribute>,

    #[serde(default)]
    pub methods: Vec<RawMember>,

    #[serde(default)]
    pub values: Vec<RawMember>,
}

fn default_kind() -> TypeKind {
    TypeKind::Class
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAttribute {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
}

/// Methods and enum values only carry a name and annotations.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub name: String,

    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAnnotation {
    pub name: String,

    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

/// Read and validate a model file.
pub fn load_model_file(path: &str) -> anyhow::Result<Model> {
    let text = fs::read_to_string(path).with_context(|| format!("read model file {}", path))?;
    let spec: ModelSpec =
        serde_json::from_str(&text).with_context(|| format!("parse model file {}", path))?;
    spec.validate_and_build()
        .with_context(|| format!("invalid model file {}", path))
}

impl ModelSpec {
    /// Validate names and build the concept model:
    /// - every name is an identifier
    /// - type names are unique, member names are unique per type
    /// - parameter values are strings, booleans or null
    pub fn validate_and_build(&self) -> anyhow::Result<Model> {
        let ids = Identifiers::new()?;

        let mut seen = BTreeSet::new();
        let mut types = Vec::with_capacity(self.types.len());
        for raw in &self.types {
            ids.check(&raw.name, "type")?;
            if !seen.insert(raw.name.as_str()) {
                bail!("duplicate type name in model: {}", raw.name);
            }
            types.push(build_type(&ids, raw)?);
        }

        if types.is_empty() {
            bail!("model contained no types");
        }

        log::debug!("loaded model with {} types", types.len());
        Ok(Model { types })
    }
}

fn build_type(ids: &Identifiers, raw: &RawType) -> anyhow::Result<Type> {
    let owner = raw.name.as_str();
    let mut ty = Type::new(owner, raw.kind);
    ty.annotations = build_annotations(ids, owner, &raw.annotations)?;

    // Attributes, methods and values share one namespace per type.
    let mut members = BTreeSet::new();
    let mut claim = |name: &str, what: &str| -> anyhow::Result<()> {
        ids.check(name, what)?;
        if !members.insert(name.to_string()) {
            bail!("duplicate member {} in type {}", name, owner);
        }
        Ok(())
    };

    for attr in &raw.attributes {
        claim(&attr.name, "attribute")?;
        if attr.type_name.trim().is_empty() {
            bail!("attribute {}.{} has no type", owner, attr.name);
        }
        let path = format!("{}.{}", owner, attr.name);
        ty.attributes.push(Attribute {
            name: attr.name.clone(),
            type_name: attr.type_name.clone(),
            annotations: build_annotations(ids, &path, &attr.annotations)?,
        });
    }

    for method in &raw.methods {
        claim(&method.name, "method")?;
        let path = format!("{}.{}", owner, method.name);
        ty.methods.push(Method {
            name: method.name.clone(),
            annotations: build_annotations(ids, &path, &method.annotations)?,
        });
    }

    if !raw.values.is_empty() && raw.kind != TypeKind::Enum {
        bail!("type {} declares enum values but is not an enum", owner);
    }
    for value in &raw.values {
        claim(&value.name, "enum value")?;
        let path = format!("{}.{}", owner, value.name);
        ty.values.push(EnumValue {
            name: value.name.clone(),
            annotations: build_annotations(ids, &path, &value.annotations)?,
        });
    }

    Ok(ty)
}

fn build_annotations(
    ids: &Identifiers,
    owner: &str,
    raw: &[RawAnnotation],
) -> anyhow::Result<Vec<Annotation>> {
    let mut out = Vec::with_capacity(raw.len());
    let mut seen = BTreeSet::new();
    for ra in raw {
        ids.check(&ra.name, &format!("annotation on {}", owner))?;
        if !seen.insert(ra.name.as_str()) {
            log::warn!(
                "{} carries annotation @{} more than once; only the first is used",
                owner,
                ra.name
            );
        }

        let mut annotation = Annotation::new(ra.name.as_str());
        for (name, value) in &ra.parameters {
            ids.check(name, &format!("parameter of @{} on {}", ra.name, owner))?;
            let value = match value {
                serde_json::Value::String(s) => Some(Value::String(s.clone())),
                serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
                serde_json::Value::Null => None,
                other => bail!(
                    "parameter {} of @{} on {} has unsupported value {}",
                    name,
                    ra.name,
                    owner,
                    other
                ),
            };
            annotation.set_parameter(Parameter::new(name.as_str(), value));
        }
        out.push(annotation);
    }
    Ok(out)
}
