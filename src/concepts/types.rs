//! Concrete concepts of a loaded model.

use super::{Annotated, Annotation};

/// Kind of a modeled type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    List,
    Scalar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub types: Vec<Type>,
}

impl Model {
    pub fn find_type(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: String,
    pub kind: TypeKind,
    pub annotations: Vec<Annotation>,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
    pub values: Vec<EnumValue>,
}

impl Type {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotations: Vec::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    /// Name of the attribute's type as written in the model.
    pub type_name: String,
    pub annotations: Vec<Annotation>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub annotations: Vec<Annotation>,
}

macro_rules! impl_annotated {
    ($($ty:ty),*) => {
        $(
            impl Annotated for $ty {
                fn get_annotation(&self, name: &str) -> Option<&Annotation> {
                    self.annotations.get_annotation(name)
                }
            }
        )*
    };
}

impl_annotated!(Type, Attribute, Method, EnumValue);
