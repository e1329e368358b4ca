//! Annotations and their parameters.
//!
//! An annotation such as `@json(name = "address", required = true)` is stored
//! as a name plus an ordered list of parameters. Parameter values keep the type
//! the author wrote; nothing is coerced here.

use std::fmt;

/// Typed value of an annotation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    String(String),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Type tag of a parameter, including the typeless case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    String,
    Bool,
    Untyped,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Untyped => write!(f, "untyped"),
        }
    }
}

/// A named parameter. `value` is `None` when the author wrote the parameter
/// without a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.value
            .as_ref()
            .map(Value::kind)
            .unwrap_or(ValueKind::Untyped)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    parameters: Vec<Parameter>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Builder-style helper. Replaces an existing parameter of the same name
    /// in place so names stay unique and the original position is kept.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set_parameter(Parameter::new(name, Some(value.into())));
        self
    }

    /// Adds a parameter written without a value.
    pub fn with_untyped(mut self, name: &str) -> Self {
        self.set_parameter(Parameter::new(name, None));
        self
    }

    pub fn set_parameter(&mut self, parameter: Parameter) {
        match self.parameters.iter_mut().find(|p| p.name == parameter.name) {
            Some(slot) => *slot = parameter,
            None => self.parameters.push(parameter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Typed value of the named parameter; `None` when it is missing or typeless.
    pub fn find_parameter(&self, name: &str) -> Option<&Value> {
        self.parameter(name).and_then(|p| p.value.as_ref())
    }
}
