//! Concept layer: the entities a model is made of and the `Annotated`
//! capability the resolver depends on.
//!
//! The resolver never looks at concrete concept types. Anything that can answer
//! "which annotation has this name" can be resolved against.

pub mod annotation;
pub mod types;

pub use annotation::{Annotation, Parameter, Value, ValueKind};
pub use types::{Attribute, EnumValue, Method, Model, Type, TypeKind};

/// Capability of carrying annotations.
pub trait Annotated {
    /// The annotation with the given name. With duplicates the first one wins.
    fn get_annotation(&self, name: &str) -> Option<&Annotation>;
}

impl<T: Annotated + ?Sized> Annotated for &T {
    fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        (**self).get_annotation(name)
    }
}

impl Annotated for [Annotation] {
    fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        self.iter().find(|a| a.name() == name)
    }
}

impl Annotated for Vec<Annotation> {
    fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        self.as_slice().get_annotation(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_match_wins() {
        let set = vec![
            Annotation::new("json").with("name", "first"),
            Annotation::new("http").with("name", "h"),
            Annotation::new("json").with("name", "second"),
        ];
        let found = set.get_annotation("json").unwrap();
        assert_eq!(found.find_parameter("name"), Some(&Value::from("first")));
    }

    #[test]
    fn test_concepts_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Model>();
        assert_send_sync::<Type>();
        assert_send_sync::<Attribute>();
        assert_send_sync::<Annotation>();
        assert_send_sync::<Value>();
    }

    #[test]
    fn test_missing_annotation() {
        let set: Vec<Annotation> = vec![Annotation::new("http")];
        assert!(set.get_annotation("json").is_none());
        assert!(set.get_annotation("").is_none());
    }
}
