//! The declaration description supplied by the generator driver.
//!
//! Everything here is a plain immutable value. An adapter layer
//! materializes these once from the host's own introspection facility;
//! the accessor and naming helpers then operate on the values alone,
//! independent of any host reflection API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{ClassName, TypeName};

/// Raw attribute payload attached to an annotation.
///
/// Absence of an attribute is modeled at the lookup site
/// (`Option<&AttributeValue>`), not as a variant here. `Null` is an
/// explicitly supplied empty payload, such as a bare marker key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    Null,
    Scalar(String),
    Type(TypeName),
    List(Vec<AttributeValue>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Scalar(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Scalar(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Scalar(value.to_string())
    }
}

impl From<TypeName> for AttributeValue {
    fn from(value: TypeName) -> Self {
        AttributeValue::Type(value)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(values: Vec<T>) -> Self {
        AttributeValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl AttributeValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AttributeValue::Scalar(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeName> {
        match self {
            AttributeValue::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Textual form of the payload, as used by the string coercion.
    pub fn display_form(&self) -> String {
        match self {
            AttributeValue::Null => "null".to_string(),
            AttributeValue::Scalar(text) => text.clone(),
            AttributeValue::Type(ty) => ty.to_string(),
            AttributeValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.display_form()).collect();
                format!("[{}]", rendered.join(", "))
            }
        }
    }

    /// Shape tag reported in type-mismatch errors.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            AttributeValue::Null => "null",
            AttributeValue::Scalar(_) => "scalar",
            AttributeValue::Type(_) => "type",
            AttributeValue::List(_) => "list",
        }
    }
}

/// Ordered attribute-name to value map attached to an annotation.
///
/// Keys are the declared attribute names and are unique; iteration order
/// is insertion order, so lookups are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    entries: IndexMap<String, AttributeValue>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up an attribute value by declared name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An annotation attached to a declaration: the qualified name of the
/// annotation type plus its attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationDescriptor {
    pub type_name: ClassName,
    pub attributes: AttributeMap,
}

impl AnnotationDescriptor {
    pub fn new(type_name: ClassName) -> Self {
        Self {
            type_name,
            attributes: AttributeMap::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(name, value);
        self
    }
}

/// One named, typed component of a record declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    pub type_name: TypeName,
}

impl ComponentDescriptor {
    pub fn new(name: impl Into<String>, type_name: TypeName) -> Self {
        Self {
            name: name.into(),
            type_name,
        }
    }
}

/// A named container lexically enclosing a nested declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingDeclaration {
    pub qualified_name: String,
    pub simple_name: String,
}

impl EnclosingDeclaration {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = match qualified_name.rsplit_once('.') {
            Some((_, simple)) => simple.to_string(),
            None => qualified_name.clone(),
        };
        Self {
            qualified_name,
            simple_name,
        }
    }
}

/// Full description of a declared record type: its identity, declared
/// type parameters, components, attached annotations, and the enclosing
/// chain when nested.
///
/// Constructed fresh per generation request and discarded afterwards;
/// nothing is shared across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationDescriptor {
    pub qualified_name: String,
    pub simple_name: String,
    pub type_parameters: Vec<String>,
    pub components: Vec<ComponentDescriptor>,
    pub annotations: Vec<AnnotationDescriptor>,
    /// Enclosing named containers, innermost first; empty for top-level
    /// declarations.
    pub enclosing: Vec<EnclosingDeclaration>,
}

impl DeclarationDescriptor {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = match qualified_name.rsplit_once('.') {
            Some((_, simple)) => simple.to_string(),
            None => qualified_name.clone(),
        };
        Self {
            qualified_name,
            simple_name,
            type_parameters: Vec::new(),
            components: Vec::new(),
            annotations: Vec::new(),
            enclosing: Vec::new(),
        }
    }

    pub fn with_type_parameters<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_component(mut self, component: ComponentDescriptor) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationDescriptor) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append the next-outer enclosing container. Callers add containers
    /// innermost first.
    pub fn with_enclosing(mut self, enclosing: EnclosingDeclaration) -> Self {
        self.enclosing.push(enclosing);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup_is_by_declared_name() {
        let mut map = AttributeMap::new();
        map.insert("suffix", "Factory");
        map.insert("enabled", true);

        assert_eq!(map.get("suffix").and_then(|v| v.as_scalar()), Some("Factory"));
        assert!(map.get("missing").is_none());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn map_iteration_preserves_insertion_order() {
        let mut map = AttributeMap::new();
        map.insert("b", "2");
        map.insert("a", "1");

        let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn display_form_renders_nested_lists() {
        let value = AttributeValue::List(vec![
            AttributeValue::from(crate::types::TypeName::class("com.example", "Display")),
            AttributeValue::Scalar("x".to_string()),
        ]);
        assert_eq!(value.display_form(), "[com.example.Display, x]");
    }

    #[test]
    fn descriptor_derives_simple_name() {
        let decl = DeclarationDescriptor::new("com.example.Point");
        assert_eq!(decl.simple_name, "Point");

        let top = DeclarationDescriptor::new("Point");
        assert_eq!(top.simple_name, "Point");
    }

    #[test]
    fn descriptor_round_trips_through_serde() {
        let decl = DeclarationDescriptor::new("com.example.Outer.Point")
            .with_type_parameters(["T"])
            .with_component(ComponentDescriptor::new(
                "value",
                crate::types::TypeName::variable("T"),
            ))
            .with_annotation(
                AnnotationDescriptor::new(ClassName::parse("com.example.RecordBuilder"))
                    .with_attribute("suffix", "Factory")
                    .with_attribute("marker", AttributeValue::Null),
            )
            .with_enclosing(EnclosingDeclaration::new("com.example.Outer"));

        let json = serde_json::to_string(&decl).expect("serialize");
        let back: DeclarationDescriptor = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, decl);
    }
}
