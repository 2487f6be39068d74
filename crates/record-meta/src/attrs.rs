//! Point lookups over annotation metadata.
//!
//! A missing annotation, attribute, or payload falls back to the caller's
//! default. The only failure is a coercion asked to read a payload of the
//! wrong shape, which reports a type mismatch.

use crate::descriptor::{AnnotationDescriptor, AttributeValue, DeclarationDescriptor};
use crate::error::MetadataError;
use crate::types::TypeName;

/// Find the first annotation on `decl` whose qualified type name equals
/// `qualified_name`.
pub fn find_annotation<'a>(
    decl: &'a DeclarationDescriptor,
    qualified_name: &str,
) -> Option<&'a AnnotationDescriptor> {
    decl.annotations
        .iter()
        .find(|annotation| annotation.type_name.qualified() == qualified_name)
}

/// Coerce an attribute payload to a list of type references.
///
/// An absent attribute yields an empty list. A present payload must be a
/// list whose elements are all type references; anything else is a type
/// mismatch.
pub fn type_list_attribute(
    value: Option<&AttributeValue>,
) -> Result<Vec<TypeName>, MetadataError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let AttributeValue::List(items) = value else {
        return Err(MetadataError::type_mismatch("list of types", value.shape()));
    };
    items
        .iter()
        .map(|item| match item {
            AttributeValue::Type(ty) => Ok(ty.clone()),
            other => Err(MetadataError::type_mismatch("type reference", other.shape())),
        })
        .collect()
}

/// Coerce an attribute payload to a boolean.
///
/// Absent and null payloads are `false`. A scalar payload is `true` only
/// when its text equals `true` case-insensitively; any other text, and any
/// non-scalar payload, is `false`. There is no error path.
pub fn bool_attribute(value: Option<&AttributeValue>) -> bool {
    match value {
        Some(AttributeValue::Scalar(text)) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Coerce an attribute payload to a string, with a fallback default for
/// absent and null payloads. Present payloads are stringified as-is.
pub fn string_attribute(value: Option<&AttributeValue>, default: &str) -> String {
    match value {
        None | Some(AttributeValue::Null) => default.to_string(),
        Some(value) => value.display_form(),
    }
}
