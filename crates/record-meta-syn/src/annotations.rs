//! Mapping from Rust attributes to annotation descriptors.

use record_meta::{AnnotationDescriptor, AttributeMap, AttributeValue, ClassName};
use syn::parse::Parse;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, Token};

use crate::types::type_name;

/// Map outer attributes to annotation descriptors, in declaration order.
///
/// Attribute path segments are joined with `.` to form the annotation's
/// qualified type name. A bare `#[name]` yields an empty attribute map.
/// Inside `#[name(...)]`, a bare key carries a null payload, `key = <lit>`
/// a scalar, and `key(T, U)` a list of type references. Doc comments are
/// not annotations and are skipped.
pub fn annotation_descriptors(
    attrs: &[Attribute],
    type_params: &[String],
) -> syn::Result<Vec<AnnotationDescriptor>> {
    let mut annotations = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc") {
            continue;
        }

        let qualified = attr
            .path()
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>()
            .join(".");
        let mut attributes = AttributeMap::new();

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::NameValue(name_value) => {
                attributes.insert("value", literal_value(&name_value.value)?);
            }
            Meta::List(_) => {
                attr.parse_nested_meta(|meta| {
                    let name = meta
                        .path
                        .get_ident()
                        .map(|ident| ident.to_string())
                        .ok_or_else(|| meta.error("attribute keys must be plain identifiers"))?;

                    if meta.input.peek(Token![=]) {
                        let value: Expr = meta.value()?.parse()?;
                        attributes.insert(name, literal_value(&value)?);
                    } else if meta.input.peek(syn::token::Paren) {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        let types =
                            content.parse_terminated(syn::Type::parse, Token![,])?;
                        let items = types
                            .iter()
                            .map(|ty| Ok(AttributeValue::Type(type_name(ty, type_params)?)))
                            .collect::<syn::Result<Vec<_>>>()?;
                        attributes.insert(name, AttributeValue::List(items));
                    } else {
                        attributes.insert(name, AttributeValue::Null);
                    }
                    Ok(())
                })?;
            }
        }

        annotations.push(AnnotationDescriptor {
            type_name: ClassName::parse(&qualified),
            attributes,
        });
    }
    Ok(annotations)
}

fn literal_value(expr: &Expr) -> syn::Result<AttributeValue> {
    let Expr::Lit(ExprLit { lit, .. }) = expr else {
        return Err(syn::Error::new_spanned(
            expr,
            "attribute values must be literals",
        ));
    };
    match lit {
        Lit::Str(text) => Ok(AttributeValue::Scalar(text.value())),
        Lit::Bool(flag) => Ok(AttributeValue::Scalar(flag.value.to_string())),
        Lit::Int(int) => Ok(AttributeValue::Scalar(int.base10_digits().to_string())),
        Lit::Float(float) => Ok(AttributeValue::Scalar(float.base10_digits().to_string())),
        other => Err(syn::Error::new_spanned(
            other,
            "unsupported attribute literal",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::DeriveInput;

    fn attrs_of(source: &str) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse_str(source).expect("valid declaration");
        input.attrs
    }

    #[test]
    fn bare_attributes_have_empty_maps() {
        let attrs = attrs_of("#[deprecated] struct Point { }");
        let annotations = annotation_descriptors(&attrs, &[]).unwrap();

        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].type_name.qualified(), "deprecated");
        assert!(annotations[0].attributes.is_empty());
    }

    #[test]
    fn doc_comments_are_not_annotations() {
        let attrs = attrs_of("/// a point\nstruct Point { }");
        let annotations = annotation_descriptors(&attrs, &[]).unwrap();
        assert!(annotations.is_empty());
    }

    #[test]
    fn attribute_path_segments_are_dotted() {
        let attrs = attrs_of("#[io::example::record_builder] struct Point { }");
        let annotations = annotation_descriptors(&attrs, &[]).unwrap();
        assert_eq!(
            annotations[0].type_name.qualified(),
            "io.example.record_builder"
        );
    }

    #[test]
    fn literal_payloads_become_scalars() {
        let attrs =
            attrs_of(r#"#[record_builder(suffix = "Factory", limit = 3, enabled = true)] struct P { }"#);
        let annotations = annotation_descriptors(&attrs, &[]).unwrap();

        let map = &annotations[0].attributes;
        assert_eq!(map.get("suffix").and_then(|v| v.as_scalar()), Some("Factory"));
        assert_eq!(map.get("limit").and_then(|v| v.as_scalar()), Some("3"));
        assert_eq!(map.get("enabled").and_then(|v| v.as_scalar()), Some("true"));
    }

    #[test]
    fn non_literal_payloads_are_rejected() {
        let attrs = attrs_of("#[record_builder(suffix = 1 + 2)] struct P { }");
        assert!(annotation_descriptors(&attrs, &[]).is_err());
    }
}
