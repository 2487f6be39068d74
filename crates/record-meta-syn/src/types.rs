//! Mapping from `syn` types to value-level type references.

use record_meta::{ClassName, TypeName};
use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Map a `syn` type to a value-level type reference.
///
/// Path types become class references, with the leading segments joined
/// into the dotted container path; generic arguments are recursed. A bare
/// single-segment path that names one of `type_params` becomes a type
/// variable. References, groups, and parentheses strip to their element
/// type; other shapes are not record component types.
pub fn type_name(ty: &Type, type_params: &[String]) -> syn::Result<TypeName> {
    match ty {
        Type::Path(TypePath { qself: None, path }) => {
            let last = path
                .segments
                .last()
                .ok_or_else(|| syn::Error::new_spanned(ty, "empty type path"))?;
            let simple = last.ident.to_string();

            if path.segments.len() == 1
                && last.arguments.is_none()
                && type_params.iter().any(|param| *param == simple)
            {
                return Ok(TypeName::variable(simple));
            }

            let container = path
                .segments
                .iter()
                .take(path.segments.len() - 1)
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join(".");
            let raw = ClassName::new(container, simple);

            match &last.arguments {
                PathArguments::None => Ok(TypeName::Class(raw)),
                PathArguments::AngleBracketed(bracketed) => {
                    let mut args = Vec::new();
                    for arg in &bracketed.args {
                        if let GenericArgument::Type(inner) = arg {
                            args.push(type_name(inner, type_params)?);
                        }
                    }
                    Ok(TypeName::parameterized(raw, args))
                }
                PathArguments::Parenthesized(_) => Err(syn::Error::new_spanned(
                    ty,
                    "function types are not record component types",
                )),
            }
        }
        Type::Reference(reference) => type_name(&reference.elem, type_params),
        Type::Group(group) => type_name(&group.elem, type_params),
        Type::Paren(paren) => type_name(&paren.elem, type_params),
        _ => Err(syn::Error::new_spanned(
            ty,
            "unsupported record component type",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Type {
        syn::parse_str(source).expect("valid type")
    }

    #[test]
    fn path_segments_form_the_container() {
        let ty = type_name(&parse("std::collections::HashMap<String, i64>"), &[]).unwrap();
        assert_eq!(ty.to_string(), "std.collections.HashMap<String, i64>");
    }

    #[test]
    fn declared_parameters_become_variables() {
        let params = vec!["T".to_string()];
        let ty = type_name(&parse("Option<T>"), &params).unwrap();
        assert_eq!(ty.to_string(), "Option<T>");
        match ty {
            TypeName::Parameterized { args, .. } => {
                assert_eq!(args, vec![TypeName::variable("T")]);
            }
            other => panic!("unexpected type: {other:?}"),
        }
    }

    #[test]
    fn references_strip_to_their_element() {
        let ty = type_name(&parse("&str"), &[]).unwrap();
        assert_eq!(ty, TypeName::class("", "str"));
    }

    #[test]
    fn slices_are_rejected() {
        assert!(type_name(&parse("[u8]"), &[]).is_err());
    }
}
