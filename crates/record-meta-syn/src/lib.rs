//! Populates `record-meta` declaration descriptors from `syn` syntax.
//!
//! The generator's input records are declared as Rust structs; this crate
//! materializes the descriptor model once from the parsed syntax so the
//! core helpers never touch the host AST. Rust has no nested type
//! declarations, so descriptors produced here are top-level within the
//! caller-supplied package; drivers with nested input models populate the
//! enclosing chain themselves.

mod annotations;
mod types;

pub use annotations::annotation_descriptors;
pub use types::type_name;

use record_meta::{ComponentDescriptor, DeclarationDescriptor};
use syn::{Data, DeriveInput, Fields};

/// Describe a named-field struct declaration.
///
/// `package` is the dotted container path the driver places the record in;
/// it may be empty. Tuple and unit structs, enums, and unions are not
/// record shapes and are rejected.
pub fn describe_struct(input: &DeriveInput, package: &str) -> syn::Result<DeclarationDescriptor> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "only structs can be described as records",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "only named-field structs can be described as records",
        ));
    };

    let simple_name = input.ident.to_string();
    let qualified_name = if package.is_empty() {
        simple_name.clone()
    } else {
        format!("{package}.{simple_name}")
    };

    let type_parameters: Vec<String> = input
        .generics
        .type_params()
        .map(|param| param.ident.to_string())
        .collect();

    let mut components = Vec::new();
    for field in &named.named {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "record components must be named"))?;
        components.push(ComponentDescriptor::new(
            ident.to_string(),
            type_name(&field.ty, &type_parameters)?,
        ));
    }

    let annotations = annotation_descriptors(&input.attrs, &type_parameters)?;

    let mut descriptor = DeclarationDescriptor::new(qualified_name);
    descriptor.type_parameters = type_parameters;
    descriptor.components = components;
    descriptor.annotations = annotations;
    Ok(descriptor)
}
