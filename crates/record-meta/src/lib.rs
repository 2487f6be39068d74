//! Declaration metadata reader for the record-builder generator.
//!
//! The generator driver materializes a [`DeclarationDescriptor`] once from
//! whatever introspection facility its host provides (the `record-meta-syn`
//! crate does this for `syn` syntax); everything in this crate then operates
//! purely on those values. The helpers resolve annotation attributes with
//! safe defaults, compute container qualification for nested declarations,
//! and derive the conventional names fed into code emission.
//!
//! Absence of an annotation, attribute, or payload is never an error here;
//! it always degrades to the caller's default. The one hard failure is a
//! coercion asked to read a payload of the wrong shape, which reports a
//! type mismatch instead of silently corrupting generated output.

pub mod attrs;
pub mod descriptor;
pub mod error;
pub mod naming;
pub mod options;
pub mod types;

pub use attrs::{bool_attribute, find_annotation, string_attribute, type_list_attribute};
pub use descriptor::{
    AnnotationDescriptor, AttributeMap, AttributeValue, ComponentDescriptor,
    DeclarationDescriptor, EnclosingDeclaration,
};
pub use error::{ErrorKind, MetadataError};
pub use naming::{
    accessor_method_name, class_type, class_type_of, component_class_type,
    container_qualified_name, generated_type_name,
};
pub use options::{
    DEFAULT_BUILDER_METHOD_NAME, DEFAULT_BUILD_METHOD_NAME, DEFAULT_SUFFIX, DEFAULT_WITH_PREFIX,
    GeneratorOptions,
};
pub use types::{ClassName, ClassType, TypeName};
