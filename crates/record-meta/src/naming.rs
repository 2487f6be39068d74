//! Naming and qualification conventions for generated types.

use crate::descriptor::{ComponentDescriptor, DeclarationDescriptor};
use crate::options::GeneratorOptions;
use crate::types::{ClassName, ClassType, TypeName};

/// Qualified name of the package containing the outermost enclosing
/// declaration, or the declaration itself when top-level.
///
/// Everything before the last `.` of the outermost qualified name; empty
/// when there is no `.`.
pub fn container_qualified_name(decl: &DeclarationDescriptor) -> String {
    let outermost = decl
        .enclosing
        .last()
        .map(|enclosing| enclosing.qualified_name.as_str())
        .unwrap_or(&decl.qualified_name);
    match outermost.rsplit_once('.') {
        Some((container, _)) => container.to_string(),
        None => String::new(),
    }
}

/// Build a class type named `simple_name` inside `container`, optionally
/// parameterized by one type variable per entry of `type_parameters`.
///
/// The resulting name is always `simple_name`, regardless of
/// parameterization.
pub fn class_type(container: &str, simple_name: &str, type_parameters: &[String]) -> ClassType {
    let raw = ClassName::new(container, simple_name);
    let args = type_parameters
        .iter()
        .map(|param| TypeName::variable(param.clone()))
        .collect();
    ClassType::new(TypeName::parameterized(raw, args), simple_name)
}

/// Same as [`class_type`], deriving container and simple name from the
/// declaration's own qualified identity.
pub fn class_type_of(decl: &DeclarationDescriptor, type_parameters: &[String]) -> ClassType {
    let raw = ClassName::parse(&decl.qualified_name);
    class_type(raw.container(), raw.simple(), type_parameters)
}

/// Pair a record component's declared type with its own name. No container
/// or parameterization logic applies.
pub fn component_class_type(component: &ComponentDescriptor) -> ClassType {
    ClassType::new(component.type_name.clone(), component.name.clone())
}

/// Accessor method name for a component: `prefix` plus the title-cased
/// component name (`with` + `id` = `withId`, `with` + `x` = `withX`).
///
/// Only the first character is upper-cased; the remainder is left
/// unchanged. The component name must be a non-empty identifier.
pub fn accessor_method_name(component: &ClassType, prefix: &str) -> String {
    let name = component.name();
    debug_assert!(
        !name.is_empty(),
        "component name must be a non-empty identifier"
    );
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return prefix.to_string();
    };
    let rest = chars.as_str();
    if rest.is_empty() {
        format!("{prefix}{}", name.to_uppercase())
    } else {
        format!("{prefix}{}{rest}", first.to_uppercase())
    }
}

/// Name of the generated builder type: `class_type.name + suffix`,
/// optionally prefixed by the simple names of the enclosing containers,
/// outermost first.
pub fn generated_type_name(
    decl: &DeclarationDescriptor,
    options: &GeneratorOptions,
    class_type: &ClassType,
    suffix: &str,
) -> String {
    let base = format!("{}{suffix}", class_type.name());
    if options.prefix_enclosing_names {
        format!("{}{base}", enclosing_name_prefix(decl))
    } else {
        base
    }
}

/// Concatenated simple names of the enclosing containers, outermost first;
/// empty for a top-level declaration.
pub(crate) fn enclosing_name_prefix(decl: &DeclarationDescriptor) -> String {
    decl.enclosing
        .iter()
        .rev()
        .fold(String::new(), |mut prefix, enclosing| {
            prefix.push_str(&enclosing.simple_name);
            prefix
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EnclosingDeclaration;

    #[test]
    fn prefix_lists_outer_names_before_inner() {
        let decl = DeclarationDescriptor::new("com.example.Outer.Inner.Target")
            .with_enclosing(EnclosingDeclaration::new("com.example.Outer.Inner"))
            .with_enclosing(EnclosingDeclaration::new("com.example.Outer"));
        assert_eq!(enclosing_name_prefix(&decl), "OuterInner");
    }

    #[test]
    fn prefix_is_empty_for_top_level_declarations() {
        let decl = DeclarationDescriptor::new("com.example.Target");
        assert_eq!(enclosing_name_prefix(&decl), "");
    }
}
