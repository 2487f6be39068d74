//! Generation preferences resolved from the processed annotation.

use serde::{Deserialize, Serialize};

use crate::attrs::{bool_attribute, string_attribute};
use crate::descriptor::AnnotationDescriptor;

/// Default suffix appended to the record name for the generated builder.
pub const DEFAULT_SUFFIX: &str = "Builder";

/// Default prefix for generated per-component accessor methods.
pub const DEFAULT_WITH_PREFIX: &str = "with";

/// Default name of the generated static entry method.
pub const DEFAULT_BUILDER_METHOD_NAME: &str = "builder";

/// Default name of the generated terminal build method.
pub const DEFAULT_BUILD_METHOD_NAME: &str = "build";

/// Generation preferences the driver passes alongside a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    pub suffix: String,
    pub with_prefix: String,
    pub builder_method_name: String,
    pub build_method_name: String,
    /// Prefix generated type names with the simple names of the enclosing
    /// containers, outermost first.
    pub prefix_enclosing_names: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            with_prefix: DEFAULT_WITH_PREFIX.to_string(),
            builder_method_name: DEFAULT_BUILDER_METHOD_NAME.to_string(),
            build_method_name: DEFAULT_BUILD_METHOD_NAME.to_string(),
            prefix_enclosing_names: false,
        }
    }
}

impl GeneratorOptions {
    /// Resolve options from an annotation's attribute map. Absent
    /// attributes fall back to the defaults; absence is never an error.
    pub fn from_annotation(annotation: &AnnotationDescriptor) -> Self {
        let attrs = &annotation.attributes;
        Self {
            suffix: string_attribute(attrs.get("suffix"), DEFAULT_SUFFIX),
            with_prefix: string_attribute(attrs.get("withPrefix"), DEFAULT_WITH_PREFIX),
            builder_method_name: string_attribute(
                attrs.get("builderMethodName"),
                DEFAULT_BUILDER_METHOD_NAME,
            ),
            build_method_name: string_attribute(
                attrs.get("buildMethodName"),
                DEFAULT_BUILD_METHOD_NAME,
            ),
            prefix_enclosing_names: bool_attribute(attrs.get("prefixEnclosingClassNames")),
        }
    }
}
