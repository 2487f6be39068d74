use std::fmt;

/// Error raised when an attribute coercion is asked to read a payload of
/// the wrong shape.
///
/// Absence never produces this error; lookups return `Option` and the
/// coercions fall back to caller defaults. A mismatch is always a caller
/// contract problem, so it carries the annotation and attribute context
/// when the caller supplies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataError {
    pub annotation: Option<String>,
    pub attribute: Option<String>,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl MetadataError {
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self {
            annotation: None,
            attribute: None,
            kind: ErrorKind::TypeMismatch { expected, actual },
        }
    }

    pub fn for_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn for_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {expected}, found {actual}")
            }
        }
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(annotation) = &self.annotation {
            write!(f, "annotation '{annotation}': ")?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "attribute '{attribute}': ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for MetadataError {}
