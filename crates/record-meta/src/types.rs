//! Value-level type references used by the generator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A container-qualified class name: a dotted container path (empty for
/// top-level declarations) plus an unqualified simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassName {
    container: String,
    simple: String,
}

impl ClassName {
    pub fn new(container: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            simple: simple.into(),
        }
    }

    /// Split a dotted qualified name into container path and simple name.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((container, simple)) => Self::new(container, simple),
            None => Self::new("", qualified),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// Dotted qualified form: `container.simple`, or just `simple` when
    /// the container path is empty.
    pub fn qualified(&self) -> String {
        if self.container.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.container, self.simple)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.container.is_empty() {
            write!(f, "{}", self.simple)
        } else {
            write!(f, "{}.{}", self.container, self.simple)
        }
    }
}

/// A type reference: a named class, a class parameterized by further type
/// references, or a bare type variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeName {
    Class(ClassName),
    Parameterized { raw: ClassName, args: Vec<TypeName> },
    Variable(String),
}

impl TypeName {
    pub fn class(container: impl Into<String>, simple: impl Into<String>) -> Self {
        TypeName::Class(ClassName::new(container, simple))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeName::Variable(name.into())
    }

    /// Parameterize `raw` by `args`; an empty argument list yields the
    /// plain class reference.
    pub fn parameterized(raw: ClassName, args: Vec<TypeName>) -> Self {
        if args.is_empty() {
            TypeName::Class(raw)
        } else {
            TypeName::Parameterized { raw, args }
        }
    }

    /// The underlying class name, for plain and parameterized references.
    pub fn raw(&self) -> Option<&ClassName> {
        match self {
            TypeName::Class(name) => Some(name),
            TypeName::Parameterized { raw, .. } => Some(raw),
            TypeName::Variable(_) => None,
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(name: ClassName) -> Self {
        TypeName::Class(name)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Class(name) => write!(f, "{name}"),
            TypeName::Parameterized { raw, args } => {
                write!(f, "{raw}<")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            TypeName::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// A resolved pairing of a type reference and the simple name it was
/// declared under.
///
/// The name is always the unqualified declared identifier, never the
/// parameterized form. Callers must supply a non-empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassType {
    type_name: TypeName,
    name: String,
}

impl ClassType {
    pub fn new(type_name: TypeName, name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(
            !name.is_empty(),
            "class type name must be a non-empty identifier"
        );
        Self { type_name, name }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
