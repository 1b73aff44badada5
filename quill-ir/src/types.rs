//! Schema type definitions.

use std::{fmt, str::FromStr};

use crate::SchemaError;

/// Type classification, using the names introspection reports for `__Type.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Get the introspection name (e.g., "INPUT_OBJECT").
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }

    /// Returns true for the unnamed modifier kinds.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, TypeKind::List | TypeKind::NonNull)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared type of a field: a named type wrapped in any number of
/// list and non-null layers.
///
/// Non-null is a flag on each layer rather than a layer of its own, so a
/// non-null of a non-null or a wrapper without a terminal name cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    non_null: bool,
    shape: Shape,
}

/// What a [`TypeRef`] layer wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Named(String),
    List(Box<TypeRef>),
}

impl TypeRef {
    /// A nullable reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            non_null: false,
            shape: Shape::Named(name.into()),
        }
    }

    /// A nullable list of `inner`.
    pub fn list(inner: TypeRef) -> Self {
        Self {
            non_null: false,
            shape: Shape::List(Box::new(inner)),
        }
    }

    /// Mark this layer non-null.
    pub fn non_null(mut self) -> Self {
        self.non_null = true;
        self
    }

    pub fn is_non_null(&self) -> bool {
        self.non_null
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Kind of the outermost wrapper, or `None` when this layer is a bare named type.
    pub fn wrapper_kind(&self) -> Option<TypeKind> {
        match (&self.shape, self.non_null) {
            (_, true) => Some(TypeKind::NonNull),
            (Shape::List(_), false) => Some(TypeKind::List),
            (Shape::Named(_), false) => None,
        }
    }

    /// Name of the named type at the bottom of the wrapper chain.
    pub fn base_name(&self) -> &str {
        match &self.shape {
            Shape::Named(name) => name,
            Shape::List(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Named(name) => f.write_str(name)?,
            Shape::List(inner) => write!(f, "[{inner}]")?,
        }
        if self.non_null {
            f.write_str("!")?;
        }
        Ok(())
    }
}

impl FromStr for TypeRef {
    type Err = SchemaError;

    /// Parse GraphQL type syntax such as `[String!]!`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SchemaError::InvalidTypeRef {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(inner) = trimmed.strip_suffix('!') {
            let ty: TypeRef = inner.parse().map_err(|_| invalid())?;
            if ty.non_null {
                return Err(invalid());
            }
            return Ok(ty.non_null());
        }

        if let Some(inner) = trimmed.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(invalid)?;
            let ty: TypeRef = inner.parse().map_err(|_| invalid())?;
            return Ok(TypeRef::list(ty));
        }

        if is_name(trimmed) {
            Ok(TypeRef::named(trimmed))
        } else {
            Err(invalid())
        }
    }
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A field of an object, interface or input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
}

/// A named type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaType {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    /// Fields in declaration order (objects, interfaces, input objects).
    pub fields: Vec<SchemaField>,
    /// Interfaces an object declares it implements.
    pub interfaces: Vec<String>,
    /// Concrete object types behind an interface or union.
    pub possible_types: Vec<String>,
    /// Values of an enum.
    pub enum_values: Vec<String>,
}

impl SchemaType {
    /// A type with no fields, interfaces or values.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            possible_types: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
