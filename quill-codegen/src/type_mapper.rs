//! Conversion of GraphQL wrapper chains into target type expressions.

use quill_ir::{Shape, TypeRef};

use crate::{Language, ScalarMapping};

/// Builds target type expressions from schema type references.
///
/// Every nullable layer contributes the language's nullable marker and
/// every list layer its list marker, outermost first. The named type at
/// the bottom becomes its scalar target, or its resolver name otherwise.
/// For Go, `[String]!` is `[]*string` and `Post` is `*PostResolver`.
#[derive(Clone, Copy)]
pub struct TypeMapper<'a> {
    language: &'a dyn Language,
    scalars: &'a ScalarMapping,
}

impl<'a> TypeMapper<'a> {
    pub fn new(language: &'a dyn Language, scalars: &'a ScalarMapping) -> Self {
        Self { language, scalars }
    }

    /// Target type expression of a field type.
    pub fn type_expr(&self, ty: &TypeRef) -> String {
        let mut expr = String::new();
        let mut layer = ty;
        loop {
            if !layer.is_non_null() {
                expr.push_str(self.language.nullable_marker());
            }
            match layer.shape() {
                Shape::List(inner) => {
                    expr.push_str(self.language.list_marker());
                    layer = inner;
                }
                Shape::Named(name) => {
                    expr.push_str(&self.named(name));
                    return expr;
                }
            }
        }
    }

    /// Target name of a named schema type.
    pub fn named(&self, name: &str) -> String {
        match self.scalars.get(name) {
            Some(scalar) => scalar.target.clone(),
            None => format!("{}{}", name, self.language.resolver_suffix()),
        }
    }
}
