//! SDL parsing into a queryable type catalogue.

use std::collections::BTreeMap;

use graphql_parser::schema::{self as ast, Definition, TypeDefinition, TypeExtension};

use crate::{SchemaError, SchemaField, SchemaType, TypeKind, TypeRef};

/// Scalars every schema has without declaring them.
pub const BUILTIN_SCALARS: &[(&str, &str)] = &[
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    (
        "Float",
        "The `Float` scalar type represents signed double-precision fractional values.",
    ),
    (
        "ID",
        "The `ID` scalar type represents a unique identifier, serialized as a string.",
    ),
    (
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric values.",
    ),
    (
        "String",
        "The `String` scalar type represents textual data, represented as UTF-8 character sequences.",
    ),
];

const INTROSPECTION_SDL: &str = include_str!("introspection.graphql");

/// Every named type of a schema, keyed and iterated by name.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    types: BTreeMap<String, SchemaType>,
}

impl Catalogue {
    /// Parse SDL text into a catalogue.
    ///
    /// Built-in scalars and introspection meta types are added alongside the
    /// schema's own definitions.
    pub fn parse(sdl: &str) -> Result<Self, SchemaError> {
        let mut builder = Builder::default();
        for (name, description) in BUILTIN_SCALARS {
            builder.define(
                SchemaType::new(*name, TypeKind::Scalar)
                    .with_description(Some((*description).to_string())),
            )?;
        }
        builder.load(INTROSPECTION_SDL)?;
        builder.load(sdl)?;
        builder.finish()
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// Iterate over all types in ascending name order.
    pub fn types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Extension fields and interfaces waiting for every definition to load.
struct PendingExtension {
    name: String,
    fields: Vec<SchemaField>,
    interfaces: Vec<String>,
}

#[derive(Default)]
struct Builder {
    types: BTreeMap<String, SchemaType>,
    unions: Vec<(String, Vec<String>)>,
    extensions: Vec<PendingExtension>,
}

impl Builder {
    fn define(&mut self, ty: SchemaType) -> Result<(), SchemaError> {
        if self.types.contains_key(&ty.name) {
            return Err(SchemaError::DuplicateType { name: ty.name });
        }
        self.types.insert(ty.name.clone(), ty);
        Ok(())
    }

    fn load(&mut self, sdl: &str) -> Result<(), SchemaError> {
        let document = graphql_parser::parse_schema::<String>(sdl)
            .map_err(|source| SchemaError::Parse { source })?;

        for definition in document.definitions {
            match definition {
                Definition::TypeDefinition(def) => self.load_definition(def)?,
                Definition::TypeExtension(ext) => self.load_extension(ext),
                Definition::SchemaDefinition(_) | Definition::DirectiveDefinition(_) => {}
            }
        }
        Ok(())
    }

    fn load_definition(&mut self, def: TypeDefinition<'_, String>) -> Result<(), SchemaError> {
        let ty = match def {
            TypeDefinition::Scalar(scalar) => {
                SchemaType::new(scalar.name, TypeKind::Scalar).with_description(scalar.description)
            }
            TypeDefinition::Object(object) => {
                let mut ty = SchemaType::new(object.name, TypeKind::Object)
                    .with_description(object.description);
                ty.fields = object.fields.iter().map(convert_field).collect();
                ty.interfaces = object.implements_interfaces;
                ty
            }
            TypeDefinition::Interface(interface) => {
                let mut ty = SchemaType::new(interface.name, TypeKind::Interface)
                    .with_description(interface.description);
                ty.fields = interface.fields.iter().map(convert_field).collect();
                ty
            }
            TypeDefinition::Union(union) => {
                self.unions.push((union.name.clone(), union.types));
                SchemaType::new(union.name, TypeKind::Union).with_description(union.description)
            }
            TypeDefinition::Enum(enumeration) => {
                let mut ty = SchemaType::new(enumeration.name, TypeKind::Enum)
                    .with_description(enumeration.description);
                ty.enum_values = enumeration.values.into_iter().map(|v| v.name).collect();
                ty
            }
            TypeDefinition::InputObject(input) => {
                let mut ty = SchemaType::new(input.name, TypeKind::InputObject)
                    .with_description(input.description);
                ty.fields = input.fields.iter().map(convert_input_value).collect();
                ty
            }
        };
        self.define(ty)
    }

    fn load_extension(&mut self, ext: TypeExtension<'_, String>) {
        match ext {
            TypeExtension::Object(object) => self.extensions.push(PendingExtension {
                name: object.name,
                fields: object.fields.iter().map(convert_field).collect(),
                interfaces: object.implements_interfaces,
            }),
            TypeExtension::Interface(interface) => self.extensions.push(PendingExtension {
                name: interface.name,
                fields: interface.fields.iter().map(convert_field).collect(),
                interfaces: Vec::new(),
            }),
            // Other extensions only add directives, values or members that
            // generation never reads.
            _ => {}
        }
    }

    fn finish(mut self) -> Result<Catalogue, SchemaError> {
        for ext in std::mem::take(&mut self.extensions) {
            let ty = self
                .types
                .get_mut(&ext.name)
                .ok_or(SchemaError::UnknownExtension { name: ext.name })?;
            ty.fields.extend(ext.fields);
            ty.interfaces.extend(ext.interfaces);
        }

        for (name, members) in std::mem::take(&mut self.unions) {
            if let Some(ty) = self.types.get_mut(&name) {
                ty.possible_types = members;
            }
        }

        // Implementors are collected in name order since the map is sorted.
        let mut implementors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for ty in self.types.values() {
            if ty.kind == TypeKind::Object {
                for interface in &ty.interfaces {
                    implementors
                        .entry(interface.clone())
                        .or_default()
                        .push(ty.name.clone());
                }
            }
        }
        for (interface, objects) in implementors {
            if let Some(ty) = self.types.get_mut(&interface)
                && ty.kind == TypeKind::Interface
            {
                ty.possible_types = objects;
            }
        }

        Ok(Catalogue { types: self.types })
    }
}

fn convert_type(ty: &ast::Type<'_, String>) -> TypeRef {
    match ty {
        ast::Type::NamedType(name) => TypeRef::named(name.clone()),
        ast::Type::ListType(inner) => TypeRef::list(convert_type(inner)),
        ast::Type::NonNullType(inner) => convert_type(inner).non_null(),
    }
}

fn convert_field(field: &ast::Field<'_, String>) -> SchemaField {
    SchemaField {
        name: field.name.clone(),
        description: field.description.clone(),
        ty: convert_type(&field.field_type),
    }
}

fn convert_input_value(value: &ast::InputValue<'_, String>) -> SchemaField {
    SchemaField {
        name: value.name.clone(),
        description: value.description.clone(),
        ty: convert_type(&value.value_type),
    }
}
