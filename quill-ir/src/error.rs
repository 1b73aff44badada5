use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("failed to parse schema")]
    #[diagnostic(code(quill::schema::parse), help("check the SDL syntax of the schema file"))]
    Parse {
        #[source]
        source: graphql_parser::schema::ParseError,
    },

    #[error("type '{name}' is defined more than once")]
    #[diagnostic(code(quill::schema::duplicate_type))]
    DuplicateType { name: String },

    #[error("cannot extend undefined type '{name}'")]
    #[diagnostic(
        code(quill::schema::unknown_extension),
        help("declare '{name}' before extending it, or remove the extension")
    )]
    UnknownExtension { name: String },

    #[error("invalid type reference '{input}'")]
    #[diagnostic(
        code(quill::schema::invalid_type_ref),
        help("use GraphQL type syntax, e.g. 'String', '[Int!]' or '[ID!]!'")
    )]
    InvalidTypeRef { input: String },
}
