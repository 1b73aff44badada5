use std::path::PathBuf;

use miette::Diagnostic;
use quill_ir::SchemaError;
use thiserror::Error;

use crate::{FormatError, TemplateScope};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error("no {scope} template named '{variant}' (requested by {owner})")]
    #[diagnostic(
        code(quill::unknown_template),
        help("add {scope}/{variant}.tera to the templates directory or fix the variant name in quill.toml")
    )]
    UnknownTemplate {
        owner: String,
        scope: TemplateScope,
        variant: String,
    },

    #[error("failed to render {scope} template '{variant}' for {owner}")]
    #[diagnostic(code(quill::render_error))]
    Render {
        owner: String,
        scope: TemplateScope,
        variant: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to format generated code for {entity}")]
    #[diagnostic(code(quill::format_error))]
    Format {
        entity: String,
        #[source]
        source: FormatError,
    },

    #[error("types '{first}' and '{second}' both generate '{filename}'")]
    #[diagnostic(
        code(quill::artifact_collision),
        help("generated file names are lowercased, rename one of the types")
    )]
    ArtifactCollision {
        filename: String,
        first: String,
        second: String,
    },

    #[error("failed to read templates from '{path}'")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
