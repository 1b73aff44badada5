//! `quill.toml` parsing and validation.
//!
//! The configuration decides which template variants render each type and
//! field, how custom scalars map onto Go types, and where the CLI finds its
//! inputs. Errors carry the TOML source so miette can point at the offending
//! span.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod parse;
mod validate;

pub use config::{
    Config, DEFAULT_PACKAGE, FieldConfig, FormatterKind, Params, ScalarOverride, TypeConfig,
    Variants,
};
pub use error::{Error, ManifestSource, Problem, Result};
pub use file::QuillToml;
pub use parse::parse_config;
