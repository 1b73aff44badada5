//! Type resolution and template dispatch for the quill resolver generator.
//!
//! This crate is the language-agnostic engine: a target language plugs in
//! through [`Language`], templates through [`TemplateStore`] and the final
//! formatting pass through [`Formatter`].
//!
//! # Module Organization
//!
//! - [`language`] - Target language description and built-in scalars
//! - [`scalars`] - Scalar name to target type mapping
//! - [`type_mapper`] - Wrapper chain to type expression conversion
//! - [`imports`] - Dependency reference collection
//! - [`templates`] - Named template variants
//! - [`render`] - Field and type rendering
//! - [`format`] - Formatting of rendered code
//! - [`driver`] - Whole-schema generation

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod driver;
pub mod error;
pub mod format;
pub mod imports;
pub mod language;
pub mod render;
pub mod scalars;
pub mod templates;
pub mod type_mapper;

pub use driver::{ARTIFACT_SUFFIX, Action, Artifact, Artifacts, Driver, INTERNAL_PREFIX, PlannedType};
pub use error::{Error, Result};
pub use format::{FormatError, Formatter, Tidy};
pub use imports::{ImportCollector, field_imports};
pub use language::Language;
pub use render::{RenderedField, Renderer};
pub use scalars::{ScalarDef, ScalarMapping};
pub use templates::{TemplateScope, TemplateSet, TemplateStore, Templates};
pub use type_mapper::TypeMapper;
