//! GraphQL type catalogue for the quill resolver generator.
//!
//! This crate turns SDL text into a read-only view of the schema graph
//! that code generation walks.
//!
//! # Architecture
//!
//! ```text
//! schema.graphql (SDL) → quill-ir (Catalogue) → quill-codegen → generated Go
//! ```
//!
//! Besides the user's definitions, a [`Catalogue`] always holds the built-in
//! scalars and the introspection meta types (`__Schema`, `__Type`, ...), the
//! same set an introspection query against a live server would report.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalogue;
mod error;
mod types;

pub use catalogue::{BUILTIN_SCALARS, Catalogue};
pub use error::SchemaError;
pub use types::{SchemaField, SchemaType, Shape, TypeKind, TypeRef};
