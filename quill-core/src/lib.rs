//! Core utilities for the quill GraphQL resolver generator.
//!
//! This crate holds the string-case helpers that templates use and the
//! file writer that persists generated artifacts.

mod file;
mod naming;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use naming::{capitalize, to_pascal_case, to_snake_case, uncapitalize};
