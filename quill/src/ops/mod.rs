//! Core operations.
//!
//! This module contains the business logic for quill commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod templates;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use templates::templates;
