//! Go resolver generation for `github.com/graph-gophers/graphql-go`.
//!
//! Every object, interface and unmapped scalar of a schema becomes a
//! `<name>_gen.go` file holding a `<Name>Resolver` struct.
//!
//! ```ignore
//! use quill_codegen_go::Generator;
//!
//! let generator = Generator::new(Config::default());
//! let artifacts = generator.generate("type Post { id: ID! }")?;
//! ```

mod generator;
mod gofmt;
mod language;
mod templates;

pub use generator::Generator;
pub use gofmt::Gofmt;
pub use language::{GRAPHQL_IMPORT, Go};
pub use quill_codegen::{Artifacts, Driver, Error, Result};
pub use templates::{builtin_templates, load_templates};
