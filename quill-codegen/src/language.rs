//! Target language description.

use crate::ScalarDef;

/// What the engine needs to know about a target language.
///
/// Everything else about the generated code lives in templates.
pub trait Language {
    /// Language identifier used in logs (e.g., "Go")
    fn name(&self) -> &'static str;

    /// Extension of generated files, without the dot (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Prefix marking a nullable layer (e.g., "*")
    fn nullable_marker(&self) -> &'static str;

    /// Prefix marking a list layer (e.g., "[]")
    fn list_marker(&self) -> &'static str;

    /// Appended to a schema type name to name its resolver (e.g., "Resolver")
    fn resolver_suffix(&self) -> &'static str;

    /// Target types of the GraphQL built-in scalars.
    fn builtin_scalars(&self) -> Vec<(&'static str, ScalarDef)>;
}
