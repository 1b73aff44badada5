//! Name checks run after `quill.toml` deserializes.

use std::rc::Rc;

use miette::SourceSpan;

use crate::{
    Config, Result, Variants,
    error::{ManifestSource, Problem},
};

/// Where validation currently is inside the configuration.
///
/// Nested tables are walked by pushing path segments (`types.Post.fields`),
/// which become the context named in diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: Rc<ManifestSource>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Rc::new(ManifestSource::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// A child context one table deeper.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Rc::clone(&self.source),
            path,
        }
    }

    /// "field in 'types.Post'", or just the kind at the top level.
    pub fn context_for(&self, kind: &str) -> String {
        match self.path.as_slice() {
            [] => kind.to_string(),
            path => format!("{} in '{}'", kind, path.join(".")),
        }
    }

    fn reject(&self, problem: Problem, name: &str) -> Box<crate::Error> {
        self.source
            .reject(problem, find_name_span(self.source.text(), name))
    }

    fn check_identifier(
        &self,
        name: &str,
        kind: &str,
        check: fn(&str) -> Option<&'static str>,
    ) -> Result<()> {
        match check(name) {
            Some(reason) => Err(self.reject(
                Problem::Identifier {
                    name: name.to_string(),
                    context: self.context_for(kind),
                    reason,
                },
                name,
            )),
            None => Ok(()),
        }
    }

    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check_identifier(name, kind, validate_identifier)
    }

    /// Package clauses must also avoid Go keywords.
    pub fn validate_package(&self, name: &str) -> Result<()> {
        if is_go_keyword(name) {
            return Err(self.reject(
                Problem::Keyword {
                    name: name.to_string(),
                    context: "package".to_string(),
                },
                name,
            ));
        }
        self.validate_name(name, "package")
    }

    pub fn validate_variants(&self, variants: &Variants) -> Result<()> {
        variants.names().try_for_each(|name| {
            self.check_identifier(name, "template variant", validate_variant_name)
        })
    }

    pub fn validation_error(&self, message: impl Into<String>, name: &str) -> Box<crate::Error> {
        self.reject(Problem::Message(message.into()), name)
    }
}

/// Check names and values that deserialization alone cannot.
pub(crate) fn validate_config(config: &Config, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    ctx.validate_package(&config.package)?;

    let scalars = ctx.push("scalars");
    for (name, scalar) in &config.scalars {
        scalars.validate_name(name, "scalar")?;
        if scalar.target.trim().is_empty() {
            return Err(scalars.validation_error(
                format!("scalar '{}' maps to an empty Go type", name),
                name,
            ));
        }
    }

    let types = ctx.push("types");
    for (type_name, type_config) in &config.types {
        types.validate_name(type_name, "type")?;
        let ty = types.push(type_name);
        ty.validate_variants(&type_config.templates)?;

        let fields = ty.push("fields");
        for (field_name, field_config) in &type_config.fields {
            fields.validate_name(field_name, "field")?;
            fields
                .push(field_name)
                .validate_variants(&field_config.templates)?;
        }
    }

    Ok(())
}

/// Go reserved keywords that cannot be used as identifiers
/// Source: https://go.dev/ref/spec#Keywords
pub(crate) const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Check if a name is a Go reserved keyword
pub(crate) fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.` or `= "name"`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table header patterns with leading dot
    // e.g., [types.Post] or [types.Post.fields.title]
    let header_patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &header_patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Quoted values, e.g. package = "name"
    for quote in ['"', '\''] {
        let pattern = format!("= {quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 3, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid GraphQL/Go identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Validate a template variant name; these name template files, so dashes
/// are allowed as well (e.g. "with-context").
pub(crate) fn validate_variant_name(name: &str) -> Option<&'static str> {
    if name.starts_with('-') || name.ends_with('-') {
        return Some("name cannot start or end with a dash");
    }
    validate_identifier(&name.replace('-', "_"))
}
