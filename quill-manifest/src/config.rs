//! Configuration types for quill.toml.

use std::{borrow::Cow, fmt, path::PathBuf, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Free-form parameters handed to a template variant as `template_config`.
pub type Params = serde_json::Map<String, serde_json::Value>;

/// Go package used when quill.toml does not name one.
pub const DEFAULT_PACKAGE: &str = "resolvers";

/// Root configuration for quill.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Package clause of every generated file
    #[serde(default = "default_package")]
    pub package: String,

    /// Default schema path for the CLI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,

    /// Default output directory for the CLI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Template directory layered over the built-in templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<PathBuf>,

    /// Formatter applied to each rendered type
    #[serde(default)]
    pub formatter: FormatterKind,

    /// Custom scalar mappings, keyed by GraphQL scalar name
    #[serde(default)]
    pub scalars: IndexMap<String, ScalarOverride>,

    /// Per-type template configuration, keyed by GraphQL type name
    #[serde(default)]
    pub types: IndexMap<String, TypeConfig>,
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: default_package(),
            schema: None,
            output: None,
            templates: None,
            formatter: FormatterKind::default(),
            scalars: IndexMap::new(),
            types: IndexMap::new(),
        }
    }
}

impl Config {
    /// Configuration for a GraphQL type, if any was given.
    pub fn type_config(&self, name: &str) -> Option<&TypeConfig> {
        self.types.get(name)
    }
}

/// Template configuration of one GraphQL type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    /// Type-level template variants
    #[serde(default)]
    pub templates: Variants,

    /// Per-field configuration, keyed by field name
    #[serde(default)]
    pub fields: IndexMap<String, FieldConfig>,
}

impl TypeConfig {
    /// Configuration for a field, if any was given.
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }
}

/// Template configuration of one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default)]
    pub templates: Variants,
}

/// Template variants in the order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variants(IndexMap<String, Params>);

impl Variants {
    /// Variant rendered when none is configured.
    pub const DEFAULT: &'static str = "default";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant, keeping its position if it was already present.
    pub fn with(mut self, name: impl Into<String>, params: Params) -> Self {
        self.0.insert(name.into(), params);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Variant names in configured order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Variants with their parameters in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Params)> {
        self.0.iter().map(|(name, params)| (name.as_str(), params))
    }

    /// The variants to render: these, or a lone `default` variant with no
    /// parameters when none were configured.
    pub fn resolved(&self) -> Cow<'_, Self> {
        if self.is_empty() {
            Cow::Owned(Self::new().with(Self::DEFAULT, Params::new()))
        } else {
            Cow::Borrowed(self)
        }
    }
}

/// Mapping of a custom scalar onto a Go type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalarOverride {
    /// Go type expression (e.g., "time.Time")
    #[serde(rename = "type")]
    pub target: String,

    /// Import line the Go type needs (e.g., `"time"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<String>,

    /// Skip generating a resolver file for the scalar itself
    #[serde(default = "default_skip")]
    pub skip: bool,
}

fn default_skip() -> bool {
    true
}

/// Formatter applied to rendered code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Built-in whitespace normalizer with a bracket balance check
    #[default]
    Tidy,
    /// The external `gofmt` tool
    Gofmt,
}

impl FormatterKind {
    /// Returns the formatter identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Tidy => "tidy",
            FormatterKind::Gofmt => "gofmt",
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormatterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tidy" => Ok(FormatterKind::Tidy),
            "gofmt" => Ok(FormatterKind::Gofmt),
            _ => Err(format!(
                "unknown formatter '{}', expected 'tidy' or 'gofmt'",
                s
            )),
        }
    }
}
