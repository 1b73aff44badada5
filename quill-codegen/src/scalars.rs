//! Scalar name to target type mapping.

use indexmap::IndexMap;
use quill_manifest::ScalarOverride;
use tracing::warn;

use crate::Language;

/// How one GraphQL scalar appears in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// No artifact is generated for the scalar itself
    pub skip: bool,
    /// Target type expression (e.g., "graphql.ID")
    pub target: String,
    /// Import the target type needs, if any
    pub import: Option<String>,
}

impl ScalarDef {
    /// A skipped scalar without an import.
    pub fn builtin(target: impl Into<String>) -> Self {
        Self {
            skip: true,
            target: target.into(),
            import: None,
        }
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.import = Some(import.into());
        self
    }
}

impl From<&ScalarOverride> for ScalarDef {
    fn from(value: &ScalarOverride) -> Self {
        Self {
            skip: value.skip,
            target: value.target.clone(),
            import: value.import.clone().filter(|import| !import.is_empty()),
        }
    }
}

/// Known scalars keyed by GraphQL name.
#[derive(Debug, Clone, Default)]
pub struct ScalarMapping {
    scalars: IndexMap<String, ScalarDef>,
}

impl ScalarMapping {
    /// The language's built-in scalars extended with configured ones.
    ///
    /// Built-in mappings cannot be replaced; an override naming one is
    /// ignored with a warning.
    pub fn for_language(
        language: &dyn Language,
        overrides: &IndexMap<String, ScalarOverride>,
    ) -> Self {
        let mut mapping = Self::default();
        for (name, def) in language.builtin_scalars() {
            mapping.scalars.insert(name.to_string(), def);
        }
        for (name, scalar) in overrides {
            if mapping.scalars.contains_key(name) {
                warn!("Ignoring mapping for built-in scalar {}", name);
                continue;
            }
            mapping.scalars.insert(name.clone(), ScalarDef::from(scalar));
        }
        mapping
    }

    pub fn get(&self, name: &str) -> Option<&ScalarDef> {
        self.scalars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Whether the scalar gets no artifact of its own.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.get(name).is_some_and(|def| def.skip)
    }

    /// Iterate over built-in scalars first, then configured ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarDef)> {
        self.scalars.iter().map(|(name, def)| (name.as_str(), def))
    }
}
