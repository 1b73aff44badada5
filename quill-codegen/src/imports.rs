//! Dependency reference collection.

use indexmap::IndexSet;
use quill_ir::TypeRef;

use crate::ScalarMapping;

/// Deduplicated import references in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    imports: IndexSet<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import unless it is empty or already present.
    pub fn add(&mut self, import: impl Into<String>) {
        let import = import.into();
        if !import.is_empty() {
            self.imports.insert(import);
        }
    }

    pub fn extend<I, S>(&mut self, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for import in imports {
            self.add(import);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.imports.into_iter().collect()
    }
}

/// Imports a field of type `ty` needs.
///
/// Lists and non-null layers are looked through; only the named type at the
/// bottom can require an import, and only when it is a mapped scalar.
pub fn field_imports(ty: &TypeRef, scalars: &ScalarMapping) -> Vec<String> {
    scalars
        .get(ty.base_name())
        .and_then(|scalar| scalar.import.clone())
        .filter(|import| !import.is_empty())
        .into_iter()
        .collect()
}
