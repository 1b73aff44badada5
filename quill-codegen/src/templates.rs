//! Named template variants.
//!
//! A type-scope variant has a body only. A field-scope variant has a body,
//! rendered into the struct as a field declaration, and a method rendered
//! after the struct.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;

use crate::{Error, Result};

/// File extension of template files.
pub const TEMPLATE_EXTENSION: &str = "tera";

/// Suffix marking the method half of a field variant (`lazy.method.tera`).
const METHOD_SUFFIX: &str = ".method";

/// Which kind of template a variant name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateScope {
    Type,
    Field,
}

impl TemplateScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateScope::Type => "type",
            TemplateScope::Field => "field",
        }
    }
}

impl fmt::Display for TemplateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template text of one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub body: String,
    /// Field scope only
    pub method: Option<String>,
}

/// Lookup of template variants by name and scope.
pub trait TemplateStore {
    fn lookup(&self, variant: &str, scope: TemplateScope) -> Option<&TemplateSet>;

    /// Variant names available in a scope.
    fn variants(&self, scope: TemplateScope) -> Vec<&str>;
}

/// In-memory template store.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    types: IndexMap<String, TemplateSet>,
    fields: IndexMap<String, TemplateSet>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a type-scope variant.
    pub fn insert_type(&mut self, variant: impl Into<String>, body: impl Into<String>) {
        self.types.insert(
            variant.into(),
            TemplateSet {
                body: body.into(),
                method: None,
            },
        );
    }

    /// Add or replace a field-scope variant.
    pub fn insert_field(
        &mut self,
        variant: impl Into<String>,
        body: impl Into<String>,
        method: impl Into<String>,
    ) {
        self.fields.insert(
            variant.into(),
            TemplateSet {
                body: body.into(),
                method: Some(method.into()),
            },
        );
    }

    pub fn with_type(mut self, variant: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert_type(variant, body);
        self
    }

    pub fn with_field(
        mut self,
        variant: impl Into<String>,
        body: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        self.insert_field(variant, body, method);
        self
    }

    /// Load variants from a directory, replacing same-named ones.
    ///
    /// Type variants are read from `type/<variant>.tera`. Field variants are
    /// read from `field/<variant>.tera`, with the method from
    /// `field/<variant>.method.tera` when present. Returns the number of
    /// variants loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut loaded = 0;

        for (variant, path) in template_files(&dir.join(TemplateScope::Type.as_str()))? {
            if variant.ends_with(METHOD_SUFFIX) {
                continue;
            }
            self.insert_type(variant, read_template(&path)?);
            loaded += 1;
        }

        let field_dir = dir.join(TemplateScope::Field.as_str());
        for (variant, path) in template_files(&field_dir)? {
            if variant.ends_with(METHOD_SUFFIX) {
                continue;
            }
            let method_path =
                field_dir.join(format!("{variant}{METHOD_SUFFIX}.{TEMPLATE_EXTENSION}"));
            let method = if method_path.is_file() {
                read_template(&method_path)?
            } else {
                String::new()
            };
            self.insert_field(variant, read_template(&path)?, method);
            loaded += 1;
        }

        Ok(loaded)
    }
}

impl TemplateStore for Templates {
    fn lookup(&self, variant: &str, scope: TemplateScope) -> Option<&TemplateSet> {
        match scope {
            TemplateScope::Type => self.types.get(variant),
            TemplateScope::Field => self.fields.get(variant),
        }
    }

    fn variants(&self, scope: TemplateScope) -> Vec<&str> {
        let map = match scope {
            TemplateScope::Type => &self.types,
            TemplateScope::Field => &self.fields,
        };
        map.keys().map(String::as_str).collect()
    }
}

/// `.tera` files of a directory as (variant, path), sorted by variant.
/// A missing directory has no templates.
fn template_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let io_err = |source| Error::TemplateIo {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }
        if let Some(variant) = path.file_stem().and_then(|stem| stem.to_str()) {
            files.push((variant.to_string(), path.clone()));
        }
    }
    files.sort();
    Ok(files)
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::TemplateIo {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_scope() {
        let templates = Templates::new()
            .with_type("default", "type body")
            .with_field("default", "field body", "method body");

        let ty = templates.lookup("default", TemplateScope::Type).unwrap();
        assert_eq!(ty.body, "type body");
        assert_eq!(ty.method, None);

        let field = templates.lookup("default", TemplateScope::Field).unwrap();
        assert_eq!(field.method.as_deref(), Some("method body"));

        assert!(templates.lookup("lazy", TemplateScope::Field).is_none());
    }

    #[test]
    fn test_variants_keep_insertion_order() {
        let templates = Templates::new()
            .with_type("default", "")
            .with_type("constructor", "")
            .with_type("default", "replaced");

        assert_eq!(
            templates.variants(TemplateScope::Type),
            ["default", "constructor"]
        );
        assert_eq!(
            templates.lookup("default", TemplateScope::Type).unwrap().body,
            "replaced"
        );
        assert!(templates.variants(TemplateScope::Field).is_empty());
    }

    #[test]
    fn test_load_dir() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("type")).unwrap();
        fs::create_dir_all(root.join("field")).unwrap();
        fs::write(root.join("type/audit.tera"), "// audit {{ type_name }}").unwrap();
        fs::write(root.join("type/notes.txt"), "ignored").unwrap();
        fs::write(root.join("field/cached.tera"), "{{ field_name }}").unwrap();
        fs::write(root.join("field/cached.method.tera"), "func cached()").unwrap();
        fs::write(root.join("field/plain.tera"), "{{ field_name }}").unwrap();

        let mut templates = Templates::new().with_field("cached", "old", "old");
        let loaded = templates.load_dir(root).unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(templates.variants(TemplateScope::Type), ["audit"]);
        let cached = templates.lookup("cached", TemplateScope::Field).unwrap();
        assert_eq!(cached.body, "{{ field_name }}");
        assert_eq!(cached.method.as_deref(), Some("func cached()"));
        let plain = templates.lookup("plain", TemplateScope::Field).unwrap();
        assert_eq!(plain.method.as_deref(), Some(""));
    }

    #[test]
    fn test_load_missing_dir() {
        let temp = tempfile::tempdir().unwrap();
        let mut templates = Templates::new();
        assert_eq!(templates.load_dir(&temp.path().join("none")).unwrap(), 0);
    }
}
