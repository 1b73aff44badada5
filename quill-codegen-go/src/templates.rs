//! Built-in Go templates.

use std::path::Path;

use quill_codegen::{Result, Templates};
use tracing::debug;

/// The templates shipped with quill.
///
/// Type variants: `default` (package clause, imports, resolver struct and
/// accessors) and `constructor` (a `New<Name>Resolver` function, the prefix
/// configurable through a `prefix` parameter). Field variants: `default`
/// (a plain struct member) and `lazy` (a `<name>Func` member called on
/// access, with an optional `fallback` expression returned when unset).
pub fn builtin_templates() -> Templates {
    Templates::new()
        .with_type("default", include_str!("../templates/type/default.tera"))
        .with_type(
            "constructor",
            include_str!("../templates/type/constructor.tera"),
        )
        .with_field(
            "default",
            include_str!("../templates/field/default.tera"),
            include_str!("../templates/field/default.method.tera"),
        )
        .with_field(
            "lazy",
            include_str!("../templates/field/lazy.tera"),
            include_str!("../templates/field/lazy.method.tera"),
        )
}

/// Built-in templates with a user directory layered on top.
pub fn load_templates(dir: Option<&Path>) -> Result<Templates> {
    let mut templates = builtin_templates();
    if let Some(dir) = dir {
        let loaded = templates.load_dir(dir)?;
        debug!("Loaded {} templates from {}", loaded, dir.display());
    }
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use quill_codegen::{TemplateScope, TemplateStore};

    use super::*;

    #[test]
    fn test_builtin_variants() {
        let templates = builtin_templates();
        assert_eq!(
            templates.variants(TemplateScope::Type),
            ["default", "constructor"]
        );
        assert_eq!(templates.variants(TemplateScope::Field), ["default", "lazy"]);
    }

    #[test]
    fn test_user_templates_override_builtins() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("field")).unwrap();
        std::fs::write(temp.path().join("field/default.tera"), "{{ field_name }}\n").unwrap();

        let templates = load_templates(Some(temp.path())).unwrap();
        let set = templates.lookup("default", TemplateScope::Field).unwrap();
        assert_eq!(set.body, "{{ field_name }}\n");
        assert_eq!(set.method.as_deref(), Some(""));
        assert_eq!(templates.variants(TemplateScope::Field), ["default", "lazy"]);
    }
}
