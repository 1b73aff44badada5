use quill_codegen::{Language, ScalarDef};

/// Import of the graphql-go package, needed by `graphql.ID`.
pub const GRAPHQL_IMPORT: &str = r#"graphql "github.com/graph-gophers/graphql-go""#;

/// Go as a target language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Go;

impl Language for Go {
    fn name(&self) -> &'static str {
        "Go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn nullable_marker(&self) -> &'static str {
        "*"
    }

    fn list_marker(&self) -> &'static str {
        "[]"
    }

    fn resolver_suffix(&self) -> &'static str {
        "Resolver"
    }

    fn builtin_scalars(&self) -> Vec<(&'static str, ScalarDef)> {
        vec![
            ("Boolean", ScalarDef::builtin("bool")),
            ("Float", ScalarDef::builtin("float64")),
            ("ID", ScalarDef::builtin("graphql.ID").with_import(GRAPHQL_IMPORT)),
            ("Int", ScalarDef::builtin("int32")),
            ("String", ScalarDef::builtin("string")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scalars() {
        let scalars = Go.builtin_scalars();
        let targets: Vec<(&str, &str)> = scalars
            .iter()
            .map(|(name, def)| (*name, def.target.as_str()))
            .collect();

        assert_eq!(
            targets,
            [
                ("Boolean", "bool"),
                ("Float", "float64"),
                ("ID", "graphql.ID"),
                ("Int", "int32"),
                ("String", "string"),
            ]
        );
        assert!(scalars.iter().all(|(_, def)| def.skip));
        assert!(
            scalars
                .iter()
                .filter(|(name, _)| *name != "ID")
                .all(|(_, def)| def.import.is_none())
        );
    }
}
