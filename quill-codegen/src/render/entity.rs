use quill_ir::SchemaType;
use quill_manifest::TypeConfig;
use tera::Context;
use tracing::debug;

use super::{Body, Renderer, render_template};
use crate::{Error, ImportCollector, Result, TemplateScope};

impl Renderer<'_> {
    /// Render a type through its configured variants and format the result.
    ///
    /// All fields are rendered first; every type variant then sees the same
    /// ordered declarations, methods and deduplicated imports.
    pub fn render_type(&self, ty: &SchemaType) -> Result<String> {
        let default_config = TypeConfig::default();
        let type_config = self.config.type_config(&ty.name).unwrap_or(&default_config);

        let mut fields = Vec::with_capacity(ty.fields.len());
        let mut methods = Vec::with_capacity(ty.fields.len());
        let mut imports = ImportCollector::new();
        for field in &ty.fields {
            let rendered = self.render_field(ty, field, type_config.field(&field.name))?;
            fields.push(rendered.declaration);
            methods.push(rendered.method);
            imports.extend(rendered.imports);
        }
        let imports = imports.into_vec();
        let description = ty.description.as_deref().unwrap_or_default();

        let variants = type_config.templates.resolved();
        let mut code = String::new();
        for (variant, params) in variants.iter() {
            debug!("Rendering {} {} with variant {}", ty.kind, ty.name, variant);
            let set = self.lookup(&ty.name, TemplateScope::Type, variant)?;

            let mut context = Context::new();
            context.insert("kind", ty.kind.as_str());
            context.insert("possible_types", &ty.possible_types);
            context.insert("type_name", &ty.name);
            context.insert("type_description", description);
            context.insert("config", self.config);
            context.insert("fields", &fields);
            context.insert("methods", &methods);
            context.insert("imports", &imports);
            context.insert("template_config", params);

            let rendered = render_template(
                &format!("type/{variant}"),
                &set.body,
                Body::Trimmed,
                &context,
            )
            .map_err(|source| Error::Render {
                owner: ty.name.clone(),
                scope: TemplateScope::Type,
                variant: variant.to_string(),
                source,
            })?;
            code.push_str(&rendered);
        }

        self.formatter
            .format(&code)
            .map_err(|source| Error::Format {
                entity: ty.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use quill_ir::Catalogue;
    use quill_manifest::{Config, Params, TypeConfig, Variants};

    use super::*;
    use crate::{
        FormatError, Formatter, ScalarMapping, Templates, Tidy, TypeMapper,
        scalars::tests::TestLanguage,
    };

    const SCHEMA: &str = r#"
        "A published article"
        type Post implements Node {
            id: ID!
            parent: ID
            tags: [String!]
        }

        interface Node {
            id: ID!
        }
    "#;

    fn templates() -> Templates {
        Templates::new()
            .with_type(
                "default",
                r#"// {{ kind }} {{ type_name }}: {{ type_description }}
{% for import in imports %}import {{ import }}
{% endfor %}type {{ type_name }}Resolver struct {
{% for field in fields %}{{ field }}{% endfor %}}
{% for method in methods %}{{ method }}{% endfor %}{% for possible in possible_types %}// can be {{ possible }}
{% endfor %}"#,
            )
            .with_type(
                "footer",
                "// {{ config.package }} {{ template_config.note }}\n",
            )
            .with_field(
                "default",
                "{{ field_name }} {{ field_type }}\n",
                "",
            )
    }

    fn render_with(config: &Config, formatter: &dyn Formatter, name: &str) -> Result<String> {
        let catalogue = Catalogue::parse(SCHEMA).unwrap();
        let scalars = ScalarMapping::for_language(&TestLanguage, &IndexMap::new());
        let templates = templates();
        let renderer = Renderer::new(
            config,
            &scalars,
            TypeMapper::new(&TestLanguage, &scalars),
            &templates,
            formatter,
        );
        renderer.render_type(catalogue.get(name).unwrap())
    }

    #[test]
    fn test_object_default_variant() {
        let code = render_with(&Config::default(), &Tidy, "Post").unwrap();
        assert_eq!(
            code,
            r#"// OBJECT Post: A published article
import graphql "github.com/graph-gophers/graphql-go"
type PostResolver struct {
id graphql.ID
parent *graphql.ID
tags *[]string
}
"#
        );
    }

    #[test]
    fn test_interface_possible_types() {
        let code = render_with(&Config::default(), &Tidy, "Node").unwrap();
        assert!(code.starts_with("// INTERFACE Node:\n"));
        assert!(code.ends_with("}\n// can be Post\n"));
    }

    #[test]
    fn test_configured_type_variants() {
        let mut params = Params::new();
        params.insert("note".to_string(), "generated".into());
        let mut config = Config::default();
        config.types.insert(
            "Post".to_string(),
            TypeConfig {
                templates: Variants::new()
                    .with("default", Params::new())
                    .with("footer", params),
                fields: IndexMap::new(),
            },
        );

        let code = render_with(&config, &Tidy, "Post").unwrap();
        assert!(code.ends_with("}\n// resolvers generated\n"));
    }

    #[test]
    fn test_unknown_type_variant() {
        let mut config = Config::default();
        config.types.insert(
            "Post".to_string(),
            TypeConfig {
                templates: Variants::new().with("missing", Params::new()),
                fields: IndexMap::new(),
            },
        );

        let err = render_with(&config, &Tidy, "Post").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownTemplate { ref owner, scope: TemplateScope::Type, ref variant }
                if owner == "Post" && variant == "missing"
        ));
    }

    struct Reject;

    impl Formatter for Reject {
        fn format(&self, _source: &str) -> std::result::Result<String, FormatError> {
            Err(FormatError::new("rejected"))
        }
    }

    #[test]
    fn test_format_error_names_entity() {
        let err = render_with(&Config::default(), &Reject, "Post").unwrap_err();
        assert!(matches!(err, Error::Format { ref entity, .. } if entity == "Post"));
    }
}
