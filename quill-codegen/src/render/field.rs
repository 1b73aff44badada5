use quill_ir::{SchemaField, SchemaType};
use quill_manifest::FieldConfig;
use tera::Context;
use tracing::debug;

use super::{Body, Renderer, render_template};
use crate::{Error, Result, TemplateScope, field_imports};

/// Output of every variant of one field, concatenated in variant order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedField {
    /// Struct member declarations
    pub declaration: String,
    /// Accessor methods
    pub method: String,
    /// Imports the field's type needs, once per variant
    pub imports: Vec<String>,
}

impl Renderer<'_> {
    /// Render a field of `owner` through its configured variants.
    pub fn render_field(
        &self,
        owner: &SchemaType,
        field: &SchemaField,
        field_config: Option<&FieldConfig>,
    ) -> Result<RenderedField> {
        let label = format!("{}.{}", owner.name, field.name);
        let field_type = self.mapper.type_expr(&field.ty);
        let description = field.description.as_deref().unwrap_or_default();

        let default_config = FieldConfig::default();
        let variants = field_config.unwrap_or(&default_config).templates.resolved();

        let mut rendered = RenderedField::default();
        for (variant, params) in variants.iter() {
            debug!("Rendering field {} with variant {}", label, variant);
            let set = self.lookup(&label, TemplateScope::Field, variant)?;
            let render_err = |source| Error::Render {
                owner: label.clone(),
                scope: TemplateScope::Field,
                variant: variant.to_string(),
                source,
            };

            let mut context = Context::new();
            context.insert("type_kind", owner.kind.as_str());
            context.insert("field_name", &field.name);
            context.insert("field_description", description);
            context.insert("field_type", &field_type);
            context.insert("config", self.config);
            context.insert("template_config", params);
            let declaration = render_template(
                &format!("field/{variant}"),
                &set.body,
                Body::Trimmed,
                &context,
            )
            .map_err(render_err)?;

            let mut context = Context::new();
            context.insert("type_kind", owner.kind.as_str());
            context.insert("type_name", &owner.name);
            context.insert("method_name", &field.name);
            context.insert("method_return_type", &field_type);
            context.insert("method_return", &field.name);
            context.insert("config", self.config);
            context.insert("template_config", params);
            let method = render_template(
                &format!("field/{variant}.method"),
                set.method.as_deref().unwrap_or_default(),
                Body::Verbatim,
                &context,
            )
            .map_err(render_err)?;

            rendered.declaration.push_str(&declaration);
            rendered.method.push_str(&method);
            rendered
                .imports
                .extend(field_imports(&field.ty, self.scalars));
        }

        Ok(rendered)
    }
}
