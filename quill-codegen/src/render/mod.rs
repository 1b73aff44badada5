//! Field and type rendering.
//!
//! Every template is compiled on its own [`Tera`] instance with the naming
//! filters registered, then rendered against a context built per variant.

mod entity;
mod field;

use std::collections::HashMap;

use quill_core::{capitalize, to_pascal_case, to_snake_case, uncapitalize};
use quill_manifest::Config;
use tera::{Context, Tera, Value};

pub use field::RenderedField;

use crate::{
    Error, Formatter, Result, ScalarMapping, TemplateScope, TemplateSet, TemplateStore,
    TypeMapper,
};

/// Renders schema types through their configured template variants.
pub struct Renderer<'a> {
    config: &'a Config,
    scalars: &'a ScalarMapping,
    mapper: TypeMapper<'a>,
    templates: &'a dyn TemplateStore,
    formatter: &'a dyn Formatter,
}

impl<'a> Renderer<'a> {
    pub fn new(
        config: &'a Config,
        scalars: &'a ScalarMapping,
        mapper: TypeMapper<'a>,
        templates: &'a dyn TemplateStore,
        formatter: &'a dyn Formatter,
    ) -> Self {
        Self {
            config,
            scalars,
            mapper,
            templates,
            formatter,
        }
    }

    fn lookup(&self, owner: &str, scope: TemplateScope, variant: &str) -> Result<&'a TemplateSet> {
        self.templates
            .lookup(variant, scope)
            .ok_or_else(|| Error::UnknownTemplate {
                owner: owner.to_string(),
                scope,
                variant: variant.to_string(),
            })
    }
}

/// Whitespace handling of a template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Body {
    /// Leading and trailing spaces and tabs are ignored
    Trimmed,
    /// Rendered exactly as written
    Verbatim,
}

/// Render one template with the naming filters available.
pub(crate) fn render_template(
    name: &str,
    source: &str,
    body: Body,
    context: &Context,
) -> std::result::Result<String, tera::Error> {
    let source = match body {
        Body::Trimmed => source.trim_matches([' ', '\t']),
        Body::Verbatim => source,
    };
    let mut tera = Tera::default();
    register_filters(&mut tera);
    tera.add_raw_template(name, source)?;
    tera.render(name, context)
}

/// Register `capitalize`, `uncapitalize`, `pascal_case`, `snake_case`,
/// `single_line` and `indent_lines`.
///
/// `capitalize` replaces Tera's built-in filter of the same name, which
/// lowercases the rest of the string.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("capitalize", string_filter("capitalize", capitalize));
    tera.register_filter("uncapitalize", string_filter("uncapitalize", uncapitalize));
    tera.register_filter("pascal_case", string_filter("pascal_case", to_pascal_case));
    tera.register_filter("snake_case", string_filter("snake_case", to_snake_case));
    tera.register_filter("single_line", string_filter("single_line", single_line));
    tera.register_filter("indent_lines", string_filter("indent_lines", indent_lines));
}

/// Prefix every non-blank line with a tab.
fn indent_lines(s: &str) -> String {
    s.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("\t{line}")
            }
        })
        .collect()
}

/// Collapse every whitespace run, newlines included, into one space.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn string_filter(name: &'static str, transform: fn(&str) -> String) -> impl tera::Filter {
    move |value: &Value, _: &HashMap<String, Value>| -> tera::Result<Value> {
        let s = value
            .as_str()
            .ok_or_else(|| tera::Error::msg(format!("filter `{name}` expects a string")))?;
        Ok(Value::String(transform(s)))
    }
}
