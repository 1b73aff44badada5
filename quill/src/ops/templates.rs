//! Templates operation - list available variants.

use quill_codegen::{Driver, TemplateScope};

use crate::{project::Project, reports::TemplatesReport};

/// Execute the templates operation.
pub fn templates(project: &Project, driver: &Driver) -> TemplatesReport {
    let store = driver.templates();
    let names = |scope: TemplateScope| -> Vec<String> {
        store
            .variants(scope)
            .into_iter()
            .map(str::to_string)
            .collect()
    };

    TemplatesReport {
        templates_dir: project.templates_dir.clone(),
        type_variants: names(TemplateScope::Type),
        field_variants: names(TemplateScope::Field),
    }
}
