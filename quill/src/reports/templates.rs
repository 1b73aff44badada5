//! Templates command report data structures.

use std::path::PathBuf;

use super::output::{Mark, Output, Report};

/// Report data listing template variants.
#[derive(Debug)]
pub struct TemplatesReport {
    /// User template directory layered over the built-ins, if any.
    pub templates_dir: Option<PathBuf>,
    pub type_variants: Vec<String>,
    pub field_variants: Vec<String>,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(dir) = &self.templates_dir {
            out.field("templates", &dir.display().to_string());
            out.blank();
        }

        out.heading("Type variants");
        for variant in &self.type_variants {
            out.entry(Mark::Plain, variant);
        }
        out.blank();

        out.heading("Field variants");
        for variant in &self.field_variants {
            out.entry(Mark::Plain, variant);
        }
    }
}
