use quill_codegen::{Artifacts, Driver, Result, Templates};
use quill_manifest::{Config, FormatterKind};

use crate::{Go, Gofmt, builtin_templates};

/// Go resolver generator.
///
/// Wraps a [`Driver`] set up for Go, formatting with the formatter named
/// in the configuration.
pub struct Generator {
    driver: Driver,
}

impl Generator {
    /// Generator using the built-in templates.
    pub fn new(config: Config) -> Self {
        Self::with_templates(config, builtin_templates())
    }

    pub fn with_templates(config: Config, templates: Templates) -> Self {
        let formatter = config.formatter;
        let driver = Driver::new(Go, config, templates);
        let driver = match formatter {
            FormatterKind::Tidy => driver,
            FormatterKind::Gofmt => driver.with_formatter(Gofmt::new()),
        };
        Self { driver }
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Generate resolvers for every eligible type of the schema.
    pub fn generate(&self, schema: &str) -> Result<Artifacts> {
        self.driver.generate(schema)
    }
}
