//! Locating the inputs of a run.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use quill_codegen_go::{Generator, load_templates};
use quill_manifest::{Config, QuillToml};

/// Config file read when `--config` is not given and it exists.
pub const DEFAULT_CONFIG: &str = "quill.toml";

/// Schema read when neither `--schema` nor quill.toml name one.
pub const DEFAULT_SCHEMA: &str = "schema.graphql";

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to quill.toml (defaults to ./quill.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the GraphQL schema (defaults to `schema` in quill.toml, then schema.graphql)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Directory of templates layered over the built-in ones
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}

/// Configuration and resolved paths of one run.
///
/// Paths taken from quill.toml are relative to the file, paths given as
/// flags are relative to the working directory.
#[derive(Debug)]
pub struct Project {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub schema_path: PathBuf,
    pub templates_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Project {
    pub fn load(args: &ProjectArgs) -> quill_manifest::Result<Self> {
        let file = match &args.config {
            Some(path) => Some(QuillToml::open(path)?),
            None if Path::new(DEFAULT_CONFIG).is_file() => Some(QuillToml::open(DEFAULT_CONFIG)?),
            None => None,
        };
        Ok(Self::from_parts(file, args))
    }

    fn from_parts(file: Option<QuillToml>, args: &ProjectArgs) -> Self {
        let resolve = |path: &Path| match &file {
            Some(file) => file.resolve(path),
            None => path.to_path_buf(),
        };
        let config = file
            .as_ref()
            .map(|file| file.config().clone())
            .unwrap_or_default();

        let schema_path = args.schema.clone().unwrap_or_else(|| {
            resolve(config.schema.as_deref().unwrap_or(Path::new(DEFAULT_SCHEMA)))
        });
        let templates_dir = args
            .templates
            .clone()
            .or_else(|| config.templates.as_deref().map(resolve));
        let output_dir = resolve(config.output.as_deref().unwrap_or(Path::new("")));
        let output_dir = if output_dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            output_dir
        };

        Self {
            config_path: file.map(|file| file.path().to_path_buf()),
            config,
            schema_path,
            templates_dir,
            output_dir,
        }
    }

    pub fn read_schema(&self) -> Result<String> {
        std::fs::read_to_string(&self.schema_path)
            .wrap_err_with(|| format!("failed to read schema '{}'", self.schema_path.display()))
    }

    /// Go generator with the project's templates layered over the built-ins.
    pub fn generator(&self) -> quill_codegen::Result<Generator> {
        let templates = load_templates(self.templates_dir.as_deref())?;
        Ok(Generator::with_templates(self.config.clone(), templates))
    }
}
