use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quill_core::Overwrite;
use quill_manifest::FormatterKind;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    project::{Project, ProjectArgs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output directory (defaults to `output` in quill.toml, then the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format with gofmt instead of the built-in formatter
    #[arg(long)]
    pub gofmt: bool,

    /// Rewrite files even when their content is unchanged
    #[arg(long)]
    pub force: bool,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut project = Project::load(&self.project).unwrap_or_exit();
        if self.gofmt {
            project.config.formatter = FormatterKind::Gofmt;
        }

        let schema = project.read_schema()?;
        let generator = project.generator().unwrap_or_exit();
        let artifacts = generator.generate(&schema).unwrap_or_exit();

        let output_dir = self.output.as_ref().unwrap_or(&project.output_dir);
        let report = ops::generate(
            artifacts,
            GenerateOptions {
                output_dir,
                dry_run: self.dry_run,
                overwrite: if self.force {
                    Overwrite::Always
                } else {
                    Overwrite::IfChanged
                },
            },
        )?;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
