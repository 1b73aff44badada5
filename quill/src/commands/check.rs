use clap::Args;
use eyre::Result;
use quill_ir::Catalogue;

use super::UnwrapOrExit;
use crate::{
    ops,
    project::{Project, ProjectArgs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = Project::load(&self.project).unwrap_or_exit();
        let schema = project.read_schema()?;
        let catalogue = Catalogue::parse(&schema).unwrap_or_exit();
        let generator = project.generator().unwrap_or_exit();

        let report = ops::check(&project, generator.driver(), &catalogue);
        report.render(&mut TerminalOutput);
        Ok(())
    }
}
