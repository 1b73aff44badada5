use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    project::{Project, ProjectArgs},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl TemplatesCommand {
    /// Run the templates command
    pub fn run(&self) -> Result<()> {
        let project = Project::load(&self.project).unwrap_or_exit();
        let generator = project.generator().unwrap_or_exit();

        let report = ops::templates(&project, generator.driver());
        report.render(&mut TerminalOutput);
        Ok(())
    }
}
