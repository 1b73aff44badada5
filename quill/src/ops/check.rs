//! Check operation - plan generation without rendering.

use quill_codegen::{Action, Driver};
use quill_ir::Catalogue;

use crate::{
    project::Project,
    reports::{CheckReport, PlanEntry},
};

/// Execute the check operation.
///
/// Lists what a generate run would do with every non-internal type.
pub fn check(project: &Project, driver: &Driver, catalogue: &Catalogue) -> CheckReport {
    let mut entries = Vec::new();
    let mut internal = 0;

    for planned in driver.plan(catalogue) {
        let outcome = match planned.action {
            Action::SkipInternal => {
                internal += 1;
                continue;
            }
            Action::Generate { filename } => Ok(filename),
            other => Err(other.skip_reason().unwrap_or_default()),
        };
        entries.push(PlanEntry {
            name: planned.ty.name.clone(),
            kind: planned.ty.kind.to_string(),
            outcome,
        });
    }

    CheckReport {
        config_path: project.config_path.clone(),
        schema_path: project.schema_path.clone(),
        package: project.config.package.clone(),
        entries,
        internal,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use quill_codegen_go::Generator;
    use quill_manifest::Config;

    use super::*;

    #[test]
    fn test_plan_entries() {
        let project = Project {
            config: Config::default(),
            config_path: None,
            schema_path: PathBuf::from("schema.graphql"),
            templates_dir: None,
            output_dir: PathBuf::from("."),
        };
        let catalogue = Catalogue::parse("type Post { id: ID! } enum Status { DRAFT }").unwrap();
        let generator = Generator::new(Config::default());

        let report = check(&project, generator.driver(), &catalogue);

        let post = report.entries.iter().find(|e| e.name == "Post").unwrap();
        assert_eq!(post.outcome, Ok("post_gen.go".to_string()));
        let status = report.entries.iter().find(|e| e.name == "Status").unwrap();
        assert_eq!(status.outcome, Err("not supported yet"));
        let string = report.entries.iter().find(|e| e.name == "String").unwrap();
        assert_eq!(string.outcome, Err("mapped scalar"));

        assert!(report.entries.iter().all(|e| !e.name.starts_with("__")));
        assert!(report.internal > 0);
    }
}
