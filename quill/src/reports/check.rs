//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Mark, Output, Report};

/// What a generate run would do with one type.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub name: String,
    pub kind: String,
    /// Artifact filename, or the reason the type is skipped.
    pub outcome: Result<String, &'static str>,
}

/// Report data from validating the inputs.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file, if one was read.
    pub config_path: Option<PathBuf>,
    pub schema_path: PathBuf,
    pub package: String,
    /// Non-internal types in name order.
    pub entries: Vec<PlanEntry>,
    /// Number of internal types left out of `entries`.
    pub internal: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.text(&format!("✓ {} is valid", self.schema_path.display()));
        if let Some(config_path) = &self.config_path {
            out.text(&format!("✓ {} is valid", config_path.display()));
        }
        out.blank();
        out.field("package", &self.package);
        out.blank();

        out.heading("Generates");
        for entry in &self.entries {
            if let Ok(filename) = &entry.outcome {
                let line = format!("{} {} -> {}", entry.kind, entry.name, filename);
                out.entry(Mark::Added, &line);
            }
        }
        out.blank();

        out.heading("Skips");
        for entry in &self.entries {
            if let Err(reason) = &entry.outcome {
                let line = format!("{} {} ({})", entry.kind, entry.name, reason);
                out.entry(Mark::Plain, &line);
            }
        }
        if self.internal > 0 {
            out.entry(Mark::Plain, &format!("{} internal types", self.internal));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::Recorder;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: None,
            schema_path: PathBuf::from("schema.graphql"),
            package: "resolvers".to_string(),
            entries: vec![
                PlanEntry {
                    name: "Post".to_string(),
                    kind: "OBJECT".to_string(),
                    outcome: Ok("post_gen.go".to_string()),
                },
                PlanEntry {
                    name: "Status".to_string(),
                    kind: "ENUM".to_string(),
                    outcome: Err("not supported yet"),
                },
            ],
            internal: 8,
        };
        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "✓ schema.graphql is valid",
                "",
                "package: resolvers",
                "",
                "Generates:",
                "  + OBJECT Post -> post_gen.go",
                "",
                "Skips:",
                "  - ENUM Status (not supported yet)",
                "  - 8 internal types",
            ]
        );
    }
}
