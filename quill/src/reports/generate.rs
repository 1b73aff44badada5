//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Mark, Output, Report};

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    /// The file on disk already had this content
    Unchanged,
    /// Dry run; holds the content that would be written
    Preview(String),
}

#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub filename: String,
    pub status: FileStatus,
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<GeneratedFile>,
}

impl GenerateReport {
    fn count(&self, status: &FileStatus) -> usize {
        self.files.iter().filter(|f| &f.status == status).count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            for file in &self.files {
                if let FileStatus::Preview(content) = &file.status {
                    out.banner(&file.filename);
                    out.text(content);
                }
            }
            out.banner("Summary");
            out.text(&format!(
                "{} file{} would be generated",
                self.files.len(),
                if self.files.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        if self.files.is_empty() {
            out.text("Nothing to generate.");
            return;
        }

        out.heading(&format!("Generated in {}", self.output_dir.display()));
        for file in &self.files {
            match file.status {
                FileStatus::Unchanged => {
                    out.entry(Mark::Plain, &format!("{} (unchanged)", file.filename))
                }
                _ => out.entry(Mark::Added, &file.filename),
            }
        }
        out.blank();
        out.text(&format!(
            "{} written, {} unchanged",
            self.count(&FileStatus::Written),
            self.count(&FileStatus::Unchanged)
        ));
    }
}
