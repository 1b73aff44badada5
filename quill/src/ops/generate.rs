//! Generate operation - write artifacts to disk.

use std::path::Path;

use eyre::Result;
use quill_codegen::Artifacts;
use quill_core::{File, Overwrite, WriteResult};
use tracing::debug;

use crate::reports::{FileStatus, GenerateReport, GeneratedFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the artifacts are written to.
    pub output_dir: &'a Path,
    /// Whether to print instead of writing.
    pub dry_run: bool,
    /// What to do with files that already exist.
    pub overwrite: Overwrite,
}

/// Execute the generate operation.
///
/// Writes every artifact into the output directory, or only collects them
/// on a dry run.
pub fn generate(artifacts: Artifacts, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut files = Vec::with_capacity(artifacts.len());

    for (filename, content) in artifacts.into_contents() {
        let status = if opts.dry_run {
            FileStatus::Preview(content)
        } else {
            let file = File::new(opts.output_dir.join(&filename), content)
                .with_overwrite(opts.overwrite);
            match file.write()? {
                WriteResult::Written => {
                    debug!("Wrote {}", file.path().display());
                    FileStatus::Written
                }
                WriteResult::Unchanged => FileStatus::Unchanged,
            }
        };
        files.push(GeneratedFile { filename, status });
    }

    Ok(GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        dry_run: opts.dry_run,
        files,
    })
}
