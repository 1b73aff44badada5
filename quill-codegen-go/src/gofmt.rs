use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

use quill_codegen::{FormatError, Formatter};

/// Formats code by piping it through `gofmt`.
#[derive(Debug, Clone)]
pub struct Gofmt {
    program: PathBuf,
}

impl Default for Gofmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Gofmt {
    /// Use `gofmt` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("gofmt")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Formatter for Gofmt {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let program = self.program.display();
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| FormatError::new(format!("failed to run {}: {}", program, e)))?;

        // gofmt reads all of stdin before writing, and dropping the handle closes it
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| FormatError::new(format!("failed to write to {}: {}", program, e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| FormatError::new(format!("failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            return Err(FormatError::new(format!(
                "{} failed:\n{}",
                program,
                String::from_utf8_lossy(&output.stderr).trim_end()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| FormatError::new(format!("{} produced invalid UTF-8: {}", program, e)))
    }
}
