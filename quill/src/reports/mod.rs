//! What each command prints.
//!
//! Operations return plain report values; rendering them is the last step of
//! a command.

mod check;
mod generate;
mod output;
mod templates;

pub use check::{CheckReport, PlanEntry};
pub use generate::{FileStatus, GenerateReport, GeneratedFile};
pub use output::{Report, TerminalOutput};
pub use templates::TemplatesReport;
