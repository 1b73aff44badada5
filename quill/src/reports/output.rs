//! Line-oriented rendering of command reports.

/// Marker in front of a list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Something created or planned, shown as `+`
    Added,
    /// Everything else, shown as `-`
    Plain,
}

impl Mark {
    fn symbol(self) -> char {
        match self {
            Mark::Added => '+',
            Mark::Plain => '-',
        }
    }
}

/// Where report lines go.
///
/// Implementors only decide what happens to a finished line; the layout of
/// headings, entries and banners is shared.
pub trait Output {
    fn line(&mut self, text: &str);

    fn heading(&mut self, title: &str) {
        self.line(&format!("{title}:"));
    }

    fn field(&mut self, key: &str, value: &str) {
        self.line(&format!("{key}: {value}"));
    }

    fn entry(&mut self, mark: Mark, text: &str) {
        self.line(&format!("  {} {text}", mark.symbol()));
    }

    fn banner(&mut self, label: &str) {
        self.line(&format!("── {label} ──"));
    }

    /// Text emitted as is, minus one trailing newline.
    fn text(&mut self, text: &str) {
        self.line(text.strip_suffix('\n').unwrap_or(text));
    }

    fn blank(&mut self) {
        self.line("");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints report lines to stdout. Logs go to stderr, so the two never mix.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}
