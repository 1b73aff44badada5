//! Formatting of rendered code.

use thiserror::Error;

/// A formatter rejected the rendered code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns rendered text into its final form.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Whitespace normalizer for C-family sources.
///
/// Strips trailing whitespace, drops leading and trailing blank lines,
/// collapses runs of blank lines into one and ends the file with a single
/// newline. Sources whose brackets do not balance are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tidy;

impl Formatter for Tidy {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        check_brackets(source)?;

        let mut out = String::with_capacity(source.len());
        let mut pending_blank = false;
        for line in source.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                pending_blank = !out.is_empty();
                continue;
            }
            if pending_blank {
                out.push('\n');
                pending_blank = false;
            }
            out.push_str(line);
            out.push('\n');
        }
        Ok(out)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

/// Check that `()`, `[]` and `{}` pair up outside of strings and comments.
fn check_brackets(source: &str) -> Result<(), FormatError> {
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut state = Lexeme::Code;
    let mut line = 1;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        match state {
            Lexeme::Code => match c {
                '"' | '\'' | '`' => state = Lexeme::Quoted(c),
                '/' if chars.peek() == Some(&'/') => state = Lexeme::LineComment,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = Lexeme::BlockComment;
                }
                '(' | '[' | '{' => open.push((c, line)),
                ')' | ']' | '}' => {
                    let expected = match open.pop() {
                        Some(('(', _)) => ')',
                        Some(('[', _)) => ']',
                        Some(_) => '}',
                        None => {
                            return Err(FormatError::new(format!(
                                "unexpected '{c}' on line {line}"
                            )));
                        }
                    };
                    if c != expected {
                        return Err(FormatError::new(format!(
                            "expected '{expected}' but found '{c}' on line {line}"
                        )));
                    }
                }
                _ => {}
            },
            Lexeme::Quoted(quote) => {
                if c == '\\' && quote != '`' {
                    if chars.next() == Some('\n') {
                        line += 1;
                    }
                } else if c == quote {
                    state = Lexeme::Code;
                }
            }
            Lexeme::LineComment => {
                if c == '\n' {
                    state = Lexeme::Code;
                }
            }
            Lexeme::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = Lexeme::Code;
                }
            }
        }
    }

    match open.pop() {
        Some((bracket, opened)) => Err(FormatError::new(format!(
            "'{bracket}' opened on line {opened} is never closed"
        ))),
        None => Ok(()),
    }
}
