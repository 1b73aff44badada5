use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed so `Result<Config>` stays small.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text of a quill.toml together with the name diagnostics show for it.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    name: String,
    text: String,
}

/// Something validation rejected, before it is tied to a source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Free-form message shown both as the error and as the label.
    Message(String),
    /// A Go keyword used where an identifier is required.
    Keyword { name: String, context: String },
    /// A name that is not a valid identifier.
    Identifier {
        name: String,
        context: String,
        reason: &'static str,
    },
}

impl ManifestSource {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn snippet(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.text.clone())
    }

    /// Wrap a TOML syntax or shape error.
    pub fn syntax(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.snippet(),
            source,
        })
    }

    /// Attach a validation problem to this file, pointing at `span` if known.
    pub fn reject(&self, problem: Problem, span: Option<SourceSpan>) -> Box<Error> {
        let src = self.snippet();
        Box::new(match problem {
            Problem::Message(message) => Error::Validation { src, span, message },
            Problem::Keyword { name, context } => Error::ReservedKeyword {
                src,
                span,
                name,
                context,
            },
            Problem::Identifier {
                name,
                context,
                reason,
            } => Error::InvalidIdentifier {
                src,
                span,
                name,
                context,
                reason: reason.to_string(),
            },
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("could not read config file '{path}'")]
    #[diagnostic(
        code(quill::io),
        help("run from a directory holding quill.toml, or pass --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("quill.toml is not a valid configuration")]
    #[diagnostic(code(quill::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(quill::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{context} '{name}' is a Go keyword")]
    #[diagnostic(
        code(quill::reserved_keyword),
        help("Go rejects keywords as identifiers; try '{name}s' instead")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("keyword")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' is not a valid {context} name")]
    #[diagnostic(
        code(quill::invalid_identifier),
        help("{reason}; identifiers are ASCII letters, digits and underscores")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
