//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Config, Error, Result, error::ManifestSource, validate::validate_config};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "quill.toml")
    }
}

impl Config {
    /// Parse a quill.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a quill.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source = ManifestSource::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source.syntax(e))?;
    validate_config(&config, content, filename)?;
    Ok(config)
}
