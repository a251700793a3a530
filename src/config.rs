//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a docfold.toml, and if present we load settings from there.
//! This provides the output directory, template resources, output format and extra languages.

use crate::error::{Error, Result};
use crate::language::Language;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "docfold.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from docfold.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "docs".to_string())]
    /// Directory generated pages are written to.
    pub output_dir: String,
    #[facet(default)]
    /// Directory holding `page.html` and `page.css` to use instead of the built-in ones.
    pub resources: Option<String>,
    #[facet(default = "html".to_string())]
    /// Output format, `html` or `json`.
    pub format: String,
    #[facet(default = Vec::new())]
    /// Languages added to (or replacing) the built-in table.
    pub languages: Vec<Language>,
}

impl Config {
    /// Load configuration from docfold.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::parse(""),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Parse configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
