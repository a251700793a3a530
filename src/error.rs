//! Typed failures for a docfold run.
//!
//! Every variant aborts the file being processed and nothing else: the driver logs it against
//! the file's path and moves on to the next input. None of these are transient, so nothing is
//! retried.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop one source file from becoming a page.
#[derive(Debug, Error)]
pub enum Error {
    /// The highlighted code did not contain one separator per section boundary.
    ///
    /// Splitting anyway would hand code to the wrong section, so the file is dropped instead.
    #[error("expected {expected} section separators in highlighted code, found {found}")]
    StructuralMismatch {
        /// Number of boundaries between sections (sections minus one).
        expected: usize,
        /// Number of separators recovered from the highlighter output.
        found: usize,
    },

    /// The syntax highlighter rejected its input.
    #[error("highlighting failed: {0}")]
    Highlight(String),

    /// The markdown renderer rejected a section's documentation.
    #[error("markdown rendering failed: {0}")]
    Markdown(String),

    /// Documentation headings could not be parsed.
    #[error("outline extraction failed: {0}")]
    Outline(String),

    /// The page template failed to load or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// No language is registered for the file's extension.
    #[error("no language registered for {}", .0.display())]
    UnsupportedLanguage(PathBuf),

    /// Reading a source or writing a page failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File that could not be read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file or a configuration value is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A comment or separator pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Sections could not be serialised for JSON output.
    #[error("serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attach a path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
