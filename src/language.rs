//! Comment syntax for the languages docfold can fold.
//!
//! Each language needs a single-line comment delimiter (to find documentation) and a block
//! comment pair (to wrap the separator the highlighter must treat as one comment token). Only
//! languages with both are supported.

use crate::error::Result;
use crate::rejoin::Sentinel;
use facet::Facet;
use regex::Regex;
use std::path::Path;

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Comment syntax and highlighter syntax for one file extension.
pub struct Language {
    /// File suffix without the dot, e.g. `rs`.
    pub extension: String,
    /// Syntax name or extension the highlighter resolves, e.g. `Rust`.
    pub syntax: String,
    /// Single-line comment delimiter marking documentation lines.
    pub line_comment: String,
    /// Block comment opener used around the section separator.
    pub block_open: String,
    /// Block comment closer used around the section separator.
    pub block_close: String,
    #[facet(default)]
    /// Characters that may directly follow the line delimiter and are dropped with it, e.g. the
    /// `/` and `!` of Rust's `///` and `//!`.
    pub doc_markers: String,
}

impl Language {
    /// Build a language entry from string slices.
    #[must_use]
    pub fn new(
        extension: &str,
        syntax: &str,
        line_comment: &str,
        block_open: &str,
        block_close: &str,
    ) -> Self {
        Self {
            extension: extension.to_string(),
            syntax: syntax.to_string(),
            line_comment: line_comment.to_string(),
            block_open: block_open.to_string(),
            block_close: block_close.to_string(),
            doc_markers: String::new(),
        }
    }

    /// Also strip one of `markers` directly after the line delimiter.
    #[must_use]
    pub fn with_doc_markers(mut self, markers: &str) -> Self {
        self.doc_markers = markers.to_string();
        self
    }

    fn c_family(extension: &str, syntax: &str) -> Self {
        Self::new(extension, syntax, "//", "/*", "*/")
    }

    /// Compile the documentation-line matcher for this language.
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter produces an invalid pattern.
    pub fn comment_pattern(&self) -> Result<CommentPattern> {
        CommentPattern::with_markers(&self.line_comment, &self.doc_markers)
    }

    /// Build the separator placed between sections before highlighting.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator search pattern cannot be compiled.
    pub fn sentinel(&self) -> Result<Sentinel> {
        Sentinel::new(&format!(
            "{}{}{}",
            self.block_open,
            Sentinel::TOKEN,
            self.block_close
        ))
    }
}

/// Matches a leading single-line comment delimiter and at most one following space.
#[derive(Clone, Debug)]
pub struct CommentPattern {
    regex: Regex,
}

impl CommentPattern {
    /// Compile a matcher for lines starting (after indentation) with `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern cannot be compiled.
    pub fn new(delimiter: &str) -> Result<Self> {
        Self::with_markers(delimiter, "")
    }

    /// Like [`CommentPattern::new`], also accepting one of `markers` right after the delimiter.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern cannot be compiled.
    pub fn with_markers(delimiter: &str, markers: &str) -> Result<Self> {
        let delimiter = regex::escape(delimiter);
        let pattern = if markers.is_empty() {
            format!(r"^\s*{delimiter} ?")
        } else {
            format!(r"^\s*{delimiter}[{}]? ?", regex::escape(markers))
        };
        let regex = Regex::new(&pattern)?;
        Ok(Self { regex })
    }

    /// Strip the delimiter from a documentation line, or `None` for a code line.
    #[must_use]
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex.find(line).map(|m| &line[m.end()..])
    }
}

/// The registered languages, looked up by file extension.
#[derive(Clone, Debug)]
pub struct Languages {
    entries: Vec<Language>,
}

impl Default for Languages {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Languages {
    /// C-family languages whose syntaxes ship with the highlighter.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = [
            ("go", "Go"),
            ("rs", "Rust"),
            ("c", "C"),
            ("h", "C"),
            ("cc", "C++"),
            ("cpp", "C++"),
            ("cxx", "C++"),
            ("hh", "C++"),
            ("hpp", "C++"),
            ("java", "Java"),
            ("js", "JavaScript"),
            ("mjs", "JavaScript"),
            ("cs", "C#"),
            ("scala", "Scala"),
            ("m", "Objective-C"),
            ("d", "D"),
            ("groovy", "Groovy"),
        ]
        .into_iter()
        .map(|(extension, syntax)| match extension {
            // `///` and `//!` doc comments
            "rs" => Language::c_family(extension, syntax).with_doc_markers("/!"),
            _ => Language::c_family(extension, syntax),
        })
        .collect();
        Self { entries }
    }

    /// Add languages, replacing any existing entry with the same extension.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = Language>) {
        for language in extra {
            match self
                .entries
                .iter_mut()
                .find(|known| known.extension == language.extension)
            {
                Some(known) => *known = language,
                None => self.entries.push(language),
            }
        }
    }

    /// Find the language for a path by its extension.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<&Language> {
        let extension = path.extension()?.to_str()?;
        self.entries
            .iter()
            .find(|language| language.extension.eq_ignore_ascii_case(extension))
    }

    /// All registered languages.
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "tests/language.rs"]
mod tests;
