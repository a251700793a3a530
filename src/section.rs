//! Section representation for commented source files.
//!
//! A section pairs a run of leading-line comments with the code that follows it. Sections are
//! created once, front to back, by the splitter and never reordered or merged. Each one is then
//! filled in exactly twice: its code by the highlighter pass and its prose by the markdown pass.

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// One documentation/code pair in the order it appeared in the source file.
pub struct Section {
    /// Comment text with delimiters stripped, one `\n`-terminated line per comment line.
    pub doc_text: String,
    /// Code lines following the comment run, each `\n`-terminated.
    pub code_text: String,
    /// Rendered prose, set by the markdown pass.
    pub doc_html: Option<String>,
    /// Highlighted code, set by the highlighter pass.
    pub code_html: Option<String>,
}

impl Section {
    #[must_use]
    /// Whether neither documentation nor code has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.doc_text.is_empty() && self.code_text.is_empty()
    }
}

#[derive(Clone, Debug, Serialize)]
/// A heading found in a section's documentation.
pub struct Heading {
    /// ATX level, 1 for `#` through 6 for `######`.
    pub level: usize,
    /// Heading text without markers.
    pub title: String,
    /// Index of the section whose documentation contains the heading.
    pub section: usize,
}

#[derive(Clone, Debug, Serialize)]
/// A source file ready for page rendering.
pub struct Document {
    /// Display name, the source file name.
    pub title: String,
    /// Sections in source order, owned exclusively by this document.
    pub sections: Vec<Section>,
    /// Headings across all sections, in source order.
    pub outline: Vec<Heading>,
}
