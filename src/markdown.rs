//! Render section documentation as HTML.
//!
//! Prose is rendered one section at a time; unlike code, it never needs context from its
//! neighbours.

use crate::error::Result;
use comrak::{markdown_to_html, Options};

/// Turns prose into an HTML fragment.
pub trait MarkdownRenderer {
    /// Render one section's documentation text.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer rejects the input.
    fn render(&self, prose: &str) -> Result<String>;
}

/// CommonMark with the GitHub extensions docs tend to use.
pub struct CommonMarkRenderer {
    options: Options<'static>,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        Self { options }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, prose: &str) -> Result<String> {
        Ok(markdown_to_html(prose, &self.options))
    }
}
