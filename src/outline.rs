//! Collect the headings written in section documentation.
//!
//! The page template turns these into a table of contents pointing at the section each heading
//! came from.

use crate::error::{Error, Result};
use crate::formats::Format;
use crate::section::{Heading, Section};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Heading extractor with its query compiled once.
pub struct Outliner<F: Format> {
    format: F,
    language: tree_sitter::Language,
    query: Query,
}

impl<F: Format> Outliner<F> {
    /// Compile the format's heading query.
    ///
    /// # Errors
    ///
    /// Returns an error if the query does not compile against the format's grammar.
    pub fn new(format: F) -> Result<Self> {
        let language = format.language();
        let query = Query::new(&language, format.heading_query())
            .map_err(|e| Error::Outline(e.to_string()))?;
        Ok(Self {
            format,
            language,
            query,
        })
    }

    /// Headings across `sections`, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if a section's documentation cannot be parsed.
    pub fn outline(&self, sections: &[Section]) -> Result<Vec<Heading>> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| Error::Outline(e.to_string()))?;

        let mut headings = Vec::new();
        for (index, section) in sections.iter().enumerate() {
            if section.doc_text.is_empty() {
                continue;
            }
            let tree = parser
                .parse(&section.doc_text, None)
                .ok_or_else(|| Error::Outline(format!("parser gave up on section {index}")))?;
            let source = section.doc_text.as_bytes();

            let mut cursor = QueryCursor::new();
            let mut matches = cursor.matches(&self.query, tree.root_node(), source);
            while let Some(found) = matches.next() {
                for capture in found.captures {
                    if let Some((level, title)) = self.heading(capture.node, source) {
                        headings.push(Heading {
                            level,
                            title,
                            section: index,
                        });
                    }
                }
            }
        }
        Ok(headings)
    }

    fn heading(&self, node: Node<'_>, source: &[u8]) -> Option<(usize, String)> {
        let mut level = None;
        let mut title = None;
        let mut walker = node.walk();
        for child in node.children(&mut walker) {
            if let Some(depth) = self.format.marker_level(child.kind()) {
                level = Some(depth);
            } else if child.kind() == self.format.title_kind() {
                title = child.utf8_text(source).ok().map(str::trim);
            }
        }
        Some((level?, title?.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
