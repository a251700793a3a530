//! Partition a source file into documentation/code sections.
//!
//! Each section starts with a run of comment lines and continues through the code lines that
//! follow. A comment line only opens a new section once the current one has code, so consecutive
//! comment lines (and blank lines between them and the next comment) never split a section.

use crate::language::CommentPattern;
use crate::section::Section;

/// Split `source` into sections in one front-to-back scan.
///
/// The result is never empty: the section being accumulated when input runs out is always
/// kept, even if it holds nothing.
#[must_use]
pub fn split(source: &str, comments: &CommentPattern) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::default();

    for line in lines(source) {
        if let Some(doc) = comments.strip(line) {
            if !current.code_text.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
            current.doc_text.push_str(doc);
            current.doc_text.push('\n');
        } else {
            current.code_text.push_str(line);
            current.code_text.push('\n');
        }
    }

    sections.push(current);
    sections
}

/// Lines of `source` without their `\n`. A trailing newline does not start another line.
fn lines(source: &str) -> impl Iterator<Item = &str> {
    let body = source.strip_suffix('\n').unwrap_or(source);
    (!source.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
}

#[cfg(test)]
#[path = "tests/splitter.rs"]
mod tests;
