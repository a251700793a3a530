//! Highlight all of a file's code in one pass, then hand each section back its own slice.
//!
//! Highlighting sections one at a time breaks tokens that span a section boundary (a block
//! comment or raw string interrupted by a run of `//` lines). So the code of every section is
//! joined with a separator comment, highlighted once, and split again at the separators.
//!
//! The highlighter may wrap a separator in a span, and that span may also swallow whitespace
//! on either side of the separator. Such whitespace is carried forward to the start of the next
//! section's slice. A token that crosses a separator is closed at the end of one slice and
//! reopened at the start of the next, so every slice is balanced markup on its own.

use crate::error::{Error, Result};
use crate::highlight::{self, Highlighter};
use crate::section::Section;
use regex::Regex;
use std::ops::Range;

/// A reserved separator and the pattern that finds it in highlighted output.
#[derive(Clone, Debug)]
pub struct Sentinel {
    literal: String,
    pattern: Regex,
    tags: Regex,
}

/// One separator located in highlighted output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte range of the separator including any wrapping markup.
    pub span: Range<usize>,
    /// Whitespace captured inside the wrapping markup before the separator.
    pub leading: Range<usize>,
    /// Whitespace captured inside the wrapping markup after the separator.
    pub trailing: Range<usize>,
}

impl Sentinel {
    /// Marker text that must not appear in source code.
    pub const TOKEN: &'static str = "[docfold-separator]";

    /// Build a separator from its full literal form, e.g. `/*[docfold-separator]*/`.
    ///
    /// Highlighters escape their output, so the separator is searched for in its escaped form:
    /// `<#[docfold-separator]#>` is found as `&lt;#[docfold-separator]#&gt;`.
    ///
    /// # Errors
    ///
    /// Returns an error if the search pattern cannot be compiled.
    pub fn new(literal: &str) -> Result<Self> {
        let escaped = regex::escape(&highlight::escape(literal));
        let pattern = Regex::new(&format!(
            r#"<span class="[^"]*">(\s*){escaped}(\s*)</span>|{escaped}"#
        ))?;
        let tags = Regex::new(r#"<span class="[^"]*">|</span>"#)?;
        Ok(Self {
            literal: literal.to_string(),
            pattern,
            tags,
        })
    }

    #[must_use]
    /// The text inserted between sections.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Join code fragments with one separator between each adjacent pair.
    #[must_use]
    pub fn join<'a>(&self, fragments: impl IntoIterator<Item = &'a str>) -> String {
        let mut joined = String::new();
        for (i, fragment) in fragments.into_iter().enumerate() {
            if i > 0 {
                joined.push_str(&self.literal);
            }
            joined.push_str(fragment);
        }
        joined
    }

    /// Locate every separator in `highlighted`, left to right, in a single scan.
    #[must_use]
    pub fn find(&self, highlighted: &str) -> Vec<Occurrence> {
        self.pattern
            .captures_iter(highlighted)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let end = whole.end()..whole.end();
                Some(Occurrence {
                    span: whole.range(),
                    leading: caps.get(1).map_or(end.clone(), |ws| ws.range()),
                    trailing: caps.get(2).map_or(end, |ws| ws.range()),
                })
            })
            .collect()
    }

    /// Cut `highlighted` back into `sections` slices.
    ///
    /// Whitespace captured inside a wrapped separator is prepended to the slice that follows it.
    /// Spans left open at the end of a slice are closed there and reopened in the next one.
    /// Empty slices are kept so every section gets exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StructuralMismatch`] unless exactly `sections - 1` separators are found.
    pub fn split(&self, highlighted: &str, sections: usize) -> Result<Vec<String>> {
        if sections == 0 {
            return Ok(Vec::new());
        }
        let occurrences = self.find(highlighted);
        if occurrences.len() != sections - 1 {
            return Err(Error::StructuralMismatch {
                expected: sections - 1,
                found: occurrences.len(),
            });
        }

        let mut slices = Vec::with_capacity(sections);
        let mut start = 0;
        let mut carry = String::new();
        for occurrence in &occurrences {
            slices.push(format!("{carry}{}", &highlighted[start..occurrence.span.start]));
            carry = format!(
                "{}{}",
                &highlighted[occurrence.leading.clone()],
                &highlighted[occurrence.trailing.clone()]
            );
            start = occurrence.span.end;
        }
        slices.push(format!("{carry}{}", &highlighted[start..]));
        Ok(self.balance(slices))
    }

    /// Close the spans each slice leaves open and reopen them at the start of the next slice.
    fn balance(&self, slices: Vec<String>) -> Vec<String> {
        let mut open: Vec<String> = Vec::new();
        let mut balanced = Vec::with_capacity(slices.len());
        for slice in slices {
            let mut html = open.concat();
            for tag in self.tags.find_iter(&slice) {
                if tag.as_str() == "</span>" {
                    open.pop();
                } else {
                    open.push(tag.as_str().to_string());
                }
            }
            html.push_str(&slice);
            html.push_str(&"</span>".repeat(open.len()));
            balanced.push(html);
        }
        balanced
    }
}

/// Highlight the code of all `sections` jointly and store each section's slice in `code_html`.
///
/// The highlighter runs exactly once per call. On error no section is modified.
///
/// # Errors
///
/// Propagates highlighter failures and reports a structural mismatch if the separators cannot
/// all be recovered.
pub fn highlight_sections(
    sections: &mut [Section],
    highlighter: &dyn Highlighter,
    sentinel: &Sentinel,
) -> Result<()> {
    let joined = sentinel.join(sections.iter().map(|section| section.code_text.as_str()));
    let highlighted = highlighter.highlight(&joined)?;
    let slices = sentinel.split(&highlighted, sections.len())?;
    log::debug!(
        "recovered {} code slices from {} highlighted bytes",
        slices.len(),
        highlighted.len()
    );
    for (section, slice) in sections.iter_mut().zip(slices) {
        section.code_html = Some(slice);
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/rejoin.rs"]
mod tests;
