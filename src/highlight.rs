//! Syntax highlighting as a flat stream of classed spans.
//!
//! The rejoin pass needs spans that never nest and never straddle two tokens, so instead of
//! syntect's own HTML generator (which keeps every scope open as a nested `<span>`) we walk the
//! scope stack ourselves and emit one `<span class="...">` per lexical token.

use crate::error::{Error, Result};
use crate::language::Language;
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Turns raw code into marked-up code.
///
/// Implementations may wrap any run of characters in markup but must keep every input character,
/// in order: stripping the markup (and undoing HTML escaping) yields the input exactly.
pub trait Highlighter {
    /// Highlight `code`, which may be several fragments joined by separators.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be tokenised.
    fn highlight(&self, code: &str) -> Result<String>;
}

/// Scope families that become span classes, e.g. `comment.block.c` becomes `comment`.
pub const CATEGORIES: [&str; 8] = [
    "comment", "string", "constant", "keyword", "storage", "entity", "support", "variable",
];

/// Highlighter backed by a syntect syntax definition.
pub struct SyntaxHighlighter<'a> {
    syntaxes: &'a SyntaxSet,
    syntax: &'a SyntaxReference,
}

impl<'a> SyntaxHighlighter<'a> {
    /// Resolve the language's syntax, falling back to plain text when none matches.
    #[must_use]
    pub fn for_language(syntaxes: &'a SyntaxSet, language: &Language) -> Self {
        let syntax = syntaxes
            .find_syntax_by_token(&language.syntax)
            .or_else(|| syntaxes.find_syntax_by_extension(&language.extension))
            .unwrap_or_else(|| {
                log::warn!(
                    "no syntax named {:?} for .{} files, code will not be highlighted",
                    language.syntax,
                    language.extension
                );
                syntaxes.find_syntax_plain_text()
            });
        Self { syntaxes, syntax }
    }

    /// Name of the resolved syntax.
    #[must_use]
    pub fn syntax_name(&self) -> &str {
        &self.syntax.name
    }
}

impl Highlighter for SyntaxHighlighter<'_> {
    fn highlight(&self, code: &str) -> Result<String> {
        let mut state = ParseState::new(self.syntax);
        let mut stack = ScopeStack::new();
        let mut out = SpanWriter::default();

        for line in LinesWithEndings::from(code) {
            let ops = state
                .parse_line(line, self.syntaxes)
                .map_err(|e| Error::Highlight(e.to_string()))?;
            let mut pos = 0;
            for (at, op) in ops {
                if at > pos {
                    out.write(&line[pos..at], &stack);
                    pos = at;
                }
                stack
                    .apply(&op)
                    .map_err(|e| Error::Highlight(format!("{e:?}")))?;
                out.popped_to(stack.len());
            }
            if pos < line.len() {
                out.write(&line[pos..], &stack);
            }
        }

        Ok(out.finish())
    }
}

/// The open token: its class and the stack index of the scope that defines it.
struct Token {
    class: &'static str,
    depth: usize,
}

#[derive(Default)]
struct SpanWriter {
    html: String,
    open: Option<Token>,
}

impl SpanWriter {
    fn write(&mut self, text: &str, stack: &ScopeStack) {
        let category = category(stack.as_slice());
        let continues = match (&self.open, &category) {
            (Some(open), Some(next)) => open.class == next.class && open.depth == next.depth,
            _ => false,
        };
        if !continues {
            self.close();
            if let Some(token) = category {
                self.html.push_str("<span class=\"");
                self.html.push_str(token.class);
                self.html.push_str("\">");
                self.open = Some(token);
            }
        }
        escape_into(&mut self.html, text);
    }

    /// Ends the open token once the scope defining it is no longer on the stack.
    fn popped_to(&mut self, len: usize) {
        if self.open.as_ref().is_some_and(|open| len <= open.depth) {
            self.close();
        }
    }

    fn close(&mut self) {
        if self.open.take().is_some() {
            self.html.push_str("</span>");
        }
    }

    fn finish(mut self) -> String {
        self.close();
        self.html
    }
}

/// Outermost scope on the stack that belongs to a highlighted family.
fn category(scopes: &[Scope]) -> Option<Token> {
    scopes.iter().enumerate().find_map(|(depth, scope)| {
        let name = scope.build_string();
        let family = name.split('.').next()?;
        CATEGORIES
            .into_iter()
            .find(|class| *class == family)
            .map(|class| Token { class, depth })
    })
}

/// HTML-escape `text` the way highlighted output is escaped.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "tests/highlight.rs"]
mod tests;
