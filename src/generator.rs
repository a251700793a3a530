//! The per-file pipeline: split, highlight, render prose, outline, render page.
//!
//! Everything shared between files (syntax definitions, compiled patterns, the template) is built
//! once here and only read afterwards, so one generator can serve any number of files.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::highlight::SyntaxHighlighter;
use crate::language::{CommentPattern, Language, Languages};
use crate::markdown::{CommonMarkRenderer, MarkdownRenderer};
use crate::outline::Outliner;
use crate::rejoin::{self, Sentinel};
use crate::render::{PageRenderer, SourceLink};
use crate::section::Document;
use crate::splitter;
use std::collections::HashMap;
use std::path::Path;
use syntect::parsing::SyntaxSet;

/// A language with its patterns compiled.
struct Compiled {
    comments: CommentPattern,
    sentinel: Sentinel,
}

/// Owns the read-only state every file is processed with.
pub struct Generator {
    languages: Languages,
    compiled: HashMap<String, Compiled>,
    syntaxes: SyntaxSet,
    markdown: CommonMarkRenderer,
    outliner: Outliner<MarkdownFormat>,
    pages: PageRenderer,
}

impl Generator {
    /// Build a generator from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a language's patterns, the outline query or the page template cannot
    /// be compiled, or the resources directory cannot be read.
    pub fn new(config: &Config) -> Result<Self> {
        let mut languages = Languages::builtin();
        languages.extend(config.languages.iter().cloned());

        let pages = match &config.resources {
            Some(dir) => PageRenderer::from_dir(Path::new(dir))?,
            None => PageRenderer::builtin()?,
        };

        Self::with_renderer(languages, pages)
    }

    /// Build a generator for `languages` rendering through `pages`.
    ///
    /// # Errors
    ///
    /// Returns an error if a language's patterns or the outline query cannot be compiled.
    pub fn with_renderer(languages: Languages, pages: PageRenderer) -> Result<Self> {
        let compiled = languages
            .iter()
            .map(|language| {
                Ok((
                    language.extension.clone(),
                    Compiled {
                        comments: language.comment_pattern()?,
                        sentinel: language.sentinel()?,
                    },
                ))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self {
            languages,
            compiled,
            syntaxes: SyntaxSet::load_defaults_newlines(),
            markdown: CommonMarkRenderer::default(),
            outliner: Outliner::new(MarkdownFormat)?,
            pages,
        })
    }

    #[must_use]
    /// The language table files are matched against.
    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    /// Language registered for `path`'s extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] if no language matches.
    pub fn language_for(&self, path: &Path) -> Result<&Language> {
        self.languages
            .for_path(path)
            .ok_or_else(|| Error::UnsupportedLanguage(path.to_path_buf()))
    }

    /// Split `source`, highlight its code, render its prose and collect its headings.
    ///
    /// # Errors
    ///
    /// Returns an error if highlighting, separator recovery, markdown or outlining fails.
    pub fn document(&self, title: &str, source: &str, language: &Language) -> Result<Document> {
        let compiled = self
            .compiled
            .get(&language.extension)
            .ok_or_else(|| Error::UnsupportedLanguage(title.into()))?;

        let mut sections = splitter::split(source, &compiled.comments);
        log::debug!("{title}: {} sections", sections.len());

        let highlighter = SyntaxHighlighter::for_language(&self.syntaxes, language);
        rejoin::highlight_sections(&mut sections, &highlighter, &compiled.sentinel)?;

        for section in &mut sections {
            section.doc_html = Some(self.markdown.render(&section.doc_text)?);
        }

        let outline = self.outliner.outline(&sections)?;

        Ok(Document {
            title: title.to_string(),
            sections,
            outline,
        })
    }

    /// Render a finished document as an HTML page.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails while rendering.
    pub fn page(&self, document: &Document, sources: &[SourceLink]) -> Result<String> {
        self.pages.render(document, sources)
    }
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod tests;
