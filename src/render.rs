//! Page rendering with a minijinja template and an inlined stylesheet.
//!
//! The built-in template and stylesheet live in `resources/` and are compiled into the binary.
//! A resources directory containing `page.html` and `page.css` replaces both.

use crate::error::{Error, Result};
use crate::section::{Document, Heading, Section};
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::path::Path;

const TEMPLATE_NAME: &str = "page.html";
const STYLE_NAME: &str = "page.css";
const DEFAULT_TEMPLATE: &str = include_str!("../resources/page.html");
const DEFAULT_STYLE: &str = include_str!("../resources/page.css");

#[derive(Clone, Debug, Serialize)]
/// Another generated page, for the jump-to menu.
pub struct SourceLink {
    /// Source file name.
    pub title: String,
    /// Output file name relative to the output directory.
    pub href: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    style: &'a str,
    sections: &'a [Section],
    outline: &'a [Heading],
    sources: &'a [SourceLink],
}

/// Composes documents into HTML pages through one template.
pub struct PageRenderer {
    env: Environment<'static>,
    style: String,
}

impl PageRenderer {
    /// Renderer using the built-in template and stylesheet.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to compile.
    pub fn builtin() -> Result<Self> {
        Self::new(DEFAULT_TEMPLATE.to_string(), DEFAULT_STYLE.to_string())
    }

    /// Renderer using `page.html` and `page.css` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or the template fails to compile.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let template_path = dir.join(TEMPLATE_NAME);
        let style_path = dir.join(STYLE_NAME);
        let template =
            fs::read_to_string(&template_path).map_err(|e| Error::io(&template_path, e))?;
        let style = fs::read_to_string(&style_path).map_err(|e| Error::io(&style_path, e))?;
        Self::new(template, style)
    }

    /// Renderer from template source and stylesheet text.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile.
    pub fn new(template: String, style: String) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_NAME, template)?;
        Ok(Self { env, style })
    }

    /// Render one document. `sources` lists every page of the run, this one included.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails while rendering.
    pub fn render(&self, document: &Document, sources: &[SourceLink]) -> Result<String> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let context = PageContext {
            title: &document.title,
            style: &self.style,
            sections: &document.sections,
            outline: &document.outline,
            sources,
        };
        Ok(template.render(context)?)
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
