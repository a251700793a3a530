//! Run the generator over many files, isolating failures per file.
//!
//! Files are processed one at a time and each runs to completion (read, split, highlight,
//! render, write) before the next starts. A file that fails is logged and skipped, and nothing
//! is written for it.

use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::render::SourceLink;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// What each source file is turned into.
pub enum OutputFormat {
    #[default]
    /// A side-by-side HTML page.
    Html,
    /// The document's sections as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    #[must_use]
    /// File extension of generated files.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "unknown output format {other:?}, expected html or json"
            ))),
        }
    }
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Summary {
    /// Files written, in processing order.
    pub written: Vec<PathBuf>,
    /// Sources that produced no output, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
}

/// Writes one output file per source into an output directory.
pub struct Driver<'a> {
    generator: &'a Generator,
    output_dir: PathBuf,
    format: OutputFormat,
}

impl<'a> Driver<'a> {
    #[must_use]
    /// Driver writing `format` files into `output_dir`.
    pub fn new(generator: &'a Generator, output_dir: PathBuf, format: OutputFormat) -> Self {
        Self {
            generator,
            output_dir,
            format,
        }
    }

    #[must_use]
    /// Where the output for `source` is written.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        self.output_dir.join(self.output_name(source))
    }

    fn output_name(&self, source: &Path) -> String {
        let stem = source
            .file_stem()
            .map_or_else(|| "index".into(), |stem| stem.to_string_lossy());
        format!("{stem}.{}", self.format.extension())
    }

    /// Process every source, continuing past per-file failures.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output directory cannot be created; individual file
    /// failures are collected in the summary instead.
    pub fn run(&self, sources: &[PathBuf]) -> Result<Summary> {
        fs::create_dir_all(&self.output_dir).map_err(|e| Error::io(&self.output_dir, e))?;

        let links: Vec<SourceLink> = sources
            .iter()
            .map(|source| SourceLink {
                title: title(source),
                href: self.output_name(source),
            })
            .collect();

        let mut summary = Summary::default();
        for source in sources {
            match self.process(source, &links) {
                Ok(written) => {
                    log::info!("{} -> {}", source.display(), written.display());
                    summary.written.push(written);
                }
                Err(e) => {
                    log::error!("{}: {e}", source.display());
                    summary.failed.push((source.clone(), e));
                }
            }
        }
        Ok(summary)
    }

    fn process(&self, source: &Path, links: &[SourceLink]) -> Result<PathBuf> {
        let language = self.generator.language_for(source)?;
        let text = fs::read_to_string(source).map_err(|e| Error::io(source, e))?;
        let document = self.generator.document(&title(source), &text, language)?;

        let rendered = match self.format {
            OutputFormat::Html => self.generator.page(&document, links)?,
            OutputFormat::Json => serde_json::to_string_pretty(&document)?,
        };

        let output = self.output_path(source);
        fs::write(&output, rendered).map_err(|e| Error::io(&output, e))?;
        Ok(output)
    }
}

fn title(source: &Path) -> String {
    source.file_name().map_or_else(
        || source.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
#[path = "tests/driver.rs"]
mod tests;
