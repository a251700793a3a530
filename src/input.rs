//! Find the source files a run should document.

use crate::language::Languages;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expand `paths` into source files.
///
/// Files named explicitly are kept as given, whatever their extension. Directories are walked
/// recursively in sorted order, skipping hidden entries, and contribute every file whose
/// extension has a registered language.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn find_sources(paths: &[PathBuf], languages: &Languages) -> io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk(path, languages, &mut sources)?;
        } else if path.exists() {
            sources.push(path.clone());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }
    Ok(sources)
}

fn walk(dir: &Path, languages: &Languages, sources: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        let hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            continue;
        }
        if path.is_dir() {
            walk(&path, languages, sources)?;
        } else if languages.for_path(&path).is_some() {
            sources.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
