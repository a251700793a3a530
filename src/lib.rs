//! docfold: side-by-side literate documentation from commented source code.
//!
//! Leading `//` comment lines become prose rendered as markdown; the code between them is
//! syntax-highlighted; both are laid out next to each other, section by section, in one HTML
//! page per source file.
//!
//! The pipeline for one file:
//!
//! ```text
//! source -> splitter -> rejoin (one highlighter pass) -> markdown per section -> outline -> page
//! ```
//!
//! All of a file's code is highlighted together so tokens spanning a section boundary are
//! recognised; [`rejoin`] recovers the section boundaries afterwards.

pub mod config;
pub mod driver;
pub mod error;
pub mod formats;
pub mod generator;
pub mod highlight;
pub mod input;
pub mod language;
pub mod logging;
pub mod markdown;
pub mod outline;
pub mod rejoin;
pub mod render;
pub mod section;
pub mod splitter;

pub use error::{Error, Result};
