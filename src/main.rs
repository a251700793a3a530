//! docfold: side-by-side literate documentation from commented source code.
#![allow(clippy::multiple_crate_versions)]

use anyhow::{bail, Context};
use clap::Parser;
use docfold::driver::{Driver, OutputFormat};
use docfold::{config, generator, input, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docfold")]
#[command(about = "Side-by-side literate documentation from commented source code", long_about = None)]
struct Args {
    /// Files or directories to document
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Directory to write pages into
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Directory containing page.html and page.css
    #[arg(long, short = 'r', value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Output format: html or json
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Log more (repeat for debug output)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(logging::level_for(args.verbose, args.quiet));

    let mut cfg = config::Config::load().context("loading configuration")?;

    // Override config with command line args
    if let Some(output) = args.output {
        cfg.output_dir = output.to_string_lossy().into_owned();
    }
    if let Some(resources) = args.resources {
        cfg.resources = Some(resources.to_string_lossy().into_owned());
    }
    let format = match args.format {
        Some(format) => format,
        None => cfg.format.parse()?,
    };

    let generator = generator::Generator::new(&cfg)?;
    let sources = input::find_sources(&args.paths, generator.languages())?;
    if sources.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let driver = Driver::new(&generator, PathBuf::from(&cfg.output_dir), format);
    let summary = driver.run(&sources)?;

    if !summary.failed.is_empty() {
        bail!(
            "{} of {} files failed",
            summary.failed.len(),
            summary.failed.len() + summary.written.len()
        );
    }
    Ok(())
}
