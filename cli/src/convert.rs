#![deny(missing_docs)]

//! # Convert Command
//!
//! Implements the pipeline: read definition -> convert -> write Markdown.
//!
//! File handling lives here so the core library stays free of I/O; a version
//! rejection surfaces before the output file is ever created.

use openapi2md_core::AppResult;
use std::fs;
use std::path::PathBuf;

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the OpenAPI 3.x definition (YAML or JSON).
    pub input: PathBuf,

    /// Path the Markdown document is written to.
    pub output: PathBuf,

    /// Output locale. Accepted for interface compatibility; the converter
    /// does not localize.
    #[clap(long, default_value = "en")]
    pub locale: String,
}

/// Executes the conversion pipeline.
pub fn execute(args: &ConvertArgs) -> AppResult<()> {
    println!(
        "Converting {:?} (locale: {})...",
        args.input, args.locale
    );

    let content = fs::read_to_string(&args.input)?;
    let markdown = openapi2md_core::convert_str(&content)?;
    fs::write(&args.output, markdown)?;

    println!("Wrote {:?}.", args.output);
    Ok(())
}
