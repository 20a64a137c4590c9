#![deny(missing_docs)]

//! # openapi2md CLI
//!
//! Command line interface for the OpenAPI 3.x to Markdown converter.
//!
//! One command: load a definition file, convert it, write the Markdown
//! document next to wherever the caller asked for it.

use clap::Parser;
use openapi2md_core::AppResult;

mod convert;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Generate Markdown documentation from an OpenAPI 3 definition"
)]
struct Cli {
    #[clap(flatten)]
    args: convert::ConvertArgs,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    convert::execute(&cli.args)
}
