//! fa-workflow - Font Awesome icon search for the Alfred launcher
//!
//! fa-workflow provides:
//! - A script filter that matches icon ids against keywords
//! - Launcher feedback as XML (or JSON)
//! - Follow-up actions producing the class name, glyph, or documentation URL

use anyhow::Result;
use clap::Parser;

mod actions;
mod catalog;
mod cli;
mod core;
mod logging;
mod search;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    cli::run(cli)
}
