//! # clone-cache CLI
//!
//! Binary entry point for the `clone-cache` command-line tool. Argument
//! parsing and execution live in the `cli` module; the scan, backup, and
//! rewrite logic is in the `clone_cache` library crate, keeping the binary
//! a thin wrapper.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
