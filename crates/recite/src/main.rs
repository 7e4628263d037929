//! recite - Timed line printer for Bootkit
//!
//! Prints each line, flushes, then pauses: a short pause after a line, a
//! longer one after a blank stanza break.

mod cli;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    // Only warnings and errors by default; stdout carries the lines
    bootkit_core::logging::init("warn");

    let cli = Cli::parse();
    cli::cmd_recite(cli)
}
