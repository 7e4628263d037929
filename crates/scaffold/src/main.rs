//! scaffold - Project scaffolding for Bootkit
//!
//! "Start every project from the same place."
//!
//! Creates the standard project files as empty files, along with any missing
//! parent directories. Files that already exist are left exactly as they are.

use anyhow::{Context, Result};
use clap::Parser;
use scaffold::{Manifest, Scaffolder, TracingSink};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Project scaffolding for Bootkit - create the standard empty project files")]
#[command(version)]
#[command(after_help = r#"FILES:
    src/__init__.py
    src/helper.py
    src/prompt.py
    .env
    requirements.txt
    setup.py
    app.py
    research/trials.ipynb

EXAMPLES:
    scaffold                    # Scaffold the current directory
    scaffold --root ../newproj  # Scaffold another directory
    scaffold --json             # Print a summary as JSON
"#)]
struct Cli {
    /// Directory to scaffold (default: current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Print a JSON summary to stdout when done
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    bootkit_core::logging::init("info");

    let cli = Cli::parse();
    cmd_scaffold(cli.root, cli.json)
}

/// Run the built-in manifest against `root`
fn cmd_scaffold(root: Option<PathBuf>, json: bool) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let manifest = Manifest::builtin();
    let summary = Scaffolder::new(&root)
        .run(&manifest, &mut TracingSink)
        .with_context(|| format!("Scaffolding stopped in {}", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
