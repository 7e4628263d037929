//! CLI definitions and the recite command

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bootkit_core::{Config, Paths};
use clap::Parser;
use recite::lyrics::{self, DEFAULT_LYRICS};
use recite::{Delays, ThreadSleeper, TimedPrinter};

/// recite - Print lines with timed pauses
#[derive(Parser)]
#[command(name = "recite")]
#[command(version)]
#[command(about = "Print lines one at a time with pauses between lines and stanzas")]
#[command(after_help = r#"CONFIG:
    Delays are read from ~/.config/bootkit/config.json (or $BOOTKIT_CONFIG):
    { "line_delay": 3.0, "stanza_delay": 1.5 }

EXAMPLES:
    recite                              # Built-in lyrics, configured delays
    recite --line-delay 0.5             # Faster lines
    recite --file song.txt              # Recite a text file
    recite --line-delay 1 --save        # Remember the new delay
"#)]
pub struct Cli {
    /// Seconds to pause after each line
    #[arg(long, value_name = "SECS")]
    pub line_delay: Option<f64>,

    /// Seconds to pause after a blank line (stanza break)
    #[arg(long, value_name = "SECS")]
    pub stanza_delay: Option<f64>,

    /// Read lines from a text file instead of the built-in lyrics
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Config file location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store the effective delays in the config file before reciting
    #[arg(long)]
    pub save: bool,
}

/// Resolve delays (flag > config file > default) and print the lines
pub fn cmd_recite(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| Paths::new().config_file());
    let mut config = Config::load(&config_path)?;

    if let Some(secs) = cli.line_delay {
        config.line_delay = secs;
    }
    if let Some(secs) = cli.stanza_delay {
        config.stanza_delay = secs;
    }

    let delays = Delays::from_secs(config.line_delay, config.stanza_delay)
        .context("Invalid delay configuration")?;
    tracing::debug!(
        line = config.line_delay,
        stanza = config.stanza_delay,
        config = %config_path.display(),
        "resolved delays"
    );

    if cli.save {
        config.save(&config_path)?;
        tracing::info!("Saved delays to {}", config_path.display());
    }

    let lines: Vec<String> = match cli.file {
        Some(path) => lyrics::load(&path)?,
        None => DEFAULT_LYRICS.iter().map(|l| l.to_string()).collect(),
    };

    let stdout = io::stdout();
    let mut printer = TimedPrinter::new(stdout.lock(), ThreadSleeper, delays);
    printer
        .print_all(&lines)
        .context("Failed to write to stdout")?;

    Ok(())
}
