//! Mood tracker binary.
//!
//! Reads `logbook.toml` (or the path given with `--config`) for the dump
//! file location, then runs the menu on stdin/stdout.

use std::{io, path::PathBuf};

use clap::Parser;
use logbook_cli::{config::Settings, console::Console, init_tracing, moods::MoodApp};

#[derive(Parser)]
#[command(author, version, about = "Mood tracker")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "logbook.toml")]
  config: PathBuf,
}

fn main() -> anyhow::Result<()> {
  init_tracing();
  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;
  tracing::debug!(?settings, "configuration loaded");

  let console = Console::new(io::stdin().lock(), io::stdout().lock());
  MoodApp::new(console, settings.moods_file).run()
}
