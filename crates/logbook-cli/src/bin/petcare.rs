//! Pet-care scheduler binary.
//!
//! Loads pets and appointments from the files named in `logbook.toml` (or
//! the path given with `--config`) and runs the menu on stdin/stdout.

use std::{io, path::PathBuf};

use clap::Parser;
use logbook_cli::{config::Settings, console::Console, init_tracing, petcare::PetApp};

#[derive(Parser)]
#[command(author, version, about = "Pet care scheduler")]
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
  let mut app = PetApp::new(console, settings);
  app.load()?;
  app.run()
}
