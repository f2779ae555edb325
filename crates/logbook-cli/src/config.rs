//! Runtime configuration: defaults, then an optional TOML file, then
//! `LOGBOOK_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Where each app keeps its data.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  pub pets_file:         PathBuf,
  pub appointments_file: PathBuf,
  pub moods_file:        PathBuf,
}

impl Settings {
  /// Read settings from `path` (if it exists) layered over the defaults.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("pets_file", "pets.txt")?
      .set_default("appointments_file", "appointments.txt")?
      .set_default("moods_file", "moods.txt")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LOGBOOK"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = Settings::load(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(settings.pets_file, PathBuf::from("pets.txt"));
    assert_eq!(settings.appointments_file, PathBuf::from("appointments.txt"));
    assert_eq!(settings.moods_file, PathBuf::from("moods.txt"));
  }

  #[test]
  fn file_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("logbook.toml");
    std::fs::write(&path, "pets_file = \"data/pets.db.txt\"\n").unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.pets_file, PathBuf::from("data/pets.db.txt"));
    assert_eq!(settings.moods_file, PathBuf::from("moods.txt"));
  }
}
