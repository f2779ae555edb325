//! Flat-file persistence for logbook records.
//!
//! One record per line, fields joined by a literal `|`. Pure synchronous; each
//! call opens, fully reads or writes, and closes its file.
//!
//! # Quick start
//!
//! ```no_run
//! use logbook_core::pet::Pet;
//! use logbook_flatfile::{Loaded, load, save};
//!
//! let loaded: Loaded<Pet> = load("pets.txt");
//! if let Some(err) = &loaded.error {
//!   eprintln!("Error loading pets: {err}");
//! }
//! save(&loaded.records, "pets.txt").unwrap();
//! ```

mod decode;
mod encode;
pub mod error;

use std::{
  fs,
  io::{self, BufRead, BufReader},
  path::Path,
};

pub use error::{Error, Result};
use logbook_core::{appointment::Appointment, mood::Mood, pet::Pet};

/// Field separator.
pub const DELIMITER: &str = "|";
/// `yyyy-MM-dd`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `HH:mm`
pub const TIME_FORMAT: &str = "%H:%M";

// ─── Codec trait ─────────────────────────────────────────────────────────────

/// A record with a one-line delimited representation.
pub trait FlatRecord: Sized {
  /// Render the record as a single line, without the line terminator.
  fn encode(&self) -> Result<String>;

  /// Parse one line, without its terminator.
  fn decode(line: &str) -> Result<Self>;
}

impl FlatRecord for Pet {
  fn encode(&self) -> Result<String> { encode::encode_pet(self) }

  fn decode(line: &str) -> Result<Self> { decode::decode_pet(line) }
}

impl FlatRecord for Appointment {
  fn encode(&self) -> Result<String> { encode::encode_appointment(self) }

  fn decode(line: &str) -> Result<Self> { decode::decode_appointment(line) }
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// The outcome of [`load`].
///
/// Reading stops at the first bad line. Records parsed before it are kept in
/// `records`; the failure is in `error`.
#[derive(Debug)]
pub struct Loaded<R> {
  pub records: Vec<R>,
  pub error:   Option<Error>,
}

impl<R> Default for Loaded<R> {
  fn default() -> Self {
    Self {
      records: Vec::new(),
      error:   None,
    }
  }
}

impl<R> Loaded<R> {
  /// Whether every line in the file was read.
  pub fn is_complete(&self) -> bool { self.error.is_none() }
}

/// Read every record from `path`.
///
/// A missing file yields an empty, complete result. Blank lines are skipped.
pub fn load<R: FlatRecord>(path: impl AsRef<Path>) -> Loaded<R> {
  let path = path.as_ref();
  let file = match fs::File::open(path) {
    Ok(file) => file,
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      tracing::debug!(path = %path.display(), "no file to load");
      return Loaded::default();
    }
    Err(e) => {
      return Loaded {
        records: Vec::new(),
        error:   Some(Error::io(path, e)),
      };
    }
  };

  let mut loaded = Loaded::default();
  for (index, line) in BufReader::new(file).lines().enumerate() {
    let line = match line {
      Ok(line) => line,
      Err(e) => {
        loaded.error = Some(Error::io(path, e));
        break;
      }
    };
    if line.trim().is_empty() {
      continue;
    }
    match R::decode(&line) {
      Ok(record) => loaded.records.push(record),
      Err(e) => {
        loaded.error = Some(Error::Line {
          line:   index + 1,
          source: Box::new(e),
        });
        break;
      }
    }
  }

  match &loaded.error {
    None => tracing::info!(
      path = %path.display(),
      count = loaded.records.len(),
      "records loaded"
    ),
    Some(e) => tracing::warn!(
      path = %path.display(),
      kept = loaded.records.len(),
      error = %e,
      "load stopped early"
    ),
  }
  loaded
}

// ─── Saving ──────────────────────────────────────────────────────────────────

/// Overwrite `path` with one line per record. Returns the number written.
///
/// Every record is encoded before the file is opened, so an encoding error
/// leaves an existing file untouched.
pub fn save<'a, R, I>(records: I, path: impl AsRef<Path>) -> Result<usize>
where
  R: FlatRecord + 'a,
  I: IntoIterator<Item = &'a R>,
{
  let path = path.as_ref();
  let mut out = String::new();
  let mut count = 0;
  for record in records {
    out.push_str(&record.encode()?);
    out.push('\n');
    count += 1;
  }
  fs::write(path, out).map_err(|e| Error::io(path, e))?;
  tracing::info!(path = %path.display(), count, "records saved");
  Ok(count)
}

/// Write a human-readable dump of `moods` to `path`, overwriting it.
///
/// The dump is not meant to be read back.
pub fn write_mood_dump<'a, I>(moods: I, path: impl AsRef<Path>) -> Result<usize>
where
  I: IntoIterator<Item = &'a Mood>,
{
  let path = path.as_ref();
  let mut out = String::new();
  let mut count = 0;
  for mood in moods {
    out.push_str(&format!("{mood}\n\n\n"));
    count += 1;
  }
  fs::write(path, out).map_err(|e| Error::io(path, e))?;
  tracing::info!(path = %path.display(), count, "mood dump written");
  Ok(count)
}
