//! Error types for the flat-file adapter.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot access {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("expected {expected} fields, found {found}")]
  FieldCount { expected: &'static str, found: usize },

  #[error("invalid integer in {field}: {value:?}")]
  InvalidInteger { field: &'static str, value: String },

  #[error("invalid date in {field}: {value:?} (expected yyyy-MM-dd)")]
  InvalidDate { field: &'static str, value: String },

  #[error("invalid time in {field}: {value:?} (expected HH:mm)")]
  InvalidTime { field: &'static str, value: String },

  #[error("{field} cannot contain '|' or a line break: {value:?}")]
  Delimiter { field: &'static str, value: String },

  #[error(transparent)]
  Core(#[from] logbook_core::Error),

  /// A decode failure, tagged with its 1-based line number.
  #[error("line {line}: {source}")]
  Line {
    line:   usize,
    #[source]
    source: Box<Error>,
  },
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
