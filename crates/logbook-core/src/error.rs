//! Error types for `logbook-core`.
//!
//! Duplicate keys are not errors; they are reported through
//! [`AddOutcome::Rejected`](crate::store::AddOutcome::Rejected).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("{0} cannot be empty")]
  EmptyField(&'static str),

  #[error("{field} cannot contain '|' or a line break: {value:?}")]
  MultiLineOrDelimited { field: &'static str, value: String },

  #[error("invalid appointment type {given:?}; valid types: {valid}")]
  InvalidAppointmentType { given: String, valid: String },

  #[error("appointment must be scheduled for a future date and time")]
  PastAppointment,

  #[error("no pets registered; register a pet first")]
  NoPets,

  #[error("pet with ID {0} not found")]
  PetNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject a required field that is empty after trimming.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::EmptyField(field));
  }
  Ok(())
}

/// Reject a text field that could not be stored as one delimited column.
pub(crate) fn single_line(field: &'static str, value: &str) -> Result<()> {
  if value.contains(['|', '\n', '\r']) {
    return Err(Error::MultiLineOrDelimited {
      field,
      value: value.to_string(),
    });
  }
  Ok(())
}
