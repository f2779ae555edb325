//! Appointment types.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{Error, Result};

// ─── Type ────────────────────────────────────────────────────────────────────

/// The fixed set of appointment kinds. Parsing is case-sensitive.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString,
  EnumIter,
)]
pub enum AppointmentType {
  Checkup,
  Vaccination,
  Surgery,
  Emergency,
  Grooming,
}

impl AppointmentType {
  /// Parse a type name, reporting the valid names on failure.
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::InvalidAppointmentType {
      given: s.to_string(),
      valid: Self::valid_names(),
    })
  }

  /// `"[Checkup, Vaccination, …]"`
  pub fn valid_names() -> String {
    let names: Vec<String> = Self::iter().map(|t| t.to_string()).collect();
    format!("[{}]", names.join(", "))
  }
}

// ─── Appointment ─────────────────────────────────────────────────────────────

/// Input to [`crate::scheduler::Scheduler::schedule`].
#[derive(Debug, Clone)]
pub struct NewAppointment {
  pub kind:  AppointmentType,
  pub date:  NaiveDate,
  pub time:  NaiveTime,
  pub notes: Option<String>,
}

/// A pet-care appointment.
///
/// Equality covers type, date and time; notes are ignored.
#[derive(Debug, Clone)]
pub struct Appointment {
  kind:  AppointmentType,
  date:  NaiveDate,
  time:  NaiveTime,
  notes: Option<String>,
}

impl Appointment {
  /// Build an appointment without any date check. Used for loaded data.
  pub fn new(
    kind: AppointmentType,
    date: NaiveDate,
    time: NaiveTime,
    notes: Option<String>,
  ) -> Self {
    let mut appointment = Self {
      kind,
      date,
      time,
      notes: None,
    };
    appointment.set_notes(notes);
    appointment
  }

  /// Build an appointment that must not start before `now`.
  pub fn schedule(input: NewAppointment, now: NaiveDateTime) -> Result<Self> {
    if input.date.and_time(input.time) < now {
      return Err(Error::PastAppointment);
    }
    Ok(Self::new(input.kind, input.date, input.time, input.notes))
  }

  pub fn kind(&self) -> AppointmentType { self.kind }

  pub fn date(&self) -> NaiveDate { self.date }

  pub fn time(&self) -> NaiveTime { self.time }

  pub fn starts_at(&self) -> NaiveDateTime { self.date.and_time(self.time) }

  pub fn notes(&self) -> Option<&str> { self.notes.as_deref() }

  /// Set the type from its name.
  pub fn set_kind(&mut self, kind: &str) -> Result<()> {
    self.kind = AppointmentType::parse(kind.trim())?;
    Ok(())
  }

  pub fn set_date(&mut self, date: NaiveDate) { self.date = date; }

  pub fn set_time(&mut self, time: NaiveTime) { self.time = time; }

  /// Notes are trimmed; `None` stays `None`.
  pub fn set_notes(&mut self, notes: Option<String>) {
    self.notes = notes.map(|n| n.trim().to_string());
  }
}

impl PartialEq for Appointment {
  fn eq(&self, other: &Self) -> bool {
    self.kind == other.kind && self.date == other.date && self.time == other.time
  }
}

impl Eq for Appointment {}

impl fmt::Display for Appointment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} on {} at {}",
      self.kind,
      self.date.format("%Y-%m-%d"),
      self.time.format("%H:%M")
    )?;
    match self.notes.as_deref() {
      Some(n) if !n.is_empty() => write!(f, " ({n})"),
      _ => Ok(()),
    }
  }
}
