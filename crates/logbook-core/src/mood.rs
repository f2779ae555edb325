//! One mood journal entry.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{Result, error::require, store::Record};

/// Date format used when a mood is shown or typed in.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";
/// Time format used when a mood is shown or typed in.
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M:%S";

// ─── Key ─────────────────────────────────────────────────────────────────────

/// The identity of a mood. Notes are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoodKey {
  pub name: String,
  pub date: NaiveDate,
  pub time: NaiveTime,
}

impl MoodKey {
  pub fn new(name: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
    Self {
      name: name.into(),
      date,
      time,
    }
  }
}

// ─── Mood ────────────────────────────────────────────────────────────────────

/// A named mood recorded at a date and time, with optional notes.
///
/// Two moods are equal iff name, date and time match; notes are ignored.
#[derive(Debug, Clone)]
pub struct Mood {
  name:  String,
  date:  NaiveDate,
  time:  NaiveTime,
  notes: Option<String>,
}

impl Mood {
  /// Build a mood for an explicit date and time.
  pub fn new(
    name: impl Into<String>,
    date: NaiveDate,
    time: NaiveTime,
    notes: Option<String>,
  ) -> Result<Self> {
    let name = name.into();
    require("mood name", &name)?;
    let mut mood = Self {
      name,
      date,
      time,
      notes: None,
    };
    mood.set_notes(notes);
    Ok(mood)
  }

  /// Build a mood stamped with `now`, truncated to whole seconds so the key
  /// can be typed back in later.
  pub fn at(
    name: impl Into<String>,
    now: NaiveDateTime,
    notes: Option<String>,
  ) -> Result<Self> {
    let time = now.time().with_nanosecond(0).unwrap_or(now.time());
    Self::new(name, now.date(), time, notes)
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn date(&self) -> NaiveDate { self.date }

  pub fn time(&self) -> NaiveTime { self.time }

  pub fn notes(&self) -> Option<&str> { self.notes.as_deref() }

  /// Replace the notes. Surrounding whitespace is trimmed and blank notes
  /// clear the field.
  pub fn set_notes(&mut self, notes: Option<String>) {
    self.notes = notes
      .map(|n| n.trim().to_string())
      .filter(|n| !n.is_empty());
  }
}

impl PartialEq for Mood {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name && self.date == other.date && self.time == other.time
  }
}

impl Eq for Mood {}

impl Record for Mood {
  type Key = MoodKey;

  fn key(&self) -> MoodKey { MoodKey::new(self.name.clone(), self.date, self.time) }

  fn matches_key(&self, key: &MoodKey) -> bool {
    self.name == key.name && self.date == key.date && self.time == key.time
  }
}

impl fmt::Display for Mood {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Mood: {}", self.name)?;
    writeln!(f, "Date: {}", self.date.format(DISPLAY_DATE_FORMAT))?;
    writeln!(f, "Time: {}", self.time.format(DISPLAY_TIME_FORMAT))?;
    write!(f, "Notes: {}", self.notes.as_deref().unwrap_or("No notes"))
  }
}
