//! Rust domain types → delimited lines.
//!
//! Every field is checked before it is joined: a delimiter inside a field
//! would shift every later column on reload.

use chrono::{NaiveDate, NaiveTime};
use logbook_core::{appointment::Appointment, pet::Pet};

use crate::{DATE_FORMAT, DELIMITER, Error, Result, TIME_FORMAT};

// ─── Field helpers ───────────────────────────────────────────────────────────

/// Pass `value` through unless it contains the delimiter or a line break.
fn field<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
  if value.contains(DELIMITER) {
    return Err(Error::Delimiter {
      field: name,
      value: value.to_string(),
    });
  }
  trailing_field(name, value)
}

/// The last field of a line may contain the delimiter; line breaks are still
/// refused.
fn trailing_field<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
  if value.contains(['\n', '\r']) {
    return Err(Error::Delimiter {
      field: name,
      value: value.to_string(),
    });
  }
  Ok(value)
}

pub(crate) fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub(crate) fn encode_time(t: NaiveTime) -> String { t.format(TIME_FORMAT).to_string() }

fn join(fields: &[&str]) -> String { fields.join(DELIMITER) }

// ─── Records ─────────────────────────────────────────────────────────────────

/// `id|name|species_breed|age|owner|contact|registration_date`
pub(crate) fn encode_pet(pet: &Pet) -> Result<String> {
  let age = pet.age().to_string();
  let registered = encode_date(pet.registered_on());
  Ok(join(&[
    field("pet ID", pet.id())?,
    field("pet name", pet.name())?,
    field("species/breed", pet.species_breed())?,
    age.as_str(),
    field("owner name", pet.owner())?,
    field("contact info", pet.contact())?,
    registered.as_str(),
  ]))
}

/// `type|date|time|notes`; absent notes are written as an empty field.
pub(crate) fn encode_appointment(apt: &Appointment) -> Result<String> {
  let kind = apt.kind().to_string();
  let date = encode_date(apt.date());
  let time = encode_time(apt.time());
  Ok(join(&[
    kind.as_str(),
    date.as_str(),
    time.as_str(),
    trailing_field("notes", apt.notes().unwrap_or_default())?,
  ]))
}
