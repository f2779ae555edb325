//! Delimited lines → Rust domain types.
//!
//! Pipeline:
//!   raw line
//!     └─ strip trailing `\r`
//!          └─ split on `|`         → fields (arity checked)
//!               └─ parse_* helpers → typed values
//!                    └─ core constructor → record

use chrono::{NaiveDate, NaiveTime};
use logbook_core::{
  appointment::{Appointment, AppointmentType},
  pet::{NewPet, Pet},
};

use crate::{DATE_FORMAT, DELIMITER, Error, Result, TIME_FORMAT};

// ─── Field helpers ───────────────────────────────────────────────────────────

fn parse_u32(field: &'static str, value: &str) -> Result<u32> {
  value.parse().map_err(|_| Error::InvalidInteger {
    field,
    value: value.to_string(),
  })
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| Error::InvalidDate {
    field,
    value: value.to_string(),
  })
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime> {
  NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| Error::InvalidTime {
    field,
    value: value.to_string(),
  })
}

fn strip_cr(line: &str) -> &str { line.strip_suffix('\r').unwrap_or(line) }

// ─── Records ─────────────────────────────────────────────────────────────────

/// Exactly seven fields; see [`crate::encode`] for the column order.
pub(crate) fn decode_pet(line: &str) -> Result<Pet> {
  let fields: Vec<&str> = strip_cr(line).split(DELIMITER).collect();
  let [id, name, species_breed, age, owner, contact, registered] = fields[..]
  else {
    return Err(Error::FieldCount {
      expected: "7",
      found:    fields.len(),
    });
  };

  let input = NewPet {
    id:            id.to_string(),
    name:          name.to_string(),
    species_breed: species_breed.to_string(),
    age:           parse_u32("age", age)?,
    owner:         owner.to_string(),
    contact:       contact.to_string(),
  };
  let registered_on = parse_date("registration date", registered)?;
  Ok(Pet::new(input, registered_on)?)
}

/// Three or four fields. The notes field is optional and runs to the end of
/// the line, so it may itself contain `|`.
pub(crate) fn decode_appointment(line: &str) -> Result<Appointment> {
  let fields: Vec<&str> = strip_cr(line).splitn(4, DELIMITER).collect();
  let (kind, date, time, notes) = match fields[..] {
    [kind, date, time] => (kind, date, time, ""),
    [kind, date, time, notes] => (kind, date, time, notes),
    _ => {
      return Err(Error::FieldCount {
        expected: "3 or 4",
        found:    fields.len(),
      });
    }
  };

  Ok(Appointment::new(
    AppointmentType::parse(kind)?,
    parse_date("appointment date", date)?,
    parse_time("appointment time", time)?,
    Some(notes.to_string()),
  ))
}
