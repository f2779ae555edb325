//! A registered animal and the appointments booked for it.

use std::rc::Rc;

use chrono::NaiveDate;

use crate::{
  Result,
  appointment::Appointment,
  error::{require, single_line},
  store::Record,
};

/// Input to [`crate::scheduler::Scheduler::register`].
/// `registered_on` is always set by the scheduler.
#[derive(Debug, Clone)]
pub struct NewPet {
  pub id:            String,
  pub name:          String,
  pub species_breed: String,
  pub age:           u32,
  pub owner:         String,
  pub contact:       String,
}

/// A registered pet.
///
/// The ID is compared case-insensitively. Appointments are shared with the
/// scheduler's global list, which is why they are reference-counted.
#[derive(Debug, Clone)]
pub struct Pet {
  id:            String,
  name:          String,
  species_breed: String,
  age:           u32,
  owner:         String,
  contact:       String,
  registered_on: NaiveDate,
  appointments:  Vec<Rc<Appointment>>,
}

impl Pet {
  /// Build a pet with no appointments. The ID must not be blank, and no text
  /// field may contain `|` or a line break.
  pub fn new(input: NewPet, registered_on: NaiveDate) -> Result<Self> {
    let id = input.id.trim().to_string();
    require("pet ID", &id)?;
    single_line("pet ID", &id)?;
    single_line("pet name", &input.name)?;
    single_line("species/breed", &input.species_breed)?;
    single_line("owner name", &input.owner)?;
    single_line("contact info", &input.contact)?;
    Ok(Self {
      id,
      name: input.name,
      species_breed: input.species_breed,
      age: input.age,
      owner: input.owner,
      contact: input.contact,
      registered_on,
      appointments: Vec::new(),
    })
  }

  pub fn id(&self) -> &str { &self.id }

  pub fn name(&self) -> &str { &self.name }

  pub fn species_breed(&self) -> &str { &self.species_breed }

  pub fn age(&self) -> u32 { self.age }

  pub fn owner(&self) -> &str { &self.owner }

  pub fn contact(&self) -> &str { &self.contact }

  pub fn registered_on(&self) -> NaiveDate { self.registered_on }

  /// Whether this pet is identified by `id`, ignoring case.
  pub fn has_id(&self, id: &str) -> bool {
    self.id.to_lowercase() == id.trim().to_lowercase()
  }

  /// This pet's appointments in booking order.
  pub fn appointments(&self) -> &[Rc<Appointment>] { &self.appointments }

  pub(crate) fn push_appointment(&mut self, appointment: Rc<Appointment>) {
    self.appointments.push(appointment);
  }
}

impl Record for Pet {
  type Key = String;

  fn key(&self) -> String { self.id.clone() }

  fn matches_key(&self, key: &String) -> bool { self.has_id(key) }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn new_pet(id: &str) -> NewPet {
    NewPet {
      id:            id.into(),
      name:          "Rex".into(),
      species_breed: "Dog/Beagle".into(),
      age:           3,
      owner:         "Sam".into(),
      contact:       "555-0100".into(),
    }
  }

  #[test]
  fn id_matching_ignores_case() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let pet = Pet::new(new_pet("P1"), today).unwrap();
    assert!(pet.has_id("p1"));
    assert!(pet.matches_key(&"P1".to_string()));
    assert!(!pet.has_id("P2"));
  }

  #[test]
  fn blank_id_is_rejected() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(
      Pet::new(new_pet("   "), today).unwrap_err(),
      crate::Error::EmptyField("pet ID")
    );
  }

  #[test]
  fn delimiter_in_a_text_field_is_rejected() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut input = new_pet("P1");
    input.name = "Rex|Jr".into();
    assert_eq!(
      Pet::new(input, today).unwrap_err(),
      crate::Error::MultiLineOrDelimited {
        field: "pet name",
        value: "Rex|Jr".into(),
      }
    );

    let mut input = new_pet("P1");
    input.contact = "555\n0100".into();
    assert!(Pet::new(input, today).is_err());
  }
}
