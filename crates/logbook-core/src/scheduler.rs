//! The pet registry and the global appointment list.

use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
  Error, Result,
  appointment::{Appointment, NewAppointment},
  pet::{NewPet, Pet},
  store::{AddOutcome, RecordStore},
};

/// Pets and their appointments.
///
/// Every scheduled appointment is held twice: in the owning pet's list and in
/// the global list used for reporting. Appointments loaded from disk have no
/// owner and only appear in the global list.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
  pets:         RecordStore<Pet>,
  appointments: Vec<Rc<Appointment>>,
}

impl Scheduler {
  pub fn new() -> Self { Self::default() }

  /// Build a scheduler from loaded records, in file order.
  pub fn from_records(pets: Vec<Pet>, appointments: Vec<Appointment>) -> Self {
    Self {
      pets:         RecordStore::from_records(pets),
      appointments: appointments.into_iter().map(Rc::new).collect(),
    }
  }

  // ── Pets ──────────────────────────────────────────────────────────────────

  /// Register a pet, stamping it with `today`.
  ///
  /// An ID already in use (ignoring case) is rejected as a duplicate.
  pub fn register(&mut self, input: NewPet, today: NaiveDate) -> Result<AddOutcome> {
    let pet = Pet::new(input, today)?;
    let id = pet.id().to_string();
    let outcome = self.pets.add(pet);
    tracing::debug!(%id, ?outcome, "pet registration");
    Ok(outcome)
  }

  /// Case-insensitive lookup by pet ID.
  pub fn find_pet(&self, id: &str) -> Option<&Pet> {
    self.pets.find(&id.to_string())
  }

  /// All pets in registration order.
  pub fn pets(&self) -> impl Iterator<Item = &Pet> + '_ { self.pets.iter() }

  pub fn pet_count(&self) -> usize { self.pets.len() }

  // ── Appointments ──────────────────────────────────────────────────────────

  /// Book an appointment for the pet with `pet_id`.
  ///
  /// Fails with [`Error::NoPets`] on an empty registry, [`Error::PetNotFound`]
  /// for an unknown ID, and [`Error::PastAppointment`] when the appointment
  /// starts before `now`.
  pub fn schedule(
    &mut self,
    pet_id: &str,
    input: NewAppointment,
    now: NaiveDateTime,
  ) -> Result<Rc<Appointment>> {
    if self.pets.is_empty() {
      return Err(Error::NoPets);
    }
    let pet = self
      .pets
      .find_mut(&pet_id.to_string())
      .ok_or_else(|| Error::PetNotFound(pet_id.to_string()))?;

    let appointment = Rc::new(Appointment::schedule(input, now)?);
    pet.push_appointment(Rc::clone(&appointment));
    self.appointments.push(Rc::clone(&appointment));
    tracing::debug!(pet = %pet.id(), kind = %appointment.kind(), "appointment scheduled");
    Ok(appointment)
  }

  /// All appointments in booking (or file) order.
  pub fn appointments(&self) -> impl Iterator<Item = &Appointment> + '_ {
    self.appointments.iter().map(|a| a.as_ref())
  }

  pub fn appointment_count(&self) -> usize { self.appointments.len() }
}
