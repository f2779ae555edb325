//! Reporting queries over a [`Scheduler`]. Never stored, always derived.

use std::collections::HashMap;

use chrono::{Months, NaiveDate};

use crate::{
  appointment::{Appointment, AppointmentType},
  pet::Pet,
  scheduler::Scheduler,
};

/// How far back a visit still counts as recent for [`Scheduler::overdue`].
pub const RECENT_VISIT_MONTHS: u32 = 6;

/// Registry size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
  pub pets:         usize,
  pub appointments: usize,
}

impl Scheduler {
  pub fn totals(&self) -> Totals {
    Totals {
      pets:         self.pet_count(),
      appointments: self.appointment_count(),
    }
  }

  /// Appointments dated `today` or later, in list order (not re-sorted).
  pub fn upcoming(&self, today: NaiveDate) -> Vec<&Appointment> {
    self.appointments().filter(|a| a.date() >= today).collect()
  }

  /// Appointment counts grouped by type. Iteration order is unspecified.
  pub fn by_type(&self) -> HashMap<AppointmentType, usize> {
    let mut counts = HashMap::new();
    for appointment in self.appointments() {
      *counts.entry(appointment.kind()).or_insert(0) += 1;
    }
    counts
  }

  /// Pets with at least one appointment but none dated after
  /// `today - RECENT_VISIT_MONTHS`.
  pub fn overdue(&self, today: NaiveDate) -> Vec<&Pet> {
    let cutoff = today
      .checked_sub_months(Months::new(RECENT_VISIT_MONTHS))
      .unwrap_or(NaiveDate::MIN);
    self
      .pets()
      .filter(|pet| {
        let visits = pet.appointments();
        !visits.is_empty() && !visits.iter().any(|a| a.date() > cutoff)
      })
      .collect()
  }
}
