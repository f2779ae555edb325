//! The pet-care scheduler menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use logbook_core::{
  AddOutcome,
  appointment::{Appointment, AppointmentType, NewAppointment},
  pet::NewPet,
  scheduler::Scheduler,
};
use logbook_flatfile::{DATE_FORMAT, Loaded, TIME_FORMAT};

use crate::{
  Clock,
  config::Settings,
  console::{Console, is_input_closed},
  local_now,
};

const MENU: &str = "\n=== Pet Care Scheduler ===\n\
                    1. Register Pet\n\
                    2. Schedule Appointment\n\
                    3. Store Data\n\
                    4. Display Records\n\
                    5. Generate Reports\n\
                    6. Exit\n\
                    ==========================";

const RECORDS_MENU: &str = "\n--- Display Records ---\n\
                            1. Display All Pets\n\
                            2. Display All Appointments\n\
                            3. Display Pet Details";

const REPORTS_MENU: &str = "\n--- Generate Reports ---\n\
                            1. Total Pets Report\n\
                            2. Upcoming Appointments Report\n\
                            3. Appointments by Type Report\n\
                            4. Overdue Vet Visit Report";

/// Top-level state of the `petcare` program.
pub struct PetApp<R, W> {
  pub scheduler: Scheduler,
  console:       Console<R, W>,
  settings:      Settings,
  clock:         Clock,
}

impl<R: BufRead, W: Write> PetApp<R, W> {
  /// Create an app with an empty scheduler.
  pub fn new(console: Console<R, W>, settings: Settings) -> Self {
    Self {
      scheduler: Scheduler::new(),
      console,
      settings,
      clock: local_now,
    }
  }

  /// Replace the wall clock, for deterministic sessions.
  pub fn with_clock(mut self, clock: Clock) -> Self {
    self.clock = clock;
    self
  }

  pub fn console(&self) -> &Console<R, W> { &self.console }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Load pets and appointments from the configured files.
  ///
  /// Records read before a bad line are kept; the error is reported.
  pub fn load(&mut self) -> Result<()> {
    let pets = logbook_flatfile::load(&self.settings.pets_file);
    self.report_load("pets", &pets)?;
    let appointments = logbook_flatfile::load(&self.settings.appointments_file);
    self.report_load("appointments", &appointments)?;

    self.scheduler = Scheduler::from_records(pets.records, appointments.records);
    Ok(())
  }

  fn report_load<T>(&mut self, what: &str, loaded: &Loaded<T>) -> Result<()> {
    match &loaded.error {
      None if loaded.records.is_empty() => Ok(()),
      None => self
        .console
        .say(format!("Loaded {} {what} from file.", loaded.records.len())),
      Some(e) => self.console.say(format!(
        "Error loading {what}: {e} (kept {} read before the error)",
        loaded.records.len()
      )),
    }
  }

  // ── Main loop ─────────────────────────────────────────────────────────────

  /// Run until option 6 or end of input.
  pub fn run(&mut self) -> Result<()> {
    loop {
      self.console.say(MENU)?;
      let step = self
        .ask_choice()
        .and_then(|choice| self.handle_choice(choice));
      match step {
        Ok(true) => {}
        Ok(false) => return Ok(()),
        Err(e) if is_input_closed(&e) => return Ok(()),
        Err(e) => return Err(e),
      }
    }
  }

  /// Dispatch one main-menu choice. Returns `false` to quit.
  pub fn handle_choice(&mut self, choice: i64) -> Result<bool> {
    match choice {
      1 => self.register_pet()?,
      2 => self.schedule_appointment()?,
      3 => self.store_data()?,
      4 => self.display_records()?,
      5 => self.generate_reports()?,
      6 => {
        self.console.say("Exiting application. Goodbye!")?;
        return Ok(false);
      }
      _ => self.console.say("Invalid choice. Please try again.")?,
    }
    Ok(true)
  }

  // ── Input helpers ─────────────────────────────────────────────────────────

  fn ask_choice(&mut self) -> Result<i64> {
    self.console.ask_until(
      "Enter your choice: ",
      "Invalid number. Please try again.",
      |s| s.parse().ok(),
    )
  }

  fn ask_date(&mut self, prompt: &str) -> Result<NaiveDate> {
    self.console.ask_until(
      prompt,
      "Invalid date format. Please use yyyy-MM-dd.",
      |s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
    )
  }

  fn ask_time(&mut self, prompt: &str) -> Result<NaiveTime> {
    self.console.ask_until(
      prompt,
      "Invalid time format. Please use HH:mm.",
      |s| NaiveTime::parse_from_str(s, TIME_FORMAT).ok(),
    )
  }

  // ── Commands ──────────────────────────────────────────────────────────────

  fn register_pet(&mut self) -> Result<()> {
    self.console.say("\n--- Register New Pet ---")?;

    let id = self.console.ask_trimmed("Enter Pet ID: ")?;
    if self.scheduler.find_pet(&id).is_some() {
      return self
        .console
        .say(format!("Error: Pet with ID {id} already exists."));
    }

    let name = self.console.ask_trimmed("Enter Pet Name: ")?;
    let species_breed = self.console.ask_trimmed("Enter Species/Breed: ")?;
    let age = self.console.ask_until(
      "Enter Pet Age: ",
      "Invalid number. Please try again.",
      |s| s.parse::<u32>().ok(),
    )?;
    let owner = self.console.ask_trimmed("Enter Owner Name: ")?;
    let contact = self.console.ask_trimmed("Enter Contact Info: ")?;

    let input = NewPet {
      id: id.clone(),
      name,
      species_breed,
      age,
      owner,
      contact,
    };
    let today = (self.clock)().date();
    match self.scheduler.register(input, today) {
      Ok(AddOutcome::Added) => self.console.say("Pet registered successfully!"),
      Ok(AddOutcome::Rejected(_)) => self
        .console
        .say(format!("Error: Pet with ID {id} already exists.")),
      Err(e) => self.console.say(format!("Error registering pet: {e}")),
    }
  }

  fn schedule_appointment(&mut self) -> Result<()> {
    if self.scheduler.pet_count() == 0 {
      return self
        .console
        .say("No pets registered. Please register a pet first.");
    }
    self.console.say("\n--- Schedule Appointment ---")?;

    let pet_id = self.console.ask_trimmed("Enter Pet ID: ")?;
    if self.scheduler.find_pet(&pet_id).is_none() {
      return self
        .console
        .say(format!("Error: Pet with ID {pet_id} not found."));
    }

    let kind = self
      .console
      .ask_trimmed("Enter Appointment Type (e.g., Checkup, Vaccination): ")?;
    let kind = match AppointmentType::parse(&kind) {
      Ok(kind) => kind,
      Err(e) => return self.console.say(format!("Error: {e}")),
    };

    let date = self.ask_date("Enter Appointment Date (yyyy-MM-dd): ")?;
    let time = self.ask_time("Enter Appointment Time (HH:mm): ")?;
    let notes = self.console.ask_trimmed("Enter Notes (optional): ")?;

    let input = NewAppointment {
      kind,
      date,
      time,
      notes: Some(notes),
    };
    let now = (self.clock)();
    match self.scheduler.schedule(&pet_id, input, now) {
      Ok(_) => {
        let name = self
          .scheduler
          .find_pet(&pet_id)
          .map(|p| p.name().to_string())
          .unwrap_or(pet_id);
        self
          .console
          .say(format!("Appointment scheduled successfully for {name}!"))
      }
      Err(e) => self.console.say(format!("Error: {e}")),
    }
  }

  fn store_data(&mut self) -> Result<()> {
    let saved = logbook_flatfile::save(self.scheduler.pets(), &self.settings.pets_file)
      .and_then(|_| {
        logbook_flatfile::save(
          self.scheduler.appointments(),
          &self.settings.appointments_file,
        )
      });
    match saved {
      Ok(_) => self.console.say("Data stored successfully!"),
      Err(e) => {
        tracing::error!(error = %e, "store failed");
        self.console.say(format!("Error storing data: {e}"))
      }
    }
  }

  fn display_records(&mut self) -> Result<()> {
    self.console.say(RECORDS_MENU)?;
    match self.ask_choice()? {
      1 => self.display_all_pets(),
      2 => self.display_all_appointments(),
      3 => self.display_pet_details(),
      _ => self.console.say("Invalid choice."),
    }
  }

  fn display_all_pets(&mut self) -> Result<()> {
    if self.scheduler.pet_count() == 0 {
      return self.console.say("No pets registered.");
    }
    let lines: Vec<String> = self
      .scheduler
      .pets()
      .map(|p| {
        format!(
          "ID: {} | Name: {} | Species/Breed: {} | Owner: {}",
          p.id(),
          p.name(),
          p.species_breed(),
          p.owner()
        )
      })
      .collect();
    self.console.say("\n=== All Pets ===")?;
    for line in lines {
      self.console.say(line)?;
    }
    Ok(())
  }

  fn display_all_appointments(&mut self) -> Result<()> {
    if self.scheduler.appointment_count() == 0 {
      return self.console.say("No appointments scheduled.");
    }
    let lines: Vec<String> =
      self.scheduler.appointments().map(Appointment::to_string).collect();
    self.console.say("\n=== All Appointments ===")?;
    for line in lines {
      self.console.say(line)?;
    }
    Ok(())
  }

  fn display_pet_details(&mut self) -> Result<()> {
    let id = self.console.ask_trimmed("Enter Pet ID: ")?;
    let Some(pet) = self.scheduler.find_pet(&id) else {
      return self.console.say("Pet not found.");
    };

    let mut lines = vec![
      "\n=== Pet Details ===".to_string(),
      format!("ID: {}", pet.id()),
      format!("Name: {}", pet.name()),
      format!("Species/Breed: {}", pet.species_breed()),
      format!("Age: {}", pet.age()),
      format!("Owner: {}", pet.owner()),
      format!("Contact: {}", pet.contact()),
      format!("Registration Date: {}", pet.registered_on().format(DATE_FORMAT)),
      format!("Appointments: {}", pet.appointments().len()),
    ];
    if !pet.appointments().is_empty() {
      lines.push("\nAppointment History:".to_string());
      lines.extend(pet.appointments().iter().map(|a| format!("  - {a}")));
    }
    for line in lines {
      self.console.say(line)?;
    }
    Ok(())
  }

  fn generate_reports(&mut self) -> Result<()> {
    self.console.say(REPORTS_MENU)?;
    let today = (self.clock)().date();
    let lines: Vec<String> = match self.ask_choice()? {
      1 => {
        let totals = self.scheduler.totals();
        vec![
          "\n=== Total Pets Report ===".to_string(),
          format!("Total Pets Registered: {}", totals.pets),
          format!("Total Appointments: {}", totals.appointments),
        ]
      }
      2 => {
        let upcoming = self.scheduler.upcoming(today);
        let mut lines = vec![
          "\n=== Upcoming Appointments ===".to_string(),
          format!("Total Upcoming: {}", upcoming.len()),
        ];
        lines.extend(upcoming.iter().map(|a| a.to_string()));
        lines
      }
      3 => {
        let mut lines = vec!["\n=== Appointments by Type ===".to_string()];
        lines.extend(
          self
            .scheduler
            .by_type()
            .into_iter()
            .map(|(kind, count)| format!("{kind}: {count}")),
        );
        lines
      }
      4 => {
        let overdue = self.scheduler.overdue(today);
        let mut lines = vec![
          "\n=== Pets Overdue for Vet Visit ===".to_string(),
          format!(
            "Pets without a visit in the last {} months: {}",
            logbook_core::report::RECENT_VISIT_MONTHS,
            overdue.len()
          ),
        ];
        lines.extend(
          overdue
            .iter()
            .map(|p| format!("ID: {} | Name: {}", p.id(), p.name())),
        );
        lines
      }
      _ => vec!["Invalid choice.".to_string()],
    };
    for line in lines {
      self.console.say(line)?;
    }
    Ok(())
  }
}
