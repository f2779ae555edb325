//! The mood journal menu loop.

use std::{
  io::{BufRead, Write},
  path::PathBuf,
};

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use logbook_core::{
  AddOutcome,
  journal::MoodJournal,
  mood::{DISPLAY_DATE_FORMAT, DISPLAY_TIME_FORMAT, Mood, MoodKey},
};

use crate::{
  Clock,
  console::{Console, is_input_closed},
  local_now,
};

const MENU: &str = "Press 'a' to add mood\n\
                    'd' to delete mood(s)\n\
                    'e' to edit mood\n\
                    's' to search for moods\n\
                    'M' to get all moods\n\
                    'w' to write the moods to a file\n\
                    Type 'Exit' to exit";

const NO_MATCHES: &str = "No matching records could be found!";

fn parse_date(s: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(s.trim(), DISPLAY_DATE_FORMAT).ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
  NaiveTime::parse_from_str(s.trim(), DISPLAY_TIME_FORMAT).ok()
}

/// Top-level state of the `moods` program.
pub struct MoodApp<R, W> {
  pub journal: MoodJournal,
  console:     Console<R, W>,
  dump_path:   PathBuf,
  clock:       Clock,
}

impl<R: BufRead, W: Write> MoodApp<R, W> {
  pub fn new(console: Console<R, W>, dump_path: impl Into<PathBuf>) -> Self {
    Self {
      journal: MoodJournal::new(),
      console,
      dump_path: dump_path.into(),
      clock: local_now,
    }
  }

  /// Replace the wall clock, for deterministic sessions.
  pub fn with_clock(mut self, clock: Clock) -> Self {
    self.clock = clock;
    self
  }

  pub fn console(&self) -> &Console<R, W> { &self.console }

  /// Run until `Exit` or end of input.
  pub fn run(&mut self) -> Result<()> {
    self.console.say("This is the Mood Tracker application.")?;
    loop {
      self.console.say(MENU)?;
      let step = self
        .console
        .ask("")
        .and_then(|command| self.handle_command(&command));
      match step {
        Ok(true) => {}
        Ok(false) => return Ok(()),
        Err(e) if is_input_closed(&e) => return Ok(()),
        Err(e) => return Err(e),
      }
    }
  }

  /// Dispatch one menu command. Returns `false` to quit.
  pub fn handle_command(&mut self, command: &str) -> Result<bool> {
    match command {
      "a" => self.add()?,
      "d" => self.delete()?,
      "e" => self.edit()?,
      "s" => self.search()?,
      "M" => self.list()?,
      "w" => self.write()?,
      "Exit" => {
        self.console.say("Exiting Mood Tracker. Goodbye!")?;
        return Ok(false);
      }
      _ => self.console.say("Invalid option. Please try again.")?,
    }
    Ok(true)
  }

  // ── Input helpers ─────────────────────────────────────────────────────────

  fn ask_date(&mut self) -> Result<Option<NaiveDate>> {
    let answer = self.console.ask("Input the date in MM/dd/yyyy format: ")?;
    Ok(parse_date(&answer))
  }

  fn ask_time(&mut self) -> Result<Option<NaiveTime>> {
    let answer = self.console.ask("Input the time in HH:mm:ss format: ")?;
    Ok(parse_time(&answer))
  }

  /// Read name, date and time. `None` if the date or time is malformed.
  fn ask_key(&mut self) -> Result<Option<MoodKey>> {
    let name = self.console.ask("Enter the mood name: ")?;
    let Some(date) = self.ask_date()? else {
      return Ok(None);
    };
    let Some(time) = self.ask_time()? else {
      return Ok(None);
    };
    Ok(Some(MoodKey::new(name, date, time)))
  }

  fn ask_notes(&mut self, prompt: &str) -> Result<Option<String>> {
    let notes = self.console.ask(prompt)?;
    Ok((!notes.trim().is_empty()).then_some(notes))
  }

  // ── Commands ──────────────────────────────────────────────────────────────

  fn add(&mut self) -> Result<()> {
    let name = self.console.ask("Enter the mood name: ")?;
    let today = self
      .console
      .ask("Are you tracking the mood for a current day? y/n ")?;

    let mood = if today.trim().eq_ignore_ascii_case("n") {
      let Some(date) = self.ask_date()? else {
        return self.console.say("Incorrect format of date. Cannot create mood.");
      };
      let Some(time) = self.ask_time()? else {
        return self.console.say("Incorrect format of time. Cannot create mood.");
      };
      let notes = self.ask_notes("Add notes about this mood: ")?;
      Mood::new(name, date, time, notes)
    } else {
      let notes = self.ask_notes("Add notes about this mood: ")?;
      Mood::at(name, (self.clock)(), notes)
    };

    let mood = match mood {
      Ok(mood) => mood,
      Err(e) => return self.console.say(format!("Unable to create the mood entry: {e}")),
    };

    match self.journal.add(mood) {
      AddOutcome::Added => self.console.say("The mood has been added to the tracker"),
      AddOutcome::Rejected(_) => self
        .console
        .say("The mood is not valid: the same mood is already tracked at that date and time"),
    }
  }

  fn delete(&mut self) -> Result<()> {
    let variant = self.console.ask(
      "Enter '1' to delete all moods by date\nEnter '2' to delete a specific mood\n",
    )?;
    match variant.trim() {
      "1" => {
        let Some(date) = self.ask_date()? else {
          return self.console.say("Incorrect format of date. Cannot delete mood.");
        };
        if self.journal.delete_on(date) > 0 {
          self.console.say("The moods have been deleted")
        } else {
          self.console.say("No matching moods found")
        }
      }
      "2" => {
        let Some(key) = self.ask_key()? else {
          return self
            .console
            .say("Incorrect format of date or time. Cannot delete mood.");
        };
        if self.journal.delete(&key) {
          self.console.say("The mood has been deleted")
        } else {
          self.console.say("No matching mood found")
        }
      }
      _ => Ok(()),
    }
  }

  fn edit(&mut self) -> Result<()> {
    let Some(key) = self.ask_key()? else {
      return self
        .console
        .say("Incorrect format of date or time. Cannot edit mood.");
    };
    let Some(notes) = self.ask_notes("Add new notes about this mood: ")? else {
      return self.console.say("No notes entered");
    };
    if self.journal.edit_notes(&key, notes) {
      self.console.say("The mood has been successfully edited")
    } else {
      self.console.say("No matching mood could be found")
    }
  }

  fn search(&mut self) -> Result<()> {
    let variant = self.console.ask(
      "Enter '1' to search for all moods by date\nEnter '2' to search for a specific mood\n",
    )?;
    let hits: Vec<String> = match variant.trim() {
      "1" => {
        let Some(date) = self.ask_date()? else {
          return self.console.say("Incorrect format of date. Cannot search mood.");
        };
        self.journal.search_on(date).map(Mood::to_string).collect()
      }
      "2" => {
        let Some(key) = self.ask_key()? else {
          return self
            .console
            .say("Incorrect format of date or time. Cannot search mood.");
        };
        self.journal.search(&key).map(Mood::to_string).collect()
      }
      _ => return Ok(()),
    };

    if hits.is_empty() {
      return self.console.say(NO_MATCHES);
    }
    for hit in hits {
      self.console.say(hit)?;
    }
    Ok(())
  }

  fn list(&mut self) -> Result<()> {
    let moods: Vec<String> = self.journal.iter().map(Mood::to_string).collect();
    for mood in moods {
      self.console.say(mood)?;
    }
    Ok(())
  }

  fn write(&mut self) -> Result<()> {
    match logbook_flatfile::write_mood_dump(self.journal.iter(), &self.dump_path) {
      Ok(_) => self.console.say("The entries are written to a file"),
      Err(e) => {
        tracing::error!(error = %e, "mood dump failed");
        self.console.say(format!("Error writing to file: {e}"))
      }
    }
  }
}
