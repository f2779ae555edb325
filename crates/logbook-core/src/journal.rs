//! The record store instantiated for moods.

use chrono::NaiveDate;

use crate::{
  mood::{Mood, MoodKey},
  store::{AddOutcome, RecordStore},
};

/// An in-memory mood journal.
#[derive(Debug, Clone, Default)]
pub struct MoodJournal {
  moods: RecordStore<Mood>,
}

impl MoodJournal {
  pub fn new() -> Self { Self::default() }

  /// Add `mood`; a mood with the same name, date and time is rejected.
  pub fn add(&mut self, mood: Mood) -> AddOutcome {
    let outcome = self.moods.add(mood);
    tracing::debug!(?outcome, "mood add");
    outcome
  }

  /// Remove the first mood with `key`. Returns whether one was removed.
  pub fn delete(&mut self, key: &MoodKey) -> bool {
    self.moods.remove(key).is_some()
  }

  /// Remove every mood recorded on `date`. Returns how many were removed.
  pub fn delete_on(&mut self, date: NaiveDate) -> usize {
    let removed = self.moods.remove_where(|m| m.date() == date);
    tracing::debug!(%date, removed, "moods deleted by date");
    removed
  }

  /// Replace the notes of the first mood with `key`; nothing else changes.
  pub fn edit_notes(&mut self, key: &MoodKey, notes: impl Into<String>) -> bool {
    match self.moods.find_mut(key) {
      Some(mood) => {
        mood.set_notes(Some(notes.into()));
        true
      }
      None => false,
    }
  }

  /// Moods matching `key` exactly.
  pub fn search<'a>(
    &'a self,
    key: &'a MoodKey,
  ) -> impl Iterator<Item = &'a Mood> + 'a {
    self.moods.matching(key)
  }

  /// Moods recorded on `date`.
  pub fn search_on(&self, date: NaiveDate) -> impl Iterator<Item = &Mood> + '_ {
    self.moods.filter(move |m| m.date() == date)
  }

  /// All moods in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = &Mood> + '_ { self.moods.iter() }

  pub fn len(&self) -> usize { self.moods.len() }

  pub fn is_empty(&self) -> bool { self.moods.is_empty() }
}
