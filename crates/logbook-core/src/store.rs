//! The generic in-memory [`RecordStore`] and the [`Record`] trait it is built
//! on.
//!
//! Both record managers are instantiations of the same pattern: an ordered,
//! mutable list scanned linearly for every lookup. Insertion order is stable,
//! so "first match" always means the earliest-inserted record.

// ─── Trait ───────────────────────────────────────────────────────────────────

/// A record with an identity key.
///
/// The key is the subset of fields used for equality and duplicate detection.
/// How a key matches is up to the record type: moods compare exactly, pets
/// compare their ID case-insensitively.
pub trait Record {
  type Key;

  /// Build the key of this record.
  fn key(&self) -> Self::Key;

  /// Whether this record is identified by `key`.
  fn matches_key(&self, key: &Self::Key) -> bool;
}

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// Why an add was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
  /// A record with the same key is already in the store.
  Duplicate,
}

/// Result of [`RecordStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
  Added,
  Rejected(Rejection),
}

impl AddOutcome {
  pub fn is_added(&self) -> bool { matches!(self, Self::Added) }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An ordered collection of records held in memory for the process lifetime.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
  records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
  fn default() -> Self { Self { records: Vec::new() } }
}

impl<R: Record> RecordStore<R> {
  pub fn new() -> Self { Self::default() }

  /// Build a store from already-validated records, keeping their order.
  ///
  /// No duplicate check is done; this is the path for loaded data.
  pub fn from_records(records: Vec<R>) -> Self { Self { records } }

  /// Append `record` unless a record with the same key exists.
  pub fn add(&mut self, record: R) -> AddOutcome {
    let key = record.key();
    if self.records.iter().any(|r| r.matches_key(&key)) {
      tracing::debug!("add rejected: duplicate key");
      return AddOutcome::Rejected(Rejection::Duplicate);
    }
    self.records.push(record);
    tracing::debug!(len = self.records.len(), "record added");
    AddOutcome::Added
  }

  /// Remove and return the first record matching `key`.
  pub fn remove(&mut self, key: &R::Key) -> Option<R> {
    let pos = self.records.iter().position(|r| r.matches_key(key))?;
    Some(self.records.remove(pos))
  }

  /// Remove every record for which `pred` holds. Returns how many went.
  pub fn remove_where<F>(&mut self, mut pred: F) -> usize
  where
    F: FnMut(&R) -> bool,
  {
    let before = self.records.len();
    self.records.retain(|r| !pred(r));
    before - self.records.len()
  }

  pub fn find(&self, key: &R::Key) -> Option<&R> {
    self.records.iter().find(|r| r.matches_key(key))
  }

  pub fn find_mut(&mut self, key: &R::Key) -> Option<&mut R> {
    self.records.iter_mut().find(|r| r.matches_key(key))
  }

  /// Lazily yield every record matching `key`, in insertion order.
  pub fn matching<'a>(
    &'a self,
    key: &'a R::Key,
  ) -> impl Iterator<Item = &'a R> + 'a {
    self.records.iter().filter(move |r| r.matches_key(key))
  }

  /// Lazily yield every record for which `pred` holds.
  pub fn filter<'a, F>(&'a self, pred: F) -> impl Iterator<Item = &'a R> + 'a
  where
    F: Fn(&R) -> bool + 'a,
  {
    self.records.iter().filter(move |r| pred(r))
  }

  /// All records in insertion order.
  pub fn iter(&self) -> std::slice::Iter<'_, R> { self.records.iter() }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
  type IntoIter = std::slice::Iter<'a, R>;
  type Item = &'a R;

  fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
