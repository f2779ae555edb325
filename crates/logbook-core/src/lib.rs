//! Core types and operations for the logbook record managers.
//!
//! No file or console I/O happens here. The crate holds
//! the record model (moods, pets, appointments), the generic in-memory
//! [`store::RecordStore`], and the two instantiations built on top of it:
//! [`journal::MoodJournal`] and [`scheduler::Scheduler`].

pub mod appointment;
pub mod error;
pub mod journal;
pub mod mood;
pub mod pet;
pub mod report;
pub mod scheduler;
pub mod store;

pub use error::{Error, Result};
pub use store::{AddOutcome, Record, RecordStore, Rejection};
