//! Interactive front ends for the mood journal and the pet-care scheduler.

pub mod config;
pub mod console;
pub mod moods;
pub mod petcare;

use chrono::NaiveDateTime;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Source of "now" for date defaults and past-appointment checks.
pub type Clock = fn() -> NaiveDateTime;

/// The local wall clock.
pub fn local_now() -> NaiveDateTime { chrono::Local::now().naive_local() }

/// Install the global subscriber. Diagnostics go to stderr so they never
/// interleave with menu output; `RUST_LOG` overrides the WARN default.
pub fn init_tracing() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();
}

#[cfg(test)]
mod tests;
