//! Fibonacci Tracker - one sequence step per trigger
//!
//! Core modules:
//! - `tracker`: Sequence state and the advance / penalty operations
//! - `persistence`: JSON state file with atomic saves
//! - `settings`: Persisted failure rate
//! - `config`: Environment-driven per-trigger configuration
//! - `status`: Human-readable status report
//! - `logbook`: Append-only timestamped run log
//! - `trigger`: Glue for a single invocation

pub mod config;
pub mod error;
pub mod logbook;
pub mod persistence;
pub mod settings;
pub mod status;
pub mod tracker;
pub mod trigger;

#[cfg(test)]
mod test_log;

pub use config::{Mode, RunConfig};
pub use error::{Result, TrackerError};
pub use persistence::StateStore;
pub use settings::Settings;
pub use status::Status;
pub use tracker::{Outcome, Tracker, TrackerState};
