//! State file store
//!
//! Loading never fails: a missing file starts a fresh sequence and a malformed
//! one is logged and replaced by defaults.

use std::path::{Path, PathBuf};

use super::{preserve_corrupt, read_json, write_json_atomic};
use crate::error::Result;
use crate::tracker::TrackerState;

/// Default state file, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = "fibonacci_log.json";

/// Owns the location of the persisted [`TrackerState`]
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw load: `Ok(None)` for a missing file, errors for unreadable or malformed ones
    pub fn try_load(&self) -> Result<Option<TrackerState>> {
        read_json(&self.path)
    }

    /// Load the persisted state, or the default state if there is none usable
    pub fn load(&self) -> TrackerState {
        match self.try_load() {
            Ok(Some(state)) => {
                if let Err(e) = state.verify() {
                    log::warn!("{} loaded with {}", self.path.display(), e);
                }
                log::info!(
                    "Loaded state from {} (next index f({}))",
                    self.path.display(),
                    state.index
                );
                state
            }
            Ok(None) => {
                log::info!("No state at {}, starting fresh", self.path.display());
                TrackerState::default()
            }
            Err(e) => {
                log::warn!("Could not load state: {}", e);
                if let Some(backup) = preserve_corrupt(&self.path) {
                    log::warn!("Kept unreadable state as {}", backup.display());
                }
                log::warn!("Initializing with default state");
                TrackerState::default()
            }
        }
    }

    /// Overwrite the state file with `state`
    pub fn save(&self, state: &TrackerState) -> Result<()> {
        write_json_atomic(&self.path, state)?;
        log::debug!("State saved to {}", self.path.display());
        Ok(())
    }
}
