//! One trigger's worth of tracker work
//!
//! [`Tracker`] pairs the loaded [`TrackerState`] with its [`StateStore`] and
//! saves after every mutation.

use rand::Rng;

use super::state::TrackerState;
use crate::error::Result;
use crate::persistence::StateStore;
use crate::status::Status;

/// Result of a randomized advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The value was appended to the sequence
    Advanced(u128),
    /// The run failed; the value was charged to the penalty instead
    Failed(u128),
}

impl Outcome {
    pub fn value(&self) -> u128 {
        match self {
            Outcome::Advanced(v) | Outcome::Failed(v) => *v,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Stateful Fibonacci counter backed by a state file
#[derive(Debug)]
pub struct Tracker {
    store: StateStore,
    state: TrackerState,
}

impl Tracker {
    /// Load state from `store` (defaults if missing or unreadable)
    pub fn open(store: StateStore) -> Self {
        let state = store.load();
        Self { store, state }
    }

    pub fn with_state(store: StateStore, state: TrackerState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Append the next Fibonacci value unconditionally and save
    pub fn advance(&mut self) -> Result<u128> {
        let next = self.state.advance()?;
        self.store.save(&self.state)?;
        Ok(next)
    }

    /// Advance, unless a uniform draw lands below `failure_rate`
    ///
    /// Both branches count the run. A failed run leaves the sequence frozen and
    /// charges the would-have-been value to the penalty.
    pub fn generate_next<R: Rng + ?Sized>(&mut self, failure_rate: f64, rng: &mut R) -> Result<Outcome> {
        // Surface overflow before drawing
        self.state.candidate()?;

        let draw: f64 = rng.random();
        let outcome = if draw >= failure_rate {
            let next = self.state.advance()?;
            self.state.record_run(false);
            Outcome::Advanced(next)
        } else {
            log::info!("Simulated failure (draw {:.3} < rate {:.3})", draw, failure_rate);
            let charged = self.state.penalize()?;
            self.state.record_run(true);
            Outcome::Failed(charged)
        };
        self.store.save(&self.state)?;
        Ok(outcome)
    }

    /// Charge the next value against the penalty without advancing, then save
    pub fn add_penalty(&mut self) -> Result<u128> {
        let charged = self.state.penalize()?;
        self.store.save(&self.state)?;
        Ok(charged)
    }

    pub fn status(&self) -> Status {
        Status::from_state(&self.state)
    }
}
