//! Tracker state record
//!
//! Everything that is persisted between triggers lives here. Mutation is pure:
//! saving is the caller's job (see [`super::advance::Tracker`]).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// f(0) and f(1), the seed pair of every fresh sequence
pub const SEED_PAIR: [u128; 2] = [0, 1];

/// Persisted tracker record
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Every value generated so far, f(0) first
    pub sequence: Vec<u128>,
    /// Accumulated penalty (zero or negative)
    pub penalty: i128,
    /// The two most recent values, oldest first
    pub last_two: [u128; 2],
    /// Position of the next value to generate
    pub index: u64,
    /// Randomized runs attempted (older files lack this key)
    #[serde(default)]
    pub count_total: u64,
    /// Randomized runs that failed
    #[serde(default)]
    pub count_failed: u64,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            sequence: SEED_PAIR.to_vec(),
            penalty: 0,
            last_two: SEED_PAIR,
            index: 2,
            count_total: 0,
            count_failed: 0,
        }
    }
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next Fibonacci value, computed from `last_two` without consuming it
    pub fn candidate(&self) -> Result<u128> {
        self.last_two[0]
            .checked_add(self.last_two[1])
            .ok_or(TrackerError::SequenceExhausted { index: self.index })
    }

    /// Append the next value and roll `last_two` forward
    pub fn advance(&mut self) -> Result<u128> {
        let next = self.candidate()?;
        self.sequence.push(next);
        self.last_two = [self.last_two[1], next];
        self.index += 1;
        Ok(next)
    }

    /// Charge the next value against the penalty; the sequence stays put
    ///
    /// The charge is exact: if the penalty can't absorb it, nothing changes.
    pub fn penalize(&mut self) -> Result<u128> {
        let next = self.candidate()?;
        self.penalty = i128::try_from(next)
            .ok()
            .and_then(|charge| self.penalty.checked_sub(charge))
            .ok_or(TrackerError::PenaltyExhausted {
                penalty: self.penalty,
                charge: next,
            })?;
        Ok(next)
    }

    /// Count one randomized run
    pub fn record_run(&mut self, failed: bool) {
        self.count_total += 1;
        if failed {
            self.count_failed += 1;
        }
    }

    /// Most recently generated value
    pub fn last_number(&self) -> Option<u128> {
        self.sequence.last().copied()
    }

    /// Check the recurrence and bookkeeping invariants
    pub fn verify(&self) -> Result<()> {
        let seq = &self.sequence;
        if seq.len() < 2 {
            return Err(TrackerError::Inconsistent(format!(
                "sequence has {} entries, need at least 2",
                seq.len()
            )));
        }

        if let Some(i) = (2..seq.len()).find(|&i| seq[i - 1].checked_add(seq[i - 2]) != Some(seq[i])) {
            return Err(TrackerError::Inconsistent(format!(
                "sequence[{i}] = {} is not {} + {}",
                seq[i],
                seq[i - 1],
                seq[i - 2]
            )));
        }

        let tail = [seq[seq.len() - 2], seq[seq.len() - 1]];
        if self.last_two != tail {
            return Err(TrackerError::Inconsistent(format!(
                "last_two {:?} does not match sequence tail {:?}",
                self.last_two, tail
            )));
        }

        if self.index != seq.len() as u64 {
            return Err(TrackerError::Inconsistent(format!(
                "index {} does not match sequence length {}",
                self.index,
                seq.len()
            )));
        }

        if self.count_failed > self.count_total {
            return Err(TrackerError::Inconsistent(format!(
                "count_failed {} exceeds count_total {}",
                self.count_failed, self.count_total
            )));
        }

        Ok(())
    }
}
