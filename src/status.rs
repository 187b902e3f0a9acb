//! Human-readable tracker status

use serde::Serialize;

use crate::tracker::TrackerState;

/// Point-in-time view of the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub sequence: Vec<u128>,
    pub penalty: i128,
    pub next_index: u64,
    /// `None` only for a hand-edited empty sequence
    pub last_number: Option<u128>,
    pub count_total: u64,
    pub count_failed: u64,
}

impl Status {
    pub fn from_state(state: &TrackerState) -> Self {
        Self {
            sequence: state.sequence.clone(),
            penalty: state.penalty,
            next_index: state.index,
            last_number: state.last_number(),
            count_total: state.count_total,
            count_failed: state.count_failed,
        }
    }

    /// Report lines, one fact each
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Current sequence: {:?}", self.sequence),
            format!("Total penalty: {}", self.penalty),
            format!("Next index: f({})", self.next_index),
            format!("Runs: {} total, {} failed", self.count_total, self.count_failed),
        ]
    }

    /// Share of counted runs that failed (0.0 before any run)
    pub fn failure_ratio(&self) -> f64 {
        if self.count_total == 0 {
            0.0
        } else {
            self.count_failed as f64 / self.count_total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_for_fresh_state() {
        let mut state = TrackerState::default();
        state.advance().unwrap();
        state.record_run(false);

        let lines = Status::from_state(&state).lines();
        assert_eq!(
            lines,
            vec![
                "Current sequence: [0, 1, 1]",
                "Total penalty: 0",
                "Next index: f(3)",
                "Runs: 1 total, 0 failed",
            ]
        );
    }

    #[test]
    fn test_empty_sequence_has_no_last_number() {
        let mut state = TrackerState::default();
        state.sequence.clear();
        assert_eq!(Status::from_state(&state).last_number, None);
    }

    #[test]
    fn test_failure_ratio() {
        let mut state = TrackerState::default();
        assert_eq!(Status::from_state(&state).failure_ratio(), 0.0);
        state.record_run(true);
        state.record_run(false);
        assert!((Status::from_state(&state).failure_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
