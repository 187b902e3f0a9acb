//! Error types for the tracker
//!
//! Nothing here is fatal to a trigger: the binary logs these and still exits 0.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `Result<T, TrackerError>`.
pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Reading or writing a tracker file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tracker file is not valid JSON for its record type
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failure rate input is unparsable or outside [0, 1]
    #[error("invalid failure rate {0:?}: expected a number between 0 and 1")]
    InvalidRate(String),

    /// The next Fibonacci value does not fit in a u128
    #[error("sequence exhausted at f({index}): next value overflows u128")]
    SequenceExhausted { index: u64 },

    /// Charging the next value would push the penalty past i128::MIN
    #[error("penalty {penalty} cannot absorb a charge of {charge}")]
    PenaltyExhausted { penalty: i128, charge: u128 },

    /// A loaded record violates the sequence invariants
    #[error("inconsistent state: {0}")]
    Inconsistent(String),
}

impl TrackerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TrackerError::InvalidRate("abc".into());
        assert_eq!(
            err.to_string(),
            "invalid failure rate \"abc\": expected a number between 0 and 1"
        );

        let err = TrackerError::SequenceExhausted { index: 187 };
        assert!(err.to_string().contains("f(187)"));

        let err = TrackerError::PenaltyExhausted { penalty: -3, charge: 5 };
        assert_eq!(err.to_string(), "penalty -3 cannot absorb a charge of 5");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = TrackerError::io("state.json", source);
        assert!(err.to_string().starts_with("I/O error on state.json"));
    }
}
