//! Tracker settings
//!
//! Persisted separately from the tracker state so a rate change survives
//! across triggers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::persistence::{read_json, write_json_atomic};

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "fibonacci_settings.json";

/// A probability: finite and within [0, 1]
fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && (0.0..=1.0).contains(&rate)
}

/// Tracker settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Probability (0.0 - 1.0) that a randomized run is treated as failed
    #[serde(default)]
    pub failure_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { failure_rate: 0.0 }
    }
}

impl Settings {
    /// Parse and validate a rate from its raw string form
    pub fn parse_rate(raw: &str) -> Result<f64> {
        let rate: f64 = raw
            .trim()
            .parse()
            .map_err(|_| TrackerError::InvalidRate(raw.to_string()))?;
        if !is_valid_rate(rate) {
            return Err(TrackerError::InvalidRate(raw.to_string()));
        }
        Ok(rate)
    }

    /// Typed setter; out-of-range values leave the rate untouched
    pub fn set_failure_rate(&mut self, rate: f64) -> Result<()> {
        if !is_valid_rate(rate) {
            return Err(TrackerError::InvalidRate(rate.to_string()));
        }
        self.failure_rate = rate;
        Ok(())
    }

    /// Apply a raw rate update, logging and ignoring invalid input
    ///
    /// Returns whether the rate changed.
    pub fn update_default_rate(&mut self, raw: &str) -> bool {
        match Self::parse_rate(raw).and_then(|rate| self.set_failure_rate(rate)) {
            Ok(()) => {
                log::info!("Failure rate set to {}", self.failure_rate);
                true
            }
            Err(e) => {
                log::warn!("Ignoring rate update: {} (keeping {})", e, self.failure_rate);
                false
            }
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match read_json::<Settings>(path) {
            Ok(Some(settings)) if is_valid_rate(settings.failure_rate) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(Some(settings)) => {
                log::warn!(
                    "Stored failure rate {} out of range, using default settings",
                    settings.failure_rate
                );
                Self::default()
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not load settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_atomic(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}
