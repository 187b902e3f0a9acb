//! Per-trigger configuration read from the environment

use std::path::PathBuf;

use crate::logbook::DEFAULT_RUN_LOG;
use crate::persistence::store::DEFAULT_STATE_FILE;
use crate::settings::DEFAULT_SETTINGS_FILE;

/// Environment variable names
pub mod vars {
    pub const ADD_PENALTY: &str = "ADD_PENALTY";
    pub const UPDATE_RATE: &str = "UPDATE_RATE";
    pub const STATE_FILE: &str = "FIB_STATE_FILE";
    pub const SETTINGS_FILE: &str = "FIB_SETTINGS_FILE";
    pub const RUN_LOG: &str = "FIB_RUN_LOG";
}

/// What this trigger should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Generate the next value (may fail at the configured rate)
    #[default]
    Advance,
    /// Record a failed run without advancing
    Penalty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Raw `UPDATE_RATE`; validated later by `Settings::update_default_rate`
    pub rate_update: Option<String>,
    pub state_file: PathBuf,
    pub settings_file: PathBuf,
    pub run_log: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Advance,
            rate_update: None,
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            settings_file: PathBuf::from(DEFAULT_SETTINGS_FILE),
            run_log: PathBuf::from(DEFAULT_RUN_LOG),
        }
    }
}

impl RunConfig {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path_or = |key: &str, default: PathBuf| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        let mode = match lookup(vars::ADD_PENALTY) {
            Some(v) if v.trim().eq_ignore_ascii_case("true") => Mode::Penalty,
            _ => Mode::Advance,
        };

        Self {
            mode,
            rate_update: lookup(vars::UPDATE_RATE).filter(|v| !v.trim().is_empty()),
            state_file: path_or(vars::STATE_FILE, defaults.state_file),
            settings_file: path_or(vars::SETTINGS_FILE, defaults.settings_file),
            run_log: path_or(vars::RUN_LOG, defaults.run_log),
        }
    }
}
