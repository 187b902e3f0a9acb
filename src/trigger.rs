//! One trigger: load, act, save, report
//!
//! Every path ends with report lines; errors are logged, never returned.

use std::path::Path;

use rand::Rng;

use crate::config::{Mode, RunConfig};
use crate::logbook::Logbook;
use crate::persistence::StateStore;
use crate::settings::Settings;
use crate::tracker::{Outcome, Tracker};

/// Run a single trigger and return the report printed to stdout
///
/// The same lines (minus blanks) are appended to the run log.
pub fn run<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Vec<String> {
    let mut settings = Settings::load(&config.settings_file);
    if let Some(raw) = &config.rate_update {
        if settings.update_default_rate(raw) {
            if let Err(e) = settings.save(&config.settings_file) {
                log::error!("Rate update not persisted: {}", e);
            }
        }
    }

    let mut tracker = Tracker::open(StateStore::new(&config.state_file));
    let mut lines = Vec::new();

    match config.mode {
        Mode::Penalty => match tracker.add_penalty() {
            Ok(charged) => {
                lines.push(format!("❌ Run failed. Added penalty: -{}", charged));
                lines.push(format!("Total penalty: {}", tracker.state().penalty));
                lines.push(format!("Sequence remains: {:?}", tracker.state().sequence));
            }
            Err(e) => {
                log::error!("Penalty not recorded: {}", e);
                lines.push(format!("⚠️ Penalty not recorded: {}", e));
                lines.extend(resave(&tracker));
            }
        },
        Mode::Advance => match tracker.generate_next(settings.failure_rate, rng) {
            Ok(outcome) => {
                lines.push(headline(outcome));
                lines.push(String::new());
                let status = tracker.status();
                log::info!(
                    "Failure ratio {:.2} over {} runs",
                    status.failure_ratio(),
                    status.count_total
                );
                lines.extend(status.lines());
                lines.push(String::new());
                lines.push(format!(
                    "Full state saved to: {}",
                    absolute(tracker.store().path()).display()
                ));
            }
            Err(e) => {
                log::error!("Sequence not advanced: {}", e);
                lines.push(format!("⚠️ Sequence not advanced: {}", e));
                lines.extend(resave(&tracker));
            }
        },
    }

    let logged: Vec<String> = lines.iter().filter(|l| !l.is_empty()).cloned().collect();
    Logbook::new(&config.run_log).record(&logged);

    lines
}

fn headline(outcome: Outcome) -> String {
    if outcome.is_failure() {
        format!("❌ Run failed. Added penalty: -{}", outcome.value())
    } else {
        format!("✅ Generated next Fibonacci number: {}", outcome.value())
    }
}

/// Persist the unchanged state and report it after a failed operation
fn resave(tracker: &Tracker) -> Vec<String> {
    if let Err(e) = tracker.store().save(tracker.state()) {
        log::error!("State not saved: {}", e);
    }
    let mut lines = vec![String::new()];
    lines.extend(tracker.status().lines());
    lines
}

fn absolute(path: &Path) -> std::path::PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
