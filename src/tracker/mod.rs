//! Fibonacci tracker core
//!
//! State mutation is pure and deterministic given the RNG:
//! - Seeded RNG only (callers pick the seed)
//! - No filesystem access outside [`Tracker`]'s save after each mutation

pub mod advance;
pub mod state;

pub use advance::{Outcome, Tracker};
pub use state::{SEED_PAIR, TrackerState};

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Reproducible generator for a given seed
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Generator seeded from OS entropy, one per trigger
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_os_rng()
}
