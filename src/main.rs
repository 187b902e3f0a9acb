//! Fibonacci Tracker entry point
//!
//! Runs one trigger and always exits 0.

use fib_tracker::RunConfig;
use fib_tracker::tracker::entropy_rng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::from_env();
    log::info!(
        "Fibonacci tracker starting ({:?}, state {})",
        config.mode,
        config.state_file.display()
    );

    let mut rng = entropy_rng();
    for line in fib_tracker::trigger::run(&config, &mut rng) {
        println!("{}", line);
    }
}
