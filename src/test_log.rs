//! Log capture for unit tests
//!
//! Installs one process-wide `log` backend that records into a per-thread
//! buffer, so parallel tests only see their own records.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Records emitted on this thread while running `f`
pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let records = RECORDS.with(|r| r.borrow_mut().drain(..).collect());
    (out, records)
}

/// Whether any warning contains `needle`
pub(crate) fn warned(records: &[(Level, String)], needle: &str) -> bool {
    records
        .iter()
        .any(|(level, msg)| *level == Level::Warn && msg.contains(needle))
}
