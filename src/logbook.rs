//! Append-only run log
//!
//! One timestamped line per message. The file is created on first use and
//! never truncated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use crate::error::{Result, TrackerError};

/// Default run log, relative to the working directory
pub const DEFAULT_RUN_LOG: &str = "fibonacci_runs.log";

#[derive(Debug, Clone)]
pub struct Logbook {
    path: PathBuf,
}

impl Logbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `lines`, all stamped with the current local time
    pub fn append(&self, lines: &[String]) -> Result<()> {
        self.append_at(&Local::now(), lines)
    }

    /// Append `lines` stamped with `at`
    pub fn append_at<Tz: TimeZone>(&self, at: &DateTime<Tz>, lines: &[String]) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        let stamp = at.to_rfc3339_opts(SecondsFormat::Secs, false);
        let mut buf = String::new();
        for line in lines {
            buf.push_str(&stamp);
            buf.push(' ');
            buf.push_str(line);
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TrackerError::io(&self.path, e))?;
        file.write_all(buf.as_bytes())
            .map_err(|e| TrackerError::io(&self.path, e))
    }

    /// Append, logging instead of failing
    pub fn record(&self, lines: &[String]) {
        if let Err(e) = self.append(lines) {
            log::warn!("Run log not written: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_lines_are_stamped() {
        let dir = tempfile::tempdir().unwrap();
        let book = Logbook::new(dir.path().join(DEFAULT_RUN_LOG));
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();

        book.append_at(&at, &["first".to_string(), "second".to_string()])
            .unwrap();

        let text = std::fs::read_to_string(book.path()).unwrap();
        assert_eq!(
            text,
            "2026-10-18T09:30:00+00:00 first\n2026-10-18T09:30:00+00:00 second\n"
        );
    }

    #[test]
    fn test_append_never_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let book = Logbook::new(dir.path().join(DEFAULT_RUN_LOG));

        book.append(&["one".to_string()]).unwrap();
        book.append(&["two".to_string()]).unwrap();

        let text = std::fs::read_to_string(book.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" one"));
        assert!(lines[1].ends_with(" two"));
    }

    #[test]
    fn test_record_swallows_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be opened for appending
        let book = Logbook::new(dir.path());
        book.record(&["lost".to_string()]);
        assert!(book.append(&["lost".to_string()]).is_err());
    }
}
