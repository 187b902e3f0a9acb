//! Save/load persistence for tracker files
//!
//! Features:
//! - Pretty-printed JSON records
//! - Atomic replace (tmp → target rename)
//! - Malformed files fall back to defaults, the bad copy kept as `.corrupt`

pub mod store;

pub use store::StateStore;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, TrackerError};

/// Read a JSON record; `Ok(None)` when the file does not exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(TrackerError::io(path, e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| TrackerError::json(path, e))
}

/// Serialize `value` and atomically replace `path` with it
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| TrackerError::json(path, e))?;
    json.push('\n');

    let tmp = sibling(path, "tmp");
    fs::write(&tmp, json).map_err(|e| TrackerError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| TrackerError::io(path, e))
}

/// Copy a file that failed to parse next to itself so the next save can't lose it
pub fn preserve_corrupt(path: &Path) -> Option<PathBuf> {
    let backup = sibling(path, "corrupt");
    match fs::copy(path, &backup) {
        Ok(_) => Some(backup),
        Err(e) => {
            log::warn!("Could not preserve {}: {}", path.display(), e);
            None
        }
    }
}

/// `state.json` -> `state.json.<ext>`
fn sibling(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_sibling_name() {
        assert_eq!(
            sibling(Path::new("/tmp/fib/log.json"), "tmp"),
            PathBuf::from("/tmp/fib/log.json.tmp")
        );
    }

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let got: Option<BTreeMap<String, u32>> = read_json(&dir.path().join("nope.json")).unwrap();
        assert!(got.is_none());
    }

    #[test]
    fn test_write_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.json");
        let mut rec = BTreeMap::new();
        rec.insert("a".to_string(), 1u32);

        write_json_atomic(&path, &rec).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("rec.json.tmp").exists());

        let back: BTreeMap<String, u32> = read_json(&path).unwrap().unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_read_garbage_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let got: Result<Option<BTreeMap<String, u32>>> = read_json(&path);
        assert!(matches!(got, Err(TrackerError::Json { .. })));
    }

    #[test]
    fn test_preserve_corrupt_copies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "garbage").unwrap();

        let backup = preserve_corrupt(&path).unwrap();
        assert_eq!(fs::read_to_string(backup).unwrap(), "garbage");
        assert!(path.exists());
    }
}
