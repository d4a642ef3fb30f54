//! File-backed preference store — the terminal's stand-in for
//! `localStorage`.
//!
//! One `key=value` pair per line.  Only the theme is ever written, but the
//! file is parsed generically so unknown keys survive a rewrite.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::store::{PreferenceStore, StoreError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.  A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => parse(&contents),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), %err, "preferences unreadable");
                }
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn flush(&self, key: &str) -> Result<(), StoreError> {
        let io = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        let body: String = self
            .values
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        std::fs::write(&self.path, body).map_err(io)
    }
}

fn parse(contents: &str) -> BTreeMap<String, String> {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.values.get(key).map(String::as_str) == Some(value) && self.path.exists() {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state").join("prefs");

        let mut store = FileStore::open(&path);
        assert_eq!(store.get("hadi-theme"), None);
        store.set("hadi-theme", "light").expect("write");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("hadi-theme").as_deref(), Some("light"));
    }

    #[test]
    fn unknown_keys_are_preserved() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs");
        std::fs::write(&path, "other=1\nhadi-theme=dark\n").expect("seed");

        let mut store = FileStore::open(&path);
        store.set("hadi-theme", "light").expect("write");

        let body = std::fs::read_to_string(&path).expect("read");
        assert!(body.contains("other=1"));
        assert!(body.contains("hadi-theme=light"));
    }

    #[test]
    fn empty_value_reads_as_unset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs");
        std::fs::write(&path, "hadi-theme=\n").expect("seed");
        assert_eq!(FileStore::open(&path).get("hadi-theme"), None);
    }

    #[test]
    fn unwritable_location_reports_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").expect("seed");

        // A regular file where the parent directory should be.
        let mut store = FileStore::open(blocker.join("prefs"));
        let err = store.set("hadi-theme", "dark").expect_err("must fail");
        assert!(matches!(err, StoreError::Io { ref key, .. } if key == "hadi-theme"));
    }
}
