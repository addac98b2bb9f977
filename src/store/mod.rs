//! Flat-file persistence for instinct records.
//!
//! The store is a single JSON array rewritten wholesale on every save. There
//! is no locking; concurrent invocations race and the last writer wins. That
//! is accepted for this tool's single-operator, low-frequency usage.

use crate::models::Instinct;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load/save access to the instinct store file.
#[derive(Debug, Clone)]
pub struct InstinctStore {
    /// Path of the backing JSON file.
    path: PathBuf,
}

impl InstinctStore {
    /// Creates a store handle for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records from the store.
    ///
    /// A missing backing file is an empty store, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<Instinct>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file absent, treating as empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| Error::OperationFailed {
            operation: "read_store".to_string(),
            cause: e.to_string(),
        })?;

        let records: Vec<Instinct> =
            serde_json::from_str(&contents).map_err(|e| Error::InvalidInput(format!(
                "store file {} is not a JSON array of instincts: {e}",
                self.path.display()
            )))?;

        debug!(path = %self.path.display(), count = records.len(), "loaded store");
        Ok(records)
    }

    /// Saves all records to the store, replacing prior contents.
    ///
    /// Creates the parent directory if it does not exist. Output is
    /// pretty-printed; serde_json emits UTF-8 without escaping non-ASCII.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, records: &[Instinct]) -> Result<()> {
        write_records(&self.path, records)?;
        debug!(path = %self.path.display(), count = records.len(), "saved store");
        Ok(())
    }
}

/// Writes records as a pretty-printed JSON array to an arbitrary path.
///
/// Shared by [`InstinctStore::save`] and the export command, which writes the
/// same format to a caller-chosen location.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_records(path: &Path, records: &[Instinct]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
                operation: "create_data_dir".to_string(),
                cause: e.to_string(),
            })?;
        }
    }

    let json = serde_json::to_string_pretty(records).map_err(|e| Error::OperationFailed {
        operation: "serialize_store".to_string(),
        cause: e.to_string(),
    })?;

    std::fs::write(path, json).map_err(|e| Error::OperationFailed {
        operation: "write_store".to_string(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use crate::models::Instinct;

    fn temp_store() -> (tempfile::TempDir, InstinctStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = InstinctStore::new(dir.path().join("instincts.json"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        let records = store.load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        let records = vec![
            Instinct::new("a", "prefer rebase over merge")
                .with_confidence(0.9)
                .with_category("git"),
            Instinct::new("b", "run clippy before commit").with_confidence(0.4),
        ];

        store.save(&records).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id.as_str(), "a");
        assert_eq!(loaded[0].confidence, 0.9);
        assert_eq!(loaded[0].category(), "git");
        assert_eq!(loaded[1].category(), "general");
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let (_dir, store) = temp_store();
        store
            .save(&[Instinct::new("a", "x").with_confidence(0.5)])
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.starts_with('['));
    }

    #[test]
    fn test_save_preserves_non_ascii() {
        let (_dir, store) = temp_store();
        store.save(&[Instinct::new("a", "日本語のパターン")]).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("日本語のパターン"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = InstinctStore::new(dir.path().join("nested").join("instincts.json"));
        store.save(&[]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "{not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_load_rejects_non_array() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), r#"{"id": "a", "pattern": "x"}"#).unwrap();

        assert!(store.load().is_err());
    }
}
