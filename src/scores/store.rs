//! Flat JSON score file
//!
//! Saving is a read-modify-write of the whole file. There is no file lock:
//! two processes saving at once can lose a record.

use super::ScoreRecord;
use crate::error::ScoreError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a JSON score file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records in file order
    ///
    /// A missing or blank file yields an empty list.
    ///
    /// # Errors
    /// - `ScoreError::Read` if the file exists but cannot be read
    /// - `ScoreError::Parse` if it is not valid JSON or a record is malformed
    /// - `ScoreError::NotAList` if the top-level JSON value is not an array
    pub fn load(&self) -> Result<Vec<ScoreRecord>, ScoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ScoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| self.parse_error(source))?;
        if !value.is_array() {
            return Err(ScoreError::NotAList(self.path.clone()));
        }

        let records: Vec<ScoreRecord> =
            serde_json::from_value(value).map_err(|source| self.parse_error(source))?;
        debug!("loaded {} scores from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Append one record, rewriting the whole file
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    /// - `ScoreError::InvalidRecord` if the record fails validation
    /// - any error from [`ScoreStore::load`]
    /// - `ScoreError::Write` if the directory or file cannot be written
    pub fn save(&self, record: &ScoreRecord) -> Result<(), ScoreError> {
        record.validate()?;

        let mut records = self.load()?;
        records.push(record.clone());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json).map_err(|source| self.write_error(source))?;
        debug!("saved score for '{}' to {}", record.player, self.path.display());
        Ok(())
    }

    fn parse_error(&self, source: serde_json::Error) -> ScoreError {
        ScoreError::Parse {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> ScoreError {
        ScoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(player: &str) -> ScoreRecord {
        ScoreRecord {
            player: player.to_string(),
            word: "APPLE".to_string(),
            attempts: 4,
            won: true,
            date: "2024-06-15T12:00:00.000000Z".to_string(),
        }
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_blank_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "  \n").unwrap();
        assert!(ScoreStore::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn load_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ScoreStore::new(path).load().unwrap_err();
        assert!(matches!(err, ScoreError::Parse { .. }));
        assert!(err.to_string().contains("error loading scores"));
    }

    #[test]
    fn load_object_is_not_a_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"player": "x"}"#).unwrap();
        assert!(matches!(
            ScoreStore::new(path).load(),
            Err(ScoreError::NotAList(_))
        ));
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        let record = sample("alice");

        store.save(&record).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.last(), Some(&record));
    }

    #[test]
    fn save_appends_to_existing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));

        store.save(&sample("first")).unwrap();
        store.save(&sample("second")).unwrap();

        let players: Vec<String> = store.load().unwrap().into_iter().map(|r| r.player).collect();
        assert_eq!(players, vec!["first", "second"]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("nested/deeper/scores.json"));
        store.save(&sample("alice")).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn save_writes_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        store.save(&sample("alice")).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"player\": \"alice\""));
    }

    #[test]
    fn save_rejects_invalid_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        let mut record = sample("alice");
        record.date = "soon".to_string();

        assert!(matches!(
            store.save(&record),
            Err(ScoreError::InvalidRecord(_))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn save_does_not_clobber_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "[oops").unwrap();

        let store = ScoreStore::new(&path);
        assert!(store.save(&sample("alice")).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[oops");
    }
}
