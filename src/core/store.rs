//! Flat-file persistence for the student record
//!
//! A simple load-then-save round trip over one TOML document. A single
//! active writer is assumed; there is no locking and no transactional
//! guarantee.

use crate::core::models::StudentRecord;
use crate::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Store for a single student record at a fixed file path.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the student record.
    ///
    /// Returns a default-initialized record (empty identity, all standard
    /// level/semester slots empty) when the file does not exist. A file that
    /// exists but fails to read or parse is reported as a warning and also
    /// falls back to the default record rather than failing.
    #[must_use]
    pub fn load(&self) -> StudentRecord {
        if !self.path.exists() {
            return StudentRecord::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(record) => record,
                Err(e) => {
                    warn!(
                        "Ignoring unreadable student record {}: {e}",
                        self.path.display()
                    );
                    StudentRecord::default()
                }
            },
            Err(e) => {
                warn!(
                    "Failed to read student record {}: {e}",
                    self.path.display()
                );
                StudentRecord::default()
            }
        }
    }

    /// Save the student record, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save(&self, record: &StudentRecord) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(record)?;
        fs::write(&self.path, toml_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = RecordStore::new(dir.path().join("student_record.toml"));
        (dir, store)
    }

    #[test]
    fn load_missing_file_yields_default() {
        let (_dir, store) = temp_store();

        let record = store.load();
        assert_eq!(record, StudentRecord::default());
        assert_eq!(record.academic_history.len(), 4);
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();

        let mut record = StudentRecord::new("S2024001".to_string(), "Grace".to_string());
        record
            .replace_semester(
                "100",
                "Semester I",
                vec![
                    Course::new("Programming I".to_string(), 3, 85.0),
                    Course::new("Linear Algebra".to_string(), 4, 60.0),
                ],
            )
            .expect("valid slot");

        store.save(&record).expect("save succeeds");
        let loaded = store.load();

        assert_eq!(loaded, record);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let store = RecordStore::new(dir.path().join("nested/deeper/record.toml"));

        store.save(&StudentRecord::default()).expect("save succeeds");
        assert!(store.path().exists());
    }

    #[test]
    fn load_corrupt_file_yields_default() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not = [ valid toml").expect("write corrupt file");

        assert_eq!(store.load(), StudentRecord::default());
    }
}
