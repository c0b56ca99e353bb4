//! Persistent storage for the entry list

use crate::domain::Entry;
use crate::error::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the entry list is stored
pub const ENTRIES_KEY: &str = "budgetEntries";

/// Port to the store holding the serialized entry list
pub trait EntryStorage {
    /// Load the stored list. Missing or unreadable data yields an empty list.
    fn load(&self) -> Vec<Entry>;

    /// Replace the stored list with `entries`
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// Entry list stored as JSON at `.budgetbook/budgetEntries.json`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage for the ledger rooted at `root`
    pub fn new(root: &Path) -> Self {
        JsonFileStorage {
            path: root
                .join(".budgetbook")
                .join(format!("{}.json", ENTRIES_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_file_name(format!(
            "{}.json.budgetbook-tmp-{}",
            ENTRIES_KEY,
            std::process::id()
        ));

        fs::write(&tmp_path, content)?;

        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Where an unparsable blob is copied before the next save replaces it
    pub fn unreadable_path(&self) -> PathBuf {
        self.path.with_file_name(format!("{}.json.unreadable", ENTRIES_KEY))
    }

    fn keep_unreadable(&self) {
        let backup = self.unreadable_path();
        if let Err(e) = fs::copy(&self.path, &backup) {
            tracing::warn!(
                path = %backup.display(),
                error = %e,
                "failed to keep unreadable entries"
            );
        }
    }
}

impl EntryStorage for JsonFileStorage {
    fn load(&self) -> Vec<Entry> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read entries, treating as empty"
                );
                return Vec::new();
            }
        };

        if contents.trim().is_empty() {
            return Vec::new();
        }

        let records: Vec<serde_json::Value> = match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored entries are not a JSON list, treating as empty"
                );
                self.keep_unreadable();
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable entry");
                    None
                }
            })
            .collect()
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        self.write_atomic(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            count = entries.len(),
            "saved entries"
        );
        Ok(())
    }
}

/// In-memory stand-in for the persistent store
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<Vec<Entry>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `entries`
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        MemoryStorage {
            entries: RefCell::new(entries),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl EntryStorage for MemoryStorage {
    fn load(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryId, EntryType};
    use tempfile::TempDir;

    fn sample(id: &str, amount: f64) -> Entry {
        Entry {
            id: EntryId::from(id),
            kind: EntryType::Income,
            category: "Salary".to_string(),
            amount,
            date: "2024-01-31".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());

        let entries = vec![sample("b", 2.0), sample("a", 1.0), sample("c", 3.0)];
        storage.save(&entries).unwrap();

        assert_eq!(storage.load(), entries);
        assert!(temp.path().join(".budgetbook/budgetEntries.json").exists());
    }

    #[test]
    fn test_save_overwrites_whole_blob() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());

        storage.save(&[sample("a", 1.0), sample("b", 2.0)]).unwrap();
        storage.save(&[sample("c", 3.0)]).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id.as_str(), "c");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());

        storage.save(&[sample("a", 1.0)]).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path().join(".budgetbook"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["budgetEntries.json".to_string()]);
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());
        fs::create_dir_all(temp.path().join(".budgetbook")).unwrap();
        fs::write(storage.path(), "{not json").unwrap();

        assert!(storage.load().is_empty());
        assert_eq!(
            fs::read_to_string(storage.unreadable_path()).unwrap(),
            "{not json"
        );
    }

    #[test]
    fn test_bad_record_is_skipped() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());
        fs::create_dir_all(temp.path().join(".budgetbook")).unwrap();
        fs::write(
            storage.path(),
            r#"[
  {"id":"a","type":"income","category":"Salary","amount":10,"date":"2024-01-31"},
  {"id":"t","type":"transfer","category":"Savings","amount":5,"date":"2024-02-01"},
  {"id":"c","type":"expense","category":"Food","amount":3,"date":"2024-02-02"}
]"#,
        )
        .unwrap();

        let ids: Vec<String> = storage
            .load()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "c".to_string()]);
        assert!(!storage.unreadable_path().exists());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp.path());
        fs::create_dir_all(temp.path().join(".budgetbook")).unwrap();
        fs::write(storage.path(), "").unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_memory_storage_contract() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.save(&[sample("a", 1.0)]).unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.load()[0].id.as_str(), "a");

        let seeded = MemoryStorage::with_entries(vec![sample("x", 9.0)]);
        assert_eq!(seeded.load()[0].amount, 9.0);
    }
}
