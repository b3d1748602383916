// Local storage module using sled embedded database

use anyhow::{Context, Result};
use sled::Db;
use std::path::Path;

use workout_nlp::{LogEntry, LogFilter};

const LOGS_TREE: &str = "logs";

/// Storage manager for workout log entries
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        tracing::info!("Initializing sled database at {:?}", path);

        let db = sled::open(path).context("Failed to open sled database")?;

        Ok(Self { db })
    }

    /// Save a log entry, replacing any entry with the same ID
    pub fn save_entry(&self, entry: &LogEntry) -> Result<()> {
        let tree = self
            .db
            .open_tree(LOGS_TREE)
            .context("Failed to open logs tree")?;

        let key = entry.id.as_bytes();
        let value = bincode::serialize(entry).context("Failed to serialize log entry")?;

        tree.insert(key, value)
            .context("Failed to insert log entry")?;

        self.db.flush().context("Failed to flush database")?;

        tracing::debug!("Saved log entry {} with {} workouts", entry.id, entry.workouts.len());
        Ok(())
    }

    /// Get a log entry by ID
    pub fn get_entry(&self, id: &str) -> Result<Option<LogEntry>> {
        let tree = self
            .db
            .open_tree(LOGS_TREE)
            .context("Failed to open logs tree")?;

        if let Some(value) = tree.get(id.as_bytes()).context("Failed to get log entry")? {
            let entry: LogEntry =
                bincode::deserialize(&value).context("Failed to deserialize log entry")?;
            Ok(Some(entry))
        } else {
            Ok(None)
        }
    }

    /// List entries matching `filter`, most recent first
    pub fn list_entries(&self, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        let tree = self
            .db
            .open_tree(LOGS_TREE)
            .context("Failed to open logs tree")?;

        let mut entries = Vec::new();

        for item in tree.iter() {
            let (_key, value) = item.context("Failed to iterate log entries")?;
            let entry: LogEntry =
                bincode::deserialize(&value).context("Failed to deserialize log entry")?;
            if filter.matches(&entry) {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        Ok(entries)
    }

    /// Delete a log entry; returns whether it existed
    pub fn delete_entry(&self, id: &str) -> Result<bool> {
        let tree = self
            .db
            .open_tree(LOGS_TREE)
            .context("Failed to open logs tree")?;

        let deleted = tree
            .remove(id.as_bytes())
            .context("Failed to delete log entry")?
            .is_some();

        if deleted {
            self.db.flush().context("Failed to flush database")?;
            tracing::debug!("Deleted log entry {}", id);
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::{tempdir, TempDir};
    use workout_nlp::Category;

    fn create_test_storage() -> Result<(Storage, TempDir)> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        Ok((storage, dir))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_save_and_get_entry() -> Result<()> {
        let (storage, _dir) = create_test_storage()?;

        let entry = LogEntry::from_text(day(1), "스쿼트 80kg 4세트 8회, 런닝 30분");
        storage.save_entry(&entry)?;

        let retrieved = storage.get_entry(&entry.id)?;
        assert_eq!(retrieved, Some(entry));

        Ok(())
    }

    #[test]
    fn test_list_is_most_recent_first_and_filtered() -> Result<()> {
        let (storage, _dir) = create_test_storage()?;

        let older = LogEntry::from_text(day(1), "러닝 5km 30분");
        let newer = LogEntry::from_text(day(3), "벤치프레스 60kg 5x5");
        storage.save_entry(&older)?;
        storage.save_entry(&newer)?;

        let all = storage.list_entries(&LogFilter::default())?;
        let ids: Vec<&str> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);

        let running = storage.list_entries(&LogFilter {
            category: Some(Category::Running),
            ..Default::default()
        })?;
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].id, older.id);

        Ok(())
    }

    #[test]
    fn test_delete_entry() -> Result<()> {
        let (storage, _dir) = create_test_storage()?;

        let entry = LogEntry::from_text(day(2), "플랭크 3분간");
        storage.save_entry(&entry)?;

        assert!(storage.delete_entry(&entry.id)?);
        assert!(!storage.delete_entry(&entry.id)?);
        assert!(storage.get_entry(&entry.id)?.is_none());

        Ok(())
    }
}
