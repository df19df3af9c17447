//! Persistence Layer
//!
//! A [`TaskStore`] is a string key-value backend (browser `localStorage` in the
//! app, [`MemoryStore`] in tests). [`TaskRepository`] owns the key and the JSON
//! codec, and degrades every read failure to an empty sequence.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::task::Task;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode tasks: {0}")]
    Decode(#[source] serde_json::Error),
}

impl StorageError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded)
    }
}

/// String key-value backend
pub trait TaskStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub fn encode_tasks(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string(tasks).map_err(StorageError::Encode)
}

pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, StorageError> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

/// Decode the stored array record by record, skipping malformed entries.
///
/// Only a blob that is not a JSON array at all is an error.
fn decode_records(raw: &str) -> Result<Vec<Task>, StorageError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(raw).map_err(StorageError::Decode)?;
    let total = records.len();
    let tasks: Vec<Task> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(task) => Some(task),
            Err(e) => {
                log::warn!("Skipping malformed task record #{}: {}", index, e);
                None
            }
        })
        .collect();
    if tasks.len() < total {
        log::warn!("Loaded {} of {} stored task records", tasks.len(), total);
    }
    Ok(tasks)
}

/// The task sequence under one storage key
#[derive(Debug)]
pub struct TaskRepository<S> {
    store: S,
    key: String,
}

impl<S: TaskStore> TaskRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored sequence; missing or unreadable data yields an empty one.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to load tasks from '{}': {}", self.key, e);
                return Vec::new();
            }
        };
        match decode_records(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Failed to load tasks from '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored sequence with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = encode_tasks(tasks)?;
        self.store.write(&self.key, &raw)
    }
}

/// In-memory store with an optional byte quota
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes whose total stored size would exceed `bytes` fail with `QuotaExceeded`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// A store whose every access fails, like a disabled `localStorage`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        Ok(())
    }
}

impl TaskStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        let mut entries = self.entries.borrow_mut();
        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: TaskStore + ?Sized> TaskStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TaskId;
    use chrono::DateTime;

    const KEY: &str = "todo-tasks";

    fn sample() -> Vec<Task> {
        let mut done = Task::new(
            TaskId::from("1714564800000.25"),
            "Walk <dog>",
            DateTime::from_timestamp_millis(1_714_564_800_000).unwrap(),
        );
        done.completed = true;
        let open = Task::new(
            TaskId::from("1714564700000.75"),
            "Buy milk",
            DateTime::from_timestamp_millis(1_714_564_700_123).unwrap(),
        );
        vec![done, open]
    }

    #[test]
    fn test_round_trip_reproduces_sequence() {
        let repo = TaskRepository::new(MemoryStore::new(), KEY);
        let tasks = sample();
        repo.save(&tasks).unwrap();
        assert_eq!(repo.load(), tasks);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let repo = TaskRepository::new(MemoryStore::new(), KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = MemoryStore::new();
        store.insert(KEY, "{not json");
        let repo = TaskRepository::new(&store, KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let store = MemoryStore::new();
        store.insert(KEY, r#"{"id":"1"}"#);
        let repo = TaskRepository::new(&store, KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_malformed_record_skips_only_that_record() {
        let store = MemoryStore::new();
        let good = serde_json::to_value(&sample()[1]).unwrap();
        let blob = serde_json::json!([
            good,
            {"id": "2", "text": "no timestamp", "completed": false},
            {"id": "3", "text": "null flag", "completed": null, "createdAt": "2024-05-01T12:00:00.000Z"},
            {"id": "4", "text": "bad date", "completed": false, "createdAt": "yesterday"},
        ]);
        store.insert(KEY, &blob.to_string());

        let tasks = TaskRepository::new(&store, KEY).load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], sample()[1]);
    }

    #[test]
    fn test_unavailable_store_loads_empty() {
        let repo = TaskRepository::new(MemoryStore::unavailable(), KEY);
        assert!(repo.load().is_empty());
        assert!(matches!(repo.save(&sample()), Err(StorageError::Unavailable(_))));
    }

    #[test]
    fn test_legacy_numeric_ids_load() {
        let store = MemoryStore::new();
        store.insert(
            KEY,
            r#"[{"id":1714564800000.5,"text":"Old","completed":false,"createdAt":"2024-05-01T12:00:00.000Z"}]"#,
        );
        let tasks = TaskRepository::new(&store, KEY).load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::from("1714564800000.5"));
    }

    #[test]
    fn test_quota_exceeded_is_classified() {
        let store = MemoryStore::with_quota(32);
        let repo = TaskRepository::new(&store, KEY);
        let err = repo.save(&sample()).unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let store = MemoryStore::with_quota(1024);
        let repo = TaskRepository::new(&store, KEY);
        repo.save(&sample()).unwrap();
        repo.save(&sample()[..1]).unwrap();
        assert_eq!(repo.load().len(), 1);
    }

    #[test]
    fn test_stored_blob_is_json_array() {
        let store = MemoryStore::new();
        TaskRepository::new(&store, KEY).save(&sample()).unwrap();
        let raw = store.get(KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["text"], "Walk &lt;dog&gt;");
        assert_eq!(value[1]["createdAt"], "2024-05-01T11:58:20.123Z");
    }
}
