//! JSON export snapshot

use chrono::{DateTime, Utc};

use crate::storage::StorageError;
use crate::task::Task;

/// Pretty-printed JSON of the whole sequence, same schema as the stored blob.
pub fn export_snapshot(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(tasks).map_err(StorageError::Encode)
}

/// Download name for a snapshot taken at `at`, e.g. `todo-tasks-2024-05-01.json`.
pub fn snapshot_file_name(at: DateTime<Utc>) -> String {
    format!("todo-tasks-{}.json", at.format("%Y-%m-%d"))
}
