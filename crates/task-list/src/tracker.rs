//! Tracker
//!
//! Owns the task sequence and its repository, persisting after every
//! mutation. The in-memory list stays authoritative when a save fails; the
//! failure is kept until the caller collects it with
//! [`Tracker::take_save_error`].

use chrono::{DateTime, Utc};

use crate::id::TaskId;
use crate::list::{RemovalTicket, TaskError, TaskList};
use crate::snapshot::export_snapshot;
use crate::storage::{StorageError, TaskRepository, TaskStore};
use crate::summary::Summary;
use crate::task::Task;

#[derive(Debug)]
pub struct Tracker<S> {
    list: TaskList,
    repo: TaskRepository<S>,
    save_error: Option<StorageError>,
}

impl<S: TaskStore> Tracker<S> {
    /// Load the stored sequence under `key` and take ownership of `store`.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let repo = TaskRepository::new(store, key);
        let tasks = repo.load();
        log::info!("Loaded {} tasks from '{}'", tasks.len(), repo.key());
        Self {
            list: TaskList::from_tasks(tasks),
            repo,
            save_error: None,
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn summary(&self) -> Summary {
        self.list.summary()
    }

    pub fn is_pending_removal(&self, id: &TaskId) -> bool {
        self.list.is_pending_removal(id)
    }

    /// Discard memory and reload from storage.
    pub fn reload(&mut self) {
        self.list.replace(self.repo.load());
    }

    pub fn add(&mut self, raw_text: &str, id: TaskId, now: DateTime<Utc>) -> Option<TaskId> {
        let id = self.list.add(raw_text, id, now)?;
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: &TaskId) -> Result<bool, TaskError> {
        let completed = self.list.toggle(id).inspect_err(|e| log::info!("Toggle skipped: {}", e))?;
        self.persist();
        Ok(completed)
    }

    /// Start the removal transition. Nothing is persisted until it completes.
    pub fn request_removal(&mut self, id: &TaskId) -> Result<RemovalTicket, TaskError> {
        self.list
            .request_removal(id)
            .inspect_err(|e| log::info!("Delete skipped: {}", e))
    }

    pub fn complete_removal(&mut self, ticket: &RemovalTicket) -> bool {
        if !self.list.complete_removal(ticket) {
            log::debug!("Stale removal ticket for {}", ticket.task_id());
            return false;
        }
        self.persist();
        true
    }

    pub fn clear_completed(&mut self) -> usize {
        let removed = self.list.clear_completed();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.list.clear_all();
        self.persist();
        removed
    }

    pub fn export(&self) -> Result<String, StorageError> {
        export_snapshot(self.list.tasks())
    }

    /// Write the current sequence once more, used on teardown.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.repo.save(self.list.tasks())
    }

    /// The most recent save failure, if any, since the last call.
    pub fn take_save_error(&mut self) -> Option<StorageError> {
        self.save_error.take()
    }

    fn persist(&mut self) {
        match self.repo.save(self.list.tasks()) {
            Ok(()) => self.save_error = None,
            Err(e) => {
                log::warn!("Failed to save tasks to '{}': {}", self.repo.key(), e);
                self.save_error = Some(e);
            }
        }
    }
}
