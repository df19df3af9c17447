//! Task Sequence
//!
//! Ordered newest-first. Deletion is a two-step transition: a request arms a
//! [`RemovalTicket`] and marks the task as pending; completing that ticket
//! after the visual delay removes the task. A repeated request for the same
//! task supersedes the earlier ticket, which then completes as a no-op.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::id::TaskId;
use crate::summary::Summary;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Handle for one armed pending-removal transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTicket {
    id: TaskId,
    generation: u64,
}

impl RemovalTicket {
    pub fn task_id(&self) -> &TaskId {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    /// Task id -> generation of the ticket allowed to remove it
    pending: HashMap<TaskId, u64>,
    next_generation: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Replace the whole sequence; any armed removals are dropped.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.pending.clear();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.tasks)
    }

    /// Prepend a task built from `raw_text`.
    ///
    /// Returns `None` when the text is blank after trimming.
    pub fn add(&mut self, raw_text: &str, id: TaskId, now: DateTime<Utc>) -> Option<TaskId> {
        // U+FEFF counts as whitespace for browser input trimming
        let text = raw_text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if text.is_empty() {
            return None;
        }
        let task = Task::new(id.clone(), text, now);
        self.tasks.insert(0, task);
        Some(id)
    }

    /// Flip the completion flag, returning the new value.
    pub fn toggle(&mut self, id: &TaskId) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Mark a task as pending removal and arm a fresh ticket for it.
    pub fn request_removal(&mut self, id: &TaskId) -> Result<RemovalTicket, TaskError> {
        if self.get(id).is_none() {
            return Err(TaskError::NotFound(id.clone()));
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        if let Some(previous) = self.pending.insert(id.clone(), generation) {
            log::debug!("removal of {} re-requested, ticket {} superseded", id, previous);
        }
        Ok(RemovalTicket {
            id: id.clone(),
            generation,
        })
    }

    pub fn is_pending_removal(&self, id: &TaskId) -> bool {
        self.pending.contains_key(id)
    }

    /// Finish a pending removal. Removes exactly one record.
    ///
    /// Returns `false` when the ticket was superseded or the task is already gone.
    pub fn complete_removal(&mut self, ticket: &RemovalTicket) -> bool {
        match self.pending.get(&ticket.id) {
            Some(generation) if *generation == ticket.generation => {}
            _ => return false,
        }
        self.pending.remove(&ticket.id);
        match self.tasks.iter().position(|task| task.id == ticket.id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        self.forget_missing_pending();
        before - self.tasks.len()
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        self.pending.clear();
        removed
    }

    fn forget_missing_pending(&mut self) {
        let tasks = &self.tasks;
        self.pending.retain(|id, _| tasks.iter().any(|task| &task.id == id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    fn list_with(texts: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for (i, text) in texts.iter().enumerate() {
            list.add(text, TaskId::from(i.to_string()), at(i as i64)).unwrap();
        }
        list
    }

    #[test]
    fn test_blank_add_is_noop() {
        let mut list = list_with(&["Buy milk"]);
        assert_eq!(list.add("", TaskId::from("x"), at(0)), None);
        assert_eq!(list.add("   \t\n", TaskId::from("y"), at(0)), None);
        assert_eq!(list.add("\u{feff}", TaskId::from("z"), at(0)), None);
        assert_eq!(list.add(" \u{feff}\u{a0} ", TaskId::from("w"), at(0)), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_is_newest_first() {
        let list = list_with(&["Buy milk", "Walk dog"]);
        assert_eq!(list.tasks()[0].text, "Walk dog");
        assert_eq!(list.tasks()[1].text, "Buy milk");
    }

    #[test]
    fn test_add_trims_input() {
        let list = list_with(&["  Walk dog  ", "\u{feff}Feed cat\u{feff}"]);
        assert_eq!(list.tasks()[0].text, "Feed cat");
        assert_eq!(list.tasks()[1].text, "Walk dog");
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut list = list_with(&["Buy milk"]);
        let id = TaskId::from("0");
        assert_eq!(list.toggle(&id), Ok(true));
        assert_eq!(list.toggle(&id), Ok(false));
        assert!(!list.get(&id).unwrap().completed);
    }

    #[test]
    fn test_toggle_missing_id() {
        let mut list = list_with(&["Buy milk"]);
        let missing = TaskId::from("nope");
        assert_eq!(list.toggle(&missing), Err(TaskError::NotFound(missing)));
    }

    #[test]
    fn test_removal_waits_for_ticket() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = TaskId::from("1");
        let ticket = list.request_removal(&id).unwrap();

        assert!(list.is_pending_removal(&id));
        assert_eq!(list.len(), 3);

        assert!(list.complete_removal(&ticket));
        assert_eq!(list.len(), 2);
        assert!(list.get(&id).is_none());
        assert!(!list.is_pending_removal(&id));
    }

    #[test]
    fn test_removal_of_removed_id_is_noop() {
        let mut list = list_with(&["a", "b"]);
        let id = TaskId::from("0");
        let ticket = list.request_removal(&id).unwrap();
        assert!(list.complete_removal(&ticket));

        assert!(!list.complete_removal(&ticket));
        assert_eq!(list.request_removal(&id), Err(TaskError::NotFound(id)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_request_supersedes_first_ticket() {
        let mut list = list_with(&["a", "b"]);
        let id = TaskId::from("0");
        let first = list.request_removal(&id).unwrap();
        let second = list.request_removal(&id).unwrap();
        assert_ne!(first, second);

        assert!(!list.complete_removal(&first));
        assert_eq!(list.len(), 2);
        assert!(list.is_pending_removal(&id));

        assert!(list.complete_removal(&second));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_removal_removes_only_one_duplicate_id() {
        let mut list = TaskList::new();
        list.add("first", TaskId::from("same"), at(0));
        list.add("second", TaskId::from("same"), at(0));

        let ticket = list.request_removal(&TaskId::from("same")).unwrap();
        assert!(list.complete_removal(&ticket));
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "first");
    }

    #[test]
    fn test_clear_completed() {
        let mut list = list_with(&["a", "b", "c"]);
        list.toggle(&TaskId::from("0")).unwrap();
        list.toggle(&TaskId::from("2")).unwrap();
        let pending = list.request_removal(&TaskId::from("0")).unwrap();

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].id, TaskId::from("1"));
        assert!(!list.is_pending_removal(pending.task_id()));
    }

    #[test]
    fn test_clear_all_drops_pending() {
        let mut list = list_with(&["a", "b"]);
        let ticket = list.request_removal(&TaskId::from("1")).unwrap();
        assert_eq!(list.clear_all(), 2);
        assert!(list.is_empty());
        assert!(!list.complete_removal(&ticket));
    }

    #[test]
    fn test_replace_resets_pending() {
        let mut list = list_with(&["a"]);
        let ticket = list.request_removal(&TaskId::from("0")).unwrap();
        let fresh = list_with(&["a"]).tasks().to_vec();
        list.replace(fresh);
        assert!(!list.complete_removal(&ticket));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_summary_tracks_mutations() {
        let mut list = list_with(&["a", "b", "c"]);
        assert_eq!(list.summary(), Summary { total: 3, completed: 0 });

        list.toggle(&TaskId::from("1")).unwrap();
        assert_eq!(list.summary(), Summary { total: 3, completed: 1 });

        let ticket = list.request_removal(&TaskId::from("1")).unwrap();
        list.complete_removal(&ticket);
        assert_eq!(list.summary(), Summary { total: 2, completed: 0 });
    }
}
