//! Count Summary

use crate::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

impl Summary {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|task| task.completed).count(),
        }
    }

    /// "1 task", "3 tasks"
    pub fn total_label(&self) -> String {
        let plural = if self.total == 1 { "" } else { "s" };
        format!("{} task{}", self.total, plural)
    }

    pub fn completed_label(&self) -> String {
        format!("{} completed", self.completed)
    }
}
