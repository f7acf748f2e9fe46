//! Task-list state for the dashboard.
//!
//! DESIGN
//! ======
//! The server is the only authority: each reducer applies exactly one network
//! completion to the in-memory list, and nothing here is cached beyond the
//! page lifetime. Reducers are pure methods so they test without a browser.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{Task, TaskStatus};

/// Dashboard filter tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl TaskFilter {
    /// Tab order as rendered on the dashboard.
    pub const ALL: [Self; 4] = [Self::All, Self::Todo, Self::InProgress, Self::Done];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Completed",
        }
    }

    /// Whether `task` belongs under this tab.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Todo => task.status == TaskStatus::Todo,
            Self::InProgress => task.status == TaskStatus::InProgress,
            Self::Done => task.status == TaskStatus::Done,
        }
    }
}

/// Per-status counts shown in the stats cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Shared task-list state backed by the `/tasks` endpoints.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TasksState {
    /// Replace the list with a fresh server response.
    pub fn apply_fetched(&mut self, items: Vec<Task>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Upsert a created or updated task by id.
    pub fn apply_saved(&mut self, task: Task) {
        match self.items.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.items.push(task),
        }
        self.loading = false;
        self.error = None;
    }

    /// Drop a deleted task by id.
    pub fn apply_removed(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
        self.loading = false;
    }

    /// Record a failed operation.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Tasks under the given tab, in server order.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.items.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Per-status counts over the whole list.
    pub fn stats(&self) -> TaskStats {
        let mut stats = TaskStats {
            total: self.items.len(),
            ..TaskStats::default()
        };
        for task in &self.items {
            match task.status {
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.done += 1,
            }
        }
        stats
    }
}
