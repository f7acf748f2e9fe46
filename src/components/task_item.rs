//! Single task row with status badge, priority, due date, and row actions.

#[cfg(test)]
#[path = "task_item_test.rs"]
mod task_item_test;

use leptos::prelude::*;

use crate::net::types::{Task, TaskStatus};

/// CSS modifier for a status badge.
fn status_badge_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "task-item__status--todo",
        TaskStatus::InProgress => "task-item__status--in-progress",
        TaskStatus::Done => "task-item__status--done",
    }
}

/// Human-readable due date: the date part of the ISO timestamp, or a
/// placeholder when unset.
fn format_due_date(due_date: Option<&str>) -> String {
    match due_date {
        Some(raw) if !raw.is_empty() => {
            let date = raw.split('T').next().unwrap_or(raw);
            format!("Due date: {date}")
        }
        _ => "No due date".to_owned(),
    }
}

/// One row in the task list.
#[component]
pub fn TaskItem(task: Task, on_edit: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let badge_class = format!("task-item__status {}", status_badge_class(task.status));
    let due = format_due_date(task.due_date.as_deref());
    let description = task.description.clone().unwrap_or_else(|| "No description".to_owned());
    let edit_task = task.clone();
    let delete_id = task.id.clone();

    view! {
        <li class="task-item">
            <div class="task-item__header">
                <p class="task-item__title">{task.title.clone()}</p>
                <span class=badge_class>{task.status.label()}</span>
            </div>
            <div class="task-item__meta">
                <p class="task-item__description">{description}</p>
                <p class="task-item__due">{due}</p>
                <p class="task-item__priority">{format!("Priority: {}", task.priority.label())}</p>
            </div>
            <div class="task-item__actions">
                <button
                    class="task-item__edit"
                    on:click=move |_| on_edit.run(edit_task.clone())
                >
                    "Edit"
                </button>
                <button
                    class="task-item__delete"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}
