//! Modal dialog for creating or editing a task.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;

use crate::net::types::{Task, TaskDraft, TaskPriority, TaskStatus};

/// Assemble a draft from raw form fields. `None` when the title is blank,
/// the one validation that blocks submission.
fn build_draft(
    title: &str,
    description: &str,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: &str,
) -> Option<TaskDraft> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some(TaskDraft {
        title: title.to_owned(),
        description: (!description.trim().is_empty()).then(|| description.trim().to_owned()),
        status: Some(status),
        priority: Some(priority),
        due_date: (!due_date.trim().is_empty()).then(|| due_date.trim().to_owned()),
    })
}

/// Date-input value for a task's due date (the `YYYY-MM-DD` part).
fn due_date_input_value(task: &Task) -> String {
    task.due_date
        .as_deref()
        .map(|raw| raw.split('T').next().unwrap_or(raw).to_owned())
        .unwrap_or_default()
}

/// Create/edit dialog. With `task` set, fields are prefilled and the submit
/// label switches to update.
#[component]
pub fn TaskForm(
    #[prop(optional)] task: Option<Task>,
    on_submit: Callback<TaskDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = task.is_some();
    let title = RwSignal::new(task.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        task.as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let status = RwSignal::new(task.as_ref().map_or(TaskStatus::Todo, |t| t.status));
    let priority = RwSignal::new(task.as_ref().map_or(TaskPriority::Medium, |t| t.priority));
    let due_date = RwSignal::new(task.as_ref().map(due_date_input_value).unwrap_or_default());

    let submit = Callback::new(move |()| {
        let Some(draft) = build_draft(
            &title.get(),
            &description.get(),
            status.get(),
            priority.get(),
            &due_date.get(),
        ) else {
            return;
        };
        on_submit.run(draft);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing { "Edit Task" } else { "Create Task" }}</h2>
                <form
                    class="task-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="task-form__label">
                        "Title"
                        <input
                            class="task-form__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="task-form__label">
                        "Description"
                        <textarea
                            class="task-form__input task-form__input--description"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="task-form__row">
                        <label class="task-form__label">
                            "Status"
                            <select
                                class="task-form__input"
                                prop:value=move || status.get().as_wire()
                                on:change=move |ev| {
                                    if let Some(parsed) = TaskStatus::from_wire(&event_target_value(&ev)) {
                                        status.set(parsed);
                                    }
                                }
                            >
                                {[TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.as_wire() selected=move || status.get() == option>
                                                {option.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="task-form__label">
                            "Priority"
                            <select
                                class="task-form__input"
                                prop:value=move || priority.get().as_wire()
                                on:change=move |ev| {
                                    if let Some(parsed) = TaskPriority::from_wire(&event_target_value(&ev)) {
                                        priority.set(parsed);
                                    }
                                }
                            >
                                {[TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.as_wire() selected=move || priority.get() == option>
                                                {option.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                    <label class="task-form__label">
                        "Due Date"
                        <input
                            class="task-form__input"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| due_date.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            {if editing { "Update Task" } else { "Create Task" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
