//! Task list with status filter tabs.
//!
//! DESIGN
//! ======
//! Presentation only: filtering runs through `TasksState::filtered` so the
//! tab logic stays testable outside the view layer.

use leptos::prelude::*;

use crate::components::task_item::TaskItem;
use crate::net::types::Task;
use crate::state::tasks::{TaskFilter, TasksState};

/// Filter tabs plus the rows under the active tab.
#[component]
pub fn TaskList(
    tasks: RwSignal<TasksState>,
    filter: RwSignal<TaskFilter>,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let filtered = move || tasks.get().filtered(filter.get());

    view! {
        <div class="task-list">
            <nav class="task-list__tabs" aria-label="Tabs">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="task-list__tab"
                                class:task-list__tab--active=move || filter.get() == tab
                                on:click=move |_| filter.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <ul class="task-list__items">
                <Show
                    when=move || !filtered().is_empty()
                    fallback=move || {
                        view! {
                            <li class="task-list__empty">"No tasks found in this category."</li>
                        }
                    }
                >
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|task| {
                                view! { <TaskItem task=task on_edit=on_edit on_delete=on_delete/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </ul>
        </div>
    }
}
