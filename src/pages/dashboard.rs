//! Dashboard: task stats, filter tabs, and the CRUD dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The main authenticated surface. Tasks load once on mount and every
//! mutation round-trips through the server, with `TasksState` reducers
//! applying each completion. In-flight responses are dropped once the page
//! unmounts so a slow request never writes into a dead view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::stats_card::StatsCard;
use crate::components::task_form::TaskForm;
use crate::components::task_list::TaskList;
use crate::net::types::{Task, TaskPatch};
use crate::session::controller::AppSessionController;
use crate::state::tasks::{TaskFilter, TasksState};
use crate::util::route_guard::install_unauth_redirect;

const FETCH_TASKS_MESSAGE: &str = "Failed to fetch tasks";

/// Heading text for the signed-in user.
fn welcome_label(username: Option<&str>) -> String {
    match username {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

/// Which dialog is open, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Dialog {
    #[default]
    None,
    Create,
    Edit(Task),
    ConfirmDelete(Task),
}

/// Task dashboard behind the route guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSessionController>();
    let state = session.state();
    let navigate = use_navigate();

    let tasks = RwSignal::new(TasksState::default());
    let filter = RwSignal::new(TaskFilter::All);
    let dialog = RwSignal::new(Dialog::None);

    install_unauth_redirect(state, navigate);

    // Set false on unmount; async completions check it before touching
    // signals that no longer have a live view behind them.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let load = {
        let alive = Arc::clone(&alive);
        move || {
            tasks.update(|t| {
                t.loading = true;
                t.error = None;
            });
            #[cfg(feature = "hydrate")]
            {
                let alive = Arc::clone(&alive);
                leptos::task::spawn_local(async move {
                    let result = crate::net::tasks::list_tasks().await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(items) => tasks.update(|t| t.apply_fetched(items)),
                        Err(err) => {
                            leptos::logging::warn!("task list fetch failed: {err}");
                            tasks.update(|t| t.apply_error(FETCH_TASKS_MESSAGE.to_owned()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &alive;
        }
    };
    load();

    let create = {
        let alive = Arc::clone(&alive);
        move |draft| {
            dialog.set(Dialog::None);
            tasks.update(|t| t.loading = true);
            #[cfg(feature = "hydrate")]
            {
                let alive = Arc::clone(&alive);
                leptos::task::spawn_local(async move {
                    let result = crate::net::tasks::create_task(&draft).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(task) => tasks.update(|t| t.apply_saved(task)),
                        Err(err) => tasks.update(|t| t.apply_error(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&alive, &draft);
            }
        }
    };

    let update = {
        let alive = Arc::clone(&alive);
        move |id: String, draft| {
            dialog.set(Dialog::None);
            tasks.update(|t| t.loading = true);
            let patch = TaskPatch::from_draft(&draft);
            #[cfg(feature = "hydrate")]
            {
                let alive = Arc::clone(&alive);
                leptos::task::spawn_local(async move {
                    let result = crate::net::tasks::update_task(&id, &patch).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(task) => tasks.update(|t| t.apply_saved(task)),
                        Err(err) => tasks.update(|t| t.apply_error(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&alive, id, patch);
            }
        }
    };

    let remove = {
        let alive = Arc::clone(&alive);
        move |id: String| {
            dialog.set(Dialog::None);
            tasks.update(|t| t.loading = true);
            #[cfg(feature = "hydrate")]
            {
                let alive = Arc::clone(&alive);
                leptos::task::spawn_local(async move {
                    let result = crate::net::tasks::delete_task(&id).await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match result {
                        Ok(()) => tasks.update(|t| t.apply_removed(&id)),
                        Err(err) => tasks.update(|t| t.apply_error(err.to_string())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&alive, id);
            }
        }
    };

    let on_submit = Callback::new(move |draft| match dialog.get_untracked() {
        Dialog::Edit(task) => update(task.id.clone(), draft),
        _ => create(draft),
    });

    let on_edit = Callback::new(move |task: Task| dialog.set(Dialog::Edit(task)));
    let on_delete = Callback::new(move |id: String| {
        if let Some(task) = tasks.get_untracked().items.iter().find(|t| t.id == id) {
            dialog.set(Dialog::ConfirmDelete(task.clone()));
        }
    });
    let on_cancel = Callback::new(move |()| dialog.set(Dialog::None));

    let stats = move || tasks.get().stats();
    let username = move || state.get().user.map(|u| u.username);

    view! {
        <div class="page">
            <Navbar/>
            <main class="dashboard">
                <header class="dashboard__header">
                    <h1>{move || welcome_label(username().as_deref())}</h1>
                    <div class="dashboard__actions">
                        <button class="btn" on:click={
                            let load = load.clone();
                            move |_| load()
                        }>
                            "Refresh"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| dialog.set(Dialog::Create)>
                            "New Task"
                        </button>
                    </div>
                </header>
                <Show when=move || tasks.get().error.is_some()>
                    <p class="dashboard__error">{move || tasks.get().error.unwrap_or_default()}</p>
                </Show>
                <div class="dashboard__stats">
                    <StatsCard title="Total Tasks" value=Signal::derive(move || stats().total)/>
                    <StatsCard
                        title="To Do"
                        value=Signal::derive(move || stats().todo)
                        accent="stats-card--todo"
                    />
                    <StatsCard
                        title="In Progress"
                        value=Signal::derive(move || stats().in_progress)
                        accent="stats-card--in-progress"
                    />
                    <StatsCard
                        title="Completed"
                        value=Signal::derive(move || stats().done)
                        accent="stats-card--done"
                    />
                </div>
                <Show when=move || tasks.get().loading>
                    <p class="dashboard__loading">"Loading tasks..."</p>
                </Show>
                <TaskList tasks=tasks filter=filter on_edit=on_edit on_delete=on_delete/>
            </main>
            {move || match dialog.get() {
                Dialog::None => ().into_any(),
                Dialog::Create => {
                    view! { <TaskForm on_submit=on_submit on_cancel=on_cancel/> }.into_any()
                }
                Dialog::Edit(task) => {
                    view! { <TaskForm task=task on_submit=on_submit on_cancel=on_cancel/> }
                        .into_any()
                }
                Dialog::ConfirmDelete(task) => {
                    let id = task.id.clone();
                    let remove = remove.clone();
                    view! {
                        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                <h2>"Delete Task"</h2>
                                <p>
                                    "Are you sure you want to delete \"" {task.title.clone()}
                                    "\"? This cannot be undone."
                                </p>
                                <div class="dialog__actions">
                                    <button class="btn" on:click=move |_| on_cancel.run(())>
                                        "Cancel"
                                    </button>
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| remove(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
