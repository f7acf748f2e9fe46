//! Small stat tile for the dashboard header row.

use leptos::prelude::*;

/// A titled count with an accent modifier class.
#[component]
pub fn StatsCard(
    title: &'static str,
    value: Signal<usize>,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stats-card {accent}")>
            <p class="stats-card__title">{title}</p>
            <p class="stats-card__value">{move || value.get()}</p>
        </div>
    }
}
