//! Top navigation bar, auth-aware.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::controller::AppSessionController;

/// Site navigation: brand link plus login/register or dashboard/logout
/// depending on the session.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<AppSessionController>();
    let state = session.state();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        session.logout(move |path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Task Manager"
            </a>
            <div class="navbar__links">
                <Show
                    when=move || state.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Login"
                            </a>
                            <a class="navbar__link" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/dashboard">
                        "Dashboard"
                    </a>
                    <a class="navbar__link" href="/profile">
                        "Profile"
                    </a>
                    <button class="navbar__link navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
