//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::session::controller::AppSessionController;

/// Landing page with calls to action that follow the session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<AppSessionController>();
    let state = session.state();

    view! {
        <div class="page">
            <Navbar/>
            <main class="home">
                <h1>"Task Manager"</h1>
                <p class="home__tagline">
                    "Organize your work with statuses, priorities, and due dates."
                </p>
                <div class="home__actions">
                    <Show
                        when=move || state.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/login">
                                    "Login"
                                </a>
                                <a class="btn" href="/register">
                                    "Register"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/dashboard">
                            "Go to Dashboard"
                        </a>
                    </Show>
                </div>
            </main>
        </div>
    }
}
