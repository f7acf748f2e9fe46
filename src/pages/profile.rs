//! Profile page: read-only account details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::session::controller::AppSessionController;
use crate::util::route_guard::install_unauth_redirect;

/// Date part of the account's creation timestamp.
fn member_since(created_at: &str) -> String {
    created_at.split('T').next().unwrap_or(created_at).to_owned()
}

/// Account details for the signed-in user.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppSessionController>();
    let state = session.state();
    let navigate = use_navigate();

    install_unauth_redirect(state, navigate);

    view! {
        <div class="page">
            <Navbar/>
            <main class="profile">
                <h1>"Your Profile"</h1>
                {move || {
                    state
                        .get()
                        .user
                        .map(|user| {
                            view! {
                                <dl class="profile__details">
                                    <dt>"Username"</dt>
                                    <dd>{user.username.clone()}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{user.email.clone()}</dd>
                                    <dt>"Full Name"</dt>
                                    <dd>{user.full_name.clone().unwrap_or_else(|| "Not set".to_owned())}</dd>
                                    <dt>"Member Since"</dt>
                                    <dd>{member_since(&user.created_at)}</dd>
                                </dl>
                            }
                        })
                }}
                <Show when=move || state.get().loading>
                    <p class="profile__loading">"Loading profile..."</p>
                </Show>
            </main>
        </div>
    }
}
