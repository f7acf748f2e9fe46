//! Login page: username + password form driven by the session controller.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::session::controller::AppSessionController;

/// Banner shown after arriving from a successful registration.
const REGISTERED_MESSAGE: &str = "Registration successful! Please login with your new account.";

/// Trim both fields and require them before any network call.
fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Login page. Submits through the session controller, which navigates to
/// the dashboard on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSessionController>();
    let state = session.state();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let local_error = RwSignal::new(None::<String>);

    // Stale auth errors from a previous visit should not greet the user.
    session.clear_error();

    // Already signed in: straight to the dashboard.
    let navigate_authed = navigate.clone();
    Effect::new(move || {
        if state.get().is_authenticated() {
            navigate_authed("/dashboard", NavigateOptions::default());
        }
    });

    let success_message = move || {
        (query.with(|q| q.get("registered").as_deref() == Some("true")))
            .then(|| REGISTERED_MESSAGE.to_owned())
    };

    let display_error = move || local_error.get().or_else(|| state.get().error);

    let submit_session = session.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        local_error.set(None);
        if state.get_untracked().loading {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                local_error.set(Some(message.to_owned()));
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            let session = submit_session.clone();
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                // Failure is surfaced through the controller's error slot.
                let _ = session
                    .login(&credentials.0, &credentials.1, |path| {
                        navigate(path, NavigateOptions::default());
                    })
                    .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login to Your Account"</h1>
                <p class="auth-card__subtitle">"Enter your credentials to access your account"</p>
                <Show when=move || success_message().is_some()>
                    <p class="auth-message auth-message--success">{move || success_message().unwrap_or_default()}</p>
                </Show>
                <Show when=move || display_error().is_some()>
                    <p class="auth-message auth-message--error">{move || display_error().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            disabled=move || state.get().loading
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || state.get().loading
                        />
                    </label>
                    <button class="auth-form__submit" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
