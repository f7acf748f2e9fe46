//! Navigation-time route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on every route change: unauthenticated visitors are bounced off
//! protected paths, authenticated ones off the auth pages. The check is
//! presence-only and never contacts the server, so a stale credential grants
//! passage until the first authenticated call fails and clears it.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::store::{CookieTokenStore, TokenStore as _};
use crate::state::session::SessionState;

/// Paths requiring a credential, matched with their sub-paths.
const PROTECTED_PREFIXES: [&str; 2] = ["/dashboard", "/profile"];

/// Auth pages an authenticated user has no business on, matched exactly.
const AUTH_PAGES: [&str; 2] = ["/login", "/register"];

/// Guard decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Path is unmatched, or matched and permitted.
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/')))
}

fn is_auth_page(path: &str) -> bool {
    AUTH_PAGES.contains(&path)
}

/// Decide the outcome for a path given whether a credential is stored.
pub fn evaluate(path: &str, has_token: bool) -> GuardOutcome {
    if is_auth_page(path) {
        if has_token {
            GuardOutcome::RedirectToDashboard
        } else {
            GuardOutcome::Allow
        }
    } else if is_protected(path) {
        if has_token {
            GuardOutcome::Allow
        } else {
            GuardOutcome::RedirectToLogin
        }
    } else {
        GuardOutcome::Allow
    }
}

/// Install the guard as an effect over the router's current location.
///
/// Renders nothing; must sit inside the `Router` so the location hook works.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        match evaluate(&path, CookieTokenStore.get().is_some()) {
            GuardOutcome::Allow => {}
            GuardOutcome::RedirectToLogin => navigate("/login", NavigateOptions::default()),
            GuardOutcome::RedirectToDashboard => navigate("/dashboard", NavigateOptions::default()),
        }
    });
}

/// Redirect to `/login` whenever the session has resolved and no user is
/// present. Route components behind the guard still apply this, because the
/// guard only sees token presence, not a restore that just failed.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
