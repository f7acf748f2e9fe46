//! Session controller: restore, login, logout, and the error slot.
//!
//! DESIGN
//! ======
//! An explicitly constructed object with injected dependencies (the token
//! store and an auth gateway) instead of ambient globals, so the whole state
//! machine runs under unit tests with stubs. The controller owns the
//! `RwSignal<SessionState>` that pages read from context.
//!
//! Navigation is a required effect of `login` and `logout` and goes through
//! the `navigate` callback handed to those calls, which tests can record.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use super::store::{TOKEN_TTL, TokenStore};
use crate::net::error::ApiError;
use crate::net::types::{TokenResponse, User};
use crate::state::session::SessionState;

/// Shown when login fails for a reason the server gave no detail for.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Failed to login. Please check your credentials and try again.";

/// The two network operations the controller depends on.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Exchange credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;
    /// Fetch the user the stored credential belongs to.
    async fn current_user(&self) -> Result<User, ApiError>;
}

/// Production gateway delegating to the HTTP auth module.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthGateway;

impl AuthGateway for HttpAuthGateway {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        crate::net::auth::login(username, password).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        crate::net::auth::current_user().await
    }
}

/// Session controller with injected store and gateway.
#[derive(Clone)]
pub struct SessionController<S, G> {
    state: RwSignal<SessionState>,
    store: S,
    gateway: G,
}

/// The controller type provided through context in the running app.
pub type AppSessionController = SessionController<super::store::CookieTokenStore, HttpAuthGateway>;

impl<S, G> SessionController<S, G>
where
    S: TokenStore + Clone + 'static,
    G: AuthGateway + Clone + 'static,
{
    pub fn new(store: S, gateway: G) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            store,
            gateway,
        }
    }

    /// The reactive session state pages subscribe to.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Resolve the initial `Unknown` state from the stored credential.
    ///
    /// No credential: straight to unauthenticated, no network call. A
    /// credential the server rejects is removed so the route guard stops
    /// honoring it.
    pub async fn restore(&self) {
        if self.store.get().is_none() {
            self.state.update(|s| {
                s.user = None;
                s.loading = false;
            });
            return;
        }
        match self.gateway.current_user().await {
            Ok(user) => self.state.update(|s| {
                s.user = Some(user);
                s.loading = false;
            }),
            Err(err) => {
                leptos::logging::warn!("session restore failed: {err}");
                self.store.remove();
                self.state.update(|s| {
                    s.user = None;
                    s.loading = false;
                });
            }
        }
    }

    /// Log in, persist the token, load the user, and navigate to the
    /// dashboard.
    ///
    /// # Errors
    ///
    /// On failure the error slot gets the server's detail (or a generic
    /// fallback), any previously established user is left in place, and the
    /// error is returned so the caller can also react.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        navigate: impl Fn(&str),
    ) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        match self.login_inner(username, password).await {
            Ok(user) => {
                self.state.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                });
                navigate("/dashboard");
                Ok(())
            }
            Err(err) => {
                // A failed attempt reports the error; any user already held
                // from an earlier login stays in place.
                self.state.update(|s| {
                    s.loading = false;
                    s.error = Some(login_error_message(&err));
                });
                Err(err)
            }
        }
    }

    async fn login_inner(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let token = self.gateway.login(username, password).await?;
        self.store.set(&token.access_token, TOKEN_TTL);
        match self.gateway.current_user().await {
            Ok(user) => Ok(user),
            Err(err) => {
                // The token was accepted but is unusable; don't keep it.
                self.store.remove();
                Err(err)
            }
        }
    }

    /// Purely local logout: remove the credential, clear the user, navigate
    /// to the login page. Idempotent.
    pub fn logout(&self, navigate: impl Fn(&str)) {
        self.store.remove();
        self.state.update(|s| {
            s.user = None;
            s.loading = false;
            s.error = None;
        });
        navigate("/login");
    }

    /// Clear the error slot without touching authentication state.
    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }
}

/// User-facing message for a failed login.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized(detail) | ApiError::Server { detail, .. } => detail.clone(),
        ApiError::Network(_) | ApiError::Decode(_) => LOGIN_FALLBACK_MESSAGE.to_owned(),
    }
}
