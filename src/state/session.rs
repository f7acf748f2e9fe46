//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route-level redirect effects and user-aware components;
//! written only by the session controller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Where the session stands, derived from the state fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Still resolving (initial restore or a login in flight).
    Unknown,
    /// A user is held in memory for this page lifetime.
    Authenticated,
    /// Resolution finished with no user.
    Unauthenticated,
}

/// Session state: current user, loading flag, and a transient error slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading starts true: the stored credential has not been checked yet.
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    /// Authenticated iff a non-null user is held in memory.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Derive the session phase.
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Unknown
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }
}
