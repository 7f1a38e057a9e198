//! The access guard: a per-navigation gate in front of protected views.
//!
//! Every path change re-enters `Checking` and evaluates:
//!
//!   public path? → session present & authenticated? → role matches? → Allowed
//!
//! A failed check pushes a redirect onto the `Navigator` and leaves the guard
//! in `Checking`. The wrapped content is only reachable from `Allowed`, so a
//! redirected navigation never renders protected UI, not even briefly.

use std::sync::Arc;

use tracing::{debug, info};

use mediconnect_contracts::{
    access::{AccessContext, AccessVerdict},
    session::Role,
};

use crate::{
    session::SessionStore,
    traits::{Navigator, RoutePolicy},
};

/// Where the guard is in its per-navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Initial state, and where a redirected navigation stays.
    Checking,
    /// The current navigation may render. Terminal until the next path change.
    Allowed,
}

/// What the guard produces when asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<V> {
    /// A loading indicator in place of the protected view.
    Loading,
    /// The wrapped view itself.
    Content(V),
}

/// Gates one view (or one section of views) behind the session.
pub struct AccessGuard {
    policy: Arc<dyn RoutePolicy>,
    sessions: SessionStore,
    navigator: Arc<dyn Navigator>,
    required_role: Option<Role>,
    path: Option<String>,
    state: GuardState,
}

impl AccessGuard {
    /// Create a guard for views that require `required_role`, or any
    /// authenticated session when `None`.
    pub fn new(
        policy: Arc<dyn RoutePolicy>,
        sessions: SessionStore,
        navigator: Arc<dyn Navigator>,
        required_role: Option<Role>,
    ) -> Self {
        Self {
            policy,
            sessions,
            navigator,
            required_role,
            path: None,
            state: GuardState::Checking,
        }
    }

    /// Evaluate a navigation to `path` and return the resulting state.
    ///
    /// The session is read fresh on every call. Corrupt or unreadable session
    /// state counts as no session.
    pub fn navigate(&mut self, path: &str) -> GuardState {
        self.path = Some(path.to_string());
        self.state = GuardState::Checking;

        let ctx = AccessContext {
            path: path.to_string(),
            required_role: self.required_role,
            session: self.sessions.current(),
        };

        match self.policy.evaluate(&ctx) {
            AccessVerdict::Allow => {
                debug!(path = %path, "navigation allowed");
                self.state = GuardState::Allowed;
            }
            AccessVerdict::Redirect { to, reason } => {
                info!(path = %path, redirect = %to, reason = ?reason, "navigation redirected");
                self.navigator.push(&to);
            }
        }

        self.state
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// The path of the most recent navigation.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    /// Render `content` if the current navigation is allowed.
    pub fn render<V>(&self, content: V) -> Rendered<V> {
        match self.state {
            GuardState::Allowed => Rendered::Content(content),
            GuardState::Checking => Rendered::Loading,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
