//! Access verdict and evaluation context types.
//!
//! The route policy consumes an `AccessContext` and produces an
//! `AccessVerdict`. Protected views render only on `Allow`.

use serde::{Deserialize, Serialize};

use crate::session::{Role, Session};

/// Why the guard sent the user somewhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    /// No session, or the stored session is not authenticated.
    Unauthenticated,
    /// The session's role differs from the role the view requires.
    RoleMismatch { required: Role, actual: Role },
}

/// The decision the route policy emits for one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessVerdict {
    /// The wrapped view may render.
    Allow,

    /// The view must not render; navigate to `to` instead.
    Redirect {
        /// The route to push onto the navigator.
        to: String,
        reason: RedirectReason,
    },
}

impl AccessVerdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, AccessVerdict::Allow)
    }
}

/// Everything the route policy needs to decide one navigation.
///
/// Built by the guard from the current path, the role its view requires, and
/// a synchronous read of the session store.
#[derive(Debug, Clone)]
pub struct AccessContext {
    /// The path being navigated to, e.g. `/doctor/dashboard`.
    pub path: String,
    /// The role the wrapped view demands, if any.
    pub required_role: Option<Role>,
    /// The current session. Corrupt or unreadable state arrives here as `None`.
    pub session: Option<Session>,
}
