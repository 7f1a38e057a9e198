//! The portal context.
//!
//! `Portal` owns one of everything the views need: the session store, the
//! route policy, the login service, the mock backend and the router. Views
//! get a guard for their path from `guard_for`, which picks the required role
//! from the section the path lies in.

use std::sync::Arc;

use tracing::debug;

use mediconnect_contracts::{
    error::PortalResult,
    session::{LoginRequest, Role, Session},
};
use mediconnect_core::{
    traits::{KeyValueStore, Navigator, RoutePolicy},
    AccessGuard, AuthService, GuardState, SessionStore,
};
use mediconnect_mock::{LatencyProfile, MockRemote};
use mediconnect_policy::{MenuItem, TomlRoutePolicy};

use crate::router::HistoryNavigator;

/// The result of visiting a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The view at `path` renders.
    Render { path: String },
    /// The guard sent the user from `from` to `to`.
    Redirect { from: String, to: String },
}

impl Navigation {
    pub fn is_render(&self) -> bool {
        matches!(self, Navigation::Render { .. })
    }
}

pub struct Portal {
    sessions: SessionStore,
    policy: Arc<TomlRoutePolicy>,
    auth: AuthService,
    remote: MockRemote,
    navigator: HistoryNavigator,
}

impl Portal {
    /// A portal over `store` and `policy` with default latencies.
    pub fn new(store: Arc<dyn KeyValueStore>, policy: TomlRoutePolicy) -> Self {
        let sessions = SessionStore::new(store);
        Self {
            auth: AuthService::new(sessions.clone()),
            sessions,
            policy: Arc::new(policy),
            remote: MockRemote::new(),
            navigator: HistoryNavigator::new(),
        }
    }

    /// Apply `latency` to both the backend and login.
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.auth = AuthService::new(self.sessions.clone()).with_latency(latency.login);
        self.remote = self.remote.with_latency(latency);
        self
    }

    /// Replace the backend, keeping the login latency as configured.
    pub fn with_remote(mut self, remote: MockRemote) -> Self {
        self.remote = remote;
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn policy(&self) -> &TomlRoutePolicy {
        &self.policy
    }

    pub fn remote(&self) -> &MockRemote {
        &self.remote
    }

    pub fn navigator(&self) -> &HistoryNavigator {
        &self.navigator
    }

    /// A guard for `path`, requiring the role of the section it lies in.
    pub fn guard_for(&self, path: &str) -> AccessGuard {
        let required_role = self.policy.section_role(path);
        AccessGuard::new(
            self.policy.clone(),
            self.sessions.clone(),
            Arc::new(self.navigator.clone()),
            required_role,
        )
    }

    /// Navigate to `path` through its guard.
    pub fn visit(&self, path: &str) -> Navigation {
        let before = self.navigator.len();
        let mut guard = self.guard_for(path);

        match guard.navigate(path) {
            GuardState::Allowed => Navigation::Render {
                path: path.to_string(),
            },
            GuardState::Checking => {
                let to = if self.navigator.len() > before {
                    self.navigator.current()
                } else {
                    None
                };
                Navigation::Redirect {
                    from: path.to_string(),
                    to: to.unwrap_or_else(|| self.policy.login_route().to_string()),
                }
            }
        }
    }

    /// Log in and go to the home route of the new session's role.
    pub async fn login(&self, request: LoginRequest) -> PortalResult<Session> {
        let session = self.auth.login(request).await?;
        self.navigator.push(self.policy.home_route(session.role));
        Ok(session)
    }

    /// Log out and go to the login page.
    pub async fn logout(&self) -> PortalResult<()> {
        self.auth.logout().await?;
        self.navigator.push(self.policy.login_route());
        Ok(())
    }

    pub fn menu(&self, role: Role) -> Vec<MenuItem> {
        self.policy.menu(role)
    }

    /// The menu for the signed-in role. Empty without an authenticated session.
    pub fn current_menu(&self) -> Vec<MenuItem> {
        match self.sessions.current() {
            Some(session) if session.authenticated => self.menu(session.role),
            _ => {
                debug!("no authenticated session; menu is empty");
                Vec::new()
            }
        }
    }
}
