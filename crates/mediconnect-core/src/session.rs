//! Session store and login service.
//!
//! `SessionStore` is the injectable session context: a thin typed layer over a
//! `KeyValueStore` holding one JSON record under `SESSION_KEY`. `AuthService`
//! creates and destroys that record.
//!
//! Login performs no credential check. Any email and password succeed for
//! either role; the stored name and id are canned per role. This is the
//! portal's current contract, not a security boundary.

use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use mediconnect_contracts::{
    error::{PortalError, PortalResult},
    session::{LoginRequest, Role, Session, SessionLookup, SESSION_KEY},
};

use crate::traits::KeyValueStore;

/// How long a login takes to resolve unless configured otherwise.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

/// The display name and id every session of `role` receives.
pub fn canned_identity(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::Doctor => ("Dr. Jane Smith", "DOC123"),
        Role::Patient => ("John Doe", "PAT456"),
    }
}

// ── SessionStore ─────────────────────────────────────────────────────────────

/// Typed access to the persisted session.
///
/// Cheap to clone; clones share the same backing store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the session key and classify what is there.
    ///
    /// A storage read failure is reported as `Corrupt`: in both cases the
    /// caller holds no usable session and must not treat the user as logged in.
    pub fn lookup(&self) -> SessionLookup {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SessionLookup::Empty,
            Err(e) => {
                warn!(key = SESSION_KEY, error = %e, "session read failed");
                return SessionLookup::Corrupt { reason: e.to_string() };
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => SessionLookup::Active(session),
            Err(e) => {
                warn!(key = SESSION_KEY, error = %e, "stored session is not decodable");
                SessionLookup::Corrupt {
                    reason: format!("failed to decode stored session: {}", e),
                }
            }
        }
    }

    /// The current session, or `None` when unset or unreadable.
    pub fn current(&self) -> Option<Session> {
        self.lookup().into_session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some_and(|s| s.authenticated)
    }

    pub fn role(&self) -> Option<Role> {
        self.current().map(|s| s.role)
    }

    /// Persist `session`, replacing whatever was stored.
    pub fn save(&self, session: &Session) -> PortalResult<()> {
        let raw = serde_json::to_string(session).map_err(|e| PortalError::Serialization {
            reason: format!("failed to encode session: {}", e),
        })?;
        self.store.set(SESSION_KEY, &raw)
    }

    /// Delete the stored session. Clearing an empty store is a no-op.
    pub fn clear(&self) -> PortalResult<()> {
        self.store.remove(SESSION_KEY)
    }
}

// ── AuthService ──────────────────────────────────────────────────────────────

/// Creates and destroys sessions.
pub struct AuthService {
    sessions: SessionStore,
    latency: Duration,
}

impl AuthService {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions,
            latency: DEFAULT_LOGIN_LATENCY,
        }
    }

    /// Override the simulated login delay.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Log in with any credentials.
    ///
    /// Waits the login latency, then stores a fully populated, authenticated
    /// session for `request.role` and returns it. The password is ignored.
    /// Only a storage failure produces an error.
    pub async fn login(&self, request: LoginRequest) -> PortalResult<Session> {
        debug!(role = %request.role, latency_ms = self.latency.as_millis() as u64, "login requested");
        tokio::time::sleep(self.latency).await;

        let (name, id) = canned_identity(request.role);
        let session = Session {
            email: request.email,
            role: request.role,
            name: name.to_string(),
            id: id.to_string(),
            license_id: request.license_id,
            authenticated: true,
        };
        self.sessions.save(&session)?;

        info!(role = %session.role, user_id = %session.id, "session created");
        Ok(session)
    }

    /// Destroy the current session, if any. Resolves immediately.
    pub async fn logout(&self) -> PortalResult<()> {
        self.sessions.clear()?;
        info!("session cleared");
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use mediconnect_contracts::{
        error::{PortalError, PortalResult},
        session::{LoginRequest, Role, Session, SessionLookup, SESSION_KEY},
    };

    use crate::traits::KeyValueStore;

    use super::{AuthService, SessionStore, DEFAULT_LOGIN_LATENCY};

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// A map-backed store that every clone shares.
    #[derive(Clone, Default)]
    struct MockStore {
        values: Arc<Mutex<HashMap<String, String>>>,
    }

    impl KeyValueStore for MockStore {
        fn get(&self, key: &str) -> PortalResult<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> PortalResult<()> {
            self.values.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> PortalResult<()> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// A store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> PortalResult<Option<String>> {
            Err(PortalError::Storage { reason: "disk unavailable".to_string() })
        }

        fn set(&self, _key: &str, _value: &str) -> PortalResult<()> {
            Err(PortalError::Storage { reason: "disk unavailable".to_string() })
        }

        fn remove(&self, _key: &str) -> PortalResult<()> {
            Err(PortalError::Storage { reason: "disk unavailable".to_string() })
        }
    }

    fn request(role: Role) -> LoginRequest {
        LoginRequest {
            email: "someone@example.com".to_string(),
            password: "hunter2".to_string(),
            role,
            license_id: None,
        }
    }

    fn auth(store: &MockStore) -> AuthService {
        AuthService::new(SessionStore::new(Arc::new(store.clone()))).with_latency(Duration::ZERO)
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    #[test]
    fn lookup_on_empty_store_is_empty() {
        let sessions = SessionStore::new(Arc::new(MockStore::default()));
        assert_eq!(sessions.lookup(), SessionLookup::Empty);
        assert_eq!(sessions.current(), None);
        assert!(!sessions.is_authenticated());
        assert_eq!(sessions.role(), None);
    }

    #[test]
    fn undecodable_record_is_corrupt_not_an_error() {
        let store = MockStore::default();
        store.set(SESSION_KEY, "{not json").unwrap();
        let sessions = SessionStore::new(Arc::new(store));

        match sessions.lookup() {
            SessionLookup::Corrupt { reason } => {
                assert!(reason.contains("failed to decode"), "unexpected reason: {reason}");
            }
            other => panic!("expected Corrupt, got {:?}", other),
        }
        assert_eq!(sessions.current(), None);
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn storage_failure_reads_as_corrupt() {
        let sessions = SessionStore::new(Arc::new(BrokenStore));
        assert!(matches!(sessions.lookup(), SessionLookup::Corrupt { .. }));
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn unauthenticated_record_is_present_but_not_authenticated() {
        let store = MockStore::default();
        let sessions = SessionStore::new(Arc::new(store));
        let session = Session {
            email: "x@y.z".to_string(),
            role: Role::Patient,
            name: "John Doe".to_string(),
            id: "PAT456".to_string(),
            license_id: None,
            authenticated: false,
        };
        sessions.save(&session).unwrap();

        assert_eq!(sessions.current(), Some(session));
        assert!(!sessions.is_authenticated());
        assert_eq!(sessions.role(), Some(Role::Patient));
    }

    // ── Login / logout ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_yields_requested_role_with_canned_identity() {
        let store = MockStore::default();
        let auth = auth(&store);

        let doctor = auth
            .login(LoginRequest {
                license_id: Some("MD-4411".to_string()),
                ..request(Role::Doctor)
            })
            .await
            .unwrap();
        assert_eq!(doctor.role, Role::Doctor);
        assert_eq!(doctor.name, "Dr. Jane Smith");
        assert_eq!(doctor.id, "DOC123");
        assert_eq!(doctor.license_id.as_deref(), Some("MD-4411"));
        assert!(doctor.authenticated);
        assert_eq!(auth.sessions().current(), Some(doctor));

        let patient = auth.login(request(Role::Patient)).await.unwrap();
        assert_eq!(patient.role, Role::Patient);
        assert_eq!(patient.name, "John Doe");
        assert_eq!(patient.id, "PAT456");
        assert_eq!(auth.sessions().role(), Some(Role::Patient));
    }

    #[tokio::test]
    async fn login_accepts_any_password() {
        let store = MockStore::default();
        let auth = auth(&store);

        for password in ["", "wrong", "correct horse battery staple"] {
            let session = auth
                .login(LoginRequest {
                    password: password.to_string(),
                    ..request(Role::Doctor)
                })
                .await
                .unwrap();
            assert_eq!(session.role, Role::Doctor);
        }
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let store = MockStore::default();
        let auth = auth(&store);

        auth.logout().await.unwrap();
        auth.login(request(Role::Patient)).await.unwrap();
        auth.logout().await.unwrap();
        auth.logout().await.unwrap();

        assert_eq!(auth.sessions().lookup(), SessionLookup::Empty);
    }

    #[tokio::test]
    async fn current_session_is_stable_between_mutations() {
        let store = MockStore::default();
        let auth = auth(&store);
        auth.login(request(Role::Doctor)).await.unwrap();

        let first = auth.sessions().current();
        let second = auth.sessions().current();
        let third = auth.sessions().current();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn login_surfaces_storage_failure() {
        let auth = AuthService::new(SessionStore::new(Arc::new(BrokenStore)))
            .with_latency(Duration::ZERO);
        match auth.login(request(Role::Doctor)).await {
            Err(PortalError::Storage { reason }) => assert!(reason.contains("disk unavailable")),
            other => panic!("expected Storage error, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_the_configured_latency() {
        let store = MockStore::default();
        let auth = AuthService::new(SessionStore::new(Arc::new(store)));

        let started = tokio::time::Instant::now();
        auth.login(request(Role::Patient)).await.unwrap();
        assert!(started.elapsed() >= DEFAULT_LOGIN_LATENCY);
    }
}
