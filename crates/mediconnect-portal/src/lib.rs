//! # mediconnect-portal
//!
//! One context object for the MediConnect portal.
//!
//! [`Portal`] ties a session store, the route policy, the login service, the
//! mock backend and a [`HistoryNavigator`] together. It hands out an
//! [`AccessGuard`](mediconnect_core::AccessGuard) per path, with the required
//! role taken from the path's section, and serves each role's navigation menu.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let portal = Portal::new(Arc::new(InMemoryStore::new()), TomlRoutePolicy::portal_default()?);
//! portal.login(request).await?;
//! assert!(portal.visit("/doctor/dashboard").is_render());
//! ```

pub mod portal;
pub mod router;

pub use portal::{Navigation, Portal};
pub use router::HistoryNavigator;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use mediconnect_contracts::session::{LoginRequest, Role, Session, SESSION_KEY};
    use mediconnect_core::{traits::KeyValueStore, GuardState, Rendered, SessionStore};
    use mediconnect_mock::LatencyProfile;
    use mediconnect_policy::TomlRoutePolicy;
    use mediconnect_storage::InMemoryStore;

    use super::{Navigation, Portal};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn portal_over(store: InMemoryStore) -> Portal {
        Portal::new(Arc::new(store), TomlRoutePolicy::portal_default().unwrap())
            .with_latency(LatencyProfile::instant())
    }

    fn portal() -> Portal {
        portal_over(InMemoryStore::new())
    }

    fn request(role: Role, email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
            license_id: None,
        }
    }

    fn redirect(from: &str, to: &str) -> Navigation {
        Navigation::Redirect {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    // ── 1. public routes ──────────────────────────────────────────────────────

    #[test]
    fn first_aid_renders_without_session() {
        let portal = portal();
        assert!(portal.visit("/first-aid").is_render());
        assert!(portal.visit("/").is_render());
        assert!(portal.visit("/auth/login").is_render());
        assert!(portal.navigator().is_empty(), "no redirect expected");
    }

    // ── 2. guarded routes ─────────────────────────────────────────────────────

    #[test]
    fn doctor_dashboard_without_session_redirects_to_login() {
        let portal = portal();
        assert_eq!(
            portal.visit("/doctor/dashboard"),
            redirect("/doctor/dashboard", "/auth/login")
        );
        assert_eq!(portal.navigator().history(), ["/auth/login"]);
    }

    #[tokio::test]
    async fn patient_on_doctor_route_goes_home() {
        let portal = portal();
        portal
            .login(request(Role::Patient, "john@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(
            portal.visit("/doctor/dashboard"),
            redirect("/doctor/dashboard", "/patient/dashboard")
        );
        assert!(portal.visit("/patient/prescriptions").is_render());
    }

    #[tokio::test]
    async fn doctor_on_patient_route_goes_home() {
        let portal = portal();
        portal
            .login(request(Role::Doctor, "jane@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(
            portal.visit("/patient/dashboard"),
            redirect("/patient/dashboard", "/doctor/dashboard")
        );
        assert!(portal.visit("/doctor/patients/PAT001").is_render());
    }

    /// Routes outside both sections need a session but no particular role.
    #[tokio::test]
    async fn shared_routes_need_any_session() {
        let portal = portal();
        assert_eq!(portal.visit("/settings"), redirect("/settings", "/auth/login"));

        for role in Role::ALL {
            portal.login(request(role, "a@b.c", "x")).await.unwrap();
            assert!(portal.visit("/settings").is_render(), "{role} should reach /settings");
        }
    }

    #[tokio::test]
    async fn guard_renders_content_only_when_allowed() {
        let portal = portal();

        let mut guard = portal.guard_for("/doctor/appointments");
        assert_eq!(guard.required_role(), Some(Role::Doctor));
        assert_eq!(guard.render("appointments"), Rendered::Loading);
        assert_eq!(guard.navigate("/doctor/appointments"), GuardState::Checking);
        assert_eq!(guard.render("appointments"), Rendered::Loading);

        portal
            .login(request(Role::Doctor, "jane@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(guard.navigate("/doctor/appointments"), GuardState::Allowed);
        assert_eq!(guard.render("appointments"), Rendered::Content("appointments"));
    }

    // ── 3. login and logout ───────────────────────────────────────────────────

    #[tokio::test]
    async fn login_yields_requested_role_whatever_the_credentials() {
        let portal = portal();

        for (role, email, password) in [
            (Role::Doctor, "", ""),
            (Role::Patient, "not-an-email", "wrong"),
            (Role::Doctor, "jane@example.com", "correct horse"),
        ] {
            let session = portal.login(request(role, email, password)).await.unwrap();
            assert_eq!(session.role, role);
            assert!(session.authenticated);
            assert_eq!(portal.sessions().role(), Some(role));
        }
    }

    #[tokio::test]
    async fn login_navigates_home() {
        let portal = portal();
        portal
            .login(request(Role::Doctor, "jane@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(portal.navigator().current().as_deref(), Some("/doctor/dashboard"));

        portal
            .login(request(Role::Patient, "john@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(portal.navigator().current().as_deref(), Some("/patient/dashboard"));
    }

    #[tokio::test]
    async fn after_logout_every_protected_route_redirects_to_login() {
        let portal = portal();
        portal
            .login(request(Role::Doctor, "jane@example.com", "pw"))
            .await
            .unwrap();
        portal.logout().await.unwrap();

        assert_eq!(portal.navigator().current().as_deref(), Some("/auth/login"));
        assert!(!portal.sessions().is_authenticated());

        for path in ["/doctor/dashboard", "/patient/dashboard", "/settings", "/doctor"] {
            assert_eq!(portal.visit(path), redirect(path, "/auth/login"));
        }
    }

    #[tokio::test]
    async fn current_session_is_stable_between_calls() {
        let portal = portal();
        assert_eq!(portal.sessions().current(), None);
        assert_eq!(portal.sessions().current(), None);

        portal
            .login(request(Role::Patient, "john@example.com", "pw"))
            .await
            .unwrap();
        let first = portal.sessions().current();
        assert!(first.is_some());
        assert_eq!(portal.sessions().current(), first);
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_the_configured_latency() {
        let portal = Portal::new(
            Arc::new(InMemoryStore::new()),
            TomlRoutePolicy::portal_default().unwrap(),
        )
        .with_latency(LatencyProfile {
            login: Duration::from_millis(300),
            ..LatencyProfile::instant()
        });

        let start = tokio::time::Instant::now();
        portal
            .login(request(Role::Doctor, "jane@example.com", "pw"))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    // ── 4. corrupt session ────────────────────────────────────────────────────

    #[test]
    fn corrupt_session_counts_as_logged_out() {
        let store = InMemoryStore::new();
        store.set(SESSION_KEY, "{\"email\":").unwrap();
        let portal = portal_over(store);

        assert_eq!(
            portal.visit("/patient/dashboard"),
            redirect("/patient/dashboard", "/auth/login")
        );
        assert!(portal.current_menu().is_empty());
    }

    // ── 5. menus ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn menu_follows_the_session_role() {
        let portal = portal();
        assert!(portal.current_menu().is_empty());

        portal
            .login(request(Role::Patient, "john@example.com", "pw"))
            .await
            .unwrap();
        let titles: Vec<String> = portal.current_menu().into_iter().map(|m| m.title).collect();
        assert!(titles.contains(&"Prescriptions".to_string()));
        assert!(!titles.contains(&"Patients".to_string()));

        // Every menu entry is reachable for its own role.
        for item in portal.current_menu() {
            assert!(portal.visit(&item.path).is_render(), "{} should render", item.path);
        }
    }

    #[test]
    fn unauthenticated_record_gets_no_menu() {
        let store = InMemoryStore::new();
        let sessions = SessionStore::new(Arc::new(store.clone()));
        sessions
            .save(&Session {
                email: "jane@example.com".to_string(),
                role: Role::Doctor,
                name: "Dr. Jane Smith".to_string(),
                id: "DOC123".to_string(),
                license_id: None,
                authenticated: false,
            })
            .unwrap();
        let portal = portal_over(store);

        assert_eq!(portal.sessions().role(), Some(Role::Doctor));
        assert!(!portal.sessions().is_authenticated());
        assert_eq!(
            portal.visit("/doctor/dashboard"),
            redirect("/doctor/dashboard", "/auth/login")
        );
        assert!(portal.current_menu().is_empty());
    }

    // ── 6. backend through the portal ─────────────────────────────────────────

    #[tokio::test]
    async fn portal_backend_answers_lookups() {
        let portal = portal();
        let record = portal.remote().patient_details("PAT001").await.unwrap();
        assert_eq!(record.name, "John Doe");
        assert!(portal.remote().patient_details("UNKNOWN").await.is_none());

        let reply = portal.remote().ai_chat_response("I have a headache").await;
        assert!(reply.content.starts_with("Headaches"));
    }
}
