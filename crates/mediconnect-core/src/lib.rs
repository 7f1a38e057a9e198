//! # mediconnect-core
//!
//! The session and authorization core of the MediConnect portal.
//!
//! This crate provides:
//! - The injection seams (`KeyValueStore`, `RoutePolicy`, `Navigator`,
//!   `IdProvider`, `Clock`)
//! - `SessionStore` and `AuthService`, which own the persisted session
//! - `AccessGuard`, the per-navigation gate in front of protected views
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mediconnect_core::{AccessGuard, SessionStore};
//!
//! let sessions = SessionStore::new(store);
//! let mut guard = AccessGuard::new(policy, sessions, navigator, Some(Role::Doctor));
//! guard.navigate("/doctor/dashboard");
//! ```

pub mod guard;
pub mod session;
pub mod traits;

pub use guard::{AccessGuard, GuardState, Rendered};
pub use session::{AuthService, SessionStore};
