//! Session identity types.
//!
//! A `Session` is the persisted record of who is logged in. It is either
//! absent or fully populated; there is no partial or expired state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The storage key under which the serialized session lives.
pub const SESSION_KEY: &str = "mediconnect.user";

/// The closed set of portal roles.
///
/// A role selects the route tree a session may enter and the fixture subset
/// its views load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Patient,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 2] = [Role::Doctor, Role::Patient];

    /// The lowercase name used in storage, policy files and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The persisted identity of the current user.
///
/// Field names on the wire match the record the portal has always stored:
/// `email, role, name, id, licenseId, isAuthenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: Role,
    /// Display name shown in the sidebar and used as note/prescription author.
    pub name: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,
    #[serde(rename = "isAuthenticated")]
    pub authenticated: bool,
}

/// Credentials submitted by the login form.
///
/// The password is accepted and never checked.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Doctors enter a license id on the login form; patients do not.
    pub license_id: Option<String>,
}

/// The outcome of reading the session key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLookup {
    /// A well-formed session record is stored.
    Active(Session),
    /// Nothing is stored under the session key.
    Empty,
    /// Something is stored but it could not be read or decoded.
    Corrupt { reason: String },
}

impl SessionLookup {
    /// Collapse the lookup into the session, treating corrupt state as absent.
    pub fn into_session(self) -> Option<Session> {
        match self {
            SessionLookup::Active(session) => Some(session),
            SessionLookup::Empty | SessionLookup::Corrupt { .. } => None,
        }
    }
}
