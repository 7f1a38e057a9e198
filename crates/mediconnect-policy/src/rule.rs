//! Route policy configuration schema.
//!
//! A `RoutePolicyConfig` is deserialized from TOML. It names the login route,
//! the public allow-list, one section per role, and the navigation menu each
//! role sees.

use serde::{Deserialize, Serialize};

use mediconnect_contracts::session::Role;

/// A role-owned subtree of the portal.
///
/// Example in TOML:
/// ```toml
/// [[sections]]
/// id = "doctor-area"
/// description = "Doctor views"
/// role = "doctor"
/// prefix = "/doctor"
/// home = "/doctor/dashboard"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier used in log messages.
    pub id: String,

    #[serde(default)]
    pub description: String,

    /// The role every path in this section requires.
    pub role: Role,

    /// Path prefix owning the section. `/doctor` covers `/doctor` and
    /// `/doctor/...`, but not `/doctors`.
    pub prefix: String,

    /// Where sessions of `role` land after login or a role redirect.
    pub home: String,
}

impl Section {
    /// Return true if `path` lies inside this section.
    pub fn contains(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub role: Role,
    pub title: String,
    pub path: String,
}

/// The top-level structure deserialized from a TOML route policy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePolicyConfig {
    /// Where unauthenticated navigations are sent.
    pub login_route: String,

    /// Paths that render without a session. Matched exactly.
    #[serde(default)]
    pub public_routes: Vec<String>,

    /// Role sections. Earlier sections win when prefixes overlap.
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Navigation entries, in display order.
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}
