//! TOML-driven route policy implementation.
//!
//! `TomlRoutePolicy` loads a `RoutePolicyConfig` from a TOML string or file
//! and implements the `RoutePolicy` trait from mediconnect-core.
//!
//! Evaluation algorithm:
//!
//! 1. If the path is in `public_routes` → `Allow`.
//! 2. If there is no session, or it is not authenticated → redirect to
//!    `login_route`.
//! 3. If a role is required and the session's role differs → redirect to the
//!    home route of the session's role.
//! 4. Otherwise → `Allow`.

use std::path::Path;

use tracing::debug;

use mediconnect_contracts::{
    access::{AccessContext, AccessVerdict, RedirectReason},
    error::{PortalError, PortalResult},
    session::Role,
};
use mediconnect_core::traits::RoutePolicy;

use crate::rule::{MenuItem, RoutePolicyConfig};

/// The route policy the portal ships with.
pub const DEFAULT_POLICY: &str = include_str!("../policies/portal.toml");

/// A `RoutePolicy` implementation that reads its rules from a TOML document.
///
/// ```rust,ignore
/// use mediconnect_policy::TomlRoutePolicy;
///
/// let policy = TomlRoutePolicy::from_file(Path::new("policies/portal.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct TomlRoutePolicy {
    config: RoutePolicyConfig,
}

impl TomlRoutePolicy {
    /// Parse `s` as TOML, validate it, and build a `TomlRoutePolicy`.
    ///
    /// Returns `PortalError::Config` if the TOML is malformed, does not match
    /// `RoutePolicyConfig`, or fails validation.
    pub fn from_toml_str(s: &str) -> PortalResult<Self> {
        let config: RoutePolicyConfig = toml::from_str(s).map_err(|e| PortalError::Config {
            reason: format!("failed to parse route policy TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a route policy.
    pub fn from_file(path: &Path) -> PortalResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PortalError::Config {
            reason: format!("failed to read route policy '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The embedded default policy.
    pub fn portal_default() -> PortalResult<Self> {
        Self::from_toml_str(DEFAULT_POLICY)
    }

    /// Validate `config` and wrap it.
    ///
    /// Rejected configurations:
    /// - an empty `login_route`
    /// - a `login_route` that is not itself public (every redirect would loop)
    /// - a section whose `home` lies outside its own `prefix` (role redirects
    ///   would loop)
    /// - a role with no section, and therefore no home route
    pub fn from_config(config: RoutePolicyConfig) -> PortalResult<Self> {
        if config.login_route.is_empty() {
            return Err(PortalError::Config {
                reason: "login_route must not be empty".to_string(),
            });
        }
        if !config.public_routes.contains(&config.login_route) {
            return Err(PortalError::Config {
                reason: format!(
                    "login_route '{}' must be listed in public_routes",
                    config.login_route
                ),
            });
        }
        for section in &config.sections {
            if !section.contains(&section.home) {
                return Err(PortalError::Config {
                    reason: format!(
                        "section '{}' has home '{}' outside its prefix '{}'",
                        section.id, section.home, section.prefix
                    ),
                });
            }
        }
        for role in Role::ALL {
            if !config.sections.iter().any(|s| s.role == role) {
                return Err(PortalError::Config {
                    reason: format!("no section declares a home route for role '{}'", role),
                });
            }
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &RoutePolicyConfig {
        &self.config
    }

    pub fn login_route(&self) -> &str {
        &self.config.login_route
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.config.public_routes.iter().any(|p| p == path)
    }

    /// The landing route for `role`.
    pub fn home_route(&self, role: Role) -> &str {
        self.config
            .sections
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.home.as_str())
            // from_config guarantees a section per role.
            .unwrap_or(self.config.login_route.as_str())
    }

    /// The navigation entries for `role`, in declaration order.
    pub fn menu(&self, role: Role) -> Vec<MenuItem> {
        self.config
            .menu
            .iter()
            .filter(|item| item.role == role)
            .cloned()
            .collect()
    }
}

impl RoutePolicy for TomlRoutePolicy {
    fn evaluate(&self, ctx: &AccessContext) -> AccessVerdict {
        if self.is_public(&ctx.path) {
            debug!(path = %ctx.path, "public route");
            return AccessVerdict::Allow;
        }

        let session = match &ctx.session {
            Some(session) if session.authenticated => session,
            _ => {
                debug!(path = %ctx.path, "no authenticated session");
                return AccessVerdict::Redirect {
                    to: self.config.login_route.clone(),
                    reason: RedirectReason::Unauthenticated,
                };
            }
        };

        if let Some(required) = ctx.required_role {
            if session.role != required {
                debug!(
                    path = %ctx.path,
                    required = %required,
                    actual = %session.role,
                    "role mismatch"
                );
                return AccessVerdict::Redirect {
                    to: self.home_route(session.role).to_string(),
                    reason: RedirectReason::RoleMismatch {
                        required,
                        actual: session.role,
                    },
                };
            }
        }

        AccessVerdict::Allow
    }

    fn section_role(&self, path: &str) -> Option<Role> {
        self.config
            .sections
            .iter()
            .find(|s| s.contains(path))
            .map(|s| s.role)
    }
}
