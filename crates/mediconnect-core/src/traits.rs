//! Seams of the portal core.
//!
//! The session, the route policy, the router, id generation and the wall
//! clock are all injected through these traits:
//!
//! - `KeyValueStore`: durable string storage holding the session record
//! - `RoutePolicy`: decides whether a navigation may render
//! - `Navigator`: receives redirects issued by the guard
//! - `IdProvider`: supplies identifiers for created records
//! - `Clock`: supplies "now" for record dates and timestamps

use chrono::{DateTime, Utc};

use mediconnect_contracts::{
    access::{AccessContext, AccessVerdict},
    error::PortalResult,
    session::Role,
};

/// Durable key-value storage, the stand-in for browser local storage.
///
/// Writes must be visible to the next read immediately. There is no
/// buffering and no transaction.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`. `Ok(None)` means nothing is stored.
    fn get(&self, key: &str) -> PortalResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> PortalResult<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> PortalResult<()>;
}

/// Route-level authorization.
///
/// Implementations are pure and synchronous: the guard calls `evaluate` on
/// every path change and expects an answer immediately.
pub trait RoutePolicy: Send + Sync {
    /// Decide whether the navigation described by `ctx` may render.
    fn evaluate(&self, ctx: &AccessContext) -> AccessVerdict;

    /// The role a path's section demands, if the path lies in one.
    ///
    /// Used to pick the guard's required role from the path alone, the way a
    /// section layout wraps all of its pages.
    fn section_role(&self, path: &str) -> Option<Role>;
}

/// The router that redirects are pushed onto.
pub trait Navigator: Send + Sync {
    /// Navigate to `route`.
    fn push(&self, route: &str);
}

/// Source of identifiers for records created through the facade.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
