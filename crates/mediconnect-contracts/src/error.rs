//! Error types for the MediConnect portal core.
//!
//! Most of the portal never fails: facade calls resolve with fixture data and
//! login accepts any credentials. The variants here cover what is left: the
//! backing store, session encoding, and configuration loading.

use thiserror::Error;

/// The unified error type for the portal crates.
#[derive(Debug, Error)]
pub enum PortalError {
    /// The key-value store holding the session could not be read or written.
    #[error("session storage error: {reason}")]
    Storage { reason: String },

    /// A session record could not be encoded for persistence.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A route policy or latency profile is missing, malformed, or inconsistent.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Shown on the login form when a login is rejected.
    ///
    /// Login never rejects today, so nothing constructs this variant. It is
    /// kept so a credential check can be added without changing the API.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Convenience alias used throughout the portal crates.
pub type PortalResult<T> = Result<T, PortalError>;
