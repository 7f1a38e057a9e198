//! # mediconnect-policy
//!
//! A TOML-driven route policy for the MediConnect access guard.
//!
//! ## Overview
//!
//! This crate provides [`TomlRoutePolicy`], which implements the
//! [`RoutePolicy`](mediconnect_core::traits::RoutePolicy) trait. The policy
//! file names a login route, a public allow-list, and one section per role
//! with the section's path prefix and home route.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use mediconnect_policy::TomlRoutePolicy;
//!
//! let policy = TomlRoutePolicy::portal_default()?;
//! // Pass `Arc::new(policy)` to `mediconnect_core::AccessGuard::new(...)`.
//! ```

pub mod engine;
pub mod rule;

pub use engine::{TomlRoutePolicy, DEFAULT_POLICY};
pub use rule::{MenuItem, RoutePolicyConfig, Section};

// ── Tests ─────────────────────────────────────────────────────────────────────
