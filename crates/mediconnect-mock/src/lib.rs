//! # mediconnect-mock
//!
//! Fixture-backed mock of the MediConnect backend.
//!
//! [`MockRemote`] serves dashboards, appointments, patient charts, first-aid
//! guides, chat and transcription from hard-coded data after a simulated
//! delay taken from a [`LatencyProfile`]. Created records get their ids from
//! an injected `IdProvider` ([`SequentialIds`] or [`RandomIds`]) and are
//! appended to a [`Journal`].
//!
//! All data is fictional. No network calls are made.

pub mod clock;
pub mod facade;
pub mod fixtures;
pub mod ids;
pub mod journal;
pub mod latency;
pub mod liveness;

pub use clock::FixedClock;
pub use facade::MockRemote;
pub use ids::{RandomIds, SequentialIds};
pub use journal::{EntityKind, Journal, JournalEntry};
pub use latency::{LatencyProfile, Operation};
pub use liveness::{deliver_if_mounted, MountHandle};

// ── Tests ─────────────────────────────────────────────────────────────────────
