//! # mediconnect-contracts
//!
//! Shared types for the MediConnect portal core.
//!
//! Every crate in the workspace imports from here. No behaviour lives in this
//! crate, only data definitions and the error type.

pub mod access;
pub mod error;
pub mod records;
pub mod session;
