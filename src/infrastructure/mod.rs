//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`session`] - Signed session token codec

pub mod persistence;
pub mod session;
