//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`session`] - Session claims and the codec capability
//!
//! The domain layer has no dependencies on the HTTP or persistence layers;
//! infrastructure implements the traits defined here.

pub mod entities;
pub mod repositories;
pub mod session;
