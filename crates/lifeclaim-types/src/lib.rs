//! Shared identity types for the Lifeclaim automaton.
//!
//! The grid engine never interprets owners. It only stores and compares
//! them, so the identity type lives here where both the engine and the
//! drivers around it can name it.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for owner and listener identifiers

pub mod ids;

pub use ids::{ListenerId, OwnerId};
