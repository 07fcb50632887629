//! Grid simulation engine for the Lifeclaim automaton.
//!
//! A bounded Game of Life variant where every live cell carries the
//! [`OwnerId`] of whoever caused it to be born or to survive.
//!
//! # Modules
//!
//! - [`cell`] -- [`Cell`] and its [`CellState`] sum type; liveness is
//!   derived from ownership so the two can never disagree.
//! - [`error`] -- Error types for grid construction and indexed access.
//! - [`grid`] -- The dense [`Grid`], Moore-neighborhood counting, and the
//!   generation-advance rule.
//!
//! [`OwnerId`]: lifeclaim_types::OwnerId

pub mod cell;
pub mod error;
pub mod grid;

// Re-export primary types at crate root.
pub use cell::{Cell, CellState, Position};
pub use error::GridError;
pub use grid::{GenerationReport, Grid, MAX_CELLS, MIN_DIMENSION};
