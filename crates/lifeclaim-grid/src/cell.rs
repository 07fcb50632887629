//! Per-coordinate simulation state.
//!
//! A [`Cell`] pairs a [`CellState`] with the [`Position`] of the slot it
//! occupies. Liveness is not stored on its own: a cell is alive exactly when
//! its state is [`CellState::Owned`]. That makes "alive but unowned" and
//! "dead but owned" unrepresentable.

use lifeclaim_types::OwnerId;
use serde::{Deserialize, Serialize};

/// Integer coordinate of a cell within its grid.
///
/// `x` indexes columns and `y` indexes rows, both zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Create a position from a column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Liveness and ownership of a single cell, collapsed into one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No owner; the cell is dead.
    #[default]
    Dead,
    /// Alive and attributed to the given owner.
    Owned(OwnerId),
}

/// Simulation state of one grid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    state: CellState,
    position: Position,
}

impl Cell {
    /// Create a dead, unowned cell at the origin.
    ///
    /// The position is overwritten when the cell is stored into a grid.
    pub const fn new() -> Self {
        Self {
            state: CellState::Dead,
            position: Position::new(0, 0),
        }
    }

    /// Create a live cell owned by `owner`, positioned at the origin.
    pub const fn owned_by(owner: OwnerId) -> Self {
        Self {
            state: CellState::Owned(owner),
            position: Position::new(0, 0),
        }
    }

    /// Create a dead cell already placed at `position`.
    pub(crate) const fn dead_at(position: Position) -> Self {
        Self {
            state: CellState::Dead,
            position,
        }
    }

    /// Whether the cell is alive.
    pub const fn is_alive(&self) -> bool {
        matches!(self.state, CellState::Owned(_))
    }

    /// The owner of a live cell, or `None` for a dead one.
    pub const fn owner(&self) -> Option<OwnerId> {
        match self.state {
            CellState::Owned(owner) => Some(owner),
            CellState::Dead => None,
        }
    }

    /// The combined liveness/ownership state.
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// The coordinate this cell occupies.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Assign or clear the owner.
    ///
    /// `Some` makes the cell alive under that owner; `None` kills it.
    pub const fn set_owner(&mut self, owner: Option<OwnerId>) {
        self.state = match owner {
            Some(owner) => CellState::Owned(owner),
            None => CellState::Dead,
        };
    }

    /// Set liveness directly.
    ///
    /// `false` kills the cell and clears its owner. `true` leaves the cell
    /// untouched: a cell can only come alive through [`Cell::set_owner`].
    pub const fn set_alive(&mut self, alive: bool) {
        if !alive {
            self.state = CellState::Dead;
        }
    }

    pub(crate) const fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
