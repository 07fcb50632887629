//! Dense owner-tagged grid and the generation-advance rule.
//!
//! The [`Grid`] stores one [`Cell`] per coordinate in a flat buffer of
//! `columns * rows` entries, row-major: `idx(x, y) = y * columns + x`.
//! Dimensions are fixed at construction.
//!
//! # Transition rule
//!
//! Each coordinate is evaluated against the current generation only:
//!
//! | current | live neighbors | next                          |
//! |---------|----------------|-------------------------------|
//! | alive   | exactly 3      | alive, owned by the advancer  |
//! | alive   | anything else  | dead                          |
//! | dead    | exactly 3      | alive, owned by the advancer  |
//! | dead    | anything else  | dead                          |
//!
//! Survival needs exactly three neighbors, not the classic two-or-three,
//! and a survivor is re-tagged with the advancing owner.

use std::collections::BTreeMap;

use lifeclaim_types::OwnerId;
use serde::Serialize;

use crate::cell::{Cell, Position};
use crate::error::GridError;

/// Smallest permitted extent of either axis.
pub const MIN_DIMENSION: usize = 3;

/// Exclusive upper bound on `columns * rows`.
pub const MAX_CELLS: usize = 10_000;

/// Neighbor count at which a dead cell is born or a live cell survives.
const STABLE_NEIGHBORS: u32 = 3;

/// Outcome of a single generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// The owner that triggered the step and now holds every live cell.
    pub owner: OwnerId,
    /// Dead cells that came alive.
    pub births: usize,
    /// Live cells that stayed alive.
    pub survivals: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
}

impl GenerationReport {
    const fn empty(owner: OwnerId) -> Self {
        Self {
            owner,
            births: 0,
            survivals: 0,
            deaths: 0,
            population: 0,
        }
    }
}

/// The automaton board for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    /// Row-major cell buffer; every cell's position matches its slot.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of dead, unowned cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either axis is below
    /// [`MIN_DIMENSION`], or [`GridError::GridTooLarge`] if
    /// `columns * rows` would reach [`MAX_CELLS`].
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns < MIN_DIMENSION || rows < MIN_DIMENSION {
            return Err(GridError::InvalidDimension { columns, rows });
        }
        let fits = columns
            .checked_mul(rows)
            .is_some_and(|total| total < MAX_CELLS);
        if !fits {
            return Err(GridError::GridTooLarge { columns, rows });
        }
        Ok(Self::blank(columns, rows))
    }

    /// Allocate a dead grid without re-validating dimensions.
    fn blank(columns: usize, rows: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| Cell::dead_at(Position::new(x, y))))
            .collect();
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Number of columns.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Whether `(x, y)` lies inside the grid.
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns && y < self.rows
    }

    /// Get the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside
    /// the grid.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let idx = self.index(x, y)?;
        self.cells.get(idx).ok_or_else(|| self.out_of_range(x, y))
    }

    /// Get a mutable reference to the cell at `(x, y)`.
    ///
    /// Changes made through the reference are part of the grid; there is
    /// no copy.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside
    /// the grid.
    pub fn get_cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GridError> {
        let idx = self.index(x, y)?;
        let err = self.out_of_range(x, y);
        self.cells.get_mut(idx).ok_or(err)
    }

    /// Store `cell` at `(x, y)`, overwriting its position with `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside
    /// the grid. Nothing is written in that case.
    pub fn set_cell(&mut self, x: usize, y: usize, mut cell: Cell) -> Result<(), GridError> {
        let slot = self.get_cell_mut(x, y)?;
        cell.set_position(Position::new(x, y));
        *slot = cell;
        Ok(())
    }

    /// Assign `owner` to the cell at `(x, y)`, or kill it with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside
    /// the grid.
    pub fn set_owner(&mut self, x: usize, y: usize, owner: Option<OwnerId>) -> Result<(), GridError> {
        self.get_cell_mut(x, y)?.set_owner(owner);
        Ok(())
    }

    /// Count live cells in the Moore neighborhood of `(x, y)`.
    ///
    /// Neighbors outside the grid are skipped (no wraparound), so edge
    /// cells have at most 5 neighbors and corner cells at most 3.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `(x, y)` itself is outside
    /// the grid.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u32, GridError> {
        self.index(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    /// Advance one generation on behalf of `owner`.
    ///
    /// The next generation is computed into a fresh grid and then swapped
    /// in; the current cells stay untouched until the swap.
    pub fn advance(&mut self, owner: OwnerId) {
        let _ = self.advance_with_report(owner);
    }

    /// Advance one generation and report what changed.
    pub fn advance_with_report(&mut self, owner: OwnerId) -> GenerationReport {
        let mut next = Self::blank(self.columns, self.rows);
        let mut report = GenerationReport::empty(owner);

        for (current, successor) in self.cells.iter().zip(next.cells.iter_mut()) {
            let Position { x, y } = current.position();
            let neighbors = self.live_neighbors(x, y);
            match (current.is_alive(), neighbors == STABLE_NEIGHBORS) {
                (true, true) => {
                    successor.set_owner(Some(owner));
                    report.survivals = report.survivals.saturating_add(1);
                }
                (true, false) => {
                    successor.set_alive(false);
                    report.deaths = report.deaths.saturating_add(1);
                }
                (false, true) => {
                    successor.set_owner(Some(owner));
                    report.births = report.births.saturating_add(1);
                }
                (false, false) => {}
            }
        }

        report.population = report.survivals.saturating_add(report.births);
        self.cells = next.cells;
        report
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_alive())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    /// Number of live cells held by `owner`.
    pub fn population_of(&self, owner: OwnerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(owner))
            .count()
    }

    /// Live-cell counts grouped by owner. Owners with no cells are absent.
    pub fn populations_by_owner(&self) -> BTreeMap<OwnerId, usize> {
        let mut counts: BTreeMap<OwnerId, usize> = BTreeMap::new();
        for owner in self.cells.iter().filter_map(Cell::owner) {
            let entry = counts.entry(owner).or_default();
            *entry = entry.saturating_add(1);
        }
        counts
    }

    /// Whether `other` has the same dimensions and the same live/dead
    /// layout. Owners are ignored.
    pub fn same_layout(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.rows == other.rows
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.is_alive() == b.is_alive())
    }

    // -------------------------------------------------------------------
    // Indexing
    // -------------------------------------------------------------------

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.contains(x, y) {
            return Err(self.out_of_range(x, y));
        }
        y.checked_mul(self.columns)
            .and_then(|row_start| row_start.checked_add(x))
            .ok_or_else(|| self.out_of_range(x, y))
    }

    /// Cell at `(x, y)` or `None` when outside the grid.
    fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).ok().and_then(|idx| self.cells.get(idx))
    }

    /// Moore-neighborhood count for an in-bounds center. Out-of-grid
    /// neighbors are clipped by `cell_at`; the low edge by `saturating_sub`.
    fn live_neighbors(&self, x: usize, y: usize) -> u32 {
        let mut count: u32 = 0;
        for ny in y.saturating_sub(1)..=y.saturating_add(1) {
            for nx in x.saturating_sub(1)..=x.saturating_add(1) {
                if nx == x && ny == y {
                    continue;
                }
                if self.cell_at(nx, ny).is_some_and(Cell::is_alive) {
                    count = count.saturating_add(1);
                }
            }
        }
        count
    }

    const fn out_of_range(&self, x: usize, y: usize) -> GridError {
        GridError::IndexOutOfRange {
            x,
            y,
            columns: self.columns,
            rows: self.rows,
        }
    }
}
