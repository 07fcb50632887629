//! Error types for the `lifeclaim-grid` crate.
//!
//! All fallible operations in this crate return [`GridError`] through the
//! standard [`Result`] type. Every check happens before any state is
//! touched, so a failed call leaves the grid exactly as it was.

/// Errors that can occur during grid construction or indexed access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// One of the axes is below the 3-cell minimum.
    #[error("grid must be at least 3x3, got {columns}x{rows}")]
    InvalidDimension {
        /// Requested column count.
        columns: usize,
        /// Requested row count.
        rows: usize,
    },

    /// The total cell count would reach or exceed the 10000-cell ceiling.
    #[error("grid must be less than 10000 cells, got {columns}x{rows}")]
    GridTooLarge {
        /// Requested column count.
        columns: usize,
        /// Requested row count.
        rows: usize,
    },

    /// A coordinate falls outside `[0, columns) x [0, rows)`.
    #[error("coordinate ({x}, {y}) is outside the {columns}x{rows} grid")]
    IndexOutOfRange {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid width.
        columns: usize,
        /// Grid height.
        rows: usize,
    },
}
