//! Maze-subsystem error type.

use thiserror::Error;

use gs_core::Cell;

/// Errors produced by `gs-maze`.
///
/// All variants are precondition failures raised before any cell is
/// mutated — a failed generation leaves the grid in its prior state.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("grid too small to carve: {rows}x{cols}")]
    GridTooSmall { rows: u32, cols: u32 },

    #[error("carve start {cell} must be an in-bounds even-coordinate room")]
    BadStart { cell: Cell },
}

pub type MazeResult<T> = Result<T, MazeError>;
