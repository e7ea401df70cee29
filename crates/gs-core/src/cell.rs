//! Grid cell coordinates.
//!
//! `Cell` uses signed `i32` row/col so neighbour arithmetic can step off the
//! grid without wrapping; bounds checks live in `gs-grid`.  The derived `Ord`
//! (row-major) exists so cells can serve as a deterministic secondary key in
//! ordered structures — it carries no spatial meaning.

use std::fmt;

/// One addressable unit of the grid, identified by `(row, col)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(d_row, d_col)` — may lie outside any grid.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Cell {
        Cell {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Manhattan distance to `other` (the A* heuristic for 4-connected grids).
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// `true` if both coordinates are even — a carvable maze room (odd
    /// offsets between rooms are removable walls).
    #[inline]
    pub fn is_room(self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 0
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
