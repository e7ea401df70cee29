//! Continuous world coordinates and the cell ↔ world boundary conversions.
//!
//! The engine reasons on the discrete grid; agents move through continuous
//! space.  These helpers own the mapping between the two, parameterised by
//! the configured cell size.  `WorldPos` uses `f32` — per-tick steps are
//! small relative to cell size, so single precision is ample.

use std::fmt;

use crate::Cell;

/// A continuous position in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: WorldPos) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Boundary conversions ──────────────────────────────────────────────────────

/// World position of the centre of `cell`.
///
/// Waypoints and spawn positions use cell centres so agents travel along the
/// middle of corridors rather than hugging cell corners.
#[inline]
pub fn cell_to_world(cell: Cell, cell_size: f32) -> WorldPos {
    WorldPos {
        x: (cell.col as f32 + 0.5) * cell_size,
        y: (cell.row as f32 + 0.5) * cell_size,
    }
}

/// The cell containing `pos` (floor division; negative positions map to
/// negative cells, which are simply out of bounds for any grid).
#[inline]
pub fn world_to_cell(pos: WorldPos, cell_size: f32) -> Cell {
    Cell {
        row: (pos.y / cell_size).floor() as i32,
        col: (pos.x / cell_size).floor() as i32,
    }
}
