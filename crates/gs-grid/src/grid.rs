//! Occupancy grid storage.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec<CellState>`; the cell at
//! `(row, col)` lives at index `row * cols + col`.  Dimensions are fixed at
//! construction, so every accessor is a bounds check plus one indexed load.

use gs_core::Cell;

/// The two occupancy states of a cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Blocked,
}

impl CellState {
    /// The other state (used by [`GridMap::toggle`]).
    #[inline]
    pub fn flipped(self) -> CellState {
        match self {
            CellState::Open => CellState::Blocked,
            CellState::Blocked => CellState::Open,
        }
    }
}

/// A fixed-size rectangular occupancy grid.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    rows:  u32,
    cols:  u32,
    cells: Vec<CellState>,
}

impl GridMap {
    /// Create a grid with every cell `Open`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Open; (rows as usize) * (cols as usize)],
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `true` if `cell` lies within the grid rectangle.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.rows
            && (cell.col as u32) < self.cols
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.row as usize) * (self.cols as usize) + cell.col as usize
    }

    /// The state of `cell`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        if self.in_bounds(cell) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    /// Set the state of `cell`.  Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, cell: Cell, state: CellState) {
        if self.in_bounds(cell) {
            let i = self.index(cell);
            self.cells[i] = state;
        }
    }

    /// Flip `cell` between `Open` and `Blocked` (an involution: toggling
    /// twice restores the prior state).  Out-of-bounds toggles are ignored.
    ///
    /// Toggling has no awareness of paths currently traversing the cell —
    /// agents holding a path through it keep walking it until a new path is
    /// requested (see the simulation-level contract in `gs-sim`).
    #[inline]
    pub fn toggle(&mut self, cell: Cell) {
        if self.in_bounds(cell) {
            let i = self.index(cell);
            self.cells[i] = self.cells[i].flipped();
        }
    }

    /// `true` if `cell` is blocked **or out of bounds** — the form every
    /// traversal check wants, so callers never special-case the border.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        match self.get(cell) {
            Some(state) => state == CellState::Blocked,
            None => true,
        }
    }

    /// Set every cell to `state` (maze generation starts from all-Blocked).
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Iterator over all `Open` cells in row-major order (spawn placement,
    /// renderers, and connectivity checks).
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == CellState::Open)
            .map(move |(i, _)| Cell::new((i / cols) as i32, (i % cols) as i32))
    }

    /// Number of `Open` cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s == CellState::Open).count()
    }
}
