//! The result of a search: an ordered sequence of cells.

use std::collections::VecDeque;

use gs_core::{cell_to_world, Cell, WorldPos};

/// An ordered sequence of cells from just after the start to the goal.
///
/// By construction the path **excludes the start cell** and, when non-empty,
/// **ends at the goal**.  An empty path means the agent is already there
/// (or idle).  Each path is owned by exactly one agent and consumed
/// front-to-back as waypoints are reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    /// Cells to traverse in order.
    pub cells: Vec<Cell>,
}

impl Path {
    #[inline]
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of steps (cells) on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the start and goal coincide (nothing to walk).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The final cell — the goal — if the path is non-empty.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Convert to continuous waypoints (cell centres) for agent motion.
    ///
    /// The conversion happens once, at path assignment; motion then works
    /// purely in world space.
    pub fn to_waypoints(&self, cell_size: f32) -> VecDeque<WorldPos> {
        self.cells
            .iter()
            .map(|&c| cell_to_world(c, cell_size))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
