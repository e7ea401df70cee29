//! Unit tests for gs-grid.

use gs_core::Cell;

use crate::{CellState, GridMap};

#[cfg(test)]
mod bounds {
    use super::*;

    #[test]
    fn in_bounds_rectangle() {
        let g = GridMap::new(3, 5);
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(g.in_bounds(Cell::new(2, 4)));
        assert!(!g.in_bounds(Cell::new(3, 0)));
        assert!(!g.in_bounds(Cell::new(0, 5)));
        assert!(!g.in_bounds(Cell::new(-1, 0)));
        assert!(!g.in_bounds(Cell::new(0, -1)));
    }

    #[test]
    fn out_of_bounds_reads_as_blocked() {
        let g = GridMap::new(3, 3);
        assert!(g.is_blocked(Cell::new(-1, 0)));
        assert!(g.is_blocked(Cell::new(0, 3)));
        assert_eq!(g.get(Cell::new(3, 3)), None);
    }

    #[test]
    fn out_of_bounds_writes_ignored() {
        let mut g = GridMap::new(2, 2);
        g.set(Cell::new(5, 5), CellState::Blocked);
        g.toggle(Cell::new(-1, -1));
        assert_eq!(g.open_count(), 4);
    }
}

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn new_grid_all_open() {
        let g = GridMap::new(4, 4);
        assert_eq!(g.open_count(), 16);
        assert!(!g.is_blocked(Cell::new(2, 2)));
    }

    #[test]
    fn set_get() {
        let mut g = GridMap::new(3, 3);
        g.set(Cell::new(1, 1), CellState::Blocked);
        assert_eq!(g.get(Cell::new(1, 1)), Some(CellState::Blocked));
        assert!(g.is_blocked(Cell::new(1, 1)));
        assert!(!g.is_blocked(Cell::new(0, 1)));
    }

    #[test]
    fn toggle_is_involution() {
        let mut g = GridMap::new(3, 3);
        let c = Cell::new(1, 2);
        let before = g.get(c);
        g.toggle(c);
        assert_eq!(g.get(c), Some(CellState::Blocked));
        g.toggle(c);
        assert_eq!(g.get(c), before);
    }

    #[test]
    fn fill_blocks_everything() {
        let mut g = GridMap::new(3, 3);
        g.fill(CellState::Blocked);
        assert_eq!(g.open_count(), 0);
        g.fill(CellState::Open);
        assert_eq!(g.open_count(), 9);
    }
}

#[cfg(test)]
mod iteration {
    use super::*;

    #[test]
    fn open_cells_row_major() {
        let mut g = GridMap::new(2, 2);
        g.set(Cell::new(0, 1), CellState::Blocked);
        let open: Vec<Cell> = g.open_cells().collect();
        assert_eq!(open, vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn open_count_tracks_edits() {
        let mut g = GridMap::new(2, 3);
        assert_eq!(g.open_count(), 6);
        g.toggle(Cell::new(0, 0));
        g.toggle(Cell::new(1, 2));
        assert_eq!(g.open_count(), 4);
    }
}
