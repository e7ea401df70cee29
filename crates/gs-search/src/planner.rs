//! Planner trait and the default A* implementation.
//!
//! # Cost model
//!
//! Every step costs 1, **including diagonals** — a diagonal move is not
//! charged √2.  Under 4-connected movement the Manhattan heuristic is
//! admissible and the returned path length equals the true shortest-path
//! length.  Once diagonals are enabled the heuristic overestimates (a
//! diagonal step reduces Manhattan distance by 2 but costs 1), so A* loses
//! its optimality guarantee.  This is a documented property of the engine,
//! covered by tests — do not "fix" it by weighting diagonals.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use gs_core::Cell;
use gs_grid::GridMap;

use crate::{Path, SearchError, SearchResult};

/// The 4 axis-aligned neighbour offsets.
const AXIS_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// The 4 diagonal neighbour offsets, appended when diagonal mode is on.
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

// ── PathPlanner trait ─────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implement this trait to replace the default A* with jump-point search, a
/// flow field, or a weighted-region planner.
pub trait PathPlanner {
    /// Compute a path from `start` to `goal` over `grid`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidRequest`] if either endpoint is out of bounds or
    /// blocked (validated before any search state is created), and
    /// [`SearchError::NoPathFound`] if the goal is unreachable.
    fn find_path(
        &self,
        grid: &GridMap,
        start: Cell,
        goal: Cell,
        allow_diagonal: bool,
    ) -> SearchResult<Path>;
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// Standard A* with a lazy duplicate-tolerant frontier.
///
/// The frontier is a binary heap of `(f, cell)` entries.  A cell may be
/// pushed multiple times at different costs; superseded entries are never
/// removed or mutated in place.  Correctness instead relies on re-checking
/// against the best known g-score at pop and relax time — a deliberate
/// simplification over decrease-key structures that is load-bearing for
/// correctness, not just an efficiency shortcut.
pub struct AStarPlanner;

impl PathPlanner for AStarPlanner {
    fn find_path(
        &self,
        grid: &GridMap,
        start: Cell,
        goal: Cell,
        allow_diagonal: bool,
    ) -> SearchResult<Path> {
        astar(grid, start, goal, allow_diagonal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Validate one endpoint before the search allocates anything.
fn validate(grid: &GridMap, cell: Cell) -> SearchResult<()> {
    if !grid.in_bounds(cell) {
        return Err(SearchError::InvalidRequest { cell, reason: "out of bounds" });
    }
    if grid.is_blocked(cell) {
        return Err(SearchError::InvalidRequest { cell, reason: "blocked" });
    }
    Ok(())
}

fn astar(grid: &GridMap, start: Cell, goal: Cell, allow_diagonal: bool) -> SearchResult<Path> {
    validate(grid, start)?;
    validate(grid, goal)?;

    if start == goal {
        return Ok(Path::default());
    }

    let mut offsets: Vec<(i32, i32)> = AXIS_OFFSETS.to_vec();
    if allow_diagonal {
        offsets.extend(DIAGONAL_OFFSETS);
    }

    // All search state is scoped to this call.
    // g_score[c] = best known cost from start to c.
    let mut g_score: FxHashMap<Cell, u32> = FxHashMap::default();
    // came_from[c] = predecessor of c on the best known route.
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    // Cells already expanded at their best g.
    let mut finalized: FxHashSet<Cell> = FxHashSet::default();

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key Cell only makes equal-f tie-breaks deterministic;
    // the order among them carries no meaning.
    let mut frontier: BinaryHeap<Reverse<(u32, Cell)>> = BinaryHeap::new();

    g_score.insert(start, 0);
    frontier.push(Reverse((start.manhattan(goal), start)));

    while let Some(Reverse((_f, current))) = frontier.pop() {
        if current == goal {
            return Ok(reconstruct(&came_from, start, goal));
        }

        // Stale heap entry: this cell was already expanded at an
        // equal-or-better g (or re-finalized after a cheaper re-push).
        if !finalized.insert(current) {
            continue;
        }
        let g_current = g_score[&current];

        for &(d_row, d_col) in &offsets {
            let neighbor = current.offset(d_row, d_col);
            // is_blocked covers out-of-bounds too.
            if grid.is_blocked(neighbor) {
                continue;
            }

            // Uniform edge cost, diagonals included.
            let tentative_g = g_current + 1;

            // Skip unless this strictly improves on the best known g
            // (or the neighbor has never been reached).
            if let Some(&best) = g_score.get(&neighbor) {
                if tentative_g >= best {
                    continue;
                }
            }

            came_from.insert(neighbor, current);
            g_score.insert(neighbor, tentative_g);
            // A finalized cell reached strictly cheaper is re-opened.  This
            // only happens when the heuristic overestimates (diagonal mode).
            finalized.remove(&neighbor);

            let f = tentative_g + neighbor.manhattan(goal);
            frontier.push(Reverse((f, neighbor)));
        }
    }

    Err(SearchError::NoPathFound { start, goal })
}

/// Walk predecessor links from the goal back to (but excluding) the start,
/// then reverse.
fn reconstruct(came_from: &FxHashMap<Cell, Cell>, start: Cell, goal: Cell) -> Path {
    let mut cells = Vec::new();
    let mut current = goal;
    while current != start {
        cells.push(current);
        current = came_from[&current];
    }
    cells.reverse();
    Path::new(cells)
}
