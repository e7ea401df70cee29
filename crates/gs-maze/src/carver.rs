//! Explicit-stack depth-first maze carving.

use gs_core::{Cell, SimRng};
use gs_grid::{CellState, GridMap};

use crate::{MazeError, MazeResult};

/// The four two-step directions between adjacent rooms on the lattice.
const CARVE_DIRECTIONS: [(i32, i32); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

// ── Carve events ──────────────────────────────────────────────────────────────

/// One carve operation: the wall cell and the room behind it, both opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarveEvent {
    /// The wall cell between the current and target rooms.
    pub wall: Cell,
    /// The newly opened room.
    pub room: Cell,
}

/// Caller verdict after each carve step in [`generate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarveControl {
    Continue,
    Cancel,
}

// ── MazeCarver ────────────────────────────────────────────────────────────────

/// One depth-first frame: a room and its remaining (pre-shuffled) directions.
#[derive(Debug)]
struct Frame {
    room:       Cell,
    directions: [(i32, i32); 4],
    next:       usize,
}

/// An in-progress maze generation.
///
/// The carver holds only its frame stack; the grid is passed to each call,
/// so a simulation can keep a partially carved maze across ticks and
/// interleave carving with the rest of its step.  Dropping the carver
/// abandons the generation (the grid keeps whatever was carved so far).
///
/// Stack depth is bounded by the room count, independent of carve order —
/// the reason this is a frame stack and not recursion.
#[derive(Debug)]
pub struct MazeCarver {
    stack: Vec<Frame>,
}

impl MazeCarver {
    /// Begin a generation from a uniformly random even-coordinate room.
    ///
    /// On success the grid has been reset to all-`Blocked` with the start
    /// room opened.  On error the grid is untouched.
    pub fn start(grid: &mut GridMap, rng: &mut SimRng) -> MazeResult<Self> {
        if grid.rows() == 0 || grid.cols() == 0 {
            return Err(MazeError::GridTooSmall { rows: grid.rows(), cols: grid.cols() });
        }
        // Rooms sit at even coordinates: rows 0, 2, … and cols 0, 2, ….
        let row = 2 * rng.gen_range(0..grid.rows().div_ceil(2)) as i32;
        let col = 2 * rng.gen_range(0..grid.cols().div_ceil(2)) as i32;
        Self::start_at(grid, Cell::new(row, col), rng)
    }

    /// Begin a generation from an explicit start room.
    ///
    /// # Errors
    ///
    /// [`MazeError::BadStart`] if `start` is out of bounds or not an
    /// even-coordinate room.  The grid is only mutated after all
    /// preconditions pass.
    pub fn start_at(grid: &mut GridMap, start: Cell, rng: &mut SimRng) -> MazeResult<Self> {
        if grid.rows() == 0 || grid.cols() == 0 {
            return Err(MazeError::GridTooSmall { rows: grid.rows(), cols: grid.cols() });
        }
        if !grid.in_bounds(start) || !start.is_room() {
            return Err(MazeError::BadStart { cell: start });
        }

        grid.fill(CellState::Blocked);
        grid.set(start, CellState::Open);

        Ok(Self { stack: vec![Frame::new(start, rng)] })
    }

    /// Advance by exactly one carve operation.
    ///
    /// Exhausted frames are popped silently (backtracking produces no
    /// event); `None` means the stack is empty and the maze is complete.
    pub fn step(&mut self, grid: &mut GridMap, rng: &mut SimRng) -> Option<CarveEvent> {
        loop {
            let frame = self.stack.last_mut()?;
            if frame.next >= frame.directions.len() {
                // Backtrack: every direction from this room is explored.
                self.stack.pop();
                continue;
            }

            let (d_row, d_col) = frame.directions[frame.next];
            frame.next += 1;

            let room = frame.room.offset(d_row, d_col);
            // Only carve into in-bounds rooms that are still blocked —
            // this is what makes the open-room graph a spanning tree.
            if grid.get(room) != Some(CellState::Blocked) {
                continue;
            }

            let wall = frame.room.offset(d_row / 2, d_col / 2);
            grid.set(wall, CellState::Open);
            grid.set(room, CellState::Open);

            self.stack.push(Frame::new(room, rng));
            return Some(CarveEvent { wall, room });
        }
    }

    /// `true` once the frame stack has emptied.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Frame {
    fn new(room: Cell, rng: &mut SimRng) -> Self {
        let mut directions = CARVE_DIRECTIONS;
        rng.shuffle(&mut directions);
        Self { room, directions, next: 0 }
    }
}

// ── Run to completion ─────────────────────────────────────────────────────────

/// Carve a complete maze into `grid`, invoking `on_step` after every carve.
///
/// Returning [`CarveControl::Cancel`] from the callback abandons the
/// generation immediately (the grid keeps the partial maze).  Use
/// `|_| CarveControl::Continue` when no animation or cancellation is needed.
///
/// # Errors
///
/// Propagates the [`MazeCarver::start`] precondition errors; in that case
/// the grid is untouched.
pub fn generate<F>(grid: &mut GridMap, rng: &mut SimRng, mut on_step: F) -> MazeResult<()>
where
    F: FnMut(CarveEvent) -> CarveControl,
{
    let mut carver = MazeCarver::start(grid, rng)?;
    while let Some(event) = carver.step(grid, rng) {
        if on_step(event) == CarveControl::Cancel {
            return Ok(());
        }
    }
    Ok(())
}
