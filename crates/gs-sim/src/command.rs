//! Discrete engine commands.
//!
//! An input layer (keyboard, mouse, network, script) translates raw events
//! into these commands and pushes them onto the simulation's queue; the
//! queue is drained exactly once per tick.  No raw device or event detail
//! crosses this boundary.

use gs_core::{AgentId, Cell};

/// A command for the simulation, consumed on the next tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip one cell between `Open` and `Blocked`.  Applied before any
    /// path request queued the same tick.
    ToggleCell(Cell),

    /// Compute a path from `agent`'s current cell to `goal` and assign it.
    /// Failures are non-fatal: the agent's current path is left unchanged
    /// and the failure is reported through the observer.
    RequestPath { agent: AgentId, goal: Cell },

    /// Clear all agents and begin carving a fresh maze.  If a carve is
    /// already in progress it is abandoned and restarted.
    RegenerateMaze,

    /// Replace all agents with `n` new ones at random open cells.
    SpawnAgents(usize),

    /// Enable or disable 8-connected movement for subsequent path requests.
    /// Paths already assigned are unaffected.
    SetDiagonalMode(bool),
}
