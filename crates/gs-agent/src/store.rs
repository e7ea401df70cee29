//! Structure-of-Arrays agent storage.

use std::collections::VecDeque;

use gs_core::{cell_to_world, AgentId, SimRng, WorldPos};
use gs_grid::GridMap;

use crate::{AgentError, AgentResult};

/// SoA storage for all agents.
///
/// Every `Vec` field has exactly `len()` elements; the `AgentId` value is
/// the index into all of them.  Each agent owns exactly one path (possibly
/// empty — empty means idle); paths are never shared.
#[derive(Debug, Default)]
pub struct AgentStore {
    /// Continuous world position, indexed by `AgentId`.
    pub positions: Vec<WorldPos>,

    /// Speed in world units per second.  Constant per agent after spawn.
    pub speeds: Vec<f32>,

    /// Remaining waypoints, consumed front-to-back by motion.
    pub paths: Vec<VecDeque<WorldPos>>,
}

impl AgentStore {
    /// An empty store (no agents).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all agents with `count` new ones at uniformly random open
    /// cell centres.  Agents may share a cell — collisions are not checked
    /// at spawn or during motion.
    ///
    /// # Errors
    ///
    /// [`AgentError::NoOpenCells`] if the grid is fully blocked (the store
    /// is left unchanged).
    pub fn spawn(
        &mut self,
        grid:      &GridMap,
        count:     usize,
        speed:     f32,
        cell_size: f32,
        rng:       &mut SimRng,
    ) -> AgentResult<()> {
        let open: Vec<_> = grid.open_cells().collect();
        if open.is_empty() {
            return Err(AgentError::NoOpenCells);
        }

        self.clear();
        self.positions.reserve(count);
        for _ in 0..count {
            // `open` is non-empty (checked above), so `choose` always succeeds.
            let Some(&cell) = rng.choose(&open) else { break };
            self.positions.push(cell_to_world(cell, cell_size));
            self.speeds.push(speed);
            self.paths.push(VecDeque::new());
        }
        Ok(())
    }

    /// Remove all agents (maze regeneration invalidates them wholesale).
    pub fn clear(&mut self) {
        self.positions.clear();
        self.speeds.clear();
        self.paths.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `true` if `agent` is a valid index into this store.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.len()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.len() as u32).map(AgentId)
    }

    /// Replace `agent`'s path.  The previous path (stale or not) is dropped.
    pub fn assign_path(&mut self, agent: AgentId, waypoints: VecDeque<WorldPos>) -> AgentResult<()> {
        if !self.contains(agent) {
            return Err(AgentError::NotFound(agent));
        }
        self.paths[agent.index()] = waypoints;
        Ok(())
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<WorldPos> {
        self.positions.get(agent.index()).copied()
    }

    #[inline]
    pub fn path(&self, agent: AgentId) -> Option<&VecDeque<WorldPos>> {
        self.paths.get(agent.index())
    }

    /// `true` if `agent` has no waypoints left.
    #[inline]
    pub fn is_idle(&self, agent: AgentId) -> bool {
        self.paths
            .get(agent.index())
            .is_none_or(VecDeque::is_empty)
    }
}
