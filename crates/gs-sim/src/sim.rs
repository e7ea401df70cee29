//! The `Sim` struct and its tick loop.

use gs_agent::{advance_all, AgentStore};
use gs_core::{world_to_cell, AgentId, Cell, SimConfig, SimRng, Tick};
use gs_grid::GridMap;
use gs_maze::MazeCarver;
use gs_search::PathPlanner;

use crate::{Command, SimObserver, SimResult};

/// The simulation context: one grid, one agent registry, one planner, one
/// RNG — all owned, no process-wide state, so multiple independent
/// simulations can coexist (and tests can build throwaway ones).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathPlanner> {
    /// Static configuration, read once at startup.
    pub config: SimConfig,

    /// The occupancy grid.  Mutated only on the simulation thread, by
    /// queued edits and the maze carver.
    pub grid: GridMap,

    /// All agents (positions, speeds, remaining paths).
    pub agents: AgentStore,

    /// The path planner.  Swap at compile time for a different search
    /// algorithm with no runtime overhead.
    pub planner: P,

    rng:      SimRng,
    tick:     Tick,
    diagonal: bool,
    pending:  Vec<Command>,
    carver:   Option<MazeCarver>,
}

impl<P: PathPlanner> Sim<P> {
    // ── Construction (used by SimBuilder) ─────────────────────────────────

    pub(crate) fn new(config: SimConfig, grid: GridMap, planner: P, diagonal: bool) -> Self {
        let rng = SimRng::new(config.seed);
        Self {
            config,
            grid,
            agents: AgentStore::new(),
            planner,
            rng,
            tick: Tick::ZERO,
            diagonal,
            pending: Vec::new(),
            carver: None,
        }
    }

    // ── Command intake ────────────────────────────────────────────────────

    /// Enqueue a command for the next tick.  Callable at any time; the
    /// queue is drained exactly once per [`step`](Self::step).
    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    // ── Read surface (renderer access between ticks) ──────────────────────

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    /// `true` while a maze regeneration is being carved step-by-step.
    #[inline]
    pub fn is_carving(&self) -> bool {
        self.carver.is_some()
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run one simulation step: edits, requests, carving, motion — in that
    /// order, with no overlap between steps.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        let commands = std::mem::take(&mut self.pending);

        // ── Phase 1: obstacle edits ───────────────────────────────────────
        //
        // All edits land before any request queued the same tick, so a path
        // request is always searched against the grid it was aimed at.
        for command in &commands {
            if let Command::ToggleCell(cell) = command {
                self.grid.toggle(*cell);
            }
        }

        // ── Phase 2: mode / regeneration / spawn / path requests ──────────
        for command in commands {
            match command {
                Command::ToggleCell(_) => {} // already applied

                Command::SetDiagonalMode(enabled) => {
                    self.diagonal = enabled;
                }

                // Restarting while a carve is in progress abandons it — the
                // old carver is simply replaced at its next yield point.
                Command::RegenerateMaze => self.begin_regeneration()?,

                Command::SpawnAgents(count) => {
                    self.agents.spawn(
                        &self.grid,
                        count,
                        self.config.agent_speed,
                        self.config.cell_size,
                        &mut self.rng,
                    )?;
                }

                Command::RequestPath { agent, goal } => {
                    self.request_path(agent, goal, observer);
                }
            }
        }

        // ── Phase 3: in-progress maze carving ─────────────────────────────
        self.advance_carver(observer);

        // ── Phase 4: agent motion ─────────────────────────────────────────
        advance_all(&mut self.agents, self.config.tick_seconds);

        observer.on_tick_end(now, &self.grid, &self.agents);
        self.tick.advance();
        Ok(())
    }

    /// Run `n` consecutive steps.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Clear all agents and start (or restart) a maze carve.
    ///
    /// The previous layout no longer applies, so existing agents and their
    /// paths are invalidated wholesale before the first cell changes.
    fn begin_regeneration(&mut self) -> SimResult<()> {
        self.agents.clear();
        self.carver = Some(MazeCarver::start(&mut self.grid, &mut self.rng)?);
        Ok(())
    }

    /// Compute and assign a path for `agent`.
    ///
    /// The start is the agent's current cell; start and goal are validated
    /// by the planner before any search state exists.  On failure the
    /// agent's path is left unchanged and the observer is notified —
    /// path-finding failures never abort the tick.
    fn request_path<O: SimObserver>(&mut self, agent: AgentId, goal: Cell, observer: &mut O) {
        // The agent may have been cleared by a regeneration queued earlier
        // this tick; such a command is stale and dropped.
        let Some(pos) = self.agents.position(agent) else {
            return;
        };
        let start = world_to_cell(pos, self.config.cell_size);

        match self.planner.find_path(&self.grid, start, goal, self.diagonal) {
            Ok(path) => {
                let waypoints = path.to_waypoints(self.config.cell_size);
                // The agent exists (position lookup above), so this cannot fail.
                let _ = self.agents.assign_path(agent, waypoints);
            }
            Err(error) => observer.on_search_failed(self.tick, agent, goal, &error),
        }
    }

    /// Advance an in-progress carve by at most `carve_steps_per_tick`
    /// operations, yielding an observer event per carve.
    fn advance_carver<O: SimObserver>(&mut self, observer: &mut O) {
        let Some(carver) = self.carver.as_mut() else {
            return;
        };
        let mut finished = false;
        for _ in 0..self.config.carve_steps_per_tick {
            match carver.step(&mut self.grid, &mut self.rng) {
                Some(event) => observer.on_carve_step(self.tick, event),
                None => {
                    finished = true;
                    break;
                }
            }
        }
        if finished {
            self.carver = None;
            observer.on_maze_complete(self.tick);
        }
    }
}
