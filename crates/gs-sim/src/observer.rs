//! Simulation observer trait — the read boundary for renderers and loggers.

use gs_agent::AgentStore;
use gs_core::{AgentId, Cell, Tick};
use gs_grid::GridMap;
use gs_maze::CarveEvent;
use gs_search::SearchError;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Everything passed in is read-only: a
/// renderer draws from `on_tick_end`, an animation layer watches
/// `on_carve_step`, and a UI surfaces `on_search_failed`.
///
/// # Example — carve animation hook
///
/// ```rust,ignore
/// struct CarvePrinter;
///
/// impl SimObserver for CarvePrinter {
///     fn on_carve_step(&mut self, tick: Tick, event: CarveEvent) {
///         println!("{tick}: opened wall {} and room {}", event.wall, event.room);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any command is applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per carve operation while a maze regeneration is in
    /// progress (at most `carve_steps_per_tick` times per tick).
    fn on_carve_step(&mut self, _tick: Tick, _event: CarveEvent) {}

    /// Called when an in-progress maze regeneration finishes.
    fn on_maze_complete(&mut self, _tick: Tick) {}

    /// Called when a path request fails.  Non-fatal: the agent's previous
    /// path (typically empty) is left unchanged.
    fn on_search_failed(&mut self, _tick: Tick, _agent: AgentId, _goal: Cell, _error: &SearchError) {}

    /// Called at the end of each tick with read-only engine state — the
    /// renderer's snapshot point.
    fn on_tick_end(&mut self, _tick: Tick, _grid: &GridMap, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `step`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
