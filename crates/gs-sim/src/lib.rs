//! `gs-sim` — tick loop orchestrator for the gridsim engine.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for each tick:
//!   ① Edits    — apply queued ToggleCell commands to the grid.
//!   ② Requests — apply remaining commands in queue order:
//!                  SetDiagonalMode(b)      → flip the 8-connected flag
//!                  RegenerateMaze          → clear agents; (re)start carver
//!                  SpawnAgents(n)          → replace agents on open cells
//!                  RequestPath{agent,goal} → run the planner; assign path
//!   ③ Carve    — advance an in-progress maze carve by
//!                  carve_steps_per_tick steps (observer sees each one).
//!   ④ Motion   — advance every agent by tick_seconds.
//! ```
//!
//! Commands are pushed by an input layer at any time and consumed once per
//! tick, decoupling input timing from simulation stepping.  Edits always
//! land before path requests queued the same tick, so a request sees the
//! grid it will be searched on.
//!
//! # Staleness contract
//!
//! A path is computed once, on demand.  Obstacle edits made *after* the
//! search do **not** invalidate it — the agent keeps walking the stale path,
//! possibly through a now-blocked cell, until a new path is requested.  This
//! is a documented property of the engine, covered by tests.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::SimConfig;
//! use gs_search::AStarPlanner;
//! use gs_sim::{Command, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), AStarPlanner).build()?;
//! sim.push(Command::RegenerateMaze);
//! sim.push(Command::SpawnAgents(24));
//! for _ in 0..600 {
//!     sim.step(&mut NoopObserver)?;
//! }
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use command::Command;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
