//! `gs-core` — foundational types for the `gridsim` spatial reasoning engine.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `AgentId`                                         |
//! | [`cell`]   | `Cell` grid coordinate, Manhattan distance        |
//! | [`world`]  | `WorldPos`, cell ↔ world conversion helpers       |
//! | [`time`]   | `Tick` simulation step counter                    |
//! | [`rng`]    | `SimRng` deterministic RNG wrapper                |
//! | [`config`] | `SimConfig`                                       |
//! | [`error`]  | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Tick;
pub use world::{cell_to_world, world_to_cell, WorldPos};
