//! `gs-agent` — agent storage and waypoint-following motion.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`store`]  | `AgentStore` — SoA positions, speeds, paths; spawn  |
//! | [`motion`] | `advance` / `advance_all` waypoint consumption      |
//! | [`error`]  | `AgentError`, `AgentResult<T>`                      |
//!
//! # Motion model
//!
//! Agents move at a **fixed configured speed** through continuous space,
//! consuming their path front-to-back.  Each tick an agent steps
//! `min(speed · dt, remaining_distance)` toward its first waypoint, so it
//! never overshoots and its real-world pace is independent of waypoint
//! spacing.  Arrival uses a small distance threshold to avoid micro-steps
//! and division by a near-zero displacement.
//!
//! Agents move independently: they may overlap at spawn and in motion, and
//! nothing re-validates a path after the grid changes — an agent keeps
//! walking a stale path until a new one is assigned (see `gs-sim`).

pub mod error;
pub mod motion;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{AgentError, AgentResult};
pub use motion::{advance, advance_all, ARRIVE_EPSILON};
pub use store::AgentStore;
