//! `gs-search` — shortest-path search for the gridsim engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                        |
//! |-------------|--------------------------------------------------|
//! | [`path`]    | `Path` — ordered waypoint sequence               |
//! | [`planner`] | `PathPlanner` trait, `AStarPlanner`              |
//! | [`error`]   | `SearchError`, `SearchResult<T>`                 |
//!
//! # Pluggability
//!
//! `gs-sim` requests paths through the [`PathPlanner`] trait, so applications
//! can swap in custom implementations (jump-point search, weighted regions,
//! flow fields) without touching the simulation core.  The default
//! [`AStarPlanner`] is sufficient for uniform-cost grids.

pub mod error;
pub mod path;
pub mod planner;


pub use error::{SearchError, SearchResult};
pub use path::Path;
pub use planner::{AStarPlanner, PathPlanner};
