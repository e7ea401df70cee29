//! `gs-maze` — randomized perfect-maze carving.
//!
//! # Crate layout
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`carver`] | `MazeCarver`, `CarveEvent`, `CarveControl`, `generate` |
//! | [`error`]  | `MazeError`, `MazeResult<T>`                       |
//!
//! # Room lattice
//!
//! The grid doubles as a lattice: cells with even row **and** even column
//! are carvable *rooms*; the cells at odd offsets between adjacent rooms are
//! removable *walls*.  Carving opens a wall and the room behind it in one
//! step, depth-first with randomized direction order, so the open rooms
//! always form a spanning tree — a **perfect maze** with exactly one path
//! between any two rooms.
//!
//! # Stepping and cancellation
//!
//! The depth-first walk uses an explicit frame stack rather than recursion:
//! memory stays bounded on large grids, and the walk yields after every
//! carve so a renderer can animate it and a caller can abandon an
//! in-progress generation (drop the [`MazeCarver`], or return
//! [`CarveControl::Cancel`] from the [`generate`] callback).

pub mod carver;
pub mod error;


pub use carver::{generate, CarveControl, CarveEvent, MazeCarver};
pub use error::{MazeError, MazeResult};
