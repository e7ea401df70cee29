//! `gs-grid` — the mutable occupancy grid.
//!
//! # Crate layout
//!
//! | Module   | Contents                             |
//! |----------|--------------------------------------|
//! | [`grid`] | `CellState`, `GridMap`               |
//!
//! # Ownership
//!
//! A `GridMap` is owned by exactly one simulation context.  The maze carver
//! and obstacle edits mutate it; the path finder and renderer read it.  All
//! mutation happens on the single simulation thread.

pub mod grid;

#[cfg(test)]
mod tests;

pub use grid::{CellState, GridMap};
