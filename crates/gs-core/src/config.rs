//! Engine configuration.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration, read once at startup.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid height in cells.  Fixed after construction.
    pub rows: u32,

    /// Grid width in cells.  Fixed after construction.
    pub cols: u32,

    /// Edge length of one cell in world units.  Only the cell ↔ world
    /// conversion helpers consume this.
    pub cell_size: f32,

    /// Simulated seconds per tick (the `dt` passed to agent motion).
    pub tick_seconds: f32,

    /// Agent speed in world units per second.  Constant per run — motion is
    /// uniform regardless of waypoint spacing.
    pub agent_speed: f32,

    /// Maze carve operations applied per tick while a regeneration is in
    /// progress.  Lower values let a renderer animate the carve; the engine
    /// itself never sleeps.
    pub carve_steps_per_tick: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CoreError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.cell_size > 0.0) {
            return Err(CoreError::Config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !(self.tick_seconds > 0.0) {
            return Err(CoreError::Config(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }
        if !(self.agent_speed > 0.0) {
            return Err(CoreError::Config(format!(
                "agent_speed must be positive, got {}",
                self.agent_speed
            )));
        }
        if self.carve_steps_per_tick == 0 {
            return Err(CoreError::Config(
                "carve_steps_per_tick must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows:                 37,
            cols:                 50,
            cell_size:            16.0,
            tick_seconds:         1.0 / 60.0,
            agent_speed:          80.0,
            carve_steps_per_tick: 5,
            seed:                 0,
        }
    }
}
