//! Fluent builder for constructing a [`Sim`].

use gs_core::SimConfig;
use gs_grid::GridMap;
use gs_search::PathPlanner;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — grid dimensions, cell size, speeds, seed, …
/// - `P: PathPlanner` — the search algorithm (e.g. [`gs_search::AStarPlanner`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                |
/// |----------------|----------------------------------------|
/// | `.grid(g)`     | all-`Open` grid of `rows × cols`       |
/// | `.diagonal(b)` | `false` (4-connected movement)         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), AStarPlanner)
///     .diagonal(true)
///     .build()?;
/// ```
pub struct SimBuilder<P: PathPlanner> {
    config:   SimConfig,
    planner:  P,
    grid:     Option<GridMap>,
    diagonal: bool,
}

impl<P: PathPlanner> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, planner: P) -> Self {
        Self {
            config,
            planner,
            grid: None,
            diagonal: false,
        }
    }

    /// Supply a pre-populated grid (e.g. loaded obstacles for a test).
    ///
    /// Dimensions must match the config; if not called, an all-`Open` grid
    /// is created from `config.rows × config.cols`.
    pub fn grid(mut self, grid: GridMap) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Start with 8-connected movement enabled.
    pub fn diagonal(mut self, enabled: bool) -> Self {
        self.diagonal = enabled;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let grid = match self.grid {
            Some(g) => {
                if g.rows() != self.config.rows || g.cols() != self.config.cols {
                    return Err(SimError::GridSizeMismatch {
                        want_rows: self.config.rows,
                        want_cols: self.config.cols,
                        got_rows:  g.rows(),
                        got_cols:  g.cols(),
                    });
                }
                g
            }
            None => GridMap::new(self.config.rows, self.config.cols),
        };

        Ok(Sim::new(self.config, grid, self.planner, self.diagonal))
    }
}
