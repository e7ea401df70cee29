use gs_agent::AgentError;
use gs_core::CoreError;
use gs_maze::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("grid is {got_rows}x{got_cols} but config says {want_rows}x{want_cols}")]
    GridSizeMismatch {
        want_rows: u32,
        want_cols: u32,
        got_rows:  u32,
        got_cols:  u32,
    },

    #[error("maze generation failed: {0}")]
    Maze(#[from] MazeError),

    #[error("agent spawn failed: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
