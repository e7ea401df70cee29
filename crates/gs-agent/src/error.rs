//! Agent-subsystem error type.

use thiserror::Error;

use gs_core::AgentId;

/// Errors produced by `gs-agent`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot spawn agents: the grid has no open cells")]
    NoOpenCells,

    #[error("agent {0} does not exist")]
    NotFound(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
