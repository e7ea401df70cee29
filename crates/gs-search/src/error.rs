//! Search-subsystem error type.

use thiserror::Error;

use gs_core::Cell;

/// Errors produced by `gs-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Start or goal failed validation — no search state was created.
    #[error("invalid search request: cell {cell} is {reason}")]
    InvalidRequest { cell: Cell, reason: &'static str },

    /// The frontier was exhausted without reaching the goal.  Non-fatal:
    /// the caller may retry after the grid changes.
    #[error("no path from {start} to {goal}")]
    NoPathFound { start: Cell, goal: Cell },
}

pub type SearchResult<T> = Result<T, SearchError>;
