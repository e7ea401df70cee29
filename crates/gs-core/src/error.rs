//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into the
//! simulation-level error via `From` impls or stay separate.  `gs-core`
//! itself only fails on configuration problems.

use thiserror::Error;

/// Errors produced by `gs-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
