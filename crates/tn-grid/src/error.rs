//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `tn-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("map parse error: {0}")]
    Parse(String),

    #[error("duplicate tile at cell ({col}, {row})")]
    DuplicateTile { col: i32, row: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
