//! Path-search error type.

use thiserror::Error;

use tn_core::TileId;

/// Errors produced by `tn-path`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Start or goal does not resolve in the graph.  A caller bug, not a
    /// property of the map.
    #[error("tile {0} is not part of the tile graph")]
    InvalidTile(TileId),

    /// The goal is unreachable from the start, or the search budget ran out
    /// before reaching it.
    #[error("no path from {start} to {goal}")]
    NoPathFound {
        start: TileId,
        goal: TileId,
        /// `true` when the iteration budget was exhausted rather than the
        /// open set.  Signals a pathological map or heuristic.
        budget_exhausted: bool,
    },
}

impl PathError {
    /// `true` for outcomes the caller should treat as "destination
    /// unreachable" rather than as a programming error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PathError::NoPathFound { .. })
    }
}

pub type PathResult<T> = Result<T, PathError>;
