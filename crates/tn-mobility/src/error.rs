use tn_core::TileId;
use tn_path::PathError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MobilityError {
    #[error("routing failed: {0}")]
    Path(#[from] PathError),

    /// The next waypoint no longer resolves in the tile graph.  Navigation
    /// has already been halted when this is returned.
    #[error("waypoint {0} is no longer part of the tile graph")]
    BrokenWaypoint(TileId),
}

impl MobilityError {
    /// `true` when the follower has already recovered and the simulation
    /// can carry on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            MobilityError::Path(e) => e.is_recoverable(),
            MobilityError::BrokenWaypoint(_) => true,
        }
    }
}

pub type MobilityResult<T> = Result<T, MobilityError>;
