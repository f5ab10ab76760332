//! A walking agent: identity, position, and its path follower.

use tn_core::{AgentId, Point, TileId};
use tn_grid::TileGraph;
use tn_mobility::{NavState, PathFollower};
use tn_path::{AStarPathFinder, PathFinder};

pub struct Agent<F: PathFinder = AStarPathFinder> {
    pub id:       AgentId,
    /// Display name used in "lost" reports.
    pub name:     String,
    pub position: Point,
    /// Disabled agents are skipped by the tick loop.
    pub enabled:  bool,
    pub follower: PathFollower<F>,
}

impl<F: PathFinder> Agent<F> {
    pub fn new(id: AgentId, name: impl Into<String>, position: Point, follower: PathFollower<F>) -> Self {
        Self { id, name: name.into(), position, enabled: true, follower }
    }

    /// The tile the agent is standing on.
    pub fn tile<G: TileGraph>(&self, graph: &G) -> Option<TileId> {
        graph.nearest_tile(self.position)
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.follower.state()
    }
}
