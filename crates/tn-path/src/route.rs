//! The result of a successful search.

use std::collections::VecDeque;

use tn_core::TileId;

/// Tiles to visit in order, from the search start through the goal.
///
/// A route is consumed from the front as waypoints are reached.  It is never
/// edited otherwise; a new destination replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    tiles: VecDeque<TileId>,
    total_cost: f32,
}

impl Route {
    /// Build a route from an ordered tile list and its accumulated cost.
    pub fn new(tiles: impl Into<VecDeque<TileId>>, total_cost: f32) -> Self {
        Self { tiles: tiles.into(), total_cost }
    }

    /// The one-tile route for a search whose start is its goal.
    pub fn single(tile: TileId) -> Self {
        Self::new(VecDeque::from([tile]), 0.0)
    }

    /// Sum of the entrance costs of every tile after the start.
    #[inline]
    pub fn total_cost(&self) -> f32 {
        self.total_cost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The next waypoint.
    #[inline]
    pub fn front(&self) -> Option<TileId> {
        self.tiles.front().copied()
    }

    /// The final waypoint.
    #[inline]
    pub fn goal(&self) -> Option<TileId> {
        self.tiles.back().copied()
    }

    /// Remove and return the next waypoint.
    #[inline]
    pub fn pop_front(&mut self) -> Option<TileId> {
        self.tiles.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().copied()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
