//! The read-only tile graph interface.
//!
//! Path search and path following only ever see tiles through this trait, so
//! any map representation (the bundled [`TileMap`][crate::TileMap], a game's
//! chunked world, a test double) can be plugged in without touching them.

use tn_core::{Point, RoomId, TileId};

use crate::Direction;

/// Read-only accessor over a 4-connected tile graph.
///
/// Tiles are never created, destroyed or mutated through this trait.
/// A tile that fails [`contains`](Self::contains) is treated as absent: the
/// path finder rejects it as a start or goal, and the path follower halts if
/// it shows up as a waypoint.
pub trait TileGraph {
    /// `true` if `tile` refers to a live tile in this graph.
    fn contains(&self, tile: TileId) -> bool;

    /// The neighbor linked in slot `dir`, if any.
    fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId>;

    /// Non-negative cost charged for moving *into* `tile`.
    fn entrance_cost(&self, tile: TileId) -> f32;

    /// Map-space position of the tile's centre.  `None` for absent tiles.
    fn position(&self, tile: TileId) -> Option<Point>;

    /// Room the tile belongs to, if any.
    fn room(&self, tile: TileId) -> Option<RoomId>;

    /// The tile whose centre is closest to `pos`.  `None` for empty graphs.
    fn nearest_tile(&self, pos: Point) -> Option<TileId>;

    /// Present neighbors of `tile` in [`Direction::ALL`] order.
    fn neighbors(&self, tile: TileId) -> impl Iterator<Item = (Direction, TileId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(tile, dir).map(|n| (dir, n)))
    }
}
