//! Tile map representation and builder.
//!
//! # Data layout
//!
//! Tiles are stored as parallel arrays indexed by `TileId`.  Each tile has a
//! fixed `[TileId; 4]` link array, one slot per [`Direction`]; an empty slot
//! holds `TileId::INVALID`.  Links are directed, so one-way passages are
//! expressible, but [`TileMapBuilder::link`] adds both directions.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps an `(x, y)` position to the nearest `TileId`.
//! Path following uses it every tick to find the tile an agent stands on.

use std::collections::HashMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use tn_core::{Point, RoomId, TileId};

use crate::{Direction, TileGraph};

// ── R-tree tile entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct TileEntry {
    point: [f32; 2],
    id: TileId,
}

impl RTreeObject for TileEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TileEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── TileMap ───────────────────────────────────────────────────────────────────

/// Immutable tile graph plus a spatial index for nearest-tile lookups.
///
/// All per-tile arrays are `pub` for direct indexed access.  Do not
/// construct directly; use [`TileMapBuilder`].
pub struct TileMap {
    /// Centre position of each tile.  Indexed by `TileId`.
    pub tile_pos: Vec<Point>,

    /// Entrance cost of each tile.
    pub tile_cost: Vec<f32>,

    /// Room of each tile; `RoomId::INVALID` when the tile is outside any room.
    pub tile_room: Vec<RoomId>,

    /// Neighbor links, one slot per `Direction`.
    pub tile_links: Vec<[TileId; 4]>,

    /// `(col, row)` → tile, for tiles added through the grid helpers.
    cells: HashMap<(i32, i32), TileId>,

    spatial_idx: RTree<TileEntry>,
}

impl TileMap {
    /// A map with no tiles.  Every search against it fails with an
    /// invalid-tile error.
    pub fn empty() -> Self {
        TileMapBuilder::new().build()
    }

    pub fn tile_count(&self) -> usize {
        self.tile_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tile_pos.is_empty()
    }

    /// Iterator over every `TileId` in the map.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.tile_pos.len()).map(|i| TileId(i as u32))
    }

    /// Tile at grid cell `(col, row)`, if one was added there.
    pub fn tile_at(&self, col: i32, row: i32) -> Option<TileId> {
        self.cells.get(&(col, row)).copied()
    }

    /// Up to `k` tiles nearest to `pos`, sorted by ascending distance.
    pub fn k_nearest_tiles(&self, pos: Point, k: usize) -> Vec<TileId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// All tiles belonging to `room`.
    pub fn room_tiles(&self, room: RoomId) -> Vec<TileId> {
        self.tiles()
            .filter(|t| self.tile_room[t.index()] == room)
            .collect()
    }
}

impl TileGraph for TileMap {
    #[inline]
    fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.tile_pos.len()
    }

    #[inline]
    fn neighbor(&self, tile: TileId, dir: Direction) -> Option<TileId> {
        let link = self.tile_links.get(tile.index())?[dir.slot()];
        link.is_valid().then_some(link)
    }

    #[inline]
    fn entrance_cost(&self, tile: TileId) -> f32 {
        self.tile_cost[tile.index()]
    }

    #[inline]
    fn position(&self, tile: TileId) -> Option<Point> {
        self.tile_pos.get(tile.index()).copied()
    }

    #[inline]
    fn room(&self, tile: TileId) -> Option<RoomId> {
        let room = *self.tile_room.get(tile.index())?;
        room.is_valid().then_some(room)
    }

    fn nearest_tile(&self, pos: Point) -> Option<TileId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }
}

// ── TileMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`TileMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tn_core::RoomId;
/// use tn_grid::{TileGraph, TileMapBuilder};
///
/// let mut b = TileMapBuilder::grid(3, 3, 1.0);
/// let corner = b.cell(0, 0).unwrap();
/// b.set_room(corner, RoomId(1));
/// let map = b.build();
/// assert_eq!(map.tile_count(), 9);
/// assert_eq!(map.room(corner), Some(RoomId(1)));
/// ```
pub struct TileMapBuilder {
    pos:       Vec<Point>,
    cost:      Vec<f32>,
    room:      Vec<RoomId>,
    links:     Vec<[TileId; 4]>,
    cells:     HashMap<(i32, i32), TileId>,
    cell_size: Point,
}

impl TileMapBuilder {
    /// Default distance between neighboring grid cells along `(x, y)`.
    ///
    /// Rows sit half a unit apart, which is what makes the default
    /// `|dx| + 2|dy|` heuristic exact for unit entrance costs.
    pub const DEFAULT_CELL_SIZE: Point = Point::new(1.0, 0.5);

    pub fn new() -> Self {
        Self {
            pos:       Vec::new(),
            cost:      Vec::new(),
            room:      Vec::new(),
            links:     Vec::new(),
            cells:     HashMap::new(),
            cell_size: Self::DEFAULT_CELL_SIZE,
        }
    }

    /// Pre-allocate for the expected number of tiles.
    pub fn with_capacity(tiles: usize) -> Self {
        let mut b = Self::new();
        b.pos.reserve(tiles);
        b.cost.reserve(tiles);
        b.room.reserve(tiles);
        b.links.reserve(tiles);
        b
    }

    /// Override the cell spacing used by [`add_cell`](Self::add_cell).
    pub fn cell_size(mut self, size: Point) -> Self {
        self.cell_size = size;
        self
    }

    /// A fully connected `cols × rows` grid with uniform entrance `cost`.
    pub fn grid(cols: i32, rows: i32, cost: f32) -> Self {
        let mut b = Self::with_capacity(grid_capacity(cols, rows));
        for row in 0..rows {
            for col in 0..cols {
                b.add_cell(col, row, cost);
            }
        }
        b.connect_cells();
        b
    }

    /// Add a free-standing tile at `pos` and return its `TileId`.
    pub fn add_tile(&mut self, pos: Point, cost: f32) -> TileId {
        debug_assert!(cost >= 0.0, "entrance cost must be non-negative");
        let id = TileId(self.pos.len() as u32);
        self.pos.push(pos);
        self.cost.push(cost);
        self.room.push(RoomId::INVALID);
        self.links.push([TileId::INVALID; 4]);
        id
    }

    /// Add a tile at grid cell `(col, row)`, positioned by the cell size.
    ///
    /// Re-adding an occupied cell points the cell at the new tile; the
    /// earlier tile stays in the map, unreachable through `tile_at`.
    pub fn add_cell(&mut self, col: i32, row: i32, cost: f32) -> TileId {
        let pos = Point::new(col as f32 * self.cell_size.x, row as f32 * self.cell_size.y);
        let id = self.add_tile(pos, cost);
        self.cells.insert((col, row), id);
        id
    }

    /// Tile previously added at `(col, row)`.
    pub fn cell(&self, col: i32, row: i32) -> Option<TileId> {
        self.cells.get(&(col, row)).copied()
    }

    /// Link every grid cell to the cells adjacent to it in each direction.
    pub fn connect_cells(&mut self) {
        let cells: Vec<((i32, i32), TileId)> = self.cells.iter().map(|(&c, &t)| (c, t)).collect();
        for ((col, row), tile) in cells {
            for dir in Direction::ALL {
                let (dc, dr) = dir.offset();
                if let Some(&n) = self.cells.get(&(col + dc, row + dr)) {
                    self.link_one_way(tile, dir, n);
                }
            }
        }
    }

    /// Link `a` to `b` in slot `dir` and `b` back to `a` in the opposite slot.
    pub fn link(&mut self, a: TileId, dir: Direction, b: TileId) {
        self.link_one_way(a, dir, b);
        self.link_one_way(b, dir.opposite(), a);
    }

    /// Link `a` to `b` in slot `dir` only.
    pub fn link_one_way(&mut self, a: TileId, dir: Direction, b: TileId) {
        self.links[a.index()][dir.slot()] = b;
    }

    /// Clear both directions of the link in slot `dir` of `a`.
    pub fn unlink(&mut self, a: TileId, dir: Direction) {
        let b = self.links[a.index()][dir.slot()];
        self.links[a.index()][dir.slot()] = TileId::INVALID;
        if b.is_valid() && self.links[b.index()][dir.opposite().slot()] == a {
            self.links[b.index()][dir.opposite().slot()] = TileId::INVALID;
        }
    }

    /// Remove every link into and out of `tile`, leaving it isolated.
    pub fn isolate(&mut self, tile: TileId) {
        for dir in Direction::ALL {
            self.unlink(tile, dir);
        }
        for links in &mut self.links {
            for slot in links.iter_mut() {
                if *slot == tile {
                    *slot = TileId::INVALID;
                }
            }
        }
    }

    pub fn set_room(&mut self, tile: TileId, room: RoomId) {
        self.room[tile.index()] = room;
    }

    pub fn set_cost(&mut self, tile: TileId, cost: f32) {
        debug_assert!(cost >= 0.0, "entrance cost must be non-negative");
        self.cost[tile.index()] = cost;
    }

    pub fn tile_count(&self) -> usize {
        self.pos.len()
    }

    /// Consume the builder and produce a [`TileMap`].
    ///
    /// Bulk-loads the R-tree in O(N log N).
    pub fn build(self) -> TileMap {
        let entries: Vec<TileEntry> = self
            .pos
            .iter()
            .enumerate()
            .map(|(i, p)| TileEntry {
                point: [p.x, p.y],
                id: TileId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        TileMap {
            tile_pos: self.pos,
            tile_cost: self.cost,
            tile_room: self.room,
            tile_links: self.links,
            cells: self.cells,
            spatial_idx,
        }
    }
}

impl Default for TileMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell count of a `cols × rows` grid; negative dimensions count as zero.
pub(crate) fn grid_capacity(cols: i32, rows: i32) -> usize {
    let cols = cols.max(0) as usize;
    let rows = rows.max(0) as usize;
    cols.saturating_mul(rows)
}
