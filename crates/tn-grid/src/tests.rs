//! Unit tests for tn-grid.
//!
//! All tests use hand-built maps so they run without any map file.

#[cfg(test)]
mod helpers {
    use tn_core::RoomId;
    use crate::{TileMap, TileMapBuilder};

    /// 4×2 grid split into two rooms down the middle.
    ///
    /// ```text
    /// row 1:  A A B B
    /// row 0:  A A B B
    /// ```
    pub fn two_room_map() -> TileMap {
        let mut b = TileMapBuilder::grid(4, 2, 1.0);
        for row in 0..2 {
            for col in 0..4 {
                let tile = b.cell(col, row).unwrap();
                b.set_room(tile, if col < 2 { RoomId(0) } else { RoomId(1) });
            }
        }
        b.build()
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        for d in Direction::ALL {
            let (a, b) = d.offset();
            let (c, e) = d.opposite().offset();
            assert_eq!((a + c, b + e), (0, 0));
        }
    }

    #[test]
    fn enumeration_order_fixed() {
        let names: Vec<_> = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, ["NE", "SE", "SW", "NW"]);
    }
}

// ── Builder & map structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tn_core::{Point, TileId};
    use crate::map::grid_capacity;
    use crate::{Direction, TileGraph, TileMap, TileMapBuilder};

    #[test]
    fn empty_build() {
        let map = TileMap::empty();
        assert_eq!(map.tile_count(), 0);
        assert!(map.is_empty());
        assert!(!map.contains(TileId(0)));
        assert!(map.nearest_tile(Point::ZERO).is_none());
    }

    #[test]
    fn grid_capacity_does_not_overflow() {
        assert_eq!(grid_capacity(3, 4), 12);
        assert_eq!(grid_capacity(-3, 4), 0);
        assert_eq!(grid_capacity(70_000, 70_000), 4_900_000_000);
    }

    #[test]
    fn grid_links_interior_tile() {
        let map = TileMapBuilder::grid(3, 3, 1.0).build();
        let centre = map.tile_at(1, 1).unwrap();
        assert_eq!(map.neighbors(centre).count(), 4);
        assert_eq!(map.neighbor(centre, Direction::NE), map.tile_at(1, 2));
        assert_eq!(map.neighbor(centre, Direction::SE), map.tile_at(2, 1));
        assert_eq!(map.neighbor(centre, Direction::SW), map.tile_at(1, 0));
        assert_eq!(map.neighbor(centre, Direction::NW), map.tile_at(0, 1));
    }

    #[test]
    fn grid_corner_has_two_neighbors() {
        let map = TileMapBuilder::grid(3, 3, 1.0).build();
        let corner = map.tile_at(0, 0).unwrap();
        let dirs: Vec<_> = map.neighbors(corner).map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![Direction::NE, Direction::SE]);
    }

    #[test]
    fn grid_positions_use_half_rows() {
        let map = TileMapBuilder::grid(3, 3, 1.0).build();
        let t = map.tile_at(2, 2).unwrap();
        assert_eq!(map.position(t), Some(Point::new(2.0, 1.0)));
    }

    #[test]
    fn custom_cell_size() {
        let mut b = TileMapBuilder::new().cell_size(Point::new(2.0, 2.0));
        let t = b.add_cell(1, 1, 1.0);
        let map = b.build();
        assert_eq!(map.position(t), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn link_is_bidirectional() {
        let mut b = TileMapBuilder::new();
        let a = b.add_tile(Point::new(0.0, 0.0), 1.0);
        let c = b.add_tile(Point::new(1.0, 0.0), 1.0);
        b.link(a, Direction::SE, c);
        let map = b.build();
        assert_eq!(map.neighbor(a, Direction::SE), Some(c));
        assert_eq!(map.neighbor(c, Direction::NW), Some(a));
    }

    #[test]
    fn one_way_link() {
        let mut b = TileMapBuilder::new();
        let a = b.add_tile(Point::new(0.0, 0.0), 1.0);
        let c = b.add_tile(Point::new(1.0, 0.0), 1.0);
        b.link_one_way(a, Direction::SE, c);
        let map = b.build();
        assert_eq!(map.neighbor(a, Direction::SE), Some(c));
        assert_eq!(map.neighbors(c).count(), 0);
    }

    #[test]
    fn isolate_removes_all_links() {
        let mut b = TileMapBuilder::grid(3, 3, 1.0);
        let centre = b.cell(1, 1).unwrap();
        b.isolate(centre);
        let map = b.build();
        assert_eq!(map.neighbors(centre).count(), 0);
        for t in map.tiles() {
            assert!(map.neighbors(t).all(|(_, n)| n != centre));
        }
    }

    #[test]
    fn unknown_tile_lookups_are_none() {
        let map = TileMapBuilder::grid(2, 2, 1.0).build();
        assert!(map.position(TileId(99)).is_none());
        assert!(map.neighbor(TileId::INVALID, Direction::NE).is_none());
        assert!(map.room(TileId(99)).is_none());
    }

    #[test]
    fn costs_stored_per_tile() {
        let mut b = TileMapBuilder::grid(2, 1, 1.0);
        let t = b.cell(1, 0).unwrap();
        b.set_cost(t, 4.5);
        let map = b.build();
        assert_eq!(map.entrance_cost(t), 4.5);
    }
}

// ── Rooms ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rooms {
    use tn_core::RoomId;
    use crate::TileGraph;

    #[test]
    fn room_membership() {
        let map = super::helpers::two_room_map();
        assert_eq!(map.room(map.tile_at(0, 0).unwrap()), Some(RoomId(0)));
        assert_eq!(map.room(map.tile_at(3, 1).unwrap()), Some(RoomId(1)));
        assert_eq!(map.room_tiles(RoomId(1)).len(), 4);
    }

    #[test]
    fn unassigned_room_is_none() {
        let map = crate::TileMapBuilder::grid(2, 2, 1.0).build();
        assert!(map.tiles().all(|t| map.room(t).is_none()));
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use tn_core::Point;
    use crate::{TileGraph, TileMapBuilder};

    #[test]
    fn snap_exact_position() {
        let map = TileMapBuilder::grid(3, 3, 1.0).build();
        let t = map.tile_at(2, 1).unwrap();
        assert_eq!(map.nearest_tile(Point::new(2.0, 0.5)), Some(t));
    }

    #[test]
    fn snap_nearest() {
        let map = TileMapBuilder::grid(3, 1, 1.0).build();
        assert_eq!(map.nearest_tile(Point::new(0.4, 0.0)), map.tile_at(0, 0));
        assert_eq!(map.nearest_tile(Point::new(0.6, 0.0)), map.tile_at(1, 0));
    }

    #[test]
    fn k_nearest_order() {
        let map = TileMapBuilder::grid(3, 1, 1.0).build();
        let nearest = map.k_nearest_tiles(Point::new(0.1, 0.0), 2);
        assert_eq!(nearest, vec![map.tile_at(0, 0).unwrap(), map.tile_at(1, 0).unwrap()]);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "csv"))]
mod loader {
    use std::io::Cursor;

    use tn_core::RoomId;
    use crate::{load_map_reader, Direction, GridError, TileGraph};

    const MAP_CSV: &str = "\
col,row,cost,room\n\
0,0,1,\n\
1,0,1,\n\
2,0,3,7\n\
0,1,1,\n\
";

    #[test]
    fn loads_tiles_and_links() {
        let map = load_map_reader(Cursor::new(MAP_CSV)).unwrap();
        assert_eq!(map.tile_count(), 4);
        let origin = map.tile_at(0, 0).unwrap();
        assert_eq!(map.neighbor(origin, Direction::SE), map.tile_at(1, 0));
        assert_eq!(map.neighbor(origin, Direction::NE), map.tile_at(0, 1));
        // (1, 1) is a wall.
        assert!(map.neighbor(map.tile_at(1, 0).unwrap(), Direction::NE).is_none());
    }

    #[test]
    fn loads_costs_and_rooms() {
        let map = load_map_reader(Cursor::new(MAP_CSV)).unwrap();
        let t = map.tile_at(2, 0).unwrap();
        assert_eq!(map.entrance_cost(t), 3.0);
        assert_eq!(map.room(t), Some(RoomId(7)));
        assert!(map.room(map.tile_at(0, 0).unwrap()).is_none());
    }

    #[test]
    fn duplicate_cell_rejected() {
        let csv = "col,row,cost,room\n0,0,1,\n0,0,2,\n";
        let Err(err) = load_map_reader(Cursor::new(csv)) else {
            panic!("duplicate cell accepted");
        };
        assert!(matches!(err, GridError::DuplicateTile { col: 0, row: 0 }));
    }

    #[test]
    fn negative_cost_rejected() {
        let csv = "col,row,cost,room\n0,0,-1,\n";
        assert!(matches!(load_map_reader(Cursor::new(csv)), Err(GridError::Parse(_))));
    }

    #[test]
    fn malformed_row_rejected() {
        let csv = "col,row,cost,room\nx,0,1,\n";
        assert!(matches!(load_map_reader(Cursor::new(csv)), Err(GridError::Parse(_))));
    }
}
