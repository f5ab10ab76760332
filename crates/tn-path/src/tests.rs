//! Unit tests for tn-path.
//!
//! Maps are built with `TileMapBuilder::grid`, whose half-height rows make
//! the default heuristic exact for unit costs.

#[cfg(test)]
mod helpers {
    use tn_core::{Point, TileId};
    use tn_grid::{TileGraph, TileMap, TileMapBuilder};

    use crate::Route;

    pub fn grid(cols: i32, rows: i32) -> TileMap {
        TileMapBuilder::grid(cols, rows, 1.0).build()
    }

    pub fn at(map: &TileMap, col: i32, row: i32) -> TileId {
        map.tile_at(col, row).unwrap()
    }

    /// Two tiles with no link between them.
    pub fn disconnected_pair() -> (TileMap, TileId, TileId) {
        let mut b = TileMapBuilder::new();
        let a = b.add_tile(Point::new(0.0, 0.0), 1.0);
        let c = b.add_tile(Point::new(5.0, 0.0), 1.0);
        (b.build(), a, c)
    }

    /// Every consecutive pair is linked and the reported cost matches the
    /// entrance costs of every tile after the first.
    pub fn assert_valid_route<G: TileGraph>(graph: &G, route: &Route, start: TileId, goal: TileId) {
        let tiles: Vec<TileId> = route.iter().collect();
        assert_eq!(tiles.first(), Some(&start));
        assert_eq!(tiles.last(), Some(&goal));
        for pair in tiles.windows(2) {
            assert!(
                graph.neighbors(pair[0]).any(|(_, n)| n == pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
        let cost: f32 = tiles.iter().skip(1).map(|&t| graph.entrance_cost(t)).sum();
        assert!((cost - route.total_cost()).abs() < 1e-4, "cost {cost} != {}", route.total_cost());
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use tn_core::TileId;
    use crate::Route;

    #[test]
    fn single_tile_route() {
        let r = Route::single(TileId(3));
        assert_eq!(r.len(), 1);
        assert_eq!(r.front(), Some(TileId(3)));
        assert_eq!(r.goal(), Some(TileId(3)));
        assert_eq!(r.total_cost(), 0.0);
    }

    #[test]
    fn pop_front_consumes_in_order() {
        let mut r = Route::new(vec![TileId(1), TileId(2), TileId(3)], 2.0);
        assert_eq!(r.pop_front(), Some(TileId(1)));
        assert_eq!(r.front(), Some(TileId(2)));
        assert_eq!(r.goal(), Some(TileId(3)));
        r.pop_front();
        r.pop_front();
        assert!(r.is_empty());
        assert_eq!(r.pop_front(), None);
    }
}

// ── Heuristic ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heuristic {
    use tn_core::{NavConfig, Point};
    use crate::Heuristic;

    #[test]
    fn default_weights_vertical_double() {
        let h = Heuristic::default();
        assert_eq!(h.estimate(Point::new(0.0, 0.0), Point::new(3.0, 0.0)), 3.0);
        assert_eq!(h.estimate(Point::new(0.0, 0.0), Point::new(0.0, 3.0)), 6.0);
        assert_eq!(h.estimate(Point::new(1.0, 1.0), Point::new(-1.0, 0.0)), 4.0);
    }

    #[test]
    fn from_config_copies_weights() {
        let cfg = NavConfig { heuristic_x_weight: 0.5, heuristic_y_weight: 0.25, ..NavConfig::default() };
        let h = Heuristic::from_config(&cfg);
        assert_eq!(h, Heuristic { x_weight: 0.5, y_weight: 0.25 });
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(Heuristic::ZERO.estimate(Point::new(9.0, 9.0), Point::ZERO), 0.0);
    }
}

// ── A* search ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use tn_core::{NavConfig, TileId};
    use tn_grid::{TileGraph, TileMapBuilder};

    use super::helpers::{assert_valid_route, at, disconnected_pair, grid};
    use crate::{AStarPathFinder, Heuristic, PathError, PathFinder};

    #[test]
    fn corner_to_corner_3x3() {
        let map = grid(3, 3);
        let (start, goal) = (at(&map, 0, 0), at(&map, 2, 2));
        let route = AStarPathFinder::new().find_path(&map, start, goal).unwrap();

        // Equal-cost routes abound; which one is returned depends on the
        // NE/SE/SW/NW enumeration order and is not asserted.
        assert_eq!(route.len(), 5);
        assert_eq!(route.total_cost(), 4.0);
        assert_valid_route(&map, &route, start, goal);
    }

    #[test]
    fn second_tile_is_one_edge_from_start() {
        let map = grid(4, 4);
        let start = at(&map, 1, 1);
        let route = AStarPathFinder::new().find_path(&map, start, at(&map, 3, 0)).unwrap();
        let second = route.iter().nth(1).unwrap();
        assert!(map.neighbors(start).any(|(_, n)| n == second));
    }

    #[test]
    fn same_start_and_goal() {
        let map = grid(2, 2);
        let t = at(&map, 1, 1);
        let route = AStarPathFinder::new().find_path(&map, t, t).unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.total_cost(), 0.0);
    }

    #[test]
    fn avoids_expensive_tile() {
        // row 1:  1 1 1
        // row 0:  S 10 G
        let mut b = TileMapBuilder::grid(3, 2, 1.0);
        let wall = b.cell(1, 0).unwrap();
        b.set_cost(wall, 10.0);
        let map = b.build();
        let (start, goal) = (at(&map, 0, 0), at(&map, 2, 0));

        let route = AStarPathFinder::new().find_path(&map, start, goal).unwrap();
        assert_eq!(route.total_cost(), 4.0);
        assert!(route.iter().all(|t| t != wall));
        assert_valid_route(&map, &route, start, goal);
    }

    #[test]
    fn matches_dijkstra_on_weighted_grid() {
        let mut b = TileMapBuilder::grid(6, 6, 1.0);
        for row in 0..6 {
            for col in 0..6 {
                let t = b.cell(col, row).unwrap();
                b.set_cost(t, ((col * 7 + row * 3) % 5 + 1) as f32);
            }
        }
        let map = b.build();
        let (start, goal) = (at(&map, 0, 0), at(&map, 5, 5));

        let astar = AStarPathFinder::new().find_path(&map, start, goal).unwrap();
        let dijkstra = AStarPathFinder::new()
            .with_heuristic(Heuristic::ZERO)
            .find_path(&map, start, goal)
            .unwrap();

        assert_valid_route(&map, &astar, start, goal);
        assert_valid_route(&map, &dijkstra, start, goal);
        assert!((astar.total_cost() - dijkstra.total_cost()).abs() < 1e-4);
    }

    #[test]
    fn disconnected_no_path() {
        let (map, a, c) = disconnected_pair();
        let err = AStarPathFinder::new().find_path(&map, a, c).unwrap_err();
        assert_eq!(err, PathError::NoPathFound { start: a, goal: c, budget_exhausted: false });
        assert!(err.is_recoverable());
    }

    #[test]
    fn isolated_goal_no_path() {
        let mut b = TileMapBuilder::grid(3, 3, 1.0);
        let goal = b.cell(2, 2).unwrap();
        b.isolate(goal);
        let map = b.build();
        let result = AStarPathFinder::new().find_path(&map, at(&map, 0, 0), goal);
        assert!(matches!(result, Err(PathError::NoPathFound { budget_exhausted: false, .. })));
    }

    #[test]
    fn small_graph_never_hits_budget() {
        // Nine reachable tiles, nine expansions.
        let mut b = TileMapBuilder::grid(3, 3, 1.0);
        let goal = b.add_tile(tn_core::Point::new(10.0, 10.0), 1.0);
        let start = b.cell(0, 0).unwrap();
        let map = b.build();

        let finder = AStarPathFinder::new().with_max_iterations(9);
        let result = finder.find_path(&map, start, goal);
        assert!(matches!(result, Err(PathError::NoPathFound { budget_exhausted: false, .. })));
    }

    #[test]
    fn stale_entries_do_not_spend_budget() {
        // Open grids queue many duplicates; the budget covers tiles only.
        let mut b = TileMapBuilder::grid(40, 40, 1.0);
        let goal = b.add_tile(tn_core::Point::new(100.0, 100.0), 1.0);
        let start = b.cell(0, 0).unwrap();
        let map = b.build();

        let finder = AStarPathFinder::new().with_max_iterations(1600);
        let result = finder.find_path(&map, start, goal);
        assert!(matches!(result, Err(PathError::NoPathFound { budget_exhausted: false, .. })));

        let tight = AStarPathFinder::new().with_max_iterations(1599);
        let result = tight.find_path(&map, start, goal);
        assert!(matches!(result, Err(PathError::NoPathFound { budget_exhausted: true, .. })));
    }

    #[test]
    fn budget_exhaustion_fails() {
        let map = grid(10, 10);
        let finder = AStarPathFinder::new().with_max_iterations(3);
        let err = finder.find_path(&map, at(&map, 0, 0), at(&map, 9, 9)).unwrap_err();
        assert!(matches!(err, PathError::NoPathFound { budget_exhausted: true, .. }));
    }

    #[test]
    fn budget_from_config() {
        let cfg = NavConfig { max_search_iterations: 3, ..NavConfig::default() };
        let finder = AStarPathFinder::from_config(&cfg);
        assert_eq!(finder.max_iterations, 3);
        assert_eq!(finder.heuristic, Heuristic::DEFAULT);
    }

    #[test]
    fn invalid_start_or_goal() {
        let map = grid(2, 2);
        let ok = at(&map, 0, 0);
        let finder = AStarPathFinder::new();
        assert_eq!(
            finder.find_path(&map, TileId::INVALID, ok),
            Err(PathError::InvalidTile(TileId::INVALID))
        );
        assert_eq!(finder.find_path(&map, ok, TileId(99)), Err(PathError::InvalidTile(TileId(99))));
        assert!(!PathError::InvalidTile(TileId(99)).is_recoverable());
    }

    #[test]
    fn respects_one_way_links() {
        use tn_core::Point;
        use tn_grid::Direction;

        let mut b = TileMapBuilder::new();
        let a = b.add_tile(Point::new(0.0, 0.0), 1.0);
        let c = b.add_tile(Point::new(1.0, 0.0), 1.0);
        b.link_one_way(a, Direction::SE, c);
        let map = b.build();

        let finder = AStarPathFinder::new();
        assert!(finder.find_path(&map, a, c).is_ok());
        assert!(finder.find_path(&map, c, a).is_err());
    }

    #[test]
    fn finder_by_reference() {
        fn search<P: PathFinder>(p: P, map: &tn_grid::TileMap) -> usize {
            p.find_path(map, at(map, 0, 0), at(map, 1, 0)).unwrap().len()
        }
        let map = grid(2, 1);
        let finder = AStarPathFinder::new();
        assert_eq!(search(&finder, &map), 2);
    }
}
