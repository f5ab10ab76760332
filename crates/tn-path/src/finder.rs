//! Path-finder trait and default A* implementation.
//!
//! # Pluggability
//!
//! `tn-mobility` requests routes through the [`PathFinder`] trait, so
//! applications can swap in their own search (hierarchical, cached, JPS)
//! without touching the follower.  The default [`AStarPathFinder`] is a
//! plain A* over the four compass links of each tile.
//!
//! # Cost model
//!
//! Moving into a tile costs that tile's entrance cost.  The start tile's own
//! cost is never charged, so a route's total is the sum over every tile
//! after the start.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tn_core::{NavConfig, TileId};
use tn_grid::TileGraph;

use crate::{Heuristic, PathError, PathResult, Route};

#[cfg(feature = "fx-hash")]
type ClosedSet = rustc_hash::FxHashSet<TileId>;
#[cfg(not(feature = "fx-hash"))]
type ClosedSet = std::collections::HashSet<TileId>;

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable route search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one finder can be shared by
/// followers updated from Rayon worker threads.
pub trait PathFinder: Send + Sync {
    /// Compute a route from `start` to `goal`.
    ///
    /// The returned route starts with `start` and ends with `goal`;
    /// `start == goal` yields the one-tile route.
    ///
    /// # Errors
    ///
    /// - [`PathError::InvalidTile`] if either tile is not in `graph`.
    /// - [`PathError::NoPathFound`] if the goal is unreachable or the search
    ///   budget runs out first.
    fn find_path<G: TileGraph>(&self, graph: &G, start: TileId, goal: TileId) -> PathResult<Route>;
}

impl<P: PathFinder> PathFinder for &P {
    fn find_path<G: TileGraph>(&self, graph: &G, start: TileId, goal: TileId) -> PathResult<Route> {
        (**self).find_path(graph, start, goal)
    }
}

// ── AStarPathFinder ───────────────────────────────────────────────────────────

/// A* with a weighted-Manhattan heuristic and a fixed iteration budget.
///
/// The budget caps the number of open-set pops per call.  It bounds the
/// worst-case time a single search can take inside one tick; it is not a
/// cancellation mechanism.
#[derive(Clone, Debug)]
pub struct AStarPathFinder {
    pub max_iterations: u32,
    pub heuristic: Heuristic,
}

impl AStarPathFinder {
    pub const DEFAULT_MAX_ITERATIONS: u32 = 25_000;

    pub fn new() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            heuristic: Heuristic::DEFAULT,
        }
    }

    /// Budget and heuristic weights taken from `config`.
    pub fn from_config(config: &NavConfig) -> Self {
        Self {
            max_iterations: config.max_search_iterations,
            heuristic: Heuristic::from_config(config),
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

impl Default for AStarPathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder for AStarPathFinder {
    fn find_path<G: TileGraph>(&self, graph: &G, start: TileId, goal: TileId) -> PathResult<Route> {
        astar(graph, start, goal, self.heuristic, self.max_iterations)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// One candidate step of the search.  Lives in a per-call arena; the
/// predecessor link is an arena index.
struct SearchNode {
    tile:      TileId,
    g:         f32,
    came_from: Option<usize>,
}

/// Open-set entry.  `BinaryHeap` is a max-heap, so the ordering is reversed:
/// the entry with the lowest `f` compares greatest.  Ties prefer the lower
/// `h` (closer to the goal), then the earlier push.
#[derive(Copy, Clone)]
struct OpenEntry {
    f:    f32,
    h:    f32,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.node.cmp(&self.node))
    }
}

fn astar<G: TileGraph>(
    graph:          &G,
    start:          TileId,
    goal:           TileId,
    heuristic:      Heuristic,
    max_iterations: u32,
) -> PathResult<Route> {
    if !graph.contains(start) {
        return Err(PathError::InvalidTile(start));
    }
    if !graph.contains(goal) {
        return Err(PathError::InvalidTile(goal));
    }
    let start_pos = graph.position(start).ok_or(PathError::InvalidTile(start))?;
    let goal_pos = graph.position(goal).ok_or(PathError::InvalidTile(goal))?;

    if start == goal {
        return Ok(Route::single(start));
    }

    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut closed = ClosedSet::default();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();

    let h = heuristic.estimate(start_pos, goal_pos);
    nodes.push(SearchNode { tile: start, g: 0.0, came_from: None });
    open.push(OpenEntry { f: h, h, node: 0 });

    let mut iterations: u32 = 0;
    let mut budget_exhausted = false;

    while let Some(entry) = open.pop() {
        let current = entry.node;
        let tile = nodes[current].tile;

        // Duplicate entry for a tile that was already closed via a cheaper
        // (or earlier) copy.
        if !closed.insert(tile) {
            continue;
        }

        // Only expansions count, so a graph with fewer tiles than the budget
        // can never exhaust it.
        if iterations >= max_iterations {
            budget_exhausted = true;
            break;
        }
        iterations += 1;

        if tile == goal {
            let route = reconstruct(&nodes, current);
            log::debug!(
                "route {start} -> {goal}: {} tiles, cost {}, {iterations} iterations",
                route.len(),
                route.total_cost()
            );
            return Ok(route);
        }

        let g = nodes[current].g;
        for (_, neighbor) in graph.neighbors(tile) {
            if closed.contains(&neighbor) {
                continue;
            }
            let Some(pos) = graph.position(neighbor) else {
                continue;
            };
            let g = g + graph.entrance_cost(neighbor);
            let h = heuristic.estimate(pos, goal_pos);
            let node = nodes.len();
            nodes.push(SearchNode { tile: neighbor, g, came_from: Some(current) });
            open.push(OpenEntry { f: g + h, h, node });
        }
    }

    if budget_exhausted {
        log::warn!(
            "search budget of {max_iterations} exhausted: start {start}, goal {goal}, \
             closed {}, open {}",
            closed.len(),
            open.len()
        );
    } else {
        log::debug!("no path {start} -> {goal}: open set exhausted after {iterations} iterations");
    }

    Err(PathError::NoPathFound { start, goal, budget_exhausted })
}

/// Walk `came_from` links from the goal node back to the start and return
/// them in travel order.
fn reconstruct(nodes: &[SearchNode], goal_node: usize) -> Route {
    let mut tiles = Vec::new();
    let mut cur = Some(goal_node);
    while let Some(i) = cur {
        tiles.push(nodes[i].tile);
        cur = nodes[i].came_from;
    }
    tiles.reverse();
    Route::new(tiles, nodes[goal_node].g)
}
