//! The per-agent path-following controller.

use tn_core::{AgentId, NavConfig, Point, TileId};
use tn_grid::TileGraph;
use tn_path::{AStarPathFinder, PathError, PathFinder, Route};

use crate::{MobilityError, MobilityResult, NavObserver, NavState, StepOutcome};

/// Drives one agent along a route, one tick at a time.
///
/// The follower owns the route but not the agent's position: callers pass
/// the position into [`move_to`](Self::move_to) and [`update`](Self::update)
/// and keep it wherever their agent representation lives.
///
/// # Type parameter
///
/// `F` must implement [`PathFinder`] (e.g. [`AStarPathFinder`]).  Swap it at
/// compile time for a different search with no runtime overhead.
pub struct PathFollower<F: PathFinder = AStarPathFinder> {
    agent:  AgentId,
    finder: F,

    /// Map units per simulated second.
    pub speed: f32,
    /// Checkpoint radius while more than one waypoint remains.
    pub close_radius: f32,
    /// Checkpoint radius for the final waypoint.
    pub tight_radius: f32,

    destination: Option<TileId>,
    route:       Route,
    /// Tile under the agent at the end of the previous update.
    last_tile:   Option<TileId>,
}

impl<F: PathFinder> PathFollower<F> {
    /// An idle follower for `agent` using the movement settings of `config`.
    pub fn new(agent: AgentId, finder: F, config: &NavConfig) -> Self {
        Self {
            agent,
            finder,
            speed:        config.speed,
            close_radius: config.close_radius,
            tight_radius: config.tight_radius,
            destination:  None,
            route:        Route::default(),
            last_tile:    None,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn finder(&self) -> &F {
        &self.finder
    }

    #[inline]
    pub fn destination(&self) -> Option<TileId> {
        self.destination
    }

    /// Waypoints still to visit, next one first.
    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// `true` when there is no destination, or every waypoint towards it has
    /// been consumed.
    #[inline]
    pub fn arrived(&self) -> bool {
        self.destination.is_none() || self.route.is_empty()
    }

    pub fn state(&self) -> NavState {
        match self.destination {
            None => NavState::Idle,
            Some(_) if self.route.is_empty() => NavState::Arrived,
            Some(_) => NavState::Navigating,
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Start navigating to `destination` from the tile nearest `position`.
    ///
    /// Re-requesting the current destination returns `Ok(())` immediately
    /// without searching, even if the agent has already arrived.  If the
    /// search fails the previous destination and route are left as they
    /// were.
    ///
    /// # Errors
    ///
    /// Returns [`MobilityError::Path`] with
    /// - [`PathError::InvalidTile`] if the graph is empty or `destination`
    ///   is not in it;
    /// - [`PathError::NoPathFound`] if the destination is unreachable.
    pub fn move_to<G: TileGraph>(
        &mut self,
        graph:       &G,
        position:    Point,
        destination: TileId,
    ) -> MobilityResult<()> {
        if self.destination == Some(destination) {
            return Ok(());
        }
        let start = graph
            .nearest_tile(position)
            .ok_or(PathError::InvalidTile(TileId::INVALID))?;
        let route = self.finder.find_path(graph, start, destination)?;

        self.route = route;
        self.destination = Some(destination);
        Ok(())
    }

    /// [`move_to`](Self::move_to) with the "agent is lost" reporting folded
    /// in.
    ///
    /// Returns `Ok(true)` when a route is established (or already current)
    /// and `Ok(false)` when the destination is unreachable, in which case
    /// `observer.on_no_path` has been called with `name`.  Invalid tiles are
    /// caller bugs and are still returned as errors.
    pub fn request_move<G: TileGraph, O: NavObserver + ?Sized>(
        &mut self,
        graph:       &G,
        position:    Point,
        destination: TileId,
        name:        &str,
        observer:    &mut O,
    ) -> MobilityResult<bool> {
        match self.move_to(graph, position, destination) {
            Ok(()) => Ok(true),
            Err(MobilityError::Path(PathError::NoPathFound { .. })) => {
                log::info!("{name} is lost, unable to find a path!");
                observer.on_no_path(self.agent, name);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Drop the destination and route.  The agent stays where it is.
    pub fn stop(&mut self) {
        self.destination = None;
        self.route.clear();
    }

    /// Take the agent out of active simulation: stop, and forget the tile
    /// it was standing on so that re-enabling it does not fire room events
    /// for wherever it was left.
    pub fn disable(&mut self) {
        self.stop();
        self.last_tile = None;
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance the agent by one tick of `elapsed_secs`.
    ///
    /// Does nothing while [`arrived`](Self::arrived).  Otherwise consumes the
    /// front waypoint if it is within its checkpoint radius, moves `position`
    /// toward the next one, and reports room transitions to `observer`.
    ///
    /// # Errors
    ///
    /// [`MobilityError::BrokenWaypoint`] if the next waypoint no longer
    /// resolves in `graph`.  The follower is already idle when this is
    /// returned; room tracking for this step has still run.
    pub fn update<G: TileGraph, O: NavObserver + ?Sized>(
        &mut self,
        graph:        &G,
        position:     &mut Point,
        elapsed_secs: f32,
        observer:     &mut O,
    ) -> MobilityResult<StepOutcome> {
        if self.arrived() {
            return Ok(StepOutcome::AtRest);
        }

        self.pass_checkpoint(graph, *position);

        let mut outcome = StepOutcome::Arrived;
        let mut broken = None;
        if let Some(next) = self.route.front() {
            match waypoint_position(graph, next) {
                Some(target) => {
                    *position = position.step_toward(target, self.speed * elapsed_secs);
                    outcome = StepOutcome::Moved;
                }
                None => {
                    log::warn!("{}: waypoint {next} vanished, stopping", self.agent);
                    self.stop();
                    broken = Some(next);
                }
            }
        }

        self.track_rooms(graph, *position, observer);

        match broken {
            Some(tile) => Err(MobilityError::BrokenWaypoint(tile)),
            None => Ok(outcome),
        }
    }

    /// Pop the front waypoint if the agent is inside its checkpoint radius.
    fn pass_checkpoint<G: TileGraph>(&mut self, graph: &G, position: Point) {
        let Some(next) = self.route.front() else { return };
        let Some(target) = waypoint_position(graph, next) else { return };

        let radius = if self.route.len() > 1 { self.close_radius } else { self.tight_radius };
        if position.distance(target) < radius {
            self.route.pop_front();
        }
    }

    /// Fire room notifications when the tile under the agent changes rooms.
    fn track_rooms<G: TileGraph, O: NavObserver + ?Sized>(
        &mut self,
        graph:    &G,
        position: Point,
        observer: &mut O,
    ) {
        let Some(tile) = graph.nearest_tile(position) else { return };
        let last = *self.last_tile.get_or_insert(tile);
        if last == tile {
            return;
        }

        let (old_room, new_room) = (graph.room(last), graph.room(tile));
        if old_room != new_room {
            if let Some(room) = old_room {
                observer.on_room_left(self.agent, room);
            }
            if let Some(room) = new_room {
                observer.on_room_entered(self.agent, room);
            }
        }
        self.last_tile = Some(tile);
    }
}

#[inline]
fn waypoint_position<G: TileGraph>(graph: &G, tile: TileId) -> Option<Point> {
    if graph.contains(tile) { graph.position(tile) } else { None }
}
