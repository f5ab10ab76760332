//! The `Behavior` trait: where agents decide to go next.

use tn_core::{AgentId, AgentRng, Point, Tick, TileId};
use tn_grid::{TileGraph, TileMap};

/// A read-only view of the simulation passed to every
/// [`Behavior`] call.
///
/// Built once per tick, before any agent is asked for a destination.
pub struct SimContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Simulated seconds per tick.
    pub tick_duration_secs: f32,

    /// The tile map agents walk on.
    pub map: &'a TileMap,

    /// Every agent's position at the start of the tick, indexed by `AgentId`.
    pub positions: &'a [Point],
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(
        tick:               Tick,
        tick_duration_secs: f32,
        map:                &'a TileMap,
        positions:          &'a [Point],
    ) -> Self {
        Self { tick, tick_duration_secs, map, positions }
    }

    /// Position of `agent`, if it exists.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Point> {
        self.positions.get(agent.index()).copied()
    }

    /// Tile nearest to `agent`.
    pub fn tile_of(&self, agent: AgentId) -> Option<TileId> {
        self.position(agent).and_then(|p| self.map.nearest_tile(p))
    }
}

/// Pluggable agent decision making.
///
/// The simulation asks every enabled agent that has arrived (or never had a
/// destination) for its next destination once per tick.  Returning `None`
/// leaves the agent standing where it is until the next tick.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  Per-agent randomness comes from
/// the `rng` argument so that choices do not depend on update order.
///
/// # Example
///
/// ```rust,ignore
/// struct GoHome(TileId);
///
/// impl Behavior for GoHome {
///     fn next_destination(&self, _: AgentId, _: &SimContext<'_>, _: &mut AgentRng) -> Option<TileId> {
///         Some(self.0)
///     }
/// }
/// ```
pub trait Behavior: Send + Sync + 'static {
    fn next_destination(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> Option<TileId>;
}

// ── IdleBehavior ──────────────────────────────────────────────────────────────

/// A [`Behavior`] that never picks a destination.
///
/// Agents only move when commanded through
/// [`Sim::command_move`][crate::Sim::command_move].
pub struct IdleBehavior;

impl Behavior for IdleBehavior {
    fn next_destination(
        &self,
        _agent: AgentId,
        _ctx:   &SimContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Option<TileId> {
        None
    }
}

// ── WanderBehavior ────────────────────────────────────────────────────────────

/// Walk to a uniformly random tile, rest, repeat.
///
/// Each tick an arrived agent sets off again with probability
/// `move_chance`.  Destinations may be unreachable; the follower then
/// reports the agent as lost and it tries again on a later tick.
#[derive(Clone, Debug)]
pub struct WanderBehavior {
    pub move_chance: f64,
}

impl WanderBehavior {
    pub fn new(move_chance: f64) -> Self {
        Self { move_chance }
    }
}

impl Default for WanderBehavior {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Behavior for WanderBehavior {
    fn next_destination(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> Option<TileId> {
        if !rng.chance(self.move_chance) {
            return None;
        }
        let pick = rng.tile(ctx.map.tile_count())?;
        // Standing on it already; try again next tick.
        (ctx.tile_of(agent) != Some(pick)).then_some(pick)
    }
}
