//! Simulation observer trait for progress reporting and event collection.

use tn_core::{AgentId, Tick, TileId};
use tn_mobility::NavObserver;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// Room and no-path notifications arrive through the [`NavObserver`]
/// supertrait, in ascending `AgentId` order within a tick.  All methods have
/// default no-op implementations so implementors only need to override what
/// they care about.
///
/// # Example: arrival counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Arrivals(usize);
///
/// impl NavObserver for Arrivals {}
/// impl SimObserver for Arrivals {
///     fn on_arrived(&mut self, _agent: AgentId, _tile: TileId) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver: NavObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// `agent` consumed the last waypoint of its route to `tile` this tick.
    fn on_arrived(&mut self, _agent: AgentId, _tile: TileId) {}

    /// Called at the end of each tick.
    ///
    /// `moving` is the number of agents that moved this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moving: usize) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl NavObserver for NoopObserver {}
impl SimObserver for NoopObserver {}
