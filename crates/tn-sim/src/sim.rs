//! The `Sim` struct and its tick loop.

use tn_core::{AgentId, AgentRng, Point, SimClock, SimConfig, Tick, TileId};
use tn_grid::TileMap;
use tn_mobility::{EventLog, MobilityResult, StepOutcome};
use tn_path::{AStarPathFinder, PathFinder};

use crate::{Agent, Behavior, SimContext, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<B, F>` owns the tile map and every agent and drives a three-phase
/// tick loop:
///
/// 1. **Decide** (sequential, ascending `AgentId`): every enabled agent that
///    is at rest is asked [`Behavior::next_destination`]; a destination
///    starts a route search.
/// 2. **Move** (optionally parallel with the `parallel` feature): every
///    enabled agent's follower advances by `config.tick_duration_secs`.
///    Navigation notifications go into a per-agent [`EventLog`].
/// 3. **Dispatch** (sequential, ascending `AgentId`): buffered notifications
///    and arrivals are delivered to the [`SimObserver`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: Behavior, F: PathFinder = AStarPathFinder> {
    /// Global configuration (tick duration, total ticks, seed, navigation).
    pub config: SimConfig,

    /// Simulation clock.
    pub clock: SimClock,

    /// The tile map.  Read-only while the sim runs.
    pub map: TileMap,

    /// All agents, indexed by `AgentId`.
    pub agents: Vec<Agent<F>>,

    /// Per-agent deterministic RNGs, kept apart from `agents` for the
    /// split-borrow pattern.
    pub rngs: Vec<AgentRng>,

    /// The behavior model.  Called once per resting agent per tick.
    pub behavior: B,

    /// Notifications waiting for the next dispatch phase, one log per agent.
    pub(crate) pending: Vec<EventLog>,
}

impl<B: Behavior, F: PathFinder> Sim<B, F> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.step(now, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.step(now, observer)?;
        }
        Ok(())
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent<F>> {
        self.agents.get(id.index())
    }

    /// Every agent's current position, indexed by `AgentId`.
    pub fn positions(&self) -> Vec<Point> {
        self.agents.iter().map(|a| a.position).collect()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Send `agent` to `tile`.
    ///
    /// Returns `Ok(false)` if no route exists; the agent keeps whatever it
    /// was doing and an `on_no_path` notification is delivered with the next
    /// tick's events.
    pub fn command_move(&mut self, agent: AgentId, tile: TileId) -> SimResult<bool> {
        let i = self.index_of(agent)?;
        let a = &mut self.agents[i];
        let found = a.follower.request_move(&self.map, a.position, tile, &a.name, &mut self.pending[i])?;
        Ok(found)
    }

    /// Halt `agent` where it stands.
    pub fn stop(&mut self, agent: AgentId) -> SimResult<()> {
        let i = self.index_of(agent)?;
        self.agents[i].follower.stop();
        Ok(())
    }

    /// Enable or disable `agent`.  Disabling drops its navigation state.
    pub fn set_enabled(&mut self, agent: AgentId, enabled: bool) -> SimResult<()> {
        let i = self.index_of(agent)?;
        let a = &mut self.agents[i];
        if a.enabled && !enabled {
            a.follower.disable();
        }
        a.enabled = enabled;
        Ok(())
    }

    fn index_of(&self, agent: AgentId) -> SimResult<usize> {
        if agent.index() < self.agents.len() {
            Ok(agent.index())
        } else {
            Err(SimError::UnknownAgent(agent))
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);
        let moving = self.process_tick(now, observer)?;
        observer.on_tick_end(now, moving);
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        // ── Phase 1: decide ───────────────────────────────────────────────
        self.decide(now)?;

        // ── Phase 2: move ─────────────────────────────────────────────────
        let outcomes = self.move_agents();

        // ── Phase 3: dispatch in ascending AgentId order ──────────────────
        let mut moving = 0;
        for ((agent, log), outcome) in self.agents.iter().zip(&mut self.pending).zip(outcomes) {
            log.replay_into(observer);
            match outcome {
                Ok(StepOutcome::Moved) => moving += 1,
                Ok(StepOutcome::Arrived) => {
                    if let Some(tile) = agent.follower.destination() {
                        observer.on_arrived(agent.id, tile);
                    }
                }
                Ok(StepOutcome::AtRest) => {}
                Err(e) if e.is_recoverable() => {
                    log::warn!("{} ({}) halted at {now}: {e}", agent.name, agent.id);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(moving)
    }

    /// Ask every resting, enabled agent where to go next.
    fn decide(&mut self, now: Tick) -> SimResult<()> {
        let positions = self.positions();
        let ctx = SimContext::new(now, self.config.tick_duration_secs, &self.map, &positions);

        for ((agent, rng), log) in self.agents.iter_mut().zip(&mut self.rngs).zip(&mut self.pending) {
            if !agent.enabled || !agent.follower.arrived() {
                continue;
            }
            let Some(dest) = self.behavior.next_destination(agent.id, &ctx, rng) else {
                continue;
            };
            agent.follower.request_move(&self.map, agent.position, dest, &agent.name, log)?;
        }
        Ok(())
    }

    /// Advance every enabled follower by one tick.
    ///
    /// With the `parallel` Cargo feature the updates run on Rayon's thread
    /// pool.  Each agent only touches its own follower, position and log.
    fn move_agents(&mut self) -> Vec<MobilityResult<StepOutcome>> {
        let map = &self.map;
        let dt  = self.config.tick_duration_secs;
        let step = |(agent, log): (&mut Agent<F>, &mut EventLog)| {
            if !agent.enabled {
                return Ok(StepOutcome::AtRest);
            }
            agent.follower.update(map, &mut agent.position, dt, log)
        };

        #[cfg(not(feature = "parallel"))]
        {
            self.agents.iter_mut().zip(self.pending.iter_mut()).map(step).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.agents.par_iter_mut().zip(self.pending.par_iter_mut()).map(step).collect()
        }
    }
}
