//! Fluent builder for constructing a [`Sim`].

use tn_core::{AgentId, AgentRng, Point, SimConfig, SimRng};
use tn_grid::{TileGraph, TileMap};
use tn_mobility::{EventLog, PathFollower};
use tn_path::PathFinder;

use crate::{Agent, Behavior, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B, F>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick duration, total ticks, seed, navigation settings
/// - [`TileMap`]: the map agents walk on
/// - `B: Behavior`: the decision model
/// - `F: PathFinder + Clone`: cloned into each agent's follower
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                   |
/// |---------------------|-------------------------------------------|
/// | `.agent_count(n)`   | Length of `positions`/`names`, else 0     |
/// | `.positions(v)`     | Centres of random tiles (seeded)          |
/// | `.names(v)`         | `"Agent 0"`, `"Agent 1"`, …               |
///
/// # Example
///
/// ```rust,ignore
/// let finder = AStarPathFinder::from_config(&config.nav);
/// let mut sim = SimBuilder::new(config, map, WanderBehavior::default(), finder)
///     .agent_count(20)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: Behavior, F: PathFinder + Clone> {
    config:    SimConfig,
    map:       TileMap,
    behavior:  B,
    finder:    F,
    count:     Option<usize>,
    positions: Option<Vec<Point>>,
    names:     Option<Vec<String>>,
}

impl<B: Behavior, F: PathFinder + Clone> SimBuilder<B, F> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, map: TileMap, behavior: B, finder: F) -> Self {
        Self {
            config,
            map,
            behavior,
            finder,
            count:     None,
            positions: None,
            names:     None,
        }
    }

    /// Number of agents to create.
    pub fn agent_count(mut self, n: usize) -> Self {
        self.count = Some(n);
        self
    }

    /// Starting position of each agent.
    pub fn positions(mut self, positions: Vec<Point>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Display name of each agent.
    pub fn names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Validate inputs, place agents, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B, F>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let count = self
            .count
            .or(self.positions.as_ref().map(Vec::len))
            .or(self.names.as_ref().map(Vec::len))
            .unwrap_or(0);

        // ── Validate and resolve optional inputs ──────────────────────────
        let positions = match self.positions {
            Some(p) => {
                check_len(count, p.len(), "positions")?;
                p
            }
            None => scatter(&self.map, count, self.config.seed)?,
        };

        let names = match self.names {
            Some(n) => {
                check_len(count, n.len(), "names")?;
                n
            }
            None => (0..count).map(|i| format!("Agent {i}")).collect(),
        };

        // ── Build agents ──────────────────────────────────────────────────
        let agents: Vec<Agent<F>> = positions
            .into_iter()
            .zip(names)
            .enumerate()
            .map(|(i, (position, name))| {
                let id = AgentId(i as u32);
                let follower = PathFollower::new(id, self.finder.clone(), &self.config.nav);
                Agent::new(id, name, position, follower)
            })
            .collect();

        let rngs = (0..count)
            .map(|i| AgentRng::new(self.config.seed, AgentId(i as u32)))
            .collect();

        log::debug!("built sim: {count} agents on {} tiles", self.map.tile_count());

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            map:      self.map,
            agents,
            rngs,
            behavior: self.behavior,
            pending:  vec![EventLog::new(); count],
        })
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> SimResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(SimError::CountMismatch { expected, got, what })
    }
}

/// Centres of `count` uniformly random tiles.
fn scatter(map: &TileMap, count: usize, seed: u64) -> SimResult<Vec<Point>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if map.is_empty() {
        return Err(SimError::Config("cannot place agents on an empty tile map".into()));
    }
    let mut rng = SimRng::new(seed);
    let positions = (0..count)
        .filter_map(|_| rng.tile(map.tile_count()).and_then(|t| map.position(t)))
        .collect();
    Ok(positions)
}
