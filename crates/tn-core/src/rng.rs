//! Seeded random streams for wandering and agent placement.
//!
//! A run has one `SimRng` for setup and one `AgentRng` per agent.  An agent's
//! stream is a pure function of `(seed, AgentId)`, so its choices do not
//! change with update order, thread count, or how many other agents exist.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, TileId};

/// Odd multiplier spreading consecutive agent ids across the seed space
/// (the 64-bit golden-ratio constant).
const AGENT_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// Uniform index in `0..n`, or `None` when `n == 0`.
#[inline]
fn index_below(rng: &mut SmallRng, n: usize) -> Option<usize> {
    (n > 0).then(|| rng.gen_range(0..n))
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One agent's private random stream.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(seed: u64, agent: AgentId) -> Self {
        let mixed = seed.wrapping_add((agent.0 as u64 + 1).wrapping_mul(AGENT_STRIDE));
        AgentRng(SmallRng::seed_from_u64(mixed))
    }

    /// `true` with probability `p`.  `p <= 0` (or NaN) never fires and
    /// `p >= 1` always does.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        p > 0.0 && self.0.gen_bool(p.min(1.0))
    }

    /// A uniformly random tile id from a map of `tile_count` tiles.
    #[inline]
    pub fn tile(&mut self, tile_count: usize) -> Option<TileId> {
        index_below(&mut self.0, tile_count).map(|i| TileId(i as u32))
    }

    /// A uniformly random element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        index_below(&mut self.0, items.len()).map(|i| &items[i])
    }

    /// The underlying generator, for `rand` distributions not covered here.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level stream used by single-threaded setup code.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniformly random tile id from a map of `tile_count` tiles.
    #[inline]
    pub fn tile(&mut self, tile_count: usize) -> Option<TileId> {
        index_below(&mut self.0, tile_count).map(|i| TileId(i as u32))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
