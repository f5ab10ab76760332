//! Navigation and simulation configuration.
//!
//! Both structs are plain data with sensible defaults.  Applications usually
//! load them from a JSON file (enable the `serde` feature) and call
//! `validate()` before handing them to the simulation builder.

use crate::{CoreError, CoreResult};

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Per-agent movement and search parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Movement speed in map units per simulated second.  Valid range
    /// `[0.1, 20.0]`.
    pub speed: f32,

    /// Checkpoint radius for intermediate waypoints (more than one left).
    pub close_radius: f32,

    /// Checkpoint radius for the final waypoint.  Must not exceed
    /// `close_radius`.
    pub tight_radius: f32,

    /// A* failsafe: maximum number of open-set pops per search.
    pub max_search_iterations: u32,

    /// Heuristic weight applied to `|dx|`.
    pub heuristic_x_weight: f32,

    /// Heuristic weight applied to `|dy|`.  The default of 2 matches maps
    /// whose rows are laid out at half-unit vertical spacing.
    pub heuristic_y_weight: f32,
}

impl NavConfig {
    pub const MIN_SPEED: f32 = 0.1;
    pub const MAX_SPEED: f32 = 20.0;

    /// Check value ranges.  Returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        if !(Self::MIN_SPEED..=Self::MAX_SPEED).contains(&self.speed) {
            return Err(CoreError::Config(format!(
                "speed {} outside [{}, {}]",
                self.speed,
                Self::MIN_SPEED,
                Self::MAX_SPEED
            )));
        }
        if !(self.tight_radius > 0.0) {
            return Err(CoreError::Config(format!(
                "tight_radius must be positive, got {}",
                self.tight_radius
            )));
        }
        if self.close_radius < self.tight_radius {
            return Err(CoreError::Config(format!(
                "close_radius {} is smaller than tight_radius {}",
                self.close_radius, self.tight_radius
            )));
        }
        if self.max_search_iterations == 0 {
            return Err(CoreError::Config("max_search_iterations must be > 0".into()));
        }
        if !(self.heuristic_x_weight >= 0.0 && self.heuristic_y_weight >= 0.0) {
            return Err(CoreError::Config("heuristic weights must be non-negative".into()));
        }
        Ok(())
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            speed:                 2.0,
            close_radius:          0.3,
            tight_radius:          0.1,
            max_search_iterations: 25_000,
            heuristic_x_weight:    1.0,
            heuristic_y_weight:    2.0,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated seconds per tick; the `elapsed` value of each movement step.
    pub tick_duration_secs: f32,

    /// Total ticks to simulate when calling `Sim::run`.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Movement parameters shared by every agent.
    pub nav: NavConfig,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> crate::Tick {
        crate::Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> crate::SimClock {
        crate::SimClock::new(self.tick_duration_secs)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tick_duration_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "tick_duration_secs must be positive, got {}",
                self.tick_duration_secs
            )));
        }
        self.nav.validate()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs: 1.0 / 60.0,
            total_ticks:        3_600,
            seed:               0,
            nav:                NavConfig::default(),
        }
    }
}
