//! `tn-sim`: tick loop orchestrator for the tilenav framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide    agents at rest ask Behavior::next_destination; a new
//!                destination starts a route search (lost agents are
//!                reported, not failed).
//!   ② Move      PathFollower::update for every enabled agent with
//!                elapsed = tick_duration_secs (parallel with `parallel`).
//!   ③ Dispatch  buffered room / no-path events, then arrivals, to the
//!                SimObserver in ascending AgentId order.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the move phase on Rayon's thread pool.            |
//! | `fx-hash`  | FxHash closed set in the A* search.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tn_core::SimConfig;
//! use tn_grid::TileMapBuilder;
//! use tn_path::AStarPathFinder;
//! use tn_sim::{NoopObserver, SimBuilder, WanderBehavior};
//!
//! let config = SimConfig::default();
//! let map = TileMapBuilder::grid(32, 32, 1.0).build();
//! let finder = AStarPathFinder::from_config(&config.nav);
//! let mut sim = SimBuilder::new(config, map, WanderBehavior::default(), finder)
//!     .agent_count(100)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod agent;
pub mod behavior;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use agent::Agent;
pub use behavior::{Behavior, IdleBehavior, SimContext, WanderBehavior};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
