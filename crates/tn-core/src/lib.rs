//! `tn-core`: foundational types for the `tilenav` framework.
//!
//! This crate is a dependency of every other `tn-*` crate.  It intentionally
//! has no `tn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TileId`, `RoomId`                         |
//! | [`geo`]         | `Point`, distance and step helpers                    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `NavConfig`, `SimConfig`                              |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NavConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{AgentId, RoomId, TileId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
