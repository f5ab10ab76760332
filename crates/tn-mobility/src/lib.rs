//! `tn-mobility`: per-agent path following.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`follower`] | `PathFollower<F>`: destination, route, per-tick movement      |
//! | [`state`]    | `NavState`, `StepOutcome`                                     |
//! | [`observer`] | `NavObserver` sink, `NavEvent`, `EventLog`                    |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Movement model
//!
//! 1. `PathFollower::move_to` snaps the agent's position to the nearest tile
//!    and asks a pluggable [`PathFinder`][tn_path::PathFinder] for a route.
//!    Asking again for the current destination is free.
//! 2. Each tick, `PathFollower::update` pops the front waypoint once the
//!    agent is close enough (0.3 units for intermediate waypoints, 0.1 for
//!    the last) and moves the agent toward the next one at `speed`, never
//!    overshooting.
//! 3. Whenever the tile under the agent changes and the two tiles belong to
//!    different rooms, room left/entered notifications go to a
//!    [`NavObserver`].
//! 4. An empty route with a destination set means the agent has arrived;
//!    `update` is then a no-op until the next `move_to`.

pub mod error;
pub mod follower;
pub mod observer;
pub mod state;


pub use error::{MobilityError, MobilityResult};
pub use follower::PathFollower;
pub use observer::{EventLog, NavEvent, NavObserver, NoopNavObserver};
pub use state::{NavState, StepOutcome};
