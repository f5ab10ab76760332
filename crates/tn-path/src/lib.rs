//! `tn-path`: A* route search over a [`TileGraph`][tn_grid::TileGraph].
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`finder`]    | `PathFinder` trait, `AStarPathFinder`                   |
//! | [`heuristic`] | `Heuristic`, weighted Manhattan estimate                |
//! | [`route`]     | `Route`, front-to-back waypoint queue                   |
//! | [`error`]     | `PathError`, `PathResult<T>`                            |
//!
//! # Known limitation
//!
//! A tile is closed the first time it is dequeued and never reopened.  If a
//! cheaper path to an already-closed tile turns up later, it is discarded.
//! With a consistent heuristic this cannot happen; with an inconsistent one
//! the route is still valid, just not guaranteed cheapest.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash`'s FxHashSet for the closed set.        |

pub mod error;
pub mod finder;
pub mod heuristic;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use finder::{AStarPathFinder, PathFinder};
pub use heuristic::Heuristic;
pub use route::Route;
