//! `tn-grid`: tile graph access, tile map storage, and spatial indexing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`direction`] | `Direction`, the four compass neighbor slots              |
//! | [`graph`]     | `TileGraph` trait, read-only accessor used by search      |
//! | [`map`]       | `TileMap` (SoA + R-tree), `TileMapBuilder`                |
//! | [`loader`]    | `load_map_csv` (feature = `"csv"` only)                   |
//! | [`error`]     | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `csv`   | Enables CSV tile map loading via the `csv` crate.           |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod direction;
pub mod error;
pub mod graph;
pub mod map;

#[cfg(feature = "csv")]
pub mod loader;

#[cfg(test)]
mod tests;

pub use direction::Direction;
pub use error::{GridError, GridResult};
pub use graph::TileGraph;
pub use map::{TileMap, TileMapBuilder};

#[cfg(feature = "csv")]
pub use loader::{load_map_csv, load_map_reader};
