//! CSV tile map loader.
//!
//! # CSV format
//!
//! One row per walkable tile.  Cells that have no row are walls.  Adjacent
//! rows are linked automatically in all four directions.
//!
//! ```csv
//! col,row,cost,room
//! 0,0,1,
//! 1,0,1,
//! 1,1,2.5,3
//! ```
//!
//! | Column | Meaning                                             |
//! |--------|-----------------------------------------------------|
//! | `col`  | Grid column (i32)                                   |
//! | `row`  | Grid row (i32)                                      |
//! | `cost` | Entrance cost, non-negative                         |
//! | `room` | Room id (u16), empty when outside any room          |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tn_core::RoomId;

use crate::{GridError, TileMap, TileMapBuilder};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TileRecord {
    col:  i32,
    row:  i32,
    cost: f32,
    room: Option<u16>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`TileMap`] from a CSV file.
pub fn load_map_csv(path: &Path) -> Result<TileMap, GridError> {
    let file = std::fs::File::open(path)?;
    load_map_reader(file)
}

/// Like [`load_map_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding maps as
/// string constants.
pub fn load_map_reader<R: Read>(reader: R) -> Result<TileMap, GridError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = TileMapBuilder::new();

    for result in csv_reader.deserialize::<TileRecord>() {
        let row = result.map_err(|e| GridError::Parse(e.to_string()))?;

        if !(row.cost >= 0.0) {
            return Err(GridError::Parse(format!(
                "tile ({}, {}) has invalid entrance cost {}",
                row.col, row.row, row.cost
            )));
        }
        if builder.cell(row.col, row.row).is_some() {
            return Err(GridError::DuplicateTile { col: row.col, row: row.row });
        }

        let tile = builder.add_cell(row.col, row.row, row.cost);
        if let Some(room) = row.room {
            if room == RoomId::INVALID.0 {
                return Err(GridError::Parse(format!("room id {room} is reserved")));
            }
            builder.set_room(tile, RoomId(room));
        }
    }

    builder.connect_cells();
    Ok(builder.build())
}
