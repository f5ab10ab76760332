//! Compass quadrants naming the four neighbor slots of a tile.

/// One of the four neighbor slots of a tile.
///
/// The names come from isometric map art, where grid axes run diagonally on
/// screen.  In grid coordinates `NE`/`SW` change the row and `SE`/`NW` the
/// column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NE = 0,
    SE = 1,
    SW = 2,
    NW = 3,
}

impl Direction {
    /// Neighbor enumeration order used by the path finder.  Changing it
    /// changes which of several equal-cost routes is found first.
    pub const ALL: [Direction; 4] = [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// Slot index into a tile's `[TileId; 4]` link array.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::NE => Direction::SW,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::NW => Direction::SE,
        }
    }

    /// `(d_col, d_row)` grid offset of the neighbor in this slot.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::NE => (0, 1),
            Direction::SE => (1, 0),
            Direction::SW => (0, -1),
            Direction::NW => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::NE => "NE",
            Direction::SE => "SE",
            Direction::SW => "SW",
            Direction::NW => "NW",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
