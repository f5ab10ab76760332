//! Typed identifiers for agents, tiles and rooms.
//!
//! Each id is a thin `Copy` wrapper over an unsigned integer.  Tile and agent
//! ids double as indices into the per-tile and per-agent vectors that own
//! their data, so the inner integer is public.  The all-ones value of each
//! integer type is reserved as the `INVALID` sentinel.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The id as a vector index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        /// Defaults to `INVALID`, never to a real id.
        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($label, "#{}"), self.0)
                } else {
                    f.write_str(concat!($label, "#invalid"))
                }
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the simulation.
    pub struct AgentId(u32) => "agent";
}

typed_id! {
    /// Index of a tile in a tile map.
    pub struct TileId(u32) => "tile";
}

typed_id! {
    /// Room a tile belongs to.  Rooms only matter for detecting when an
    /// agent crosses from one to another.
    pub struct RoomId(u16) => "room";
}
