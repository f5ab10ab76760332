//! Remaining-cost estimate used to order the A* open set.

use tn_core::{NavConfig, Point};

/// Weighted Manhattan distance: `x_weight * |dx| + y_weight * |dy|`.
///
/// The default `|dx| + 2|dy|` suits maps whose rows are half as tall as
/// their columns are wide, where one row step covers 0.5 units of `y` but
/// costs as much as one column step.  For other layouts pick weights so the
/// estimate never exceeds the true remaining entrance cost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heuristic {
    pub x_weight: f32,
    pub y_weight: f32,
}

impl Heuristic {
    pub const DEFAULT: Heuristic = Heuristic { x_weight: 1.0, y_weight: 2.0 };

    /// Uniform Manhattan distance.
    pub const MANHATTAN: Heuristic = Heuristic { x_weight: 1.0, y_weight: 1.0 };

    /// Always zero; turns A* into Dijkstra.
    pub const ZERO: Heuristic = Heuristic { x_weight: 0.0, y_weight: 0.0 };

    pub fn from_config(config: &NavConfig) -> Self {
        Self {
            x_weight: config.heuristic_x_weight,
            y_weight: config.heuristic_y_weight,
        }
    }

    #[inline]
    pub fn estimate(&self, from: Point, to: Point) -> f32 {
        self.x_weight * (from.x - to.x).abs() + self.y_weight * (from.y - to.y).abs()
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::DEFAULT
    }
}
