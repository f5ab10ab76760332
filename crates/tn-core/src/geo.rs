//! Continuous 2-D coordinates used for tile positions and agent positions.
//!
//! `Point` uses `f32` like the rest of the framework.  Tile maps are small
//! (thousands of tiles, unit-scale coordinates) so single precision is more
//! than enough for checkpoint tests at 0.1-unit resolution.

use std::ops::{Add, Mul, Sub};

/// A position in map space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Move from `self` toward `target` by at most `max_step` units.
    ///
    /// Never overshoots: if `target` is within `max_step` the result is
    /// exactly `target`.  A non-positive `max_step` leaves `self` unchanged.
    pub fn step_toward(self, target: Point, max_step: f32) -> Point {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_step {
            return target;
        }
        if max_step <= 0.0 {
            return self;
        }
        self + delta * (max_step / dist)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
