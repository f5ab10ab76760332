//! Navigation state as seen from outside the follower.

/// Where a [`PathFollower`][crate::PathFollower] is in its lifecycle.
///
/// Only the destination and route are stored; this enum is derived from
/// them on demand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// No destination.
    Idle,
    /// Destination set, waypoints remaining.
    Navigating,
    /// Destination set, every waypoint consumed.
    Arrived,
}

impl NavState {
    /// `true` for the two states in which `update` does nothing.
    #[inline]
    pub fn is_at_rest(self) -> bool {
        !matches!(self, NavState::Navigating)
    }
}

/// What a single `update` call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing to do: idle or already arrived.
    AtRest,
    /// Moved toward the next waypoint.
    Moved,
    /// The final waypoint was consumed on this step.
    Arrived,
}
