//! Notification sink for navigation events.

use tn_core::{AgentId, RoomId};

/// Callbacks fired by [`PathFollower`][crate::PathFollower].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: room logger
///
/// ```rust,ignore
/// struct RoomLogger;
///
/// impl NavObserver for RoomLogger {
///     fn on_room_entered(&mut self, agent: AgentId, room: RoomId) {
///         println!("{agent} entered {room}");
///     }
/// }
/// ```
pub trait NavObserver {
    /// The tile under `agent` changed to one in `room`, coming from a tile
    /// in a different room (or in no room).
    fn on_room_entered(&mut self, _agent: AgentId, _room: RoomId) {}

    /// The tile under `agent` changed from one in `room` to one in a
    /// different room (or in no room).
    fn on_room_left(&mut self, _agent: AgentId, _room: RoomId) {}

    /// A move request for `agent` (display name `name`) found no route.
    fn on_no_path(&mut self, _agent: AgentId, _name: &str) {}
}

impl<O: NavObserver + ?Sized> NavObserver for &mut O {
    fn on_room_entered(&mut self, agent: AgentId, room: RoomId) {
        (**self).on_room_entered(agent, room);
    }

    fn on_room_left(&mut self, agent: AgentId, room: RoomId) {
        (**self).on_room_left(agent, room);
    }

    fn on_no_path(&mut self, agent: AgentId, name: &str) {
        (**self).on_no_path(agent, name);
    }
}

/// A [`NavObserver`] that does nothing.
pub struct NoopNavObserver;

impl NavObserver for NoopNavObserver {}

// ── Buffered events ───────────────────────────────────────────────────────────

/// A recorded navigation notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    RoomEntered { agent: AgentId, room: RoomId },
    RoomLeft    { agent: AgentId, room: RoomId },
    NoPath      { agent: AgentId, name: String },
}

impl NavEvent {
    pub fn agent(&self) -> AgentId {
        match self {
            NavEvent::RoomEntered { agent, .. }
            | NavEvent::RoomLeft { agent, .. }
            | NavEvent::NoPath { agent, .. } => *agent,
        }
    }
}

/// A [`NavObserver`] that records every notification in order.
///
/// Used to buffer events while followers are updated (possibly on worker
/// threads) and replay them to the real observer afterwards.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<NavEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Replay and clear the buffered events.
    pub fn replay_into<O: NavObserver + ?Sized>(&mut self, observer: &mut O) {
        for event in self.events.drain(..) {
            match event {
                NavEvent::RoomEntered { agent, room } => observer.on_room_entered(agent, room),
                NavEvent::RoomLeft { agent, room } => observer.on_room_left(agent, room),
                NavEvent::NoPath { agent, name } => observer.on_no_path(agent, &name),
            }
        }
    }
}

impl NavObserver for EventLog {
    fn on_room_entered(&mut self, agent: AgentId, room: RoomId) {
        self.events.push(NavEvent::RoomEntered { agent, room });
    }

    fn on_room_left(&mut self, agent: AgentId, room: RoomId) {
        self.events.push(NavEvent::RoomLeft { agent, room });
    }

    fn on_no_path(&mut self, agent: AgentId, name: &str) {
        self.events.push(NavEvent::NoPath { agent, name: name.to_owned() });
    }
}
