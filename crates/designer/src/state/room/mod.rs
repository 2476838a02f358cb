//! Room state management
//!
//! `RoomState` owns the undo/redo history of room snapshots. Structural edits commit a
//! new snapshot; continuous edits amend the live one.

mod furniture_ops;
mod opening_ops;
mod undo;
mod wall_ops;

use shared::Room;

use super::history::{History, DEFAULT_HISTORY_LIMIT};

/// Live room with undo/redo history
#[derive(Debug, Clone)]
pub struct RoomState {
    history: History<Room>,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl Default for RoomState {
    fn default() -> Self {
        Self::new(Room::default(), DEFAULT_HISTORY_LIMIT)
    }
}

impl RoomState {
    pub fn new(room: Room, max_entries: usize) -> Self {
        Self {
            history: History::with_limit(room, max_entries),
            version: 0,
        }
    }

    /// Current room snapshot
    pub fn room(&self) -> &Room {
        self.history.current()
    }

    /// Current room version (increments on every mutation, undo and redo)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of snapshots in history
    pub fn history_len(&self) -> usize {
        self.history.entry_count()
    }

    /// Replace the room and forget all history
    pub fn reset(&mut self, room: Room) {
        self.history.reset(room);
        self.version += 1;
        tracing::info!(version = self.version, "room reset");
    }

    /// Push a new snapshot onto history
    pub(crate) fn commit(&mut self, room: Room, action: &str) {
        self.history.checkpoint(room);
        self.version += 1;
        tracing::info!(
            version = self.version,
            entries = self.history.entry_count(),
            "{action}"
        );
    }

    /// Replace the live snapshot without a history entry
    pub(crate) fn amend(&mut self, room: Room) {
        self.history.amend(room);
        self.version += 1;
    }
}
