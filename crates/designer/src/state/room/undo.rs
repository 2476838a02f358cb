//! Undo/redo functionality

use super::RoomState;

impl RoomState {
    /// Undo last committed change. Returns false at the start of history.
    pub fn undo(&mut self) -> bool {
        if self.history.undo().is_none() {
            tracing::debug!("nothing to undo");
            return false;
        }
        self.version += 1;
        tracing::info!(cursor = self.history.cursor(), "undo");
        true
    }

    /// Redo last undone change. Returns false at the end of history.
    pub fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            tracing::debug!("nothing to redo");
            return false;
        }
        self.version += 1;
        tracing::info!(cursor = self.history.cursor(), "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
