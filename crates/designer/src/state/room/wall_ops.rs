//! Wall operations and room-wide edits

use shared::{PerimeterPolicy, Wall, WallPatch};

use super::RoomState;

impl RoomState {
    /// Append a wall and checkpoint. Returns its index, or `None` for a zero-length wall.
    pub fn add_wall(&mut self, wall: Wall) -> Option<usize> {
        if wall.is_degenerate() {
            tracing::debug!(start = ?wall.start, "rejected zero-length wall");
            return None;
        }
        let index = self.room().walls.len();
        let room = self.room().add_wall(wall);
        self.commit(room, "wall added");
        Some(index)
    }

    /// Merge fields into a wall. Out-of-range indices and edits that would collapse the
    /// wall to zero length are ignored.
    pub fn update_wall(&mut self, index: usize, patch: &WallPatch) -> bool {
        let Some(wall) = self.room().wall(index) else {
            tracing::debug!(index, "update_wall: no such wall");
            return false;
        };
        let mut updated = wall.clone();
        patch.apply(&mut updated);
        if updated.is_degenerate() {
            tracing::debug!(index, "update_wall: result would be zero-length");
            return false;
        }
        let room = self.room().update_wall(index, patch);
        self.amend(room);
        true
    }

    /// Remove a wall and checkpoint. Openings keep their `wall_index`.
    pub fn remove_wall(&mut self, index: usize) -> bool {
        if index >= self.room().walls.len() {
            tracing::debug!(index, "remove_wall: no such wall");
            return false;
        }
        let room = self.room().remove_wall(index);
        self.commit(room, "wall removed");
        true
    }

    /// Apply one color to every wall
    pub fn paint_walls(&mut self, color: &str) {
        let room = self.room().paint_walls(color);
        self.amend(room);
    }

    pub fn set_room_dimensions(&mut self, width: f64, height: f64) {
        let room = self.room().set_room_dimensions(width, height);
        self.amend(room);
    }

    /// Remove all furniture and openings and checkpoint
    pub fn clear_room(&mut self, perimeter: PerimeterPolicy) {
        let room = self.room().clear_room(perimeter);
        self.commit(room, "room cleared");
    }
}
