use serde::Serialize;
use shared::{ObjectId, Room};

/// Session selection: at most one furniture item, opening or wall.
///
/// Not part of the room snapshot, so undo/redo never restores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionState {
    furniture: Option<ObjectId>,
    opening: Option<ObjectId>,
    wall: Option<usize>,
}

impl SelectionState {
    pub fn furniture(&self) -> Option<&ObjectId> {
        self.furniture.as_ref()
    }

    pub fn opening(&self) -> Option<&ObjectId> {
        self.opening.as_ref()
    }

    pub fn wall(&self) -> Option<usize> {
        self.wall
    }

    /// Select a furniture item (clears other selection)
    pub fn select_furniture(&mut self, id: ObjectId) {
        self.clear();
        self.furniture = Some(id);
    }

    /// Select a door or window (clears other selection)
    pub fn select_opening(&mut self, id: ObjectId) {
        self.clear();
        self.opening = Some(id);
    }

    pub fn select_wall(&mut self, index: usize) {
        self.clear();
        self.wall = Some(index);
    }

    pub fn clear(&mut self) {
        self.furniture = None;
        self.opening = None;
        self.wall = None;
    }

    pub fn is_empty(&self) -> bool {
        self.furniture.is_none() && self.opening.is_none() && self.wall.is_none()
    }

    /// Check if a furniture item or opening is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.furniture.as_deref() == Some(id) || self.opening.as_deref() == Some(id)
    }

    /// Drop the selection if it points at something the room no longer has
    pub fn retain_existing(&mut self, room: &Room) {
        if self
            .furniture
            .as_deref()
            .is_some_and(|id| room.furniture_item(id).is_none())
        {
            self.furniture = None;
        }
        if self
            .opening
            .as_deref()
            .is_some_and(|id| room.opening(id).is_none())
        {
            self.opening = None;
        }
        if self.wall.is_some_and(|i| i >= room.walls.len()) {
            self.wall = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.is_empty());
        assert!(s.furniture().is_none());
        assert!(s.opening().is_none());
        assert!(s.wall().is_none());
    }

    #[test]
    fn test_selections_are_exclusive() {
        let mut s = SelectionState::default();
        s.select_furniture("chair_1".into());
        assert!(s.is_selected("chair_1"));
        s.select_opening("door_1".into());
        assert!(s.furniture().is_none());
        assert_eq!(s.opening().map(String::as_str), Some("door_1"));
        s.select_wall(2);
        assert!(s.opening().is_none());
        assert_eq!(s.wall(), Some(2));
    }

    #[test]
    fn test_clear() {
        let mut s = SelectionState::default();
        s.select_furniture("a".into());
        s.clear();
        assert!(s.is_empty());
        assert!(!s.is_selected("a"));
    }

    #[test]
    fn test_retain_existing_drops_stale_ids() {
        let room = Room::default();
        let mut s = SelectionState::default();
        s.select_furniture("gone".into());
        s.retain_existing(&room);
        assert!(s.is_empty());

        s.select_wall(3);
        s.retain_existing(&room);
        assert_eq!(s.wall(), Some(3));
        s.select_wall(4);
        s.retain_existing(&room);
        assert!(s.wall().is_none());
    }
}
