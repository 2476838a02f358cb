//! Editor actions used by panels, keyboard shortcuts and commands.
//!
//! These clamp control input with `settings.limits` before it reaches the room.

use shared::{FurnitureKind, FurniturePatch, ObjectId, OpeningPatch, PerimeterPolicy, Point,
    WallPatch};

use super::EditorState;
use crate::geometry::snap_to_grid;
use crate::helpers::normalize_degrees;

impl EditorState {
    /// Place a template item at the snapped point, or at the room center when no point is
    /// given. The new item is selected.
    pub fn place_furniture(&mut self, kind: FurnitureKind, at: Option<Point>) -> ObjectId {
        let position = match at {
            Some(p) => snap_to_grid(p, self.settings.grid.snap_size),
            None => self.get_room().center(),
        };
        let id = self.room.place_furniture(kind, position);
        self.selection.select_furniture(id.clone());
        id
    }

    /// Select a furniture item if it exists
    pub fn select_furniture(&mut self, id: &str) -> bool {
        if self.get_room().furniture_item(id).is_none() {
            return false;
        }
        self.selection.select_furniture(id.to_string());
        true
    }

    pub fn select_opening(&mut self, id: &str) -> bool {
        if self.get_room().opening(id).is_none() {
            return false;
        }
        self.selection.select_opening(id.to_string());
        true
    }

    pub fn select_wall(&mut self, index: usize) -> bool {
        if self.get_room().wall(index).is_none() {
            return false;
        }
        self.selection.select_wall(index);
        true
    }

    /// Update an item with clamped sizes and normalized rotation
    pub fn set_furniture_properties(&mut self, id: &str, patch: &FurniturePatch) -> bool {
        let patch = self.settings.limits.clamp_furniture_patch(patch);
        self.room.update_furniture(id, &patch)
    }

    /// Update a door or window with ranges for its kind
    pub fn set_opening_properties(&mut self, id: &str, patch: &OpeningPatch) -> bool {
        let Some(kind) = self.get_room().opening(id).map(|o| o.kind) else {
            return false;
        };
        let patch = self.settings.limits.clamp_opening_patch(kind, patch);
        self.room.update_opening(id, &patch)
    }

    pub fn update_selected_furniture(&mut self, patch: &FurniturePatch) -> bool {
        match self.selection.furniture().cloned() {
            Some(id) => self.set_furniture_properties(&id, patch),
            None => false,
        }
    }

    pub fn update_selected_opening(&mut self, patch: &OpeningPatch) -> bool {
        match self.selection.opening().cloned() {
            Some(id) => self.set_opening_properties(&id, patch),
            None => false,
        }
    }

    /// Turn the selected item by the rotation step
    pub fn rotate_selected(&mut self) -> bool {
        let Some(item) = self
            .selection
            .furniture()
            .and_then(|id| self.room.room().furniture_item(id))
        else {
            return false;
        };
        let id = item.id.clone();
        let rotation = normalize_degrees(item.rotation + self.settings.limits.rotation_step);
        let patch = FurniturePatch {
            rotation: Some(rotation),
            ..FurniturePatch::default()
        };
        self.room.update_furniture(&id, &patch)
    }

    /// Remove the selected opening or furniture and clear selection
    pub fn delete_selected(&mut self) -> bool {
        let removed = if let Some(id) = self.selection.opening().cloned() {
            self.room.remove_opening(&id)
        } else if let Some(id) = self.selection.furniture().cloned() {
            self.room.remove_furniture(&id)
        } else {
            false
        };
        self.selection.clear();
        self.interaction.drag = None;
        removed
    }

    /// Color the selected wall
    pub fn paint_selected_wall(&mut self, color: &str) -> bool {
        match self.selection.wall() {
            Some(index) => self.room.update_wall(index, &WallPatch::color(color)),
            None => false,
        }
    }

    pub fn paint_walls(&mut self, color: &str) {
        self.room.paint_walls(color);
    }

    /// Clear furniture and openings; session state referring to them goes too
    pub fn clear_room(&mut self, perimeter: PerimeterPolicy) {
        self.room.clear_room(perimeter);
        self.selection.retain_existing(self.room.room());
        self.interaction.cancel_gesture();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::OpeningKind;

    #[test]
    fn test_library_placement_goes_to_room_center() {
        let mut editor = EditorState::default();
        let id = editor.place_furniture(FurnitureKind::Bed, None);
        let item = editor.get_room().furniture_item(&id).unwrap();
        assert_eq!(item.position, Point::new(300.0, 250.0));
    }

    #[test]
    fn test_rotate_selected_wraps() {
        let mut editor = EditorState::default();
        let id = editor.place_furniture(FurnitureKind::Sofa, None);
        editor.set_furniture_properties(
            &id,
            &FurniturePatch {
                rotation: Some(350.0),
                ..FurniturePatch::default()
            },
        );
        assert!(editor.rotate_selected());
        assert_eq!(editor.get_room().furniture_item(&id).unwrap().rotation, 5.0);
    }

    #[test]
    fn test_rotate_without_selection() {
        let mut editor = EditorState::default();
        assert!(!editor.rotate_selected());
    }

    #[test]
    fn test_slider_values_are_clamped() {
        let mut editor = EditorState::default();
        editor.place_furniture(FurnitureKind::Chair, None);
        let patch = FurniturePatch {
            width: Some(1000.0),
            scale: Some(0.01),
            ..FurniturePatch::default()
        };
        assert!(editor.update_selected_furniture(&patch));
        let item = &editor.get_room().furniture[0];
        assert_eq!(item.width, 300.0);
        assert_eq!(item.scale, 0.3);
    }

    #[test]
    fn test_opening_slider_clamped_by_kind() {
        let mut editor = EditorState::default();
        let id = editor.room.place_opening(OpeningKind::Window, 2, 0.5);
        editor.select_opening(&id);
        let patch = OpeningPatch {
            width: Some(10.0),
            position: Some(1.0),
            ..OpeningPatch::default()
        };
        assert!(editor.update_selected_opening(&patch));
        let window = editor.get_room().opening(&id).unwrap();
        assert_eq!(window.width, 40.0);
        assert_eq!(window.position, 0.95);
    }

    #[test]
    fn test_delete_selected_opening_then_furniture() {
        let mut editor = EditorState::default();
        let chair = editor.place_furniture(FurnitureKind::Chair, None);
        let door = editor.room.place_opening(OpeningKind::Door, 0, 0.5);

        editor.select_opening(&door);
        assert!(editor.delete_selected());
        assert!(editor.get_room().opening(&door).is_none());
        assert!(editor.selection().is_empty());

        editor.select_furniture(&chair);
        assert!(editor.delete_selected());
        assert!(editor.get_room().furniture.is_empty());
        assert!(!editor.delete_selected());

        // удаление попадает в историю
        editor.undo();
        assert_eq!(editor.get_room().furniture.len(), 1);
    }

    #[test]
    fn test_select_unknown_ids() {
        let mut editor = EditorState::default();
        assert!(!editor.select_furniture("ghost"));
        assert!(!editor.select_opening("ghost"));
        assert!(!editor.select_wall(10));
        assert!(editor.select_wall(1));
    }

    #[test]
    fn test_paint_selected_wall() {
        let mut editor = EditorState::default();
        assert!(!editor.paint_selected_wall("#123456"));
        editor.select_wall(2);
        assert!(editor.paint_selected_wall("#123456"));
        assert_eq!(editor.get_room().walls[2].color.as_deref(), Some("#123456"));
        assert!(editor.get_room().walls[1].color.is_none());
    }

    #[test]
    fn test_clear_room_drops_selection() {
        let mut editor = EditorState::default();
        editor.place_furniture(FurnitureKind::Chair, None);
        editor.clear_room(PerimeterPolicy::Reset);
        assert!(editor.selection().is_empty());
        assert!(editor.get_room().furniture.is_empty());
        assert_eq!(editor.get_room().walls.len(), 4);
    }
}
