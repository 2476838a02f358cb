//! Mutation API over room snapshots.
//!
//! Every operation borrows the current snapshot and returns a new one. Unknown ids and
//! out-of-range indices produce an unchanged copy. No value validation happens here:
//! callers clamp sizes and positions before calling.

use serde::{Deserialize, Serialize};

use crate::{
    perimeter_walls, FurnitureItem, FurniturePatch, Opening, OpeningKind, OpeningPatch, Room,
    Wall, WallPatch,
};

/// Что делать с периметром при очистке комнаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerimeterPolicy {
    /// Оставить текущие стены
    Keep,
    /// Вернуть прямоугольный периметр по умолчанию
    #[default]
    Reset,
}

impl Room {
    /// Append a wall; its index is the previous wall count
    #[must_use]
    pub fn add_wall(&self, wall: Wall) -> Room {
        let mut room = self.clone();
        room.walls.push(wall);
        room
    }

    #[must_use]
    pub fn update_wall(&self, index: usize, patch: &WallPatch) -> Room {
        let mut room = self.clone();
        if let Some(wall) = room.walls.get_mut(index) {
            patch.apply(wall);
        }
        room
    }

    /// Remove a wall by index. Opening `wall_index` values are left as they are.
    #[must_use]
    pub fn remove_wall(&self, index: usize) -> Room {
        let mut room = self.clone();
        if index < room.walls.len() {
            room.walls.remove(index);
        }
        room
    }

    /// Apply one color to every wall
    #[must_use]
    pub fn paint_walls(&self, color: &str) -> Room {
        let mut room = self.clone();
        for wall in &mut room.walls {
            wall.color = Some(color.to_string());
        }
        room
    }

    #[must_use]
    pub fn add_furniture(&self, item: FurnitureItem) -> Room {
        let mut room = self.clone();
        room.furniture.push(item);
        room
    }

    #[must_use]
    pub fn update_furniture(&self, id: &str, patch: &FurniturePatch) -> Room {
        let mut room = self.clone();
        if let Some(item) = room.furniture.iter_mut().find(|f| f.id == id) {
            patch.apply(item);
        }
        room
    }

    #[must_use]
    pub fn remove_furniture(&self, id: &str) -> Room {
        let mut room = self.clone();
        room.furniture.retain(|f| f.id != id);
        room
    }

    #[must_use]
    pub fn add_opening(&self, opening: Opening) -> Room {
        let mut room = self.clone();
        room.openings.push(opening);
        room
    }

    #[must_use]
    pub fn add_door(&self, mut opening: Opening) -> Room {
        opening.kind = OpeningKind::Door;
        self.add_opening(opening)
    }

    #[must_use]
    pub fn add_window(&self, mut opening: Opening) -> Room {
        opening.kind = OpeningKind::Window;
        self.add_opening(opening)
    }

    /// Update a door or window by id
    #[must_use]
    pub fn update_opening(&self, id: &str, patch: &OpeningPatch) -> Room {
        let mut room = self.clone();
        if let Some(opening) = room.openings.iter_mut().find(|o| o.id == id) {
            patch.apply(opening);
        }
        room
    }

    #[must_use]
    pub fn remove_opening(&self, id: &str) -> Room {
        let mut room = self.clone();
        room.openings.retain(|o| o.id != id);
        room
    }

    #[must_use]
    pub fn set_room_dimensions(&self, width: f64, height: f64) -> Room {
        Room {
            width,
            height,
            ..self.clone()
        }
    }

    /// Empty furniture, doors and windows
    #[must_use]
    pub fn clear_room(&self, perimeter: PerimeterPolicy) -> Room {
        let walls = match perimeter {
            PerimeterPolicy::Keep => self.walls.clone(),
            PerimeterPolicy::Reset => perimeter_walls(self.width, self.height),
        };
        Room {
            id: self.id.clone(),
            name: self.name.clone(),
            walls,
            furniture: Vec::new(),
            openings: Vec::new(),
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FurnitureKind, Point};

    fn chair(id: &str, x: f64, y: f64) -> FurnitureItem {
        FurnitureItem::from_template(id.into(), FurnitureKind::Chair, Point::new(x, y))
    }

    #[test]
    fn test_add_wall_appends_at_end() {
        let room = Room::default();
        let wall = Wall::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0);
        let next = room.add_wall(wall.clone());
        assert_eq!(next.walls.len(), 5);
        assert_eq!(next.walls[4], wall);
        // исходный снимок не изменён
        assert_eq!(room.walls.len(), 4);
    }

    #[test]
    fn test_update_wall_out_of_range_is_noop() {
        let room = Room::default();
        let next = room.update_wall(42, &WallPatch::color("#fff"));
        assert_eq!(next, room);
    }

    #[test]
    fn test_remove_wall_keeps_opening_index() {
        let room = Room::empty()
            .add_wall(Wall::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0))
            .add_door(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5));
        let next = room.remove_wall(0);
        assert!(next.walls.is_empty());
        assert_eq!(next.openings[0].wall_index, 0);
        assert_eq!(next.resolved_openings().count(), 0);
    }

    #[test]
    fn test_update_furniture_keeps_identity() {
        let room = Room::default().add_furniture(chair("chair_1", 100.0, 100.0));
        let next = room.update_furniture("chair_1", &FurniturePatch::color("x"));
        let before = room.furniture_item("chair_1").unwrap();
        let after = next.furniture_item("chair_1").unwrap();
        assert_eq!(after.id, "chair_1");
        assert_eq!(
            *after,
            FurnitureItem {
                color: Some("x".into()),
                ..before.clone()
            }
        );
        // остальные предметы и стены не тронуты
        assert_eq!(next.walls, room.walls);
        assert_eq!(next.openings, room.openings);
    }

    #[test]
    fn test_unknown_furniture_id_is_noop() {
        let room = Room::default().add_furniture(chair("chair_1", 100.0, 100.0));
        assert_eq!(room.update_furniture("nope", &FurniturePatch::color("x")), room);
        assert_eq!(room.remove_furniture("nope"), room);
    }

    #[test]
    fn test_add_door_and_window_force_kind() {
        let room = Room::default()
            .add_door(Opening::new("a".into(), OpeningKind::Window, 0, 0.5))
            .add_window(Opening::new("b".into(), OpeningKind::Door, 1, 0.5));
        assert_eq!(room.opening("a").unwrap().kind, OpeningKind::Door);
        assert_eq!(room.opening("b").unwrap().kind, OpeningKind::Window);
    }

    #[test]
    fn test_update_opening_finds_doors_and_windows() {
        let room = Room::default()
            .add_door(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5))
            .add_window(Opening::new("window_1".into(), OpeningKind::Window, 1, 0.5));
        let next = room
            .update_opening("door_1", &OpeningPatch::position(0.2))
            .update_opening("window_1", &OpeningPatch::position(0.7));
        assert_eq!(next.opening("door_1").unwrap().position, 0.2);
        assert_eq!(next.opening("window_1").unwrap().position, 0.7);
    }

    #[test]
    fn test_remove_opening() {
        let room = Room::default()
            .add_door(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5))
            .add_window(Opening::new("window_1".into(), OpeningKind::Window, 1, 0.5));
        let next = room.remove_opening("window_1");
        assert_eq!(next.openings.len(), 1);
        assert!(next.opening("door_1").is_some());
    }

    #[test]
    fn test_set_room_dimensions() {
        let next = Room::default().set_room_dimensions(800.0, 700.0);
        assert_eq!((next.width, next.height), (800.0, 700.0));
        assert_eq!(next.walls, Room::default().walls);
    }

    #[test]
    fn test_clear_room_keep_and_reset() {
        let room = Room::empty()
            .add_wall(Wall::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0))
            .add_furniture(chair("chair_1", 10.0, 10.0))
            .add_door(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5));

        let kept = room.clear_room(PerimeterPolicy::Keep);
        assert_eq!(kept.walls.len(), 1);
        assert!(kept.furniture.is_empty());
        assert!(kept.openings.is_empty());

        let reset = room.clear_room(PerimeterPolicy::Reset);
        assert_eq!(reset.walls, perimeter_walls(room.width, room.height));
        assert_eq!(reset.id, room.id);
    }

    #[test]
    fn test_paint_walls() {
        let room = Room::default().paint_walls("#d4b896");
        assert!(room.walls.iter().all(|w| w.color.as_deref() == Some("#d4b896")));
    }
}
