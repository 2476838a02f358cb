//! Furniture CRUD operations

use shared::{FurnitureItem, FurnitureKind, FurniturePatch, ObjectId, Point};

use super::RoomState;
use crate::helpers::generate_id;

impl RoomState {
    /// Add a prepared item and checkpoint
    pub fn add_furniture(&mut self, item: FurnitureItem) -> ObjectId {
        let id = item.id.clone();
        let room = self.room().add_furniture(item);
        self.commit(room, "furniture added");
        id
    }

    /// Create an item from its template at `position` and checkpoint
    pub fn place_furniture(&mut self, kind: FurnitureKind, position: Point) -> ObjectId {
        let item = FurnitureItem::from_template(generate_id(kind.id_prefix()), kind, position);
        self.add_furniture(item)
    }

    /// Merge fields into an item without a checkpoint. Unknown ids are ignored.
    pub fn update_furniture(&mut self, id: &str, patch: &FurniturePatch) -> bool {
        if self.room().furniture_item(id).is_none() {
            tracing::debug!(id, "update_furniture: unknown id");
            return false;
        }
        let room = self.room().update_furniture(id, patch);
        self.amend(room);
        true
    }

    pub fn remove_furniture(&mut self, id: &str) -> bool {
        if self.room().furniture_item(id).is_none() {
            tracing::debug!(id, "remove_furniture: unknown id");
            return false;
        }
        let room = self.room().remove_furniture(id);
        self.commit(room, "furniture removed");
        true
    }
}
