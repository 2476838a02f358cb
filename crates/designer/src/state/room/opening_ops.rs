//! Door and window operations

use shared::{ObjectId, Opening, OpeningKind, OpeningPatch};

use super::RoomState;
use crate::helpers::generate_id;

impl RoomState {
    /// Add an opening as given and checkpoint. The caller supplies a valid wall index.
    pub fn add_opening(&mut self, opening: Opening) -> ObjectId {
        let id = opening.id.clone();
        let room = self.room().add_opening(opening);
        self.commit(room, "opening added");
        id
    }

    pub fn add_door(&mut self, opening: Opening) -> ObjectId {
        self.add_opening(Opening {
            kind: OpeningKind::Door,
            ..opening
        })
    }

    pub fn add_window(&mut self, opening: Opening) -> ObjectId {
        self.add_opening(Opening {
            kind: OpeningKind::Window,
            ..opening
        })
    }

    /// Create an opening with default size for its kind and checkpoint
    pub fn place_opening(&mut self, kind: OpeningKind, wall_index: usize, position: f64) -> ObjectId {
        let opening = Opening::new(generate_id(kind.id_prefix()), kind, wall_index, position);
        self.add_opening(opening)
    }

    /// Merge fields into a door or window without a checkpoint
    pub fn update_opening(&mut self, id: &str, patch: &OpeningPatch) -> bool {
        if self.room().opening(id).is_none() {
            tracing::debug!(id, "update_opening: unknown id");
            return false;
        }
        let room = self.room().update_opening(id, patch);
        self.amend(room);
        true
    }

    pub fn remove_opening(&mut self, id: &str) -> bool {
        if self.room().opening(id).is_none() {
            tracing::debug!(id, "remove_opening: unknown id");
            return false;
        }
        let room = self.room().remove_opening(id);
        self.commit(room, "opening removed");
        true
    }
}
