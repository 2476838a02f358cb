pub mod actions;
pub mod history;
pub mod interaction;
pub mod room;
pub mod selection;
pub mod settings;

pub use interaction::{DragState, EditMode, InteractionState, PointerOutcome};
pub use room::RoomState;
pub use selection::SelectionState;
pub use settings::AppSettings;

use shared::Room;

use crate::viewport::projector::{ArAnchor, SceneProjector};

/// Combined editor state: the room with its history plus session-only state.
///
/// Renderers read `get_room()` and `selection()`; controls go through the mutation
/// methods on `room` or the higher-level actions.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub room: RoomState,
    pub selection: SelectionState,
    pub interaction: InteractionState,
    pub settings: AppSettings,
    /// AR placement of the projected room
    pub ar: ArAnchor,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

impl EditorState {
    /// Default room with history sized from settings
    pub fn new(settings: AppSettings) -> Self {
        Self::with_room(Room::default(), settings)
    }

    pub fn with_room(room: Room, settings: AppSettings) -> Self {
        Self {
            room: RoomState::new(room, settings.history.max_entries),
            selection: SelectionState::default(),
            interaction: InteractionState::default(),
            settings,
            ar: ArAnchor::default(),
        }
    }

    /// Read-only snapshot for renderers
    pub fn get_room(&self) -> &Room {
        self.room.room()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The single authoring-to-scene mapping for every renderer
    pub fn projector(&self) -> SceneProjector {
        SceneProjector::from_settings(&self.settings.projection)
    }

    /// Undo and drop session state that may refer to the undone entity
    pub fn undo(&mut self) -> bool {
        let undone = self.room.undo();
        if undone {
            self.selection.clear();
            self.interaction.cancel_gesture();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.room.redo();
        if redone {
            self.selection.clear();
            self.interaction.cancel_gesture();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.room.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.room.can_redo()
    }
}
