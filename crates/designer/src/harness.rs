//! Headless test harness for programmatic room editing.
//!
//! Drives `EditorState` the way the UI does, without a window.

use shared::{FurnitureKind, ObjectId, OpeningKind, Point, Room};

use crate::state::{AppSettings, EditMode, EditorState, PointerOutcome};

/// Headless harness around the editor state
pub struct TestHarness {
    pub editor: EditorState,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness with the default room and default settings
    pub fn new() -> Self {
        Self {
            editor: EditorState::default(),
        }
    }

    /// Harness with a room that has no walls
    pub fn empty() -> Self {
        Self::with_room(Room::empty())
    }

    pub fn with_room(room: Room) -> Self {
        Self {
            editor: EditorState::with_room(room, AppSettings::default()),
        }
    }

    pub fn room(&self) -> &Room {
        self.editor.get_room()
    }

    // ── Room manipulation ─────────────────────────────────────

    /// Add a wall with default thickness; `None` if it has zero length
    pub fn add_wall(&mut self, start: Point, end: Point) -> Option<usize> {
        self.editor.room.add_wall(shared::Wall::new(
            start,
            end,
            shared::DEFAULT_WALL_THICKNESS,
        ))
    }

    /// Place furniture from the library (room center) or at a point
    pub fn place(&mut self, kind: FurnitureKind, at: Option<Point>) -> ObjectId {
        self.editor.place_furniture(kind, at)
    }

    pub fn add_door(&mut self, wall_index: usize, position: f64) -> ObjectId {
        self.editor
            .room
            .place_opening(OpeningKind::Door, wall_index, position)
    }

    pub fn add_window(&mut self, wall_index: usize, position: f64) -> ObjectId {
        self.editor
            .room
            .place_opening(OpeningKind::Window, wall_index, position)
    }

    // ── Pointer ───────────────────────────────────────────────

    pub fn set_mode(&mut self, mode: EditMode) {
        self.editor.set_mode(mode);
    }

    /// Pointer down and up at the same point
    pub fn click(&mut self, p: Point) -> PointerOutcome {
        let outcome = self.editor.pointer_down(p);
        self.editor.pointer_up(p);
        outcome
    }

    /// Press at `from`, move through `path`, release at the last point
    pub fn drag(&mut self, from: Point, path: &[Point]) -> PointerOutcome {
        let outcome = self.editor.pointer_down(from);
        for p in path {
            self.editor.pointer_move(*p);
        }
        self.editor.pointer_up(path.last().copied().unwrap_or(from));
        outcome
    }

    // ── History ───────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn wall_count(&self) -> usize {
        self.room().walls.len()
    }

    pub fn furniture_count(&self) -> usize {
        self.room().furniture.len()
    }

    pub fn opening_count(&self) -> usize {
        self.room().openings.len()
    }

    /// Summary of the room and session state as JSON
    pub fn inspect(&self) -> serde_json::Value {
        let room = self.room();
        serde_json::json!({
            "room": room,
            "selection": self.editor.selection(),
            "mode": self.editor.interaction.mode,
            "pending_wall_start": self.editor.interaction.pending_wall_start,
            "can_undo": self.editor.can_undo(),
            "can_redo": self.editor.can_redo(),
            "version": self.editor.room.version(),
            "dangling_openings": room.dangling_openings().map(|o| o.id.clone()).collect::<Vec<_>>(),
        })
    }
}
