//! JSON command interface for headless automation.
//!
//! Mirrors the mutation surface of the UI: room edits, pointer events in authoring
//! pixels, undo/redo and selection.

use serde::{Deserialize, Serialize};
use shared::{
    FurnitureKind, FurniturePatch, Opening, OpeningKind, OpeningPatch, PerimeterPolicy, Point,
    Wall, WallPatch, DEFAULT_WALL_THICKNESS,
};

use crate::error::CommandError;
use crate::harness::TestHarness;
use crate::helpers::generate_id;
use crate::state::EditMode;

fn default_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS
}

fn default_position() -> f64 {
    0.5
}

/// A command that can be executed against the editor.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Append a wall
    AddWall {
        start: Point,
        end: Point,
        #[serde(default = "default_thickness")]
        thickness: f64,
    },
    RemoveWall {
        index: usize,
    },
    UpdateWall {
        index: usize,
        patch: WallPatch,
    },
    /// Place a template item; without `position` it goes to the room center
    PlaceFurniture {
        #[serde(rename = "type")]
        kind: FurnitureKind,
        #[serde(default)]
        position: Option<Point>,
    },
    UpdateFurniture {
        id: String,
        patch: FurniturePatch,
    },
    RemoveFurniture {
        id: String,
    },
    /// Add a door or window on an existing wall
    AddOpening {
        kind: OpeningKind,
        wall_index: usize,
        #[serde(default = "default_position")]
        position: f64,
    },
    UpdateOpening {
        id: String,
        patch: OpeningPatch,
    },
    RemoveOpening {
        id: String,
    },
    SetRoomDimensions {
        width: f64,
        height: f64,
    },
    /// Remove furniture and openings
    Clear {
        #[serde(default)]
        perimeter: PerimeterPolicy,
    },
    SetMode {
        mode: EditMode,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp {
        x: f64,
        y: f64,
    },
    /// Undo the last committed change.
    Undo,
    /// Redo the last undone change.
    Redo,
    SelectFurniture {
        id: String,
    },
    ClearSelection,
    /// Inspect the room and session state.
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    let editor = &mut harness.editor;
    match cmd {
        AgentCommand::AddWall {
            start,
            end,
            thickness,
        } => match editor.room.add_wall(Wall::new(start, end, thickness)) {
            Some(index) => CommandResponse::ok_with_data(serde_json::json!({ "index": index })),
            None => CommandResponse::err("Wall has zero length"),
        },

        AgentCommand::RemoveWall { index } => {
            let removed = editor.room.remove_wall(index);
            editor.selection.retain_existing(editor.room.room());
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::UpdateWall { index, patch } => {
            let updated = editor.room.update_wall(index, &patch);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": updated }))
        }

        AgentCommand::PlaceFurniture { kind, position } => {
            let id = editor.place_furniture(kind, position);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::UpdateFurniture { id, patch } => {
            let updated = editor.set_furniture_properties(&id, &patch);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": updated }))
        }

        AgentCommand::RemoveFurniture { id } => {
            let removed = editor.room.remove_furniture(&id);
            editor.selection.retain_existing(editor.room.room());
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::AddOpening {
            kind,
            wall_index,
            position,
        } => {
            let valid_wall = editor
                .get_room()
                .wall(wall_index)
                .is_some_and(|w| !w.is_degenerate());
            if !valid_wall {
                return CommandResponse::err(format!("No wall at index {wall_index}"));
            }
            let position = editor.settings.limits.placed_opening_position.clamp(position);
            let opening = Opening::new(generate_id(kind.id_prefix()), kind, wall_index, position);
            let id = editor.room.add_opening(opening);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        AgentCommand::UpdateOpening { id, patch } => {
            let updated = editor.set_opening_properties(&id, &patch);
            CommandResponse::ok_with_data(serde_json::json!({ "updated": updated }))
        }

        AgentCommand::RemoveOpening { id } => {
            let removed = editor.room.remove_opening(&id);
            editor.selection.retain_existing(editor.room.room());
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        AgentCommand::SetRoomDimensions { width, height } => {
            if !(width > 0.0 && height > 0.0) {
                return CommandResponse::err("Room dimensions must be positive");
            }
            editor.room.set_room_dimensions(width, height);
            CommandResponse::ok()
        }

        AgentCommand::Clear { perimeter } => {
            editor.clear_room(perimeter);
            CommandResponse::ok()
        }

        AgentCommand::SetMode { mode } => {
            editor.set_mode(mode);
            CommandResponse::ok()
        }

        AgentCommand::PointerDown { x, y } => {
            let outcome = editor.pointer_down(Point::new(x, y));
            CommandResponse::ok_with_data(serde_json::to_value(outcome).unwrap_or_default())
        }

        AgentCommand::PointerMove { x, y } => {
            let changed = editor.pointer_move(Point::new(x, y));
            CommandResponse::ok_with_data(serde_json::json!({ "changed": changed }))
        }

        AgentCommand::PointerUp { x, y } => {
            let ended = editor.pointer_up(Point::new(x, y));
            CommandResponse::ok_with_data(serde_json::json!({ "drag_ended": ended }))
        }

        AgentCommand::Undo => {
            let success = editor.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        AgentCommand::Redo => {
            let success = editor.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        AgentCommand::SelectFurniture { id } => {
            if editor.select_furniture(&id) {
                CommandResponse::ok()
            } else {
                CommandResponse::err(format!("Unknown furniture: {id}"))
            }
        }

        AgentCommand::ClearSelection => {
            editor.selection.clear();
            CommandResponse::ok()
        }

        AgentCommand::Inspect => CommandResponse::ok_with_data(harness.inspect()),
    }
}

/// Parse and execute a single JSON command.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, CommandError> {
    let cmd: AgentCommand = serde_json::from_str(json).map_err(CommandError::InvalidCommand)?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, CommandError> {
    let cmds: Vec<AgentCommand> = serde_json::from_str(json).map_err(CommandError::InvalidBatch)?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
