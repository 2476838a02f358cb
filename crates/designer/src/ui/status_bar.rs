use egui::Ui;
use shared::Point;

use crate::state::{EditMode, EditorState};

pub fn show(ui: &mut Ui, editor: &EditorState, hover: Option<Point>) {
    ui.horizontal(|ui| {
        ui.weak(format!("Mode: {}", editor.interaction.mode.label()));
        ui.separator();

        let hint = match editor.interaction.mode {
            EditMode::Select => "Click to select, drag to move",
            EditMode::Wall if editor.interaction.pending_wall_start.is_some() => {
                "Click the wall end (Esc to cancel)"
            }
            EditMode::Wall => "Click the wall start",
            EditMode::Furniture => "Click to place the selected furniture",
            EditMode::Door | EditMode::Window => "Click near a wall",
        };
        ui.weak(hint);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("v{}", editor.room.version()));
            ui.separator();
            if let Some(p) = hover {
                let scene = editor.projector().to_scene(p);
                ui.monospace(format!(
                    "{:.0}, {:.0} px  |  {:.2}, {:.2} m",
                    p.x, p.y, scene.x, scene.z
                ));
            }
        });
    });
}
