//! Top toolbar: edit modes, furniture library, history and room-wide actions

use egui::Ui;
use shared::{FurnitureKind, PerimeterPolicy};

use crate::state::{EditMode, EditorState};

pub fn show(ui: &mut Ui, editor: &mut EditorState) {
    ui.horizontal(|ui| {
        for mode in EditMode::all() {
            let active = editor.interaction.mode == *mode;
            if ui.selectable_label(active, mode.label()).clicked() && !active {
                editor.set_mode(*mode);
            }
        }

        ui.separator();

        let current = editor.interaction.template;
        egui::ComboBox::from_id_salt("furniture_template")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for kind in FurnitureKind::all() {
                    ui.selectable_value(&mut editor.interaction.template, *kind, kind.label());
                }
            });
        if ui.button("Add").on_hover_text("Place at room center").clicked() {
            let kind = editor.interaction.template;
            editor.place_furniture(kind, None);
        }

        ui.separator();

        if ui.add_enabled(editor.can_undo(), egui::Button::new("Undo")).clicked() {
            editor.undo();
        }
        if ui.add_enabled(editor.can_redo(), egui::Button::new("Redo")).clicked() {
            editor.redo();
        }

        ui.separator();

        let wall_color = editor
            .get_room()
            .walls
            .first()
            .and_then(|w| w.color.clone())
            .unwrap_or_else(|| "#3c3c3c".to_string());
        if let Some(color) = super::hex_color_edit(ui, "Walls", &wall_color) {
            editor.paint_walls(&color);
        }

        ui.menu_button("Clear", |ui| {
            if ui.button("Keep walls").clicked() {
                editor.clear_room(PerimeterPolicy::Keep);
                ui.close_menu();
            }
            if ui.button("Reset perimeter").clicked() {
                editor.clear_room(PerimeterPolicy::Reset);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.checkbox(&mut editor.settings.grid.visible, "Grid");
    });
}
