//! Properties panel for the selected object, or the room when nothing is selected

use egui::Ui;
use shared::{FurniturePatch, OpeningPatch, Point, WallPatch};

use crate::state::settings::ClampRange;
use crate::state::EditorState;

pub fn show(ui: &mut Ui, editor: &mut EditorState) {
    ui.heading("Properties");
    ui.separator();

    if let Some(id) = editor.selection().furniture().cloned() {
        show_furniture(ui, editor, &id);
    } else if let Some(id) = editor.selection().opening().cloned() {
        show_opening(ui, editor, &id);
    } else if let Some(index) = editor.selection().wall() {
        show_wall(ui, editor, index);
    } else {
        show_room(ui, editor);
    }
}

fn slider(ui: &mut Ui, value: &mut f64, range: ClampRange, text: &str) -> bool {
    ui.add(egui::Slider::new(value, range.min..=range.max).text(text))
        .changed()
}

fn show_furniture(ui: &mut Ui, editor: &mut EditorState, id: &str) {
    let Some(item) = editor.get_room().furniture_item(id).cloned() else {
        ui.weak("Object not found");
        return;
    };
    let limits = editor.settings.limits.clone();

    ui.horizontal(|ui| {
        ui.strong(item.kind.label());
        ui.monospace(&item.id);
    });
    ui.add_space(4.0);

    let mut patch = FurniturePatch::default();
    let (mut width, mut height, mut depth) = (item.width, item.height, item.depth);
    let mut scale = item.scale;
    let mut rotation = item.rotation;
    let (mut x, mut y) = (item.position.x, item.position.y);

    egui::Grid::new("furniture_position")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("X:");
            let dx = ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed();
            ui.end_row();
            ui.label("Y:");
            let dy = ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed();
            ui.end_row();
            if dx || dy {
                patch.position = Some(Point::new(x, y));
            }
        });

    if slider(ui, &mut width, limits.furniture_size, "Width") {
        patch.width = Some(width);
    }
    if slider(ui, &mut height, limits.furniture_size, "Length") {
        patch.height = Some(height);
    }
    if slider(ui, &mut depth, limits.furniture_size, "Height") {
        patch.depth = Some(depth);
    }
    if slider(ui, &mut scale, limits.furniture_scale, "Scale") {
        patch.scale = Some(scale);
    }
    if ui
        .add(egui::Slider::new(&mut rotation, 0.0..=359.0).text("Rotation").suffix("°"))
        .changed()
    {
        patch.rotation = Some(rotation);
    }
    if let Some(color) = super::hex_color_edit(ui, "Color", item.display_color()) {
        patch.color = Some(color);
    }

    if patch != FurniturePatch::default() {
        editor.set_furniture_properties(id, &patch);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Rotate").clicked() {
            editor.rotate_selected();
        }
        if ui.button("Delete").clicked() {
            editor.delete_selected();
        }
    });

    let overlaps = crate::viewport::picking::overlapping_furniture(editor.get_room(), id);
    if !overlaps.is_empty() {
        ui.colored_label(
            egui::Color32::from_rgb(220, 120, 0),
            format!("Overlaps: {}", overlaps.join(", ")),
        );
    }
}

fn show_opening(ui: &mut Ui, editor: &mut EditorState, id: &str) {
    let Some(opening) = editor.get_room().opening(id).cloned() else {
        ui.weak("Object not found");
        return;
    };
    let limits = editor.settings.limits.clone();
    let (width_range, height_range) = match opening.kind {
        shared::OpeningKind::Door => (limits.door_width, limits.door_height),
        shared::OpeningKind::Window => (limits.window_width, limits.window_height),
    };

    ui.horizontal(|ui| {
        ui.strong(opening.kind.label());
        ui.monospace(&opening.id);
    });
    if editor.get_room().wall(opening.wall_index).is_none() {
        ui.colored_label(egui::Color32::RED, "Wall no longer exists");
    } else {
        ui.label(format!("Wall #{}", opening.wall_index));
    }
    ui.add_space(4.0);

    let mut patch = OpeningPatch::default();
    let (mut width, mut height, mut position) = (opening.width, opening.height, opening.position);
    if slider(ui, &mut width, width_range, "Width") {
        patch.width = Some(width);
    }
    if slider(ui, &mut height, height_range, "Height") {
        patch.height = Some(height);
    }
    if slider(ui, &mut position, limits.opening_position, "Position") {
        patch.position = Some(position);
    }
    if let Some(color) = super::hex_color_edit(ui, "Color", opening.display_color()) {
        patch.color = Some(color);
    }

    if patch != OpeningPatch::default() {
        editor.set_opening_properties(id, &patch);
    }

    ui.add_space(8.0);
    if ui.button("Delete").clicked() {
        editor.delete_selected();
    }
}

fn show_wall(ui: &mut Ui, editor: &mut EditorState, index: usize) {
    let Some(wall) = editor.get_room().wall(index).cloned() else {
        ui.weak("Wall not found");
        return;
    };

    ui.strong(format!("Wall #{index}"));
    ui.label(format!("Length: {:.0} px", wall.length()));
    ui.add_space(4.0);

    let mut thickness = wall.thickness;
    if ui
        .add(egui::Slider::new(&mut thickness, 2.0..=40.0).text("Thickness"))
        .changed()
    {
        editor.room.update_wall(
            index,
            &WallPatch {
                thickness: Some(thickness),
                ..WallPatch::default()
            },
        );
    }
    let color = wall.color.as_deref().unwrap_or("#3c3c3c");
    if let Some(color) = super::hex_color_edit(ui, "Color", color) {
        editor.paint_selected_wall(&color);
    }

    ui.add_space(8.0);
    if ui.button("Remove wall").clicked() {
        editor.room.remove_wall(index);
        editor.selection.clear();
    }
}

fn show_room(ui: &mut Ui, editor: &mut EditorState) {
    let room = editor.get_room().clone();

    egui::Grid::new("room_info")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Name:");
            ui.label(&room.name);
            ui.end_row();
            ui.label("Walls:");
            ui.label(room.walls.len().to_string());
            ui.end_row();
            ui.label("Furniture:");
            ui.label(room.furniture.len().to_string());
            ui.end_row();
            ui.label("Doors / windows:");
            ui.label(format!("{} / {}", room.doors().count(), room.windows().count()));
            ui.end_row();
        });

    let dangling = room.dangling_openings().count();
    if dangling > 0 {
        ui.colored_label(
            egui::Color32::from_rgb(220, 120, 0),
            format!("{dangling} opening(s) reference a missing wall"),
        );
    }

    ui.add_space(6.0);
    let (mut width, mut height) = (room.width, room.height);
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("Size:");
        changed |= ui.add(egui::DragValue::new(&mut width).range(100.0..=5000.0)).changed();
        ui.label("x");
        changed |= ui.add(egui::DragValue::new(&mut height).range(100.0..=5000.0)).changed();
    });
    if changed {
        editor.room.set_room_dimensions(width, height);
    }

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Walls")
        .id_salt("wall_list")
        .default_open(false)
        .show(ui, |ui| {
            for (i, wall) in room.walls.iter().enumerate() {
                let text = format!("#{i}  {:.0} px", wall.length());
                if ui.selectable_label(false, text).clicked() {
                    editor.select_wall(i);
                }
            }
        });

    egui::CollapsingHeader::new("Grid")
        .id_salt("grid_settings")
        .default_open(false)
        .show(ui, |ui| {
            let grid = &mut editor.settings.grid;
            ui.add(egui::Slider::new(&mut grid.snap_size, 1.0..=50.0).text("Snap"));
            ui.add(egui::Slider::new(&mut grid.display_spacing, 5.0..=100.0).text("Spacing"));
        });
}
