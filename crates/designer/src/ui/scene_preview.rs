//! Isometric wireframe of the projected scene
//!
//! Draws every wall, opening and furniture box through the same `SceneProjector` the
//! floor plan uses. In AR mode the boxes are additionally transformed by the AR anchor.

use egui::{Color32, Pos2, Sense, Stroke, Ui};
use glam::{DMat4, DVec3};

use crate::canvas::parse_color;
use crate::state::EditorState;
use crate::viewport::projector::ScenePlacement;

const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Pixels per scene unit in the preview
const PREVIEW_SCALE: f32 = 22.0;

pub fn show(ui: &mut Ui, editor: &mut EditorState) {
    let id = ui.make_persistent_id("scene_preview_ar");
    let mut ar = ui.data_mut(|d| *d.get_temp_mut_or(id, false));

    ui.horizontal(|ui| {
        ui.strong("3D");
        ui.checkbox(&mut ar, "AR");
        if ar {
            if ui.small_button("◀").clicked() {
                editor.ar.nudge(-1, 0);
            }
            if ui.small_button("▶").clicked() {
                editor.ar.nudge(1, 0);
            }
            if ui.small_button("▲").clicked() {
                editor.ar.nudge(0, -1);
            }
            if ui.small_button("▼").clicked() {
                editor.ar.nudge(0, 1);
            }
            if ui.small_button("+").clicked() {
                editor.ar.zoom_in();
            }
            if ui.small_button("-").clicked() {
                editor.ar.zoom_out();
            }
            if ui.small_button("Reset").clicked() {
                editor.ar.reset();
            }
        }
    });
    ui.data_mut(|d| d.insert_temp(id, ar));
    if ar {
        ui.weak(format!("scale {:.1}x", editor.ar.user_scale));
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, Color32::from_rgb(32, 34, 40));

    let projector = editor.projector();
    let room = editor.get_room();
    let bounds = room.bounds();
    // центр комнаты в центр превью
    let pivot = projector.to_scene(bounds.center());
    let world = if ar { editor.ar.matrix() } else { DMat4::IDENTITY };
    let pivot = world.transform_point3(pivot);
    let center = rect.center();

    let draw = |placement: &ScenePlacement, color: Color32| {
        let m = world * placement.matrix();
        let corners: Vec<Pos2> = (0..8)
            .map(|i| {
                let local = DVec3::new(
                    if i & 1 == 0 { -0.5 } else { 0.5 },
                    if i & 2 == 0 { -0.5 } else { 0.5 },
                    if i & 4 == 0 { -0.5 } else { 0.5 },
                );
                isometric(m.transform_point3(local) - pivot, center)
            })
            .collect();
        for (a, b) in EDGES {
            painter.line_segment([corners[a], corners[b]], Stroke::new(1.0, color));
        }
    };

    for wall in &room.walls {
        if let Some(placement) = projector.wall_placement(wall) {
            draw(&placement, Color32::from_gray(190));
        }
    }
    for opening in &room.openings {
        if let Some(placement) = projector.opening_placement(room, opening) {
            draw(&placement, parse_color(opening.display_color()));
        }
    }
    for item in &room.furniture {
        draw(&projector.furniture_placement(item), parse_color(item.display_color()));
    }
}

fn isometric(v: DVec3, center: Pos2) -> Pos2 {
    let (sin, cos) = (0.5_f32, 0.866_f32);
    let (x, y, z) = (v.x as f32, v.y as f32, v.z as f32);
    Pos2::new(
        center.x + (x - z) * cos * PREVIEW_SCALE,
        center.y + ((x + z) * sin - y) * PREVIEW_SCALE,
    )
}
