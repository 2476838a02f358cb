//! 2D floor-plan canvas
//!
//! Paints the live room each frame and forwards primary-button pointer events to the
//! editor in authoring pixels. Authoring (0, 0) is the top-left corner of the canvas.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui};
use shared::{Point, Room};

use crate::state::{EditMode, EditorState};
use crate::viewport::picking::furniture_corners;
use crate::viewport::projector::opening_anchor;

const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 248);
const GRID: Color32 = Color32::from_rgb(228, 228, 228);
const WALL: Color32 = Color32::from_rgb(60, 60, 60);
const SELECTION: Color32 = Color32::from_rgb(0, 150, 255);
const PREVIEW: Color32 = Color32::from_rgb(255, 140, 0);

/// Parse `#RRGGBB`, falling back to gray
pub fn parse_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(Color32::GRAY)
}

/// Floor-plan canvas with its last pointer position
#[derive(Default)]
pub struct PlanCanvas {
    /// Pointer position in authoring space while over the canvas
    pub hover: Option<Point>,
}

impl PlanCanvas {
    pub fn show(&mut self, ui: &mut Ui, editor: &mut EditorState) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let origin = rect.min;

        self.handle_pointer(ui, response.contains_pointer(), origin, editor);

        painter.rect_filled(rect, 0.0, BACKGROUND);
        if editor.settings.grid.visible {
            draw_grid(&painter, rect, editor.settings.grid.display_spacing as f32);
        }

        let room = editor.get_room();
        draw_walls(&painter, origin, room, editor.selection.wall());
        draw_furniture(&painter, origin, editor);
        draw_openings(&painter, origin, room, editor.selection.opening().map(String::as_str));
        self.draw_wall_preview(&painter, origin, editor);
    }

    fn handle_pointer(&mut self, ui: &Ui, over: bool, origin: Pos2, editor: &mut EditorState) {
        let (pressed, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pos) = pos else {
            self.hover = None;
            return;
        };
        let p = to_authoring(origin, pos);

        if pressed && over {
            let outcome = editor.pointer_down(p);
            tracing::debug!(?outcome, "pointer down");
        } else if self.hover != Some(p) {
            editor.pointer_move(p);
        }
        if released {
            editor.pointer_up(p);
        }
        self.hover = over.then_some(p);
    }

    fn draw_wall_preview(&self, painter: &egui::Painter, origin: Pos2, editor: &EditorState) {
        if editor.interaction.mode != EditMode::Wall {
            return;
        }
        let Some(start) = editor.interaction.pending_wall_start else {
            return;
        };
        let a = to_screen(origin, start);
        painter.circle_filled(a, 4.0, PREVIEW);
        if let Some(hover) = self.hover {
            let end = crate::geometry::snap_to_grid(hover, editor.settings.grid.snap_size);
            painter.line_segment([a, to_screen(origin, end)], Stroke::new(2.0, PREVIEW));
        }
    }
}

fn to_screen(origin: Pos2, p: Point) -> Pos2 {
    origin + egui::vec2(p.x as f32, p.y as f32)
}

fn to_authoring(origin: Pos2, pos: Pos2) -> Point {
    Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}

fn draw_grid(painter: &egui::Painter, rect: Rect, spacing: f32) {
    if spacing < 2.0 {
        return;
    }
    let stroke = Stroke::new(0.5, GRID);
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        x += spacing;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        y += spacing;
    }
}

fn draw_walls(painter: &egui::Painter, origin: Pos2, room: &Room, selected: Option<usize>) {
    for (i, wall) in room.walls.iter().enumerate() {
        let color = if selected == Some(i) {
            SELECTION
        } else {
            wall.color.as_deref().map_or(WALL, parse_color)
        };
        painter.line_segment(
            [to_screen(origin, wall.start), to_screen(origin, wall.end)],
            Stroke::new(wall.thickness as f32, color),
        );
    }
}

fn draw_furniture(painter: &egui::Painter, origin: Pos2, editor: &EditorState) {
    let room = editor.get_room();
    let selected = editor.selection.furniture().map(String::as_str);
    let handle_size = editor.settings.picking.handle_size as f32;

    for item in &room.furniture {
        let (hw, hh) = item.half_extents();
        let center = to_screen(origin, item.position);
        let rect = Rect::from_center_size(center, egui::vec2(2.0 * hw as f32, 2.0 * hh as f32));
        painter.rect_filled(rect, 2.0, parse_color(item.display_color()));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            item.kind.label(),
            FontId::proportional(11.0),
            Color32::WHITE,
        );

        if selected == Some(item.id.as_str()) {
            let stroke = Stroke::new(2.0, SELECTION);
            let c = rect.left_top();
            let corners = [c, rect.right_top(), rect.right_bottom(), rect.left_bottom()];
            for i in 0..4 {
                painter.line_segment([corners[i], corners[(i + 1) % 4]], stroke);
            }
            for (_, corner) in furniture_corners(item) {
                let handle = Rect::from_center_size(
                    to_screen(origin, corner),
                    egui::vec2(handle_size, handle_size),
                );
                painter.rect_filled(handle, 0.0, SELECTION);
            }
        }
    }
}

fn draw_openings(painter: &egui::Painter, origin: Pos2, room: &Room, selected: Option<&str>) {
    for opening in &room.openings {
        // dangling openings are not drawn
        let Some(anchor) = opening_anchor(room, opening) else {
            continue;
        };
        let half = (opening.width / 2.0) as f32;
        let dir = egui::vec2(anchor.angle.cos() as f32, anchor.angle.sin() as f32);
        let center = to_screen(origin, anchor.point);
        let color = if selected == Some(opening.id.as_str()) {
            SELECTION
        } else {
            parse_color(opening.display_color())
        };
        painter.line_segment([center - dir * half, center + dir * half], Stroke::new(6.0, color));
        painter.circle_filled(center, 3.0, color);
    }
}
