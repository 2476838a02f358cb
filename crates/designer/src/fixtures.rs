//! Factory functions for creating test data.
//!
//! Convenient constructors for `Room`, `Wall`, `FurnitureItem` and `Opening` values used
//! in tests and by the command interface.

use shared::*;

// ── Primitives ──────────────────────────────────────────────────

pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Wall with the default thickness
pub fn wall(x0: f64, y0: f64, x1: f64, y1: f64) -> Wall {
    Wall::new(point(x0, y0), point(x1, y1), DEFAULT_WALL_THICKNESS)
}

// ── Furniture ───────────────────────────────────────────────────

/// Template item with a fixed id
pub fn furniture(id: &str, kind: FurnitureKind, x: f64, y: f64) -> FurnitureItem {
    FurnitureItem::from_template(id.to_string(), kind, point(x, y))
}

pub fn chair(id: &str, x: f64, y: f64) -> FurnitureItem {
    furniture(id, FurnitureKind::Chair, x, y)
}

pub fn table(id: &str, x: f64, y: f64) -> FurnitureItem {
    furniture(id, FurnitureKind::Table, x, y)
}

// ── Openings ────────────────────────────────────────────────────

pub fn door(id: &str, wall_index: usize, position: f64) -> Opening {
    Opening::new(id.to_string(), OpeningKind::Door, wall_index, position)
}

pub fn window(id: &str, wall_index: usize, position: f64) -> Opening {
    Opening::new(id.to_string(), OpeningKind::Window, wall_index, position)
}

// ── Rooms ───────────────────────────────────────────────────────

/// Closed square of four walls starting at `(x, y)`
pub fn square_room(x: f64, y: f64, side: f64) -> Room {
    Room::empty()
        .add_wall(wall(x, y, x + side, y))
        .add_wall(wall(x + side, y, x + side, y + side))
        .add_wall(wall(x + side, y + side, x, y + side))
        .add_wall(wall(x, y + side, x, y))
}

/// Default room with a door on the top wall, a window on the right wall and a table
pub fn furnished_room() -> Room {
    Room::default()
        .add_door(door("door_1", 0, 0.5))
        .add_window(window("window_1", 1, 0.5))
        .add_furniture(table("table_1", 300.0, 250.0))
}
