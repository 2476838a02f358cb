//! Hit-testing in authoring space.
//!
//! Openings are picked by distance to their wall anchor, furniture by its unrotated scaled
//! box, resize handles by small squares at the four unrotated corners.

use serde::{Deserialize, Serialize};
use shared::{FurnitureItem, ObjectId, Point, Room};

use crate::geometry::{
    distance, distance_to_segment, furniture_rect, is_point_in_axis_aligned_rect,
    project_onto_segment, rectangles_overlap,
};
use crate::state::settings::PickingSettings;
use crate::viewport::projector::opening_anchor;

/// Corner handle of a selected furniture item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl ResizeHandle {
    pub fn all() -> [ResizeHandle; 4] {
        [
            ResizeHandle::TopLeft,
            ResizeHandle::TopRight,
            ResizeHandle::BottomRight,
            ResizeHandle::BottomLeft,
        ]
    }

    /// Direction of the corner from the center: -1 for left/top, +1 for right/bottom
    pub fn signs(&self) -> (f64, f64) {
        match self {
            ResizeHandle::TopLeft => (-1.0, -1.0),
            ResizeHandle::TopRight => (1.0, -1.0),
            ResizeHandle::BottomRight => (1.0, 1.0),
            ResizeHandle::BottomLeft => (-1.0, 1.0),
        }
    }
}

/// What the pointer landed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum HitTarget {
    Opening { id: ObjectId },
    Furniture { id: ObjectId },
    ResizeHandle {
        furniture_id: ObjectId,
        handle: ResizeHandle,
    },
}

/// Nearest door or window whose wall anchor lies within `radius`. Dangling openings are skipped.
pub fn pick_opening(room: &Room, p: Point, radius: f64) -> Option<ObjectId> {
    room.openings
        .iter()
        .filter_map(|o| opening_anchor(room, o).map(|a| (o, distance(a.point, p))))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(o, _)| o.id.clone())
}

/// Topmost furniture item containing the point
pub fn pick_furniture(room: &Room, p: Point) -> Option<ObjectId> {
    room.furniture
        .iter()
        .rev()
        .find(|item| {
            is_point_in_axis_aligned_rect(
                p,
                item.position,
                item.width * item.scale,
                item.height * item.scale,
            )
        })
        .map(|item| item.id.clone())
}

/// Corner points of the unrotated, scaled box
pub fn furniture_corners(item: &FurnitureItem) -> [(ResizeHandle, Point); 4] {
    let (hw, hh) = item.half_extents();
    ResizeHandle::all().map(|handle| {
        let (sx, sy) = handle.signs();
        (
            handle,
            Point::new(item.position.x + sx * hw, item.position.y + sy * hh),
        )
    })
}

/// Handle of `item` under the point, if any
pub fn pick_resize_handle(item: &FurnitureItem, p: Point, handle_size: f64) -> Option<ResizeHandle> {
    furniture_corners(item)
        .into_iter()
        .find(|(_, corner)| is_point_in_axis_aligned_rect(p, *corner, handle_size, handle_size))
        .map(|(handle, _)| handle)
}

/// Resolve a select-mode click: openings, then furniture, then handles of the selection.
pub fn hit_test(
    room: &Room,
    selected_furniture: Option<&str>,
    p: Point,
    settings: &PickingSettings,
) -> Option<HitTarget> {
    if let Some(id) = pick_opening(room, p, settings.opening_radius) {
        return Some(HitTarget::Opening { id });
    }
    if let Some(id) = pick_furniture(room, p) {
        return Some(HitTarget::Furniture { id });
    }
    let item = selected_furniture.and_then(|id| room.furniture_item(id))?;
    pick_resize_handle(item, p, settings.handle_size).map(|handle| HitTarget::ResizeHandle {
        furniture_id: item.id.clone(),
        handle,
    })
}

/// Closest non-degenerate wall within `threshold`, with the projected parameter along it
pub fn nearest_wall(room: &Room, p: Point, threshold: f64) -> Option<(usize, f64)> {
    room.walls
        .iter()
        .enumerate()
        .filter(|(_, wall)| !wall.is_degenerate())
        .map(|(i, wall)| (i, distance_to_segment(p, wall.start, wall.end)))
        .filter(|(_, d)| *d <= threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| {
            let wall = &room.walls[i];
            (i, project_onto_segment(p, wall.start, wall.end))
        })
}

/// Ids of other items whose footprints overlap the given item
pub fn overlapping_furniture(room: &Room, id: &str) -> Vec<ObjectId> {
    let Some(item) = room.furniture_item(id) else {
        return Vec::new();
    };
    let rect = furniture_rect(item);
    room.furniture
        .iter()
        .filter(|other| other.id != id && rectangles_overlap(rect, furniture_rect(other)))
        .map(|other| other.id.clone())
        .collect()
}
