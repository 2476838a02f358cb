//! Edit modes and the pointer resolver.
//!
//! Pointer events arrive in authoring pixels. A pointer-down is resolved against the
//! current mode; pointer-moves drive an active drag by amending the live room, so a whole
//! drag never creates more than the history entry of the action that preceded it.

use serde::{Deserialize, Serialize};
use shared::{FurnitureKind, FurniturePatch, ObjectId, OpeningKind, OpeningPatch, Point, Wall,
    DEFAULT_WALL_THICKNESS};

use super::EditorState;
use crate::geometry::{project_onto_segment, snap_to_grid};
use crate::viewport::picking::{hit_test, nearest_wall, HitTarget, ResizeHandle};

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Select,
    Wall,
    Furniture,
    Door,
    Window,
}

impl EditMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Wall => "Wall",
            Self::Furniture => "Furniture",
            Self::Door => "Door",
            Self::Window => "Window",
        }
    }

    pub fn all() -> &'static [EditMode] {
        &[
            EditMode::Select,
            EditMode::Wall,
            EditMode::Furniture,
            EditMode::Door,
            EditMode::Window,
        ]
    }

    /// Opening kind placed by this mode
    pub fn opening_kind(&self) -> Option<OpeningKind> {
        match self {
            Self::Door => Some(OpeningKind::Door),
            Self::Window => Some(OpeningKind::Window),
            _ => None,
        }
    }
}

/// Active pointer drag
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    /// Moving furniture; `grab_offset` is pointer minus item center at grab time
    Move {
        furniture_id: ObjectId,
        grab_offset: Point,
    },
    /// Resizing furniture from a corner; `last` is the previous pointer sample
    Resize {
        furniture_id: ObjectId,
        handle: ResizeHandle,
        last: Point,
    },
    /// Sliding a door or window along its wall
    Slide { opening_id: ObjectId },
}

/// Session-only interaction state
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub mode: EditMode,
    /// First click of a wall in progress, grid-snapped
    pub pending_wall_start: Option<Point>,
    pub drag: Option<DragState>,
    /// Template used by furniture mode
    pub template: FurnitureKind,
    /// Last pointer position seen by `pointer_move`
    pub hover: Option<Point>,
}

impl InteractionState {
    /// Abort a pending wall and any drag
    pub fn cancel_gesture(&mut self) {
        self.pending_wall_start = None;
        self.drag = None;
    }
}

/// Result of a pointer-down
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PointerOutcome {
    Selected { target: HitTarget },
    SelectionCleared,
    WallStarted { start: Point },
    WallCommitted { wall_index: usize },
    /// Second click on the pending start point
    WallIgnored,
    FurniturePlaced { id: ObjectId },
    OpeningPlaced { id: ObjectId },
    NoWallNearby,
}

impl EditorState {
    /// Switch mode, dropping any half-finished wall or drag
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.interaction.mode != mode {
            tracing::debug!(from = ?self.interaction.mode, to = ?mode, "mode changed");
        }
        self.interaction.mode = mode;
        self.interaction.cancel_gesture();
    }

    /// Escape: cancel the gesture and clear selection
    pub fn cancel(&mut self) {
        self.interaction.cancel_gesture();
        self.selection.clear();
    }

    pub fn pointer_down(&mut self, p: Point) -> PointerOutcome {
        self.interaction.hover = Some(p);
        match self.interaction.mode {
            EditMode::Select => self.select_at(p),
            EditMode::Wall => self.wall_click(p),
            EditMode::Furniture => {
                let id = self.place_furniture(self.interaction.template, Some(p));
                PointerOutcome::FurniturePlaced { id }
            }
            EditMode::Door => self.place_opening_at(OpeningKind::Door, p),
            EditMode::Window => self.place_opening_at(OpeningKind::Window, p),
        }
    }

    /// Continue the active drag. Returns true if the room changed.
    /// A repeat of the last sample is ignored.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        if self.interaction.hover == Some(p) {
            return false;
        }
        self.interaction.hover = Some(p);
        let Some(drag) = self.interaction.drag.clone() else {
            return false;
        };
        match drag {
            DragState::Move {
                furniture_id,
                grab_offset,
            } => {
                let position = Point::new(p.x - grab_offset.x, p.y - grab_offset.y);
                self.room
                    .update_furniture(&furniture_id, &FurniturePatch::position(position))
            }
            DragState::Resize {
                furniture_id,
                handle,
                last,
            } => {
                let changed = self.resize_step(&furniture_id, handle, last, p);
                self.interaction.drag = Some(DragState::Resize {
                    furniture_id,
                    handle,
                    last: p,
                });
                changed
            }
            DragState::Slide { opening_id } => self.slide_opening(&opening_id, p),
        }
    }

    /// End the active drag. Returns true if one was active.
    pub fn pointer_up(&mut self, _p: Point) -> bool {
        self.interaction.drag.take().is_some()
    }

    fn select_at(&mut self, p: Point) -> PointerOutcome {
        let room = self.room.room();
        let Some(target) = hit_test(
            room,
            self.selection.furniture().map(String::as_str),
            p,
            &self.settings.picking,
        ) else {
            self.selection.clear();
            return PointerOutcome::SelectionCleared;
        };

        let drag = match &target {
            HitTarget::Opening { id } => {
                self.selection.select_opening(id.clone());
                DragState::Slide {
                    opening_id: id.clone(),
                }
            }
            HitTarget::Furniture { id } => {
                let center = room.furniture_item(id).map_or(p, |item| item.position);
                self.selection.select_furniture(id.clone());
                DragState::Move {
                    furniture_id: id.clone(),
                    grab_offset: Point::new(p.x - center.x, p.y - center.y),
                }
            }
            HitTarget::ResizeHandle {
                furniture_id,
                handle,
            } => DragState::Resize {
                furniture_id: furniture_id.clone(),
                handle: *handle,
                last: p,
            },
        };
        self.interaction.drag = Some(drag);
        PointerOutcome::Selected { target }
    }

    fn wall_click(&mut self, p: Point) -> PointerOutcome {
        let snapped = snap_to_grid(p, self.settings.grid.snap_size);
        let Some(start) = self.interaction.pending_wall_start else {
            self.interaction.pending_wall_start = Some(snapped);
            return PointerOutcome::WallStarted { start: snapped };
        };
        match self
            .room
            .add_wall(Wall::new(start, snapped, DEFAULT_WALL_THICKNESS))
        {
            Some(wall_index) => {
                self.interaction.pending_wall_start = None;
                PointerOutcome::WallCommitted { wall_index }
            }
            None => PointerOutcome::WallIgnored,
        }
    }

    fn place_opening_at(&mut self, kind: OpeningKind, p: Point) -> PointerOutcome {
        let Some((wall_index, t)) =
            nearest_wall(self.room.room(), p, self.settings.picking.wall_threshold)
        else {
            tracing::debug!(x = p.x, y = p.y, "no wall near click");
            return PointerOutcome::NoWallNearby;
        };
        let position = self.settings.limits.placed_opening_position.clamp(t);
        let id = self.room.place_opening(kind, wall_index, position);
        self.selection.select_opening(id.clone());
        PointerOutcome::OpeningPlaced { id }
    }

    /// Extend the item from `handle` by the pointer delta since `last`, keeping the
    /// opposite corner in place.
    fn resize_step(&mut self, id: &str, handle: ResizeHandle, last: Point, p: Point) -> bool {
        let Some(item) = self.room.room().furniture_item(id) else {
            return false;
        };
        let limits = &self.settings.limits;
        let (sx, sy) = handle.signs();
        let scale = if item.scale > 0.0 { item.scale } else { 1.0 };

        let width = limits
            .furniture_size
            .clamp(item.width + sx * (p.x - last.x) / scale);
        let height = limits
            .furniture_size
            .clamp(item.height + sy * (p.y - last.y) / scale);
        let position = Point::new(
            item.position.x + sx * (width - item.width) * scale / 2.0,
            item.position.y + sy * (height - item.height) * scale / 2.0,
        );

        let patch = FurniturePatch {
            position: Some(position),
            width: Some(width),
            height: Some(height),
            ..FurniturePatch::default()
        };
        self.room.update_furniture(id, &patch)
    }

    fn slide_opening(&mut self, id: &str, p: Point) -> bool {
        let room = self.room.room();
        let Some(wall) = room
            .opening(id)
            .and_then(|o| room.wall(o.wall_index))
            .filter(|w| !w.is_degenerate())
        else {
            return false;
        };
        let t = project_onto_segment(p, wall.start, wall.end);
        let position = self.settings.limits.placed_opening_position.clamp(t);
        self.room
            .update_opening(id, &OpeningPatch::position(position))
    }
}
