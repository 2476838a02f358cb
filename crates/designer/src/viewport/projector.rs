//! Authoring space to scene space mapping.
//!
//! Authoring space is the 2D plan in pixels with the origin at the top left. Scene space is
//! the right-handed Y-up space used by 3D and AR renderers: authoring X maps to scene X,
//! authoring Y maps to scene Z. All renderers go through one `SceneProjector`.

use glam::{DMat4, DQuat, DVec2, DVec3};
use shared::{FurnitureItem, Opening, OpeningKind, Point, Room, Wall};

use crate::geometry::{point_on_segment, segment_angle};
use crate::state::settings::ProjectionSettings;

/// Высота стен в единицах сцены
pub const WALL_HEIGHT: f64 = 2.5;

/// Высота подоконника на плане (в пикселях)
pub const WINDOW_SILL_PX: f64 = 90.0;

/// Affine mapping between authoring pixels and scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneProjector {
    /// Authoring point that lands on the scene origin
    pub origin: DVec2,
    pub pixels_per_unit: f64,
}

impl Default for SceneProjector {
    fn default() -> Self {
        Self {
            origin: DVec2::new(400.0, 300.0),
            pixels_per_unit: 50.0,
        }
    }
}

impl SceneProjector {
    pub fn new(origin: DVec2, pixels_per_unit: f64) -> Self {
        Self {
            origin,
            pixels_per_unit,
        }
    }

    pub fn from_settings(settings: &ProjectionSettings) -> Self {
        Self::new(
            DVec2::new(settings.origin[0], settings.origin[1]),
            settings.pixels_per_unit,
        )
    }

    /// Project an authoring point onto the scene floor (y = 0)
    pub fn to_scene(&self, p: Point) -> DVec3 {
        DVec3::new(
            (p.x - self.origin.x) / self.pixels_per_unit,
            0.0,
            (p.y - self.origin.y) / self.pixels_per_unit,
        )
    }

    /// Inverse of [`Self::to_scene`]; the vertical component is dropped
    pub fn to_authoring(&self, v: DVec3) -> Point {
        Point::new(
            v.x * self.pixels_per_unit + self.origin.x,
            v.z * self.pixels_per_unit + self.origin.y,
        )
    }

    /// Convert a length in pixels to scene units
    pub fn length_to_scene(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_unit
    }

    /// Box for a wall segment. `None` for a zero-length wall.
    pub fn wall_placement(&self, wall: &Wall) -> Option<ScenePlacement> {
        if wall.is_degenerate() {
            return None;
        }
        let mid = point_on_segment(wall.start, wall.end, 0.5);
        let mut translation = self.to_scene(mid);
        translation.y = WALL_HEIGHT / 2.0;
        Some(ScenePlacement {
            translation,
            size: DVec3::new(
                self.length_to_scene(wall.length()),
                WALL_HEIGHT,
                self.length_to_scene(wall.thickness),
            ),
            yaw: wall.angle(),
        })
    }

    /// Box for a furniture item, standing on the floor.
    /// `depth` is the vertical extent; the footprint is `width` x `height`.
    pub fn furniture_placement(&self, item: &FurnitureItem) -> ScenePlacement {
        let size = DVec3::new(
            self.length_to_scene(item.width * item.scale),
            self.length_to_scene(item.depth * item.scale),
            self.length_to_scene(item.height * item.scale),
        );
        let mut translation = self.to_scene(item.position);
        translation.y = size.y / 2.0;
        ScenePlacement {
            translation,
            size,
            yaw: item.rotation.to_radians(),
        }
    }

    /// Box for a door or window on its wall. `None` when the wall is missing or degenerate.
    pub fn opening_placement(&self, room: &Room, opening: &Opening) -> Option<ScenePlacement> {
        let anchor = opening_anchor(room, opening)?;
        let height = self.length_to_scene(opening.height);
        let elevation = match opening.kind {
            OpeningKind::Door => 0.0,
            OpeningKind::Window => self.length_to_scene(WINDOW_SILL_PX),
        };
        let mut translation = self.to_scene(anchor.point);
        translation.y = elevation + height / 2.0;
        let thickness = room
            .wall(opening.wall_index)
            .map_or(0.0, |w| self.length_to_scene(w.thickness));
        Some(ScenePlacement {
            translation,
            size: DVec3::new(self.length_to_scene(opening.width), height, thickness),
            yaw: anchor.angle,
        })
    }
}

/// A box in scene space: center, full size along local axes, yaw in authoring angle terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePlacement {
    pub translation: DVec3,
    pub size: DVec3,
    /// Angle in the authoring plane, radians; positive turns +X towards +Z
    pub yaw: f64,
}

impl ScenePlacement {
    pub fn rotation(&self) -> DQuat {
        DQuat::from_rotation_y(-self.yaw)
    }

    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.size, self.rotation(), self.translation)
    }

    /// Footprint center back in authoring space
    pub fn authoring_point(&self, projector: &SceneProjector) -> Point {
        projector.to_authoring(self.translation)
    }
}

/// Point and facing angle at a wall-relative position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallAnchor {
    pub point: Point,
    /// Wall direction in radians
    pub angle: f64,
}

/// Map `t` in [0, 1] along a wall to an authoring point. `None` for a degenerate wall.
pub fn wall_anchor(wall: &Wall, t: f64) -> Option<WallAnchor> {
    if wall.is_degenerate() {
        return None;
    }
    Some(WallAnchor {
        point: point_on_segment(wall.start, wall.end, t),
        angle: segment_angle(wall.start, wall.end),
    })
}

/// Resolve an opening to its wall anchor. Dangling openings resolve to `None`.
pub fn opening_anchor(room: &Room, opening: &Opening) -> Option<WallAnchor> {
    let wall = room.wall(opening.wall_index)?;
    wall_anchor(wall, opening.position)
}

// ============================================================================
// AR anchor
// ============================================================================

const AR_BASE_OFFSET: DVec3 = DVec3::new(0.0, -1.0, -3.0);
const AR_BASE_SCALE: f64 = 0.5;
const AR_NUDGE_STEP: f64 = 0.2;
const AR_SCALE_STEP: f64 = 0.1;
const AR_MIN_SCALE: f64 = 0.1;
const AR_MAX_SCALE: f64 = 3.0;

/// Placement of the projected room in front of the AR camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArAnchor {
    pub offset: DVec3,
    pub user_scale: f64,
}

impl Default for ArAnchor {
    fn default() -> Self {
        Self {
            offset: AR_BASE_OFFSET,
            user_scale: 1.0,
        }
    }
}

impl ArAnchor {
    /// Move the anchor by whole nudge steps along X and Z
    pub fn nudge(&mut self, dx: i32, dz: i32) {
        self.offset.x += f64::from(dx) * AR_NUDGE_STEP;
        self.offset.z += f64::from(dz) * AR_NUDGE_STEP;
    }

    pub fn zoom_in(&mut self) {
        self.set_user_scale(self.user_scale + AR_SCALE_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_user_scale(self.user_scale - AR_SCALE_STEP);
    }

    fn set_user_scale(&mut self, scale: f64) {
        let stepped = (scale / AR_SCALE_STEP).round() * AR_SCALE_STEP;
        self.user_scale = stepped.clamp(AR_MIN_SCALE, AR_MAX_SCALE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Effective uniform scale applied to the scene
    pub fn scale(&self) -> f64 {
        AR_BASE_SCALE * self.user_scale
    }

    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            DVec3::splat(self.scale()),
            DQuat::IDENTITY,
            self.offset,
        )
    }

    /// Scene point to AR space
    pub fn to_ar(&self, scene: DVec3) -> DVec3 {
        scene * self.scale() + self.offset
    }

    /// Authoring point to AR space, composed with the shared projector
    pub fn project(&self, projector: &SceneProjector, p: Point) -> DVec3 {
        self.to_ar(projector.to_scene(p))
    }
}
