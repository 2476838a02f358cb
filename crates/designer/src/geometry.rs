//! Geometry primitives over authoring-space points, using the kurbo library.
//!
//! Everything here is pure. Hit-testing treats furniture as unrotated boxes: the
//! footprint rectangle ignores `rotation` everywhere in the editor.

use kurbo::{Line, ParamCurve, ParamCurveNearest, Point as KPoint, Rect};
use shared::{FurnitureItem, Point};

/// Accuracy passed to kurbo's nearest-point query (exact for lines)
const NEAREST_ACCURACY: f64 = 1e-9;

// ============================================================================
// Kurbo helpers
// ============================================================================

/// Convert a model point to a kurbo point
pub fn to_kpoint(p: Point) -> KPoint {
    KPoint::new(p.x, p.y)
}

/// Convert a kurbo point back to a model point
pub fn from_kpoint(p: KPoint) -> Point {
    Point::new(p.x, p.y)
}

fn is_degenerate_segment(start: Point, end: Point) -> bool {
    to_kpoint(start).distance(to_kpoint(end)) <= f64::EPSILON
}

// ============================================================================
// Distances and projections
// ============================================================================

/// Euclidean distance
pub fn distance(a: Point, b: Point) -> f64 {
    to_kpoint(a).distance(to_kpoint(b))
}

/// Parameter in [0, 1] of the closest point on the finite segment.
/// A zero-length segment always yields 0.
pub fn project_onto_segment(point: Point, start: Point, end: Point) -> f64 {
    if is_degenerate_segment(start, end) {
        return 0.0;
    }
    let line = Line::new(to_kpoint(start), to_kpoint(end));
    line.nearest(to_kpoint(point), NEAREST_ACCURACY).t.clamp(0.0, 1.0)
}

/// Distance from a point to the closest point of a finite segment
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f64 {
    if is_degenerate_segment(start, end) {
        return distance(point, start);
    }
    let line = Line::new(to_kpoint(start), to_kpoint(end));
    line.nearest(to_kpoint(point), NEAREST_ACCURACY)
        .distance_sq
        .sqrt()
}

/// Linear interpolation along a segment, `t` in [0, 1]
pub fn point_on_segment(start: Point, end: Point, t: f64) -> Point {
    from_kpoint(Line::new(to_kpoint(start), to_kpoint(end)).eval(t))
}

/// Direction angle of a segment in radians
pub fn segment_angle(start: Point, end: Point) -> f64 {
    (end.y - start.y).atan2(end.x - start.x)
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle centered at `center`
pub fn centered_rect(center: Point, width: f64, height: f64) -> Rect {
    Rect::from_center_size(to_kpoint(center), (width.abs(), height.abs()))
}

/// True iff the point lies inside the unrotated rectangle, edges included
pub fn is_point_in_axis_aligned_rect(point: Point, center: Point, width: f64, height: f64) -> bool {
    let rect = centered_rect(center, width, height);
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Separating-axis test for two axis-aligned rectangles. Touching edges overlap.
pub fn rectangles_overlap(a: Rect, b: Rect) -> bool {
    !(a.x1 < b.x0 || a.x0 > b.x1 || a.y1 < b.y0 || a.y0 > b.y1)
}

/// Scaled, unrotated footprint of a furniture item
pub fn furniture_rect(item: &FurnitureItem) -> Rect {
    centered_rect(item.position, item.width * item.scale, item.height * item.scale)
}

// ============================================================================
// Snap
// ============================================================================

/// Round each coordinate to the nearest multiple of `grid_size`.
/// A non-positive grid size leaves the point unchanged.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return point;
    }
    Point::new(
        (point.x / grid_size).round() * grid_size,
        (point.y / grid_size).round() * grid_size,
    )
}
