//! Small helpers shared across state modules.

use std::time::{SystemTime, UNIX_EPOCH};

use shared::ObjectId;

/// Generate an id of the form `{prefix}_{millis}_{suffix}`.
///
/// The suffix comes from a v4 UUID, so ids stay unique across kinds and sessions.
pub fn generate_id(prefix: &str) -> ObjectId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}_{millis}_{}", &uuid[..9])
}

/// Normalize an angle in degrees to [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}
