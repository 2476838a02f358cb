//! Application settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::{FurniturePatch, OpeningKind, OpeningPatch};

use crate::error::SettingsError;

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Show grid on the canvas
    pub visible: bool,
    /// Snap step in authoring pixels
    pub snap_size: f64,
    /// Spacing between drawn grid lines
    pub display_spacing: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            snap_size: 10.0,
            display_spacing: 20.0,
        }
    }
}

/// Hit-testing tolerances, in authoring pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickingSettings {
    /// Radius around a door/window anchor that counts as a hit
    pub opening_radius: f64,
    /// Maximum distance from a wall when placing an opening
    pub wall_threshold: f64,
    /// Side of the square resize handles
    pub handle_size: f64,
}

impl Default for PickingSettings {
    fn default() -> Self {
        Self {
            opening_radius: 15.0,
            wall_threshold: 20.0,
            handle_size: 10.0,
        }
    }
}

/// Authoring-to-scene projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Authoring point mapped to the scene origin
    pub origin: [f64; 2],
    pub pixels_per_unit: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            origin: [400.0, 300.0],
            pixels_per_unit: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { max_entries: 100 }
    }
}

/// Closed range used to clamp control input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// `f64::clamp` panics on an inverted or NaN range
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Ranges applied before values reach the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Furniture width, height and depth
    pub furniture_size: ClampRange,
    pub furniture_scale: ClampRange,
    pub door_width: ClampRange,
    pub door_height: ClampRange,
    pub window_width: ClampRange,
    pub window_height: ClampRange,
    /// Position slider in the property panel
    pub opening_position: ClampRange,
    /// Position when an opening is placed or dragged with the pointer
    pub placed_opening_position: ClampRange,
    /// Degrees added per rotate action
    pub rotation_step: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            furniture_size: ClampRange::new(20.0, 300.0),
            furniture_scale: ClampRange::new(0.3, 3.0),
            door_width: ClampRange::new(60.0, 120.0),
            door_height: ClampRange::new(160.0, 220.0),
            window_width: ClampRange::new(40.0, 200.0),
            window_height: ClampRange::new(60.0, 140.0),
            opening_position: ClampRange::new(0.05, 0.95),
            placed_opening_position: ClampRange::new(0.1, 0.9),
            rotation_step: 15.0,
        }
    }
}

impl Limits {
    /// Replace unusable ranges with their defaults. Returns the names of replaced fields.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut replaced = Vec::new();
        let ranges = [
            ("furniture_size", &mut self.furniture_size, defaults.furniture_size),
            ("furniture_scale", &mut self.furniture_scale, defaults.furniture_scale),
            ("door_width", &mut self.door_width, defaults.door_width),
            ("door_height", &mut self.door_height, defaults.door_height),
            ("window_width", &mut self.window_width, defaults.window_width),
            ("window_height", &mut self.window_height, defaults.window_height),
            ("opening_position", &mut self.opening_position, defaults.opening_position),
            (
                "placed_opening_position",
                &mut self.placed_opening_position,
                defaults.placed_opening_position,
            ),
        ];
        for (name, range, default) in ranges {
            if !range.is_valid() {
                *range = default;
                replaced.push(name);
            }
        }
        if !self.rotation_step.is_finite() {
            self.rotation_step = defaults.rotation_step;
            replaced.push("rotation_step");
        }
        replaced
    }

    /// Clamp every numeric field of a furniture patch; rotation is normalized to [0, 360)
    pub fn clamp_furniture_patch(&self, patch: &FurniturePatch) -> FurniturePatch {
        FurniturePatch {
            width: patch.width.map(|v| self.furniture_size.clamp(v)),
            height: patch.height.map(|v| self.furniture_size.clamp(v)),
            depth: patch.depth.map(|v| self.furniture_size.clamp(v)),
            scale: patch.scale.map(|v| self.furniture_scale.clamp(v)),
            rotation: patch.rotation.map(crate::helpers::normalize_degrees),
            ..patch.clone()
        }
    }

    /// Clamp an opening patch using the ranges for its kind
    pub fn clamp_opening_patch(&self, kind: OpeningKind, patch: &OpeningPatch) -> OpeningPatch {
        let (width, height) = match kind {
            OpeningKind::Door => (self.door_width, self.door_height),
            OpeningKind::Window => (self.window_width, self.window_height),
        };
        OpeningPatch {
            width: patch.width.map(|v| width.clamp(v)),
            height: patch.height.map(|v| height.clamp(v)),
            position: patch.position.map(|v| self.opening_position.clamp(v)),
            ..patch.clone()
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub grid: GridSettings,
    pub picking: PickingSettings,
    pub projection: ProjectionSettings,
    pub history: HistorySettings,
    pub limits: Limits,
}

impl AppSettings {
    /// Path of `settings.json` in the platform config directory
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        directories::ProjectDirs::from("com", "roomplan", "roomplan")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load settings from the config directory, or return defaults on any failure
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::load_from(&path)) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("failed to load settings, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::config_path()?)
    }

    /// Read settings from `path` and replace values the editor cannot work with
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Reset inverted clamp ranges and non-positive scales to defaults.
    /// Returns true if anything was replaced.
    pub fn sanitize(&mut self) -> bool {
        let mut replaced = self.limits.sanitize();

        let grid = GridSettings::default();
        if !(self.grid.snap_size.is_finite() && self.grid.snap_size > 0.0) {
            self.grid.snap_size = grid.snap_size;
            replaced.push("grid.snap_size");
        }
        let projection = ProjectionSettings::default();
        if !(self.projection.pixels_per_unit.is_finite() && self.projection.pixels_per_unit > 0.0) {
            self.projection.pixels_per_unit = projection.pixels_per_unit;
            replaced.push("projection.pixels_per_unit");
        }
        if !self.projection.origin.iter().all(|v| v.is_finite()) {
            self.projection.origin = projection.origin;
            replaced.push("projection.origin");
        }

        if replaced.is_empty() {
            return false;
        }
        tracing::warn!(fields = ?replaced, "invalid settings replaced with defaults");
        true
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::debug!("settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.grid.snap_size, 10.0);
        assert_eq!(settings.picking.opening_radius, 15.0);
        assert_eq!(settings.projection.origin, [400.0, 300.0]);
        assert_eq!(settings.history.max_entries, 100);
        assert_eq!(settings.limits.rotation_step, 15.0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.grid.snap_size = 25.0;
        settings.history.max_entries = 7;
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"grid": {"snap_size": 5}}"#).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.grid.snap_size, 5.0);
        assert!(loaded.grid.visible);
        assert_eq!(loaded.picking, PickingSettings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            AppSettings::load_from(&path),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppSettings::load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_inverted_range_is_replaced_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"limits": {"furniture_size": {"min": 300, "max": 20}, "door_width": {"min": 50, "max": 90}}}"#,
        )
        .unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.limits.furniture_size, Limits::default().furniture_size);
        assert_eq!(loaded.limits.door_width, ClampRange::new(50.0, 90.0));

        let patch = FurniturePatch {
            width: Some(100.0),
            ..FurniturePatch::default()
        };
        assert_eq!(loaded.limits.clamp_furniture_patch(&patch).width, Some(100.0));
    }

    #[test]
    fn test_zero_pixels_per_unit_is_replaced_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"projection": {"pixels_per_unit": 0}}"#).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.projection.pixels_per_unit, 50.0);

        let projector = crate::viewport::projector::SceneProjector::from_settings(&loaded.projection);
        let p = shared::Point::new(450.0, 350.0);
        let back = projector.to_authoring(projector.to_scene(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_snap_size_is_replaced_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"grid": {"snap_size": -5}}"#).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded.grid.snap_size, 10.0);
    }

    #[test]
    fn test_sanitize_leaves_valid_settings_alone() {
        let mut settings = AppSettings::default();
        settings.grid.snap_size = 25.0;
        let before = settings.clone();
        assert!(!settings.sanitize());
        assert_eq!(settings, before);
    }

    #[test]
    fn test_clamp_furniture_patch() {
        let limits = Limits::default();
        let patch = FurniturePatch {
            width: Some(5.0),
            height: Some(1000.0),
            scale: Some(10.0),
            rotation: Some(-15.0),
            color: Some("#fff".into()),
            ..FurniturePatch::default()
        };
        let clamped = limits.clamp_furniture_patch(&patch);
        assert_eq!(clamped.width, Some(20.0));
        assert_eq!(clamped.height, Some(300.0));
        assert_eq!(clamped.scale, Some(3.0));
        assert_eq!(clamped.rotation, Some(345.0));
        assert_eq!(clamped.depth, None);
        assert_eq!(clamped.color.as_deref(), Some("#fff"));
    }

    #[test]
    fn test_clamp_opening_patch_by_kind() {
        let limits = Limits::default();
        let patch = OpeningPatch {
            width: Some(150.0),
            height: Some(100.0),
            position: Some(0.99),
            ..OpeningPatch::default()
        };
        let door = limits.clamp_opening_patch(OpeningKind::Door, &patch);
        assert_eq!(door.width, Some(120.0));
        assert_eq!(door.height, Some(160.0));
        assert_eq!(door.position, Some(0.95));

        let window = limits.clamp_opening_patch(OpeningKind::Window, &patch);
        assert_eq!(window.width, Some(150.0));
        assert_eq!(window.height, Some(100.0));
    }
}
