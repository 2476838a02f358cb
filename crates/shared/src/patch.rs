//! Partial updates for walls, furniture and openings.
//!
//! A `None` field leaves the target untouched.

use serde::{Deserialize, Serialize};

use crate::{FurnitureItem, Opening, Point, Wall};

/// Частичное обновление стены
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallPatch {
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub thickness: Option<f64>,
    pub color: Option<String>,
}

impl WallPatch {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn apply(&self, wall: &mut Wall) {
        if let Some(start) = self.start {
            wall.start = start;
        }
        if let Some(end) = self.end {
            wall.end = end;
        }
        if let Some(thickness) = self.thickness {
            wall.thickness = thickness;
        }
        if let Some(color) = &self.color {
            wall.color = Some(color.clone());
        }
    }
}

/// Частичное обновление мебели
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurniturePatch {
    pub position: Option<Point>,
    pub rotation: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub scale: Option<f64>,
    pub color: Option<String>,
}

impl FurniturePatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn apply(&self, item: &mut FurnitureItem) {
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(width) = self.width {
            item.width = width;
        }
        if let Some(height) = self.height {
            item.height = height;
        }
        if let Some(depth) = self.depth {
            item.depth = depth;
        }
        if let Some(scale) = self.scale {
            item.scale = scale;
        }
        if let Some(color) = &self.color {
            item.color = Some(color.clone());
        }
    }
}

/// Частичное обновление проёма
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningPatch {
    pub wall_index: Option<usize>,
    pub position: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
}

impl OpeningPatch {
    pub fn position(position: f64) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn apply(&self, opening: &mut Opening) {
        if let Some(wall_index) = self.wall_index {
            opening.wall_index = wall_index;
        }
        if let Some(position) = self.position {
            opening.position = position;
        }
        if let Some(width) = self.width {
            opening.width = width;
        }
        if let Some(height) = self.height {
            opening.height = height;
        }
        if let Some(color) = &self.color {
            opening.color = Some(color.clone());
        }
    }
}
