//! Furniture catalogue

use serde::{Deserialize, Serialize};

/// Тип мебели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureKind {
    #[default]
    Chair,
    Table,
    Bed,
    Sofa,
    Desk,
    Wardrobe,
}

/// Шаблон мебели: размеры и цвет по умолчанию
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurnitureTemplate {
    pub kind: FurnitureKind,
    pub name: &'static str,
    pub default_width: f64,
    pub default_height: f64,
    pub default_depth: f64,
    pub color: &'static str,
}

pub const FURNITURE_TEMPLATES: [FurnitureTemplate; 6] = [
    FurnitureTemplate {
        kind: FurnitureKind::Chair,
        name: "Chair",
        default_width: 50.0,
        default_height: 50.0,
        default_depth: 50.0,
        color: "#8B4513",
    },
    FurnitureTemplate {
        kind: FurnitureKind::Table,
        name: "Table",
        default_width: 120.0,
        default_height: 80.0,
        default_depth: 80.0,
        color: "#D2B48C",
    },
    FurnitureTemplate {
        kind: FurnitureKind::Bed,
        name: "Bed",
        default_width: 200.0,
        default_height: 120.0,
        default_depth: 80.0,
        color: "#F5F5DC",
    },
    FurnitureTemplate {
        kind: FurnitureKind::Sofa,
        name: "Sofa",
        default_width: 180.0,
        default_height: 80.0,
        default_depth: 80.0,
        color: "#4682B4",
    },
    FurnitureTemplate {
        kind: FurnitureKind::Desk,
        name: "Desk",
        default_width: 140.0,
        default_height: 70.0,
        default_depth: 70.0,
        color: "#8B4513",
    },
    FurnitureTemplate {
        kind: FurnitureKind::Wardrobe,
        name: "Wardrobe",
        default_width: 100.0,
        default_height: 60.0,
        default_depth: 180.0,
        color: "#654321",
    },
];

impl FurnitureKind {
    pub fn all() -> &'static [FurnitureKind] {
        &[
            FurnitureKind::Chair,
            FurnitureKind::Table,
            FurnitureKind::Bed,
            FurnitureKind::Sofa,
            FurnitureKind::Desk,
            FurnitureKind::Wardrobe,
        ]
    }

    pub fn template(&self) -> &'static FurnitureTemplate {
        match self {
            FurnitureKind::Chair => &FURNITURE_TEMPLATES[0],
            FurnitureKind::Table => &FURNITURE_TEMPLATES[1],
            FurnitureKind::Bed => &FURNITURE_TEMPLATES[2],
            FurnitureKind::Sofa => &FURNITURE_TEMPLATES[3],
            FurnitureKind::Desk => &FURNITURE_TEMPLATES[4],
            FurnitureKind::Wardrobe => &FURNITURE_TEMPLATES[5],
        }
    }

    pub fn label(&self) -> &'static str {
        self.template().name
    }

    /// Префикс генерируемых идентификаторов
    pub fn id_prefix(&self) -> &'static str {
        match self {
            FurnitureKind::Chair => "chair",
            FurnitureKind::Table => "table",
            FurnitureKind::Bed => "bed",
            FurnitureKind::Sofa => "sofa",
            FurnitureKind::Desk => "desk",
            FurnitureKind::Wardrobe => "wardrobe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_maps_to_its_template() {
        for kind in FurnitureKind::all() {
            assert_eq!(kind.template().kind, *kind);
        }
    }

    #[test]
    fn test_wardrobe_is_tall() {
        let t = FurnitureKind::Wardrobe.template();
        assert_eq!(t.default_depth, 180.0);
        assert_eq!(t.color, "#654321");
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&FurnitureKind::Wardrobe).unwrap();
        assert_eq!(json, r#""wardrobe""#);
        let kind: FurnitureKind = serde_json::from_str(r#""desk""#).unwrap();
        assert_eq!(kind, FurnitureKind::Desk);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FurnitureKind::Chair.label(), "Chair");
        assert_eq!(FurnitureKind::Sofa.label(), "Sofa");
        assert_eq!(FurnitureKind::Bed.id_prefix(), "bed");
    }
}
