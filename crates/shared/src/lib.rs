use serde::{Deserialize, Serialize};

mod furniture;
mod ops;
mod patch;

pub use furniture::{FurnitureKind, FurnitureTemplate, FURNITURE_TEMPLATES};
pub use ops::PerimeterPolicy;
pub use patch::{FurniturePatch, OpeningPatch, WallPatch};

/// Уникальный идентификатор объекта в комнате
pub type ObjectId = String;

/// Толщина стены по умолчанию (в пикселях плана)
pub const DEFAULT_WALL_THICKNESS: f64 = 10.0;

/// Отступ периметра по умолчанию от края комнаты
pub const DEFAULT_PERIMETER_INSET: f64 = 50.0;

/// Размеры комнаты по умолчанию
pub const DEFAULT_ROOM_WIDTH: f64 = 600.0;
pub const DEFAULT_ROOM_HEIGHT: f64 = 500.0;

/// 2D-точка в пространстве плана (пиксели, начало координат слева сверху)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Стена: отрезок с толщиной (толщина используется только при отрисовке)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Wall {
    pub fn new(start: Point, end: Point, thickness: f64) -> Self {
        Self {
            start,
            end,
            thickness,
            color: None,
        }
    }

    /// Длина стены
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Стена нулевой длины (не имеет направления)
    pub fn is_degenerate(&self) -> bool {
        self.length() <= f64::EPSILON
    }

    /// Угол направления стены в радианах (от начала к концу)
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }
}

/// Тип проёма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Door => "Door",
            Self::Window => "Window",
        }
    }

    /// Префикс генерируемых идентификаторов
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Door => "door",
            Self::Window => "window",
        }
    }

    /// Размер по умолчанию (ширина, высота)
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            Self::Door => (80.0, 200.0),
            Self::Window => (100.0, 80.0),
        }
    }

    /// Цвет по умолчанию
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Door => "#8B4513",
            Self::Window => "#4169E1",
        }
    }
}

/// Проём (дверь или окно), привязанный к стене параметрически
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: ObjectId,
    pub kind: OpeningKind,
    /// Индекс стены в `Room::walls`
    pub wall_index: usize,
    /// Положение вдоль стены от её начала, 0..1
    pub position: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Opening {
    /// Проём с размерами по умолчанию для своего типа
    pub fn new(id: ObjectId, kind: OpeningKind, wall_index: usize, position: f64) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id,
            kind,
            wall_index,
            position,
            width,
            height,
            color: None,
        }
    }

    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(self.kind.default_color())
    }
}

/// Предмет мебели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    /// Центр предмета на плане
    pub position: Point,
    /// Поворот в градусах
    pub rotation: f64,
    pub width: f64,
    pub height: f64,
    /// Высота предмета в 3D
    pub depth: f64,
    /// Равномерный множитель поверх width/height/depth
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn default_scale() -> f64 {
    1.0
}

impl FurnitureItem {
    /// Create an item from its template's default dimensions
    pub fn from_template(id: ObjectId, kind: FurnitureKind, position: Point) -> Self {
        let template = kind.template();
        Self {
            id,
            kind,
            position,
            rotation: 0.0,
            width: template.default_width,
            height: template.default_height,
            depth: template.default_depth,
            scale: 1.0,
            color: None,
        }
    }

    /// Half width/height of the footprint after applying `scale`
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width * self.scale / 2.0, self.height * self.scale / 2.0)
    }

    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(self.kind.template().color)
    }
}

/// Габариты комнаты по концам стен
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl RoomBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Комната: единственный источник истины для 2D, 3D и AR.
///
/// Значения `Room` неизменяемы: каждая мутация возвращает новый снимок.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: ObjectId,
    pub name: String,
    pub walls: Vec<Wall>,
    pub furniture: Vec<FurnitureItem>,
    /// Двери и окна в одной коллекции, различаются по `kind`
    pub openings: Vec<Opening>,
    pub width: f64,
    pub height: f64,
}

impl Default for Room {
    fn default() -> Self {
        Self::new("default", "My Room", DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT)
    }
}

impl Room {
    /// Room with the rectangular default perimeter and nothing else
    pub fn new(id: impl Into<ObjectId>, name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            walls: perimeter_walls(width, height),
            furniture: Vec::new(),
            openings: Vec::new(),
            width,
            height,
        }
    }

    /// Room with default dimensions and no walls
    pub fn empty() -> Self {
        Self {
            walls: Vec::new(),
            ..Self::default()
        }
    }

    pub fn wall(&self, index: usize) -> Option<&Wall> {
        self.walls.get(index)
    }

    pub fn furniture_item(&self, id: &str) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn opening(&self, id: &str) -> Option<&Opening> {
        self.openings.iter().find(|o| o.id == id)
    }

    pub fn doors(&self) -> impl Iterator<Item = &Opening> {
        self.openings.iter().filter(|o| o.kind == OpeningKind::Door)
    }

    pub fn windows(&self) -> impl Iterator<Item = &Opening> {
        self.openings.iter().filter(|o| o.kind == OpeningKind::Window)
    }

    /// Проёмы, стена которых существует и имеет ненулевую длину
    pub fn resolved_openings(&self) -> impl Iterator<Item = (&Opening, &Wall)> {
        self.openings.iter().filter_map(move |o| {
            self.walls
                .get(o.wall_index)
                .filter(|w| !w.is_degenerate())
                .map(|w| (o, w))
        })
    }

    /// Проёмы, ссылающиеся на отсутствующую стену
    pub fn dangling_openings(&self) -> impl Iterator<Item = &Opening> {
        self.openings
            .iter()
            .filter(move |o| o.wall_index >= self.walls.len())
    }

    pub fn openings_on_wall(&self, wall_index: usize) -> impl Iterator<Item = &Opening> {
        self.openings
            .iter()
            .filter(move |o| o.wall_index == wall_index)
    }

    /// Bounds of all wall endpoints; the default canvas extent when there are no walls
    pub fn bounds(&self) -> RoomBounds {
        if self.walls.is_empty() {
            return RoomBounds {
                min_x: 0.0,
                max_x: DEFAULT_ROOM_WIDTH,
                min_y: 0.0,
                max_y: DEFAULT_ROOM_HEIGHT,
            };
        }

        let mut bounds = RoomBounds {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for wall in &self.walls {
            for p in [wall.start, wall.end] {
                bounds.min_x = bounds.min_x.min(p.x);
                bounds.max_x = bounds.max_x.max(p.x);
                bounds.min_y = bounds.min_y.min(p.y);
                bounds.max_y = bounds.max_y.max(p.y);
            }
        }
        bounds
    }

    /// Центр комнаты (точка размещения мебели по умолчанию)
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Четыре стены периметра с отступом `DEFAULT_PERIMETER_INSET`
pub fn perimeter_walls(width: f64, height: f64) -> Vec<Wall> {
    let x0 = DEFAULT_PERIMETER_INSET;
    let y0 = DEFAULT_PERIMETER_INSET;
    let x1 = width - DEFAULT_PERIMETER_INSET;
    let y1 = height - DEFAULT_PERIMETER_INSET;
    let corners = [
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ];
    (0..4)
        .map(|i| Wall::new(corners[i], corners[(i + 1) % 4], DEFAULT_WALL_THICKNESS))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(val: &T) {
        let json = serde_json::to_string(val).expect("serialize");
        let back: T = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*val, back);
    }

    #[test]
    fn test_default_room_perimeter() {
        let room = Room::default();
        assert_eq!(room.id, "default");
        assert_eq!(room.name, "My Room");
        assert_eq!(room.walls.len(), 4);
        assert_eq!(room.walls[0].start, Point::new(50.0, 50.0));
        assert_eq!(room.walls[0].end, Point::new(550.0, 50.0));
        assert_eq!(room.walls[2].start, Point::new(550.0, 450.0));
        assert_eq!(room.walls[3].end, Point::new(50.0, 50.0));
        assert!(room.furniture.is_empty());
        assert!(room.openings.is_empty());
    }

    #[test]
    fn test_perimeter_is_closed() {
        let walls = perimeter_walls(800.0, 600.0);
        for i in 0..walls.len() {
            assert_eq!(walls[i].end, walls[(i + 1) % walls.len()].start);
        }
    }

    #[test]
    fn test_empty_room_has_no_walls() {
        let room = Room::empty();
        assert!(room.walls.is_empty());
        assert_eq!(room.width, DEFAULT_ROOM_WIDTH);
    }

    #[test]
    fn test_wall_length_and_angle() {
        let wall = Wall::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), 10.0);
        assert!((wall.length() - 5.0).abs() < 1e-12);
        assert!(!wall.is_degenerate());

        let vertical = Wall::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0), 10.0);
        assert!((vertical.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_wall() {
        let wall = Wall::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 10.0);
        assert!(wall.is_degenerate());
    }

    #[test]
    fn test_bounds_without_walls() {
        let bounds = Room::empty().bounds();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 600.0);
        assert_eq!(bounds.max_y, 500.0);
    }

    #[test]
    fn test_bounds_of_default_room() {
        let bounds = Room::default().bounds();
        assert_eq!(bounds.min_x, 50.0);
        assert_eq!(bounds.max_x, 550.0);
        assert_eq!(bounds.min_y, 50.0);
        assert_eq!(bounds.max_y, 450.0);
        assert_eq!(bounds.center(), Point::new(300.0, 250.0));
    }

    #[test]
    fn test_resolved_openings_skip_dangling() {
        let mut room = Room::default();
        room.openings.push(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5));
        room.openings.push(Opening::new("window_1".into(), OpeningKind::Window, 9, 0.5));

        let resolved: Vec<_> = room.resolved_openings().map(|(o, _)| o.id.clone()).collect();
        assert_eq!(resolved, vec!["door_1".to_string()]);

        let dangling: Vec<_> = room.dangling_openings().map(|o| o.id.clone()).collect();
        assert_eq!(dangling, vec!["window_1".to_string()]);
    }

    #[test]
    fn test_doors_and_windows_filter_by_kind() {
        let mut room = Room::default();
        room.openings.push(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5));
        room.openings.push(Opening::new("window_1".into(), OpeningKind::Window, 1, 0.5));
        room.openings.push(Opening::new("window_2".into(), OpeningKind::Window, 2, 0.3));

        assert_eq!(room.doors().count(), 1);
        assert_eq!(room.windows().count(), 2);
        assert_eq!(room.openings_on_wall(1).count(), 1);
    }

    #[test]
    fn test_furniture_from_template() {
        let item = FurnitureItem::from_template("bed_1".into(), FurnitureKind::Bed, Point::new(10.0, 20.0));
        assert_eq!(item.width, 200.0);
        assert_eq!(item.height, 120.0);
        assert_eq!(item.depth, 80.0);
        assert_eq!(item.scale, 1.0);
        assert_eq!(item.rotation, 0.0);
        assert_eq!(item.display_color(), "#F5F5DC");
    }

    #[test]
    fn test_half_extents_apply_scale() {
        let mut item = FurnitureItem::from_template("c".into(), FurnitureKind::Chair, Point::default());
        item.scale = 2.0;
        assert_eq!(item.half_extents(), (50.0, 50.0));
    }

    #[test]
    fn test_opening_defaults() {
        let door = Opening::new("d".into(), OpeningKind::Door, 0, 0.5);
        assert_eq!((door.width, door.height), (80.0, 200.0));
        assert_eq!(door.display_color(), "#8B4513");
        let window = Opening::new("w".into(), OpeningKind::Window, 0, 0.5);
        assert_eq!(window.display_color(), "#4169E1");
    }

    #[test]
    fn test_room_serde() {
        let mut room = Room::default();
        room.furniture.push(FurnitureItem::from_template(
            "sofa_1".into(),
            FurnitureKind::Sofa,
            Point::new(300.0, 250.0),
        ));
        room.openings.push(Opening::new("door_1".into(), OpeningKind::Door, 0, 0.5));
        roundtrip(&room);

        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains(r#""type":"sofa""#));
        assert!(json.contains(r#""kind":"door""#));
    }

    #[test]
    fn test_furniture_scale_defaults_when_missing() {
        let json = r#"{"id":"c1","type":"chair","position":{"x":1,"y":2},"rotation":0,"width":50,"height":50,"depth":50}"#;
        let item: FurnitureItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.scale, 1.0);
        assert!(item.color.is_none());
    }
}
