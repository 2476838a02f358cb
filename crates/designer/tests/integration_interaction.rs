//! End-to-end pointer scenarios and 2D/3D consistency checks.

use roomplan_lib::fixtures::{self, point};
use roomplan_lib::harness::TestHarness;
use roomplan_lib::state::{EditMode, PointerOutcome};
use roomplan_lib::viewport::picking::{overlapping_furniture, HitTarget, ResizeHandle};
use roomplan_lib::viewport::projector::{opening_anchor, SceneProjector};
use shared::{FurnitureKind, OpeningKind};

#[test]
fn test_draw_closed_room_with_pointer() {
    let mut h = TestHarness::empty();
    h.set_mode(EditMode::Wall);

    let corners = [
        point(100.0, 100.0),
        point(400.0, 100.0),
        point(400.0, 300.0),
        point(100.0, 300.0),
    ];
    // каждая стена: два клика
    for i in 0..4 {
        h.click(corners[i]);
        let outcome = h.click(corners[(i + 1) % 4]);
        assert_eq!(outcome, PointerOutcome::WallCommitted { wall_index: i });
    }
    assert_eq!(h.wall_count(), 4);
    assert_eq!(h.room().walls[3].end, corners[0]);
}

#[test]
fn test_door_and_window_on_walls_then_select_them() {
    let mut h = TestHarness::with_room(fixtures::square_room(100.0, 100.0, 200.0));

    h.set_mode(EditMode::Door);
    let PointerOutcome::OpeningPlaced { id: door } = h.click(point(150.0, 95.0)) else {
        panic!("door not placed");
    };
    h.set_mode(EditMode::Window);
    let PointerOutcome::OpeningPlaced { id: window } = h.click(point(305.0, 250.0)) else {
        panic!("window not placed");
    };

    let room = h.room();
    assert_eq!(room.doors().count(), 1);
    assert_eq!(room.windows().count(), 1);
    assert_eq!(room.opening(&door).unwrap().wall_index, 0);
    assert_eq!(room.opening(&window).unwrap().wall_index, 1);
    assert!((room.opening(&window).unwrap().position - 0.75).abs() < 1e-9);

    h.set_mode(EditMode::Select);
    let outcome = h.click(point(152.0, 102.0));
    assert_eq!(
        outcome,
        PointerOutcome::Selected {
            target: HitTarget::Opening { id: door.clone() }
        }
    );
    assert_eq!(h.editor.selection().opening(), Some(&door));
}

#[test]
fn test_opening_beats_furniture_under_it() {
    let mut h = TestHarness::new();
    let door = h.add_door(0, 0.5);
    h.place(FurnitureKind::Bed, Some(point(300.0, 60.0)));
    h.editor.selection.clear();

    let outcome = h.click(point(300.0, 52.0));
    assert_eq!(
        outcome,
        PointerOutcome::Selected {
            target: HitTarget::Opening { id: door }
        }
    );
}

#[test]
fn test_resize_from_top_left_handle() {
    let mut h = TestHarness::new();
    // стол 120x80 с центром (300,250): левый верхний угол (240,210)
    let id = h.place(FurnitureKind::Table, None);

    let outcome = h.drag(
        point(236.0, 206.0),
        &[point(226.0, 206.0), point(216.0, 196.0)],
    );
    assert_eq!(
        outcome,
        PointerOutcome::Selected {
            target: HitTarget::ResizeHandle {
                furniture_id: id.clone(),
                handle: ResizeHandle::TopLeft,
            }
        }
    );

    let item = h.room().furniture_item(&id).unwrap();
    assert!((item.width - 140.0).abs() < 1e-9);
    assert!((item.height - 90.0).abs() < 1e-9);
    // правый нижний угол неподвижен
    assert!((item.position.x + item.width / 2.0 - 360.0).abs() < 1e-9);
    assert!((item.position.y + item.height / 2.0 - 290.0).abs() < 1e-9);
}

#[test]
fn test_resize_of_scaled_item_divides_delta_by_scale() {
    let mut h = TestHarness::new();
    let id = h.place(FurnitureKind::Chair, None);
    h.editor.update_selected_furniture(&shared::FurniturePatch {
        scale: Some(2.0),
        ..Default::default()
    });
    // стул 50x50 x2 с центром (300,250): правый нижний угол (350,300)
    h.drag(point(352.0, 302.0), &[point(372.0, 302.0)]);

    let item = h.room().furniture_item(&id).unwrap();
    assert!((item.width - 60.0).abs() < 1e-9);
    assert_eq!(item.height, 50.0);
    assert!((item.position.x - 310.0).abs() < 1e-9);
}

#[test]
fn test_opening_drag_stays_off_wall_ends() {
    let mut h = TestHarness::new();
    let id = h.add_window(0, 0.5);
    h.drag(point(300.0, 50.0), &[point(0.0, 50.0)]);
    let position = h.room().opening(&id).unwrap().position;
    assert!((position - 0.1).abs() < 1e-9);
}

#[test]
fn test_click_in_empty_space_clears_selection() {
    let mut h = TestHarness::new();
    h.place(FurnitureKind::Chair, None);
    assert!(h.editor.selection().furniture().is_some());
    assert_eq!(h.click(point(80.0, 400.0)), PointerOutcome::SelectionCleared);
    assert!(h.editor.selection().is_empty());
}

#[test]
fn test_delete_selected_via_editor() {
    let mut h = TestHarness::new();
    h.set_mode(EditMode::Furniture);
    h.editor.interaction.template = FurnitureKind::Wardrobe;
    h.click(point(150.0, 150.0));
    assert_eq!(h.furniture_count(), 1);

    assert!(h.editor.delete_selected());
    assert_eq!(h.furniture_count(), 0);
    assert!(h.undo());
    assert_eq!(h.furniture_count(), 1);
}

#[test]
fn test_projection_consistency_for_every_opening() {
    let mut h = TestHarness::new();
    h.add_wall(point(120.0, 80.0), point(430.0, 390.0));
    for (i, t) in [0.1, 0.33, 0.5, 0.77, 0.9].into_iter().enumerate() {
        h.add_door(i % 5, t);
        h.add_window(4, t);
    }

    let projector: SceneProjector = h.editor.projector();
    let room = h.room();
    for opening in &room.openings {
        let anchor = opening_anchor(room, opening).unwrap();
        let placement = projector.opening_placement(room, opening).unwrap();
        let back = projector.to_authoring(placement.translation);
        assert!((back.x - anchor.point.x).abs() < 1e-9, "{}", opening.id);
        assert!((back.y - anchor.point.y).abs() < 1e-9, "{}", opening.id);
    }
}

#[test]
fn test_dangling_openings_are_skipped_by_every_consumer() {
    let mut h = TestHarness::new();
    let window = h.add_window(3, 0.5);
    h.editor.room.remove_wall(3);

    let projector = h.editor.projector();
    let room = h.room();
    let opening = room.opening(&window).unwrap();
    assert_eq!(opening.kind, OpeningKind::Window);
    assert!(opening_anchor(room, opening).is_none());
    assert!(projector.opening_placement(room, opening).is_none());

    // клик туда, где было окно, ничего не выбирает
    h.set_mode(EditMode::Select);
    assert_eq!(h.click(point(50.0, 250.0)), PointerOutcome::SelectionCleared);
}

#[test]
fn test_collision_query() {
    let mut h = TestHarness::new();
    let a = h.place(FurnitureKind::Table, Some(point(200.0, 200.0)));
    let b = h.place(FurnitureKind::Chair, Some(point(270.0, 200.0)));
    h.place(FurnitureKind::Chair, Some(point(450.0, 400.0)));
    assert_eq!(overlapping_furniture(h.room(), &a), vec![b]);
}
