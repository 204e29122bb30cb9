//! Full gesture workflows: create, drag, delete, clear.

use crate::helpers::*;
use rectpad::{SurfaceEvent, point};

#[test]
fn test_create_drag_delete_scenario() {
    let (mut pad, mut surface) = pad_and_surface();

    // Create: pointer down at (10,10), move to (60,40), release.
    create_rect(&mut pad, &mut surface, point(10.0, 10.0), point(60.0, 40.0));
    assert_shape_count(&pad, 1);
    assert_shape_bounds(&pad, 0, (10.0, 10.0, 50.0, 30.0));

    // Drag it from (30,25) to (80,65): origin moves by the same delta.
    drag(&mut pad, &mut surface, point(30.0, 25.0), point(80.0, 65.0));
    assert_shape_count(&pad, 1);
    assert_shape_bounds(&pad, 0, (60.0, 50.0, 50.0, 30.0));

    // Double-click inside it: scene is empty again.
    pad.on_double_click(&surface, at(70.0, 60.0));
    assert_shape_count(&pad, 0);
}

#[test]
fn test_created_shape_takes_the_pending_fill() {
    let (mut pad, mut surface) = pad_and_surface();

    let expected_fill = pad.input().pending_fill().to_string();
    create_rect(&mut pad, &mut surface, point(0.0, 0.0), point(20.0, 20.0));
    assert_eq!(pad.scene().shape(0).unwrap().fill, expected_fill);

    // The next gesture uses the freshly rolled pending color.
    let next_fill = pad.input().pending_fill().to_string();
    create_rect(&mut pad, &mut surface, point(100.0, 0.0), point(120.0, 20.0));
    assert_eq!(pad.scene().shape(1).unwrap().fill, next_fill);
}

#[test]
fn test_click_on_empty_surface_without_move_creates_nothing() {
    let (mut pad, mut surface) = pad_and_surface();

    pad.on_pointer_down(&surface, at(10.0, 10.0));
    pad.on_pointer_up(at(10.0, 10.0));

    assert_shape_count(&pad, 0);
    assert!(pad.input().state().is_idle());
    // The abandoned gesture must not paint anything either.
    pad.tick(&mut surface);
    assert!(surface.take_ops().is_empty());
}

#[test]
fn test_zero_displacement_creation_gets_minimum_extents() {
    let (mut pad, mut surface) = pad_and_surface();

    // A move event arrives but the pointer returns to the anchor.
    pad.on_pointer_down(&surface, at(10.0, 10.0));
    pad.on_pointer_move(&mut surface, at(10.0, 10.0));
    pad.on_pointer_up(at(10.0, 10.0));

    assert_shape_count(&pad, 1);
    assert_shape_bounds(&pad, 0, (10.0, 10.0, 1.0, 1.0));
}

#[test]
fn test_reverse_drag_creates_normalized_shape() {
    let (mut pad, mut surface) = pad_and_surface();
    create_rect(&mut pad, &mut surface, point(60.0, 40.0), point(10.0, 10.0));
    assert_shape_bounds(&pad, 0, (10.0, 10.0, 50.0, 30.0));
}

#[test]
fn test_click_on_shape_without_move_changes_nothing() {
    let (mut pad, surface) = TestPadBuilder::new()
        .with_rect(point(10.0, 10.0), point(60.0, 40.0))
        .build();

    pad.on_pointer_down(&surface, at(30.0, 25.0));
    pad.on_pointer_up(at(30.0, 25.0));

    assert_shape_count(&pad, 1);
    assert_shape_bounds(&pad, 0, (10.0, 10.0, 50.0, 30.0));
}

#[test]
fn test_drag_grabs_topmost_of_overlapping_shapes() {
    let (mut pad, mut surface) = TestPadBuilder::new()
        .with_rect(point(0.0, 0.0), point(50.0, 50.0))
        .with_rect(point(25.0, 25.0), point(75.0, 75.0))
        .build();

    // (30,30) lies inside both; the later shape wins.
    drag(&mut pad, &mut surface, point(30.0, 30.0), point(130.0, 30.0));

    assert_shape_bounds(&pad, 0, (0.0, 0.0, 50.0, 50.0));
    assert_shape_bounds(&pad, 1, (125.0, 25.0, 50.0, 50.0));
}

#[test]
fn test_double_click_removal_swaps_last_into_slot() {
    let (mut pad, surface) = TestPadBuilder::new()
        .with_rect(point(0.0, 0.0), point(20.0, 20.0))
        .with_rect(point(100.0, 0.0), point(120.0, 20.0))
        .with_rect(point(200.0, 0.0), point(220.0, 20.0))
        .build();

    pad.on_double_click(&surface, at(10.0, 10.0));

    assert_shape_count(&pad, 2);
    // The previously-last shape now occupies the removed slot.
    assert_shape_bounds(&pad, 0, (200.0, 0.0, 20.0, 20.0));
    assert_shape_bounds(&pad, 1, (100.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_double_click_on_empty_surface_is_noop() {
    let (mut pad, surface) = TestPadBuilder::new()
        .with_rect(point(0.0, 0.0), point(20.0, 20.0))
        .build();

    pad.on_double_click(&surface, at(500.0, 300.0));
    assert_shape_count(&pad, 1);
}

#[test]
fn test_page_offset_is_recomputed_per_event() {
    let (mut pad, mut surface) = pad_and_surface();
    surface.set_offset(point(25.0, 50.0));

    // Anchor at page (35,60) -> surface-local (10,10).
    pad.on_pointer_down(&surface, at(35.0, 60.0));

    // Layout shifts mid-gesture; the next event translates with the new
    // offset, not a cached one.
    surface.set_offset(point(0.0, 0.0));
    pad.on_pointer_move(&mut surface, at(60.0, 40.0));
    pad.on_pointer_up(at(60.0, 40.0));

    assert_shape_bounds(&pad, 0, (10.0, 10.0, 50.0, 30.0));
}

#[test]
fn test_pointer_down_during_stale_gesture_starts_fresh() {
    let (mut pad, mut surface) = pad_and_surface();

    // Pointer up lost outside the surface mid-creation.
    pad.on_pointer_down(&surface, at(10.0, 10.0));
    pad.on_pointer_move(&mut surface, at(30.0, 30.0));

    // Next press starts over; only the second gesture produces a shape.
    create_rect(&mut pad, &mut surface, point(100.0, 100.0), point(150.0, 150.0));
    assert_shape_count(&pad, 1);
    assert_shape_bounds(&pad, 0, (100.0, 100.0, 50.0, 50.0));
}

#[test]
fn test_event_dispatcher_routes_and_flags_suppression() {
    let (mut pad, mut surface) = pad_and_surface();

    assert!(pad.handle_event(&mut surface, SurfaceEvent::SelectStart));

    assert!(!pad.handle_event(&mut surface, SurfaceEvent::PointerDown(at(10.0, 10.0))));
    assert!(!pad.handle_event(&mut surface, SurfaceEvent::PointerMove(at(60.0, 40.0))));
    assert!(!pad.handle_event(&mut surface, SurfaceEvent::PointerUp(at(60.0, 40.0))));
    assert_shape_count(&pad, 1);

    assert!(!pad.handle_event(&mut surface, SurfaceEvent::DoubleClick(at(30.0, 25.0))));
    assert_shape_count(&pad, 0);
}

#[test]
fn test_clear_all_empties_scene() {
    let (mut pad, mut surface) = TestPadBuilder::new()
        .with_rect(point(0.0, 0.0), point(20.0, 20.0))
        .with_rect(point(100.0, 0.0), point(120.0, 20.0))
        .build();

    pad.handle_event(&mut surface, SurfaceEvent::ClearAll);
    assert_shape_count(&pad, 0);
}
