// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::CLICK_DRAG_THRESHOLD_PX;
use glam::Vec2;
use input::*;

#[test]
fn short_drag_keeps_the_click() {
    let mut drag = DragState::default();
    drag.begin(1, Vec2::new(100.0, 100.0));
    drag.move_to(1, Vec2::new(102.0, 101.0));
    drag.end(1);
    assert!(!drag.active);
    assert!(!drag.take_click_suppression());
}

#[test]
fn long_drag_swallows_one_click() {
    let mut drag = DragState::default();
    drag.begin(1, Vec2::new(100.0, 100.0));
    drag.move_to(1, Vec2::new(100.0 + CLICK_DRAG_THRESHOLD_PX * 3.0, 100.0));
    drag.end(1);
    assert!(drag.take_click_suppression());
    // only the click right after the drag
    assert!(!drag.take_click_suppression());
}

#[test]
fn next_press_clears_stale_suppression() {
    let mut drag = DragState::default();
    drag.begin(1, Vec2::ZERO);
    drag.move_to(1, Vec2::new(50.0, 0.0));
    drag.end(1);
    drag.begin(2, Vec2::ZERO);
    drag.end(2);
    assert!(!drag.take_click_suppression());
}

#[test]
fn other_pointers_do_not_move_the_drag() {
    let mut drag = DragState::default();
    drag.begin(1, Vec2::ZERO);
    assert_eq!(drag.move_to(2, Vec2::new(10.0, 0.0)), None);
    assert_eq!(drag.move_to(1, Vec2::new(3.0, 4.0)), Some(Vec2::new(3.0, 4.0)));
    assert_eq!(drag.travel, 5.0);
    drag.end(2);
    assert!(drag.active);
}

#[test]
fn full_height_drag_is_a_full_turn() {
    let a = orbit_angles(Vec2::new(600.0, 0.0), 600.0);
    assert!((a.x + std::f32::consts::TAU).abs() < 1e-5);
    assert_eq!(a.y, 0.0);
    let b = orbit_angles(Vec2::new(0.0, 60.0), 600.0);
    assert!(b.y < 0.0);
}

#[test]
fn zero_height_viewport_does_not_blow_up() {
    let a = orbit_angles(Vec2::new(1.0, 1.0), 0.0);
    assert!(a.x.is_finite() && a.y.is_finite());
}

#[test]
fn seed_attribute_parses_or_is_ignored() {
    assert_eq!(parse_seed("14"), Some(14));
    assert_eq!(parse_seed(" 4294967295 "), Some(u32::MAX));
    assert_eq!(parse_seed(""), None);
    assert_eq!(parse_seed("roses"), None);
    assert_eq!(parse_seed("-3"), None);
}
