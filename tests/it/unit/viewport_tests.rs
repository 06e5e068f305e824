//! Unit tests for the viewport zoom/scroll facade.

use crate::helpers::{assert_close, pos};
use gpui::{px, size};
use trackboard::constants::{MAX_ZOOM, MIN_ZOOM};
use trackboard::viewport::Viewport;

fn viewport_400x300() -> gpui::Size<gpui::Pixels> {
    size(px(400.0), px(300.0))
}

#[test]
fn test_defaults() {
    let viewport = Viewport::new();
    assert_eq!(viewport.zoom, 1.0);
    assert_eq!(viewport.scroll, pos(0.0, 0.0));
    assert!(!viewport.has_pending_scroll());
}

#[test]
fn test_zoom_stays_within_bounds_for_any_tick_sequence() {
    let viewport_size = viewport_400x300();

    let mut viewport = Viewport::new();
    for _ in 0..100 {
        viewport.apply_wheel_zoom(-1.0, viewport_size);
        viewport.commit_pending_scroll();
        assert!(viewport.zoom <= MAX_ZOOM);
    }
    assert_close(viewport.zoom, MAX_ZOOM);

    let mut viewport = Viewport::new();
    for _ in 0..100 {
        viewport.apply_wheel_zoom(1.0, viewport_size);
        viewport.commit_pending_scroll();
        assert!(viewport.zoom >= MIN_ZOOM);
    }
    assert_close(viewport.zoom, MIN_ZOOM);

    // Mixed in/out sequence
    let mut viewport = Viewport::new();
    for i in 0..500 {
        let raw = if i % 3 == 0 { 1.0 } else { -1.0 };
        viewport.apply_wheel_zoom(raw, viewport_size);
        viewport.commit_pending_scroll();
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&viewport.zoom));
    }
}

#[test]
fn test_center_anchored_zoom_in_tick() {
    let mut viewport = Viewport::new();
    viewport.scroll = pos(100.0, 50.0);

    // Wheel up (negative raw delta) is a zoom-in tick
    let changed = viewport.apply_wheel_zoom(-1.0, viewport_400x300());
    assert!(changed);
    assert_close(viewport.zoom, 1.1);

    // Zoom commits synchronously, the scroll offset lands one frame later
    assert_eq!(viewport.scroll, pos(100.0, 50.0));
    assert!(viewport.has_pending_scroll());

    // zoom_point = (100+200, 50+150) = (300, 200)
    // new_scroll = (300*1.1-200, 200*1.1-150) = (130, 70)
    assert!(viewport.commit_pending_scroll());
    assert_close(f32::from(viewport.scroll.x), 130.0);
    assert_close(f32::from(viewport.scroll.y), 70.0);
    assert!(!viewport.has_pending_scroll());
}

#[test]
fn test_zoom_out_tick_uses_fixed_step() {
    let mut viewport = Viewport::new();
    viewport.apply_wheel_zoom(1.0, viewport_400x300());
    assert_close(viewport.zoom, 0.9);
}

#[test]
fn test_zoom_noop_at_bounds_leaves_no_pending_scroll() {
    let mut viewport = Viewport::new();
    viewport.zoom = MAX_ZOOM;

    let changed = viewport.apply_wheel_zoom(-1.0, viewport_400x300());
    assert!(!changed);
    assert_close(viewport.zoom, MAX_ZOOM);
    assert!(!viewport.has_pending_scroll());
}

#[test]
fn test_committed_scroll_is_clamped_non_negative() {
    let mut viewport = Viewport::new();
    // Zooming out near the origin computes a negative offset; the surface
    // absorbs it
    viewport.apply_wheel_zoom(1.0, viewport_400x300());
    assert!(viewport.commit_pending_scroll());
    assert_eq!(viewport.scroll, pos(0.0, 0.0));
}

#[test]
fn test_button_steps_mirror_wheel_factors() {
    let viewport_size = viewport_400x300();

    let mut viewport = Viewport::new();
    assert!(viewport.zoom_in_step(viewport_size));
    assert_close(viewport.zoom, 1.1);

    assert!(viewport.zoom_out_step(viewport_size));
    assert_close(viewport.zoom, 1.0);
}

#[test]
fn test_button_zoom_is_center_anchored_too() {
    let mut viewport = Viewport::new();
    viewport.scroll = pos(100.0, 50.0);

    viewport.zoom_in_step(viewport_400x300());
    viewport.commit_pending_scroll();
    assert_close(f32::from(viewport.scroll.x), 130.0);
    assert_close(f32::from(viewport.scroll.y), 70.0);
}

#[test]
fn test_pan_moves_content_with_pointer() {
    let mut viewport = Viewport::new();
    viewport.scroll = pos(200.0, 100.0);

    // Pointer moved from (100,100) to (80,130): delta (-20, +30)
    viewport.apply_pan(pos(-20.0, 30.0));
    assert_close(f32::from(viewport.scroll.x), 220.0);
    assert_close(f32::from(viewport.scroll.y), 70.0);
}

#[test]
fn test_pan_never_mutates_zoom() {
    let mut viewport = Viewport::new();
    viewport.zoom = 2.5;
    viewport.apply_pan(pos(15.0, -40.0));
    assert_eq!(viewport.zoom, 2.5);
}

#[test]
fn test_pan_overshoot_is_absorbed() {
    let mut viewport = Viewport::new();
    viewport.scroll = pos(10.0, 10.0);
    viewport.apply_pan(pos(50.0, 50.0));
    assert_eq!(viewport.scroll, pos(0.0, 0.0));
}

#[test]
fn test_wheel_scroll_clamps_at_origin() {
    let mut viewport = Viewport::new();
    viewport.scroll = pos(5.0, 0.0);
    viewport.apply_wheel_scroll(pos(30.0, 30.0));
    assert_eq!(viewport.scroll, pos(0.0, 0.0));
}

#[test]
fn test_reset_from_any_state() {
    let mut viewport = Viewport::new();
    viewport.zoom = 3.7;
    viewport.scroll = pos(512.0, 64.0);
    viewport.apply_wheel_zoom(-1.0, viewport_400x300());

    viewport.reset();
    assert_eq!(viewport.zoom, 1.0);
    assert_eq!(viewport.scroll, pos(0.0, 0.0));
    assert!(!viewport.has_pending_scroll());
}

#[test]
fn test_zoom_percent_readout() {
    let mut viewport = Viewport::new();
    assert_eq!(viewport.zoom_percent(), 100);
    viewport.zoom = 1.1;
    assert_eq!(viewport.zoom_percent(), 110);
    viewport.zoom = 0.1;
    assert_eq!(viewport.zoom_percent(), 10);
}
