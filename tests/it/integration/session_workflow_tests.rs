//! Session Workflow Integration Tests
//!
//! End-to-end flows through the engine: zoom, pan, drag, and reset against
//! one session, plus snapshot round trips.

use crate::helpers::{TestSessionBuilder, assert_close, assert_point_at, pos, test_image};
use gpui::{px, size};
use trackboard::input::coords::{CoordinateContext, CoordinateConverter};
use trackboard::session::Session;

#[test]
fn test_zoom_then_pan_then_reset() {
    let viewport_size = size(px(400.0), px(300.0));
    let mut session = TestSessionBuilder::new().with_scroll(100.0, 50.0).build();

    // One wheel tick in: zoom commits now, scroll lands next frame
    assert!(session.viewport.apply_wheel_zoom(-1.0, viewport_size));
    assert_close(session.viewport.zoom, 1.1);
    assert!(session.viewport.commit_pending_scroll());
    assert_close(f32::from(session.viewport.scroll.x), 130.0);
    assert_close(f32::from(session.viewport.scroll.y), 70.0);

    // Pan drags the content with the pointer
    session.viewport.apply_pan(pos(-20.0, 30.0));
    assert_close(f32::from(session.viewport.scroll.x), 150.0);
    assert_close(f32::from(session.viewport.scroll.y), 40.0);
    assert_close(session.viewport.zoom, 1.1);

    // Reset restores the image-load defaults regardless of prior state
    session.reset_view();
    assert_eq!(session.viewport.zoom, 1.0);
    assert_eq!(session.viewport.scroll, pos(0.0, 0.0));
}

#[test]
fn test_coordinate_round_trip_survives_zoom() {
    let viewport_size = size(px(400.0), px(300.0));
    let mut session = TestSessionBuilder::new().with_scroll(60.0, 90.0).build();

    for _ in 0..3 {
        session.viewport.apply_wheel_zoom(-1.0, viewport_size);
        session.viewport.commit_pending_scroll();
    }

    let scroll = session.viewport.scroll;
    let ctx = CoordinateContext::new(pos(0.0, 48.0), &scroll, session.viewport.zoom);
    let device = pos(222.0, 111.0);
    let content = CoordinateConverter::device_to_content(device, &ctx);
    let back = CoordinateConverter::content_to_device(content, &ctx);
    assert_close(f32::from(back.x), 222.0);
    assert_close(f32::from(back.y), 111.0);
}

#[test]
fn test_drag_commit_through_mapper() {
    // Viewport of 1600x1200 device pixels at zoom 2; the drag handler maps
    // the pointer to content space, clamps to the visible region's unscaled
    // bounds, and commits through the session
    let zoom = 2.0;
    let viewport_size = size(px(1600.0), px(1200.0));
    let mut session = TestSessionBuilder::new().with_zoom(zoom).build();

    let scroll = session.viewport.scroll;
    let ctx = CoordinateContext::new(pos(0.0, 0.0), &scroll, zoom);
    let content = CoordinateConverter::device_to_content(pos(-100.0, 1800.0), &ctx);
    let bounds = size(
        px(f32::from(viewport_size.width) / zoom),
        px(f32::from(viewport_size.height) / zoom),
    );
    let clamped = CoordinateConverter::clamp_to_content(content, bounds);

    assert!(session.commit_point_update(2, f32::from(clamped.x), f32::from(clamped.y)));
    assert_point_at(&session, 2, (0.0, 600.0));
}

#[test]
fn test_session_snapshot_round_trip_after_edits() {
    let viewport_size = size(px(400.0), px(300.0));
    let mut session = TestSessionBuilder::new().build();

    session.viewport.apply_wheel_zoom(-1.0, viewport_size);
    session.viewport.commit_pending_scroll();
    session.commit_point_update(3, 420.0, 360.0);
    session.add_point(99.0, 99.0);

    let json = serde_json::to_string(&session.state()).unwrap();
    let restored = Session::from_state(serde_json::from_str(&json).unwrap());

    assert_close(restored.viewport.zoom, 1.1);
    assert_point_at(&restored, 3, (420.0, 360.0));
    assert_point_at(&restored, 5, (99.0, 99.0));
    assert_eq!(restored.point_count(), 5);
}

#[test]
fn test_replacing_image_reseeds_everything() {
    let mut session = Session::new(test_image(800, 600));
    session.viewport.zoom = 4.0;
    session.commit_point_update(1, 700.0, 90.0);
    session.add_point(600.0, 420.0);

    // A new image means a brand new session: default viewport, fresh seed
    let session = Session::new(test_image(640, 480));
    assert_eq!(session.viewport.zoom, 1.0);
    assert_eq!(session.point_count(), 4);
    assert_point_at(&session, 1, (50.0, 50.0));
    assert_eq!(session.next_point_id, 5);
}
