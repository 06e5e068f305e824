//! Gesture arbitration tests - pan vs point-drag over full event sequences.

use crate::helpers::{TestSessionBuilder, pos};
use trackboard::constants::POINT_HIT_RADIUS;
use trackboard::input::InputState;

#[test]
fn test_pan_gesture_lifecycle() {
    // Pointer down with pan mode on claims the stream for panning
    let mut state = InputState::for_pointer_down(true, None, pos(100.0, 100.0));
    assert!(state.is_panning());
    assert_eq!(state.last_mouse_pos(), Some(pos(100.0, 100.0)));

    // Each move advances the recorded position
    state.update_last_mouse_pos(pos(80.0, 130.0));
    assert_eq!(state.last_mouse_pos(), Some(pos(80.0, 130.0)));

    // Pointer up ends the gesture
    state.reset();
    assert!(state.is_idle());
}

#[test]
fn test_points_are_inert_in_pan_mode() {
    // Even with a point under the cursor, pan mode suppresses the drag
    let state = InputState::for_pointer_down(true, Some(2), pos(50.0, 50.0));
    assert!(state.is_panning());
    assert!(!state.is_dragging_point());
}

#[test]
fn test_drag_gesture_claims_single_point() {
    let state = InputState::for_pointer_down(false, Some(3), pos(50.0, 50.0));
    assert_eq!(state.dragging_point(), Some(3));

    // While a drag is active, panning is structurally impossible
    assert!(!state.is_panning());
    assert_eq!(state.last_mouse_pos(), None);
}

#[test]
fn test_mode_exclusivity_over_event_sequences() {
    // Alternate pan-mode presses and point presses; at every step at most
    // one of pan/drag is active
    let sequence = [
        (true, None),
        (false, Some(1)),
        (true, Some(1)),
        (false, None),
        (false, Some(4)),
    ];

    for (pan_mode, hit) in sequence {
        let state = InputState::for_pointer_down(pan_mode, hit, pos(10.0, 10.0));
        assert!(!(state.is_panning() && state.is_dragging_point()));

        // Pointer up always returns to Idle, ready for the next gesture
        let mut state = state;
        state.reset();
        assert!(state.is_idle());
    }
}

#[test]
fn test_mode_toggle_cancels_active_gesture() {
    let mut state = InputState::for_pointer_down(true, None, pos(5.0, 5.0));
    assert!(state.is_panning());

    // Toggling pan mode off mid-gesture resets the state machine; the next
    // move re-derives everything from Idle
    state.reset();
    assert!(state.is_idle());
    state.update_last_mouse_pos(pos(50.0, 50.0));
    assert_eq!(state.last_mouse_pos(), None);
}

#[test]
fn test_hit_radius_shrinks_with_zoom() {
    let session = TestSessionBuilder::new().with_zoom(2.0).build();

    // At zoom 2 a 16px device radius covers 8 content units
    let radius = POINT_HIT_RADIUS / session.viewport.zoom;
    assert_eq!(session.hit_test(57.0, 50.0, radius), Some(1));
    assert_eq!(session.hit_test(59.0, 50.0, radius), None);
}

#[test]
fn test_background_press_starts_nothing() {
    let session = TestSessionBuilder::new().build();

    // No point anywhere near (400, 400)
    let hit = session.hit_test(400.0, 400.0, POINT_HIT_RADIUS);
    let state = InputState::for_pointer_down(false, hit, pos(400.0, 400.0));
    assert!(state.is_idle());
}
