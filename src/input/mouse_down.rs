//! Mouse down event handling - gesture arbitration and point hit testing.
//!
//! ## Performance Notes
//!
//! Mouse down is a hot path during user interaction. Hit testing goes
//! through the session's R-tree spatial index for O(log n) lookups.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Trackboard;
use crate::constants::POINT_HIT_RADIUS;
use crate::input::InputState;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::profile_scope;
use gpui::*;

impl Trackboard {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        let origin = self.viewport_origin();
        let pan_mode = self.canvas.pan_mode;
        let Some(ref session) = self.canvas.session else {
            return;
        };

        // Points are inert while pan mode is on: they neither start a drag
        // nor shield the viewport from the pan gesture.
        let hit_point = if pan_mode {
            None
        } else {
            let zoom = session.viewport.zoom;
            let ctx = CoordinateContext::new(origin, &session.viewport.scroll, zoom);
            let content_pos = CoordinateConverter::device_to_content(event.position, &ctx);

            // The hit radius is fixed in device pixels, so it shrinks in
            // content units as the image zooms in
            session.hit_test(
                f32::from(content_pos.x),
                f32::from(content_pos.y),
                POINT_HIT_RADIUS / zoom,
            )
        };

        let next = InputState::for_pointer_down(pan_mode, hit_point, event.position);
        if next.is_gesture_active() {
            self.canvas.input_state = next;
            cx.notify();
        }
    }
}
