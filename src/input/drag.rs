//! Mouse move handling - pan deltas and clamped point drags.
//!
//! ## Performance Notes
//!
//! Mouse move fires very frequently during gestures (60+ times per second).
//! Key optimizations:
//! - Early exit when no gesture is active
//! - Minimal state updates per move
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Trackboard;
use crate::input::InputState;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::profile_scope;
use gpui::*;

impl Trackboard {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        match self.canvas.input_state.clone() {
            InputState::DraggingPoint { point_id } => {
                profile_scope!("point_drag");

                let origin = self.viewport_origin();
                let viewport_size = self.viewport_size(window);

                // A drag with no live session is a recoverable no-op
                let Some(ref mut session) = self.canvas.session else {
                    return;
                };
                let zoom = session.viewport.zoom;

                let ctx = CoordinateContext::new(origin, &session.viewport.scroll, zoom);
                let content_pos = CoordinateConverter::device_to_content(event.position, &ctx);

                // Clamp to the unscaled dimensions of the visible region
                let content_bounds = size(
                    px(f32::from(viewport_size.width) / zoom),
                    px(f32::from(viewport_size.height) / zoom),
                );
                let clamped = CoordinateConverter::clamp_to_content(content_pos, content_bounds);

                if session.commit_point_update(
                    point_id,
                    f32::from(clamped.x),
                    f32::from(clamped.y),
                ) {
                    cx.notify();
                }
            }
            InputState::Panning { last_pos } => {
                let Some(ref mut session) = self.canvas.session else {
                    self.canvas.input_state.reset();
                    return;
                };

                let delta = event.position - last_pos;
                session.viewport.apply_pan(delta);
                self.canvas.input_state.update_last_mouse_pos(event.position);
                cx.notify();
            }
            InputState::Idle => {}
        }
    }
}
