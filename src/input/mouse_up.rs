//! Mouse up event handling - gesture finalization.
//!
//! The handler is registered at window scope, so releases outside the
//! originating element still end the gesture; a drag or pan can never get
//! stuck active.

use crate::app::Trackboard;
use gpui::*;

impl Trackboard {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.canvas.input_state.is_gesture_active() {
            return;
        }

        if let Some(point_id) = self.canvas.input_state.dragging_point() {
            if let Some(point) = self
                .canvas
                .session
                .as_ref()
                .and_then(|s| s.get_point(point_id))
            {
                tracing::debug!(point_id, x = point.x, y = point.y, "Drag finished");
            }
        }

        self.canvas.input_state.reset();
        cx.notify();
    }
}
