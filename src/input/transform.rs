//! Wheel event handling - precision zoom and native viewport scrolling.

use crate::app::Trackboard;
use crate::constants::SCROLL_LINE_HEIGHT;
use gpui::*;

impl Trackboard {
    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let viewport_size = self.viewport_size(window);
        let Some(ref mut session) = self.canvas.session else {
            return;
        };

        // Precision zoom with Command (platform) or Control key; the zoom
        // level commits now and the anchored scroll offset lands next frame
        if event.modifiers.platform || event.modifiers.control {
            let wheel_y = match event.delta {
                ScrollDelta::Pixels(delta) => f32::from(delta.y),
                ScrollDelta::Lines(delta) => delta.y * SCROLL_LINE_HEIGHT,
            };
            if wheel_y.abs() > f32::EPSILON {
                // gpui reports wheel-up as positive y; the viewport expects
                // the DOM-style sign where negative means zoom in
                if session.viewport.apply_wheel_zoom(-wheel_y, viewport_size) {
                    cx.notify();
                }
            }
            return;
        }

        // Unmodified wheel: native scrolling of the viewport
        let delta = match event.delta {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => point(
                px(delta.x * SCROLL_LINE_HEIGHT),
                px(delta.y * SCROLL_LINE_HEIGHT),
            ),
        };
        session.viewport.apply_wheel_scroll(delta);
        cx.notify();
    }
}
